//! Postman collection conversion.

use indexmap::IndexMap;
use serde_json::Value;

use crate::lookup;
use crate::model::{ApiInfo, ApiSpec, Operation, VerbMap};

/// Convert a Postman collection export.
///
/// Folders nest arbitrarily deep via `item` arrays; leaf items carrying a
/// `request` become operations. Later items with the same (path, verb)
/// overwrite earlier ones.
pub fn convert(document: &Value) -> ApiSpec {
    let info = ApiInfo {
        title: Some(
            lookup::pluck_str(document, &["info", "name"])
                .unwrap_or("Postman Collection")
                .to_string(),
        ),
        version: None,
        description: lookup::pluck_str(document, &["info", "description"]).map(str::to_string),
    };

    let mut paths: IndexMap<String, VerbMap> = IndexMap::new();
    if let Some(items) = lookup::seq_field(document, "item") {
        walk_items(items, &mut paths);
    }

    ApiSpec {
        info,
        paths,
        ..Default::default()
    }
}

fn walk_items(items: &[Value], paths: &mut IndexMap<String, VerbMap>) {
    for item in items {
        if let Some(children) = lookup::seq_field(item, "item") {
            walk_items(children, paths);
            continue;
        }
        let Some(request) = item.get("request") else {
            continue;
        };
        let verb = request
            .get("method")
            .and_then(Value::as_str)
            .unwrap_or("GET")
            .to_lowercase();
        let operation = Operation {
            summary: lookup::str_or_default(item, "name"),
            description: request_description(request),
            ..Default::default()
        };
        paths
            .entry(request_path(request))
            .or_default()
            .insert(verb, operation);
    }
}

/// Postman request URLs are either an object with a `path` segment array,
/// a plain string, or absent; anything else maps to `/`.
fn request_path(request: &Value) -> String {
    match request.get("url").or_else(|| request.get("raw")) {
        Some(Value::Object(url)) => match url.get("path").and_then(Value::as_array) {
            Some(segments) => {
                let joined = segments
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join("/");
                format!("/{joined}")
            }
            None => "/".to_string(),
        },
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => "/".to_string(),
    }
}

/// Request descriptions appear either as a plain string or wrapped in a
/// `{content: ...}` object depending on the export version.
fn request_description(request: &Value) -> String {
    lookup::str_field(request, "description")
        .or_else(|| lookup::pluck_str(request, &["description", "content"]).map(str::to_string))
        .unwrap_or_default()
}
