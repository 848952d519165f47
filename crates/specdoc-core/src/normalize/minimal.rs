//! Last-resort conversion for unrecognized documents.

use indexmap::IndexMap;
use serde_json::Value;

use super::openapi;
use crate::lookup;
use crate::model::{ApiInfo, ApiSpec, VerbMap};

/// Scan top-level keys: any `/`-prefixed key becomes a path, and its object
/// value is read as a verb→operation mapping. Everything else is ignored.
pub fn convert(document: &Value) -> ApiSpec {
    let mut info = openapi::convert_info(document.get("info"));
    if info == ApiInfo::default() {
        info.title = Some(
            lookup::str_field(document, "title").unwrap_or_else(|| "API".to_string()),
        );
    }

    let mut paths: IndexMap<String, VerbMap> = IndexMap::new();
    if let Some(root) = document.as_object() {
        for (key, value) in root {
            if !key.starts_with('/') {
                continue;
            }
            let mut verbs = VerbMap::new();
            if let Some(methods) = value.as_object() {
                for (verb, raw) in methods {
                    verbs.insert(verb.to_lowercase(), openapi::convert_operation(raw));
                }
            }
            paths.insert(key.clone(), verbs);
        }
    }

    ApiSpec {
        info,
        paths,
        ..Default::default()
    }
}
