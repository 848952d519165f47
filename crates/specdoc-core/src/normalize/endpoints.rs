//! Ad-hoc `endpoints: [...]` schema conversion.

use indexmap::IndexMap;
use serde_json::Value;

use super::openapi;
use crate::lookup;
use crate::model::{
    ApiInfo, ApiSpec, MediaType, Operation, Parameter, ParameterLocation, ParameterSchema,
    RequestBody, Response, Schema, VerbMap,
};

/// Convert a document whose `endpoints` array lists one entry per route.
pub fn convert(document: &Value) -> ApiSpec {
    let mut info = openapi::convert_info(document.get("info"));
    if info == ApiInfo::default() {
        if let Some(name) = lookup::str_field(document, "name") {
            info = ApiInfo {
                title: Some(name),
                version: lookup::scalar_field(document, "version"),
                description: None,
            };
        }
    }

    let mut paths: IndexMap<String, VerbMap> = IndexMap::new();
    for entry in lookup::seq_field(document, "endpoints").into_iter().flatten() {
        let path = lookup::str_field(entry, "path")
            .or_else(|| lookup::str_field(entry, "endpoint"))
            .unwrap_or_else(|| "/".to_string());
        let verb = entry
            .get("method")
            .and_then(Value::as_str)
            .unwrap_or("get")
            .to_lowercase();
        paths.entry(path).or_default().insert(verb, convert_entry(entry));
    }

    ApiSpec {
        info,
        paths,
        ..Default::default()
    }
}

fn convert_entry(entry: &Value) -> Operation {
    let mut parameters = Vec::new();
    collect_params(entry, "queryParams", ParameterLocation::Query, false, &mut parameters);
    collect_params(entry, "pathParams", ParameterLocation::Path, true, &mut parameters);

    let request_body = lookup::obj_field(entry, "body").map(|body| {
        // Field types are unknown in this schema; everything is a string.
        let properties: IndexMap<String, Schema> = body
            .keys()
            .map(|field| {
                (
                    field.clone(),
                    Schema {
                        schema_type: Some("string".to_string()),
                        ..Default::default()
                    },
                )
            })
            .collect();
        RequestBody {
            content: IndexMap::from([(
                "application/json".to_string(),
                MediaType {
                    schema: Some(Schema {
                        schema_type: Some("object".to_string()),
                        properties,
                        ..Default::default()
                    }),
                    example: None,
                },
            )]),
        }
    });

    let mut responses = IndexMap::new();
    if let Some(example) = entry.get("response") {
        responses.insert(
            "200".to_string(),
            Response {
                description: "Response example".to_string(),
                content: IndexMap::from([(
                    "application/json".to_string(),
                    MediaType {
                        schema: None,
                        example: Some(example.clone()),
                    },
                )]),
            },
        );
    }

    Operation {
        summary: lookup::str_field(entry, "name")
            .or_else(|| lookup::str_field(entry, "summary"))
            .unwrap_or_default(),
        description: lookup::str_or_default(entry, "description"),
        parameters,
        request_body,
        responses,
        ..Default::default()
    }
}

/// Expand a `{name: type-label}` mapping into parameter records.
fn collect_params(
    entry: &Value,
    key: &str,
    location: ParameterLocation,
    required: bool,
    out: &mut Vec<Parameter>,
) {
    if let Some(params) = lookup::obj_field(entry, key) {
        for (name, type_label) in params {
            out.push(Parameter {
                name: name.clone(),
                location,
                schema: ParameterSchema {
                    schema_type: Some(lookup::scalar_string(type_label)),
                },
                required,
                description: String::new(),
            });
        }
    }
}
