//! OpenAPI/Swagger-shaped conversion.

use indexmap::IndexMap;
use serde_json::Value;

use crate::lookup;
use crate::model::{
    ApiInfo, ApiSpec, MediaType, Operation, Parameter, ParameterLocation, ParameterSchema,
    RequestBody, Response, Schema, SecurityScheme, VerbMap,
};

/// Convert an OpenAPI/Swagger-shaped document.
///
/// `info` and `paths` are taken as-is with key-presence defaulting;
/// operation objects are converted leniently, without validating against
/// any particular OpenAPI version.
pub fn convert(document: &Value) -> ApiSpec {
    let info = convert_info(document.get("info"));

    let mut paths = IndexMap::new();
    if let Some(raw_paths) = lookup::obj_field(document, "paths") {
        for (path, item) in raw_paths {
            paths.insert(path.clone(), convert_path_item(item));
        }
    }

    let (security_schemes, global_security) = convert_security(document);

    ApiSpec {
        info,
        paths,
        security_schemes,
        global_security,
    }
}

pub(crate) fn convert_info(info: Option<&Value>) -> ApiInfo {
    let Some(info) = info else {
        return ApiInfo::default();
    };
    ApiInfo {
        title: lookup::str_field(info, "title"),
        version: lookup::scalar_field(info, "version"),
        description: lookup::str_field(info, "description"),
    }
}

/// Object-valued keys under a path item become verb entries; anything else
/// (path-level `parameters` arrays, `summary` strings) is skipped.
fn convert_path_item(item: &Value) -> VerbMap {
    let mut verbs = VerbMap::new();
    if let Some(object) = item.as_object() {
        for (key, value) in object {
            if value.is_object() {
                verbs.insert(key.to_lowercase(), convert_operation(value));
            }
        }
    }
    verbs
}

pub(crate) fn convert_operation(raw: &Value) -> Operation {
    Operation {
        summary: lookup::str_or_default(raw, "summary"),
        description: lookup::str_or_default(raw, "description"),
        operation_id: lookup::str_field(raw, "operationId"),
        tags: string_seq(raw, "tags"),
        parameters: lookup::seq_field(raw, "parameters")
            .map(|params| params.iter().filter_map(convert_parameter).collect())
            .unwrap_or_default(),
        request_body: raw.get("requestBody").map(convert_request_body),
        responses: convert_responses(raw.get("responses")),
    }
}

fn string_seq(raw: &Value, key: &str) -> Vec<String> {
    lookup::seq_field(raw, key)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Parameters without a name are dropped; everything else has a lenient
/// default. Path parameters are implicitly required.
fn convert_parameter(raw: &Value) -> Option<Parameter> {
    let name = lookup::str_field(raw, "name")?;
    let location =
        ParameterLocation::parse(raw.get("in").and_then(Value::as_str).unwrap_or_default());
    Some(Parameter {
        name,
        location,
        schema: ParameterSchema {
            schema_type: lookup::pluck_str(raw, &["schema", "type"]).map(str::to_string),
        },
        required: raw
            .get("required")
            .and_then(Value::as_bool)
            .unwrap_or(location == ParameterLocation::Path),
        description: lookup::str_or_default(raw, "description"),
    })
}

fn convert_request_body(raw: &Value) -> RequestBody {
    RequestBody {
        content: convert_content(raw.get("content")),
    }
}

pub(crate) fn convert_content(raw: Option<&Value>) -> IndexMap<String, MediaType> {
    let mut content = IndexMap::new();
    if let Some(media_types) = raw.and_then(Value::as_object) {
        for (media_type, value) in media_types {
            content.insert(
                media_type.clone(),
                MediaType {
                    schema: value.get("schema").map(convert_schema),
                    example: value.get("example").cloned(),
                },
            );
        }
    }
    content
}

fn convert_responses(raw: Option<&Value>) -> IndexMap<String, Response> {
    let mut responses = IndexMap::new();
    if let Some(object) = raw.and_then(Value::as_object) {
        for (code, value) in object {
            responses.insert(
                code.clone(),
                Response {
                    description: lookup::str_or_default(value, "description"),
                    content: convert_content(value.get("content")),
                },
            );
        }
    }
    responses
}

pub(crate) fn convert_schema(raw: &Value) -> Schema {
    let mut properties = IndexMap::new();
    if let Some(props) = lookup::obj_field(raw, "properties") {
        for (name, prop) in props {
            properties.insert(name.clone(), convert_schema(prop));
        }
    }
    Schema {
        schema_type: lookup::str_field(raw, "type"),
        format: lookup::str_field(raw, "format"),
        description: lookup::str_or_default(raw, "description"),
        properties,
        required: string_seq(raw, "required"),
    }
}

fn convert_security(document: &Value) -> (IndexMap<String, SecurityScheme>, bool) {
    let mut schemes = IndexMap::new();
    if let Some(raw) =
        lookup::pluck(document, &["components", "securitySchemes"]).and_then(Value::as_object)
    {
        for (name, scheme) in raw {
            schemes.insert(
                name.clone(),
                SecurityScheme {
                    scheme_type: lookup::str_field(scheme, "type"),
                    scheme: lookup::str_field(scheme, "scheme"),
                    bearer_format: lookup::str_field(scheme, "bearerFormat"),
                    flows: lookup::obj_field(scheme, "flows")
                        .map(|flows| flows.keys().cloned().collect())
                        .unwrap_or_default(),
                },
            );
        }
    }
    let global_security =
        lookup::seq_field(document, "security").is_some_and(|reqs| !reqs.is_empty());
    (schemes, global_security)
}
