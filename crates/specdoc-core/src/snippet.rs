//! Example request/response skeletons derived from operation schemas.

use serde_json::{Map, Value, json};

use crate::model::{MediaType, Operation, Schema};

/// Sample request for an operation: endpoint, method, JSON content-type
/// header, and a body skeleton when a request schema is declared.
pub fn example_request(path: &str, verb: &str, op: &Operation) -> Value {
    let mut request = json!({
        "endpoint": path,
        "method": verb.to_uppercase(),
        "headers": { "Content-Type": "application/json" },
    });
    if let Some(schema) = op
        .request_body
        .as_ref()
        .and_then(|body| preferred_media(&body.content))
        .and_then(|media| media.schema.as_ref())
    {
        request["body"] = Value::Object(object_skeleton(schema));
    }
    request
}

/// Sample response: the declared 200 example or schema skeleton when
/// present, else a fixed success envelope.
pub fn example_response(op: &Operation) -> Value {
    if let Some(media) = op
        .responses
        .get("200")
        .and_then(|resp| preferred_media(&resp.content))
    {
        if let Some(example) = media.example.as_ref() {
            return example.clone();
        }
        if let Some(schema) = media.schema.as_ref() {
            return json!({ "status": "success", "data": Value::Object(object_skeleton(schema)) });
        }
    }
    json!({ "status": "success", "data": {} })
}

/// Prefer `application/json`, fall back to the first declared media type.
fn preferred_media(content: &indexmap::IndexMap<String, MediaType>) -> Option<&MediaType> {
    content
        .get("application/json")
        .or_else(|| content.first().map(|(_, media)| media))
}

fn object_skeleton(schema: &Schema) -> Map<String, Value> {
    schema
        .properties
        .iter()
        .map(|(name, prop)| (name.clone(), placeholder(prop)))
        .collect()
}

/// Placeholder value for a schema'd field, keyed by declared type.
fn placeholder(schema: &Schema) -> Value {
    match schema.schema_type.as_deref() {
        Some("integer") => json!(0),
        Some("number") => json!(0.0),
        Some("boolean") => json!(false),
        Some("array") => json!([]),
        Some("object") => Value::Object(object_skeleton(schema)),
        _ => json!("string"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RequestBody;
    use indexmap::IndexMap;

    fn schema_with(fields: &[(&str, &str)]) -> Schema {
        Schema {
            schema_type: Some("object".to_string()),
            properties: fields
                .iter()
                .map(|(name, ty)| {
                    (
                        name.to_string(),
                        Schema {
                            schema_type: Some(ty.to_string()),
                            ..Default::default()
                        },
                    )
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_example_request_without_body() {
        let request = example_request("/users", "get", &Operation::default());
        assert_eq!(request["endpoint"], "/users");
        assert_eq!(request["method"], "GET");
        assert_eq!(request["headers"]["Content-Type"], "application/json");
        assert!(request.get("body").is_none());
    }

    #[test]
    fn test_example_request_body_skeleton() {
        let op = Operation {
            request_body: Some(RequestBody {
                content: IndexMap::from([(
                    "application/json".to_string(),
                    MediaType {
                        schema: Some(schema_with(&[("name", "string"), ("age", "integer")])),
                        example: None,
                    },
                )]),
            }),
            ..Default::default()
        };
        let request = example_request("/users", "post", &op);
        assert_eq!(request["body"]["name"], "string");
        assert_eq!(request["body"]["age"], 0);
    }

    #[test]
    fn test_example_response_prefers_declared_example() {
        let op = Operation {
            responses: IndexMap::from([(
                "200".to_string(),
                crate::model::Response {
                    content: IndexMap::from([(
                        "application/json".to_string(),
                        MediaType {
                            schema: None,
                            example: Some(json!({"id": 1})),
                        },
                    )]),
                    ..Default::default()
                },
            )]),
            ..Default::default()
        };
        assert_eq!(example_response(&op), json!({"id": 1}));
    }

    #[test]
    fn test_example_response_fallback_envelope() {
        let response = example_response(&Operation::default());
        assert_eq!(response["status"], "success");
        assert_eq!(response["data"], json!({}));
    }
}
