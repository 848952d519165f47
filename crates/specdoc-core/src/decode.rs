//! Decoding uploaded documents into the untyped value tree.
//!
//! JSON is tried first, then YAML; either way the result is the same
//! `serde_json::Value` tree, so the normalizer never sees the source
//! syntax. Decode failures are the caller's problem to surface — a
//! decoded-but-malformed document is not an error here.

use serde_json::Value;

use crate::error::DecodeError;

/// Decode raw upload bytes as JSON, falling back to YAML.
///
/// Rejects oversized payloads and documents whose top level is not a
/// mapping. Input bytes are read lossily as UTF-8.
pub fn decode_document(bytes: &[u8], max_bytes: usize) -> Result<Value, DecodeError> {
    if bytes.len() > max_bytes {
        return Err(DecodeError::TooLarge {
            size: bytes.len(),
            limit: max_bytes,
        });
    }

    let text = String::from_utf8_lossy(bytes);
    let value = match serde_json::from_str::<Value>(&text) {
        Ok(value) => value,
        Err(_) => {
            let yaml: serde_yaml_ng::Value = serde_yaml_ng::from_str(&text)?;
            yaml_to_json(yaml)
        }
    };

    if !value.is_object() {
        return Err(DecodeError::NotAnObject);
    }
    Ok(value)
}

/// Convert a YAML tree into the JSON value model.
///
/// Non-string mapping keys (status codes like `200:`, version numbers) are
/// stringified so they survive the conversion; tagged values are unwrapped.
fn yaml_to_json(value: serde_yaml_ng::Value) -> Value {
    use serde_yaml_ng::Value as Yaml;

    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(seq) => Value::Array(seq.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(map) => {
            let mut object = serde_json::Map::new();
            for (key, val) in map {
                let key = match key {
                    Yaml::String(s) => s,
                    Yaml::Bool(b) => b.to_string(),
                    Yaml::Number(n) => n.to_string(),
                    _ => continue,
                };
                object.insert(key, yaml_to_json(val));
            }
            Value::Object(object)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}
