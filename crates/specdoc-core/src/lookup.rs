//! Safe lookups over the untyped document tree.
//!
//! The normalizer reads raw decoded documents without any schema, so every
//! access must tolerate missing keys and unexpected shapes. These helpers
//! return `Option`/defaults instead of panicking or erroring.

use serde_json::{Map, Value};

/// Fetch a nested value by key path; `None` on any miss or non-object hop.
pub fn pluck<'a>(root: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in keys {
        cur = cur.as_object()?.get(*key)?;
    }
    Some(cur)
}

/// Nested string lookup.
pub fn pluck_str<'a>(root: &'a Value, keys: &[&str]) -> Option<&'a str> {
    pluck(root, keys).and_then(Value::as_str)
}

/// String field as an owned value.
pub fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

/// String field, empty when missing or not a string.
pub fn str_or_default(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Object-valued field.
pub fn obj_field<'a>(value: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    value.get(key).and_then(Value::as_object)
}

/// Array-valued field.
pub fn seq_field<'a>(value: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    value.get(key).and_then(Value::as_array)
}

/// Scalar field rendered as a string; numbers and booleans are stringified.
pub fn scalar_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).map(scalar_string).filter(|s| !s.is_empty())
}

/// Render a scalar as the string label the original document implied.
pub fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
