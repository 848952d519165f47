//! Parameters table, including flattened request-body schemas.

use specdoc_core::model::{ApiSpec, Parameter, Schema};

use super::EMPTY_CELL;

fn check(required: bool) -> &'static str {
    if required { "✅" } else { "❌" }
}

/// One row per declared parameter, plus a `body` row for every flattened
/// request-body schema property. A placeholder row when nothing at all was
/// discovered.
pub fn emit_parameters_table(spec: &ApiSpec) -> String {
    let mut rows = vec![
        "### Parameters:".to_string(),
        "| Endpoint | Parameter | In | Type | Required | Description |".to_string(),
        "|----------|-----------|----|------|----------|-------------|".to_string(),
    ];

    let mut any_row = false;
    for (path, _verb, op) in spec.operations() {
        for param in &op.parameters {
            rows.push(declared_row(path, param));
            any_row = true;
        }
        if let Some(body) = op.request_body.as_ref() {
            for media in body.content.values() {
                let Some(schema) = media.schema.as_ref() else {
                    continue;
                };
                for (name, prop) in &schema.properties {
                    rows.push(body_row(path, name, prop, schema.required.contains(name)));
                    any_row = true;
                }
            }
        }
    }

    if !any_row {
        rows.push("| — | — | — | — | — | No parameters discovered. |".to_string());
    }
    rows.join("\n")
}

fn declared_row(path: &str, param: &Parameter) -> String {
    let schema_type = param.schema.schema_type.as_deref().unwrap_or(EMPTY_CELL);
    let description = if param.description.is_empty() {
        EMPTY_CELL
    } else {
        &param.description
    };
    format!(
        "| `{path}` | `{}` | `{}` | `{schema_type}` | {} | {description} |",
        param.name,
        param.location.as_str(),
        check(param.required),
    )
}

fn body_row(path: &str, name: &str, prop: &Schema, required: bool) -> String {
    let prop_type = prop
        .schema_type
        .as_deref()
        .or(prop.format.as_deref())
        .unwrap_or("object");
    let description = if prop.description.is_empty() {
        EMPTY_CELL
    } else {
        &prop.description
    };
    format!(
        "| `{path}` | `{name}` | `body` | `{prop_type}` | {} | {description} |",
        check(required)
    )
}
