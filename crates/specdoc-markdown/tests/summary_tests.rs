use serde_json::json;
use specdoc_core::model::ApiSpec;
use specdoc_core::normalize;
use specdoc_markdown::emitters::{auth, endpoints, parameters};
use specdoc_markdown::render_summary;

fn spec(document: serde_json::Value) -> ApiSpec {
    normalize::normalize(&document)
}

#[test]
fn summary_title_and_endpoint_row() {
    let spec = spec(json!({"paths": {"/users": {"get": {"summary": "List users"}}}}));
    let summary = render_summary(&spec, true).unwrap();

    assert!(summary.starts_with("# API — Summary"));
    assert!(summary.contains("| `/users` | `GET` | List users |"));
    assert!(summary.contains("## Flow Diagram"));
    assert!(summary.contains("```mermaid"));
}

#[test]
fn summary_without_diagram() {
    let spec = spec(json!({"paths": {}}));
    let summary = render_summary(&spec, false).unwrap();
    assert!(!summary.contains("## Flow Diagram"));
    assert!(!summary.contains("```mermaid"));
}

#[test]
fn summary_overview_placeholder() {
    let spec = spec(json!({"paths": {}}));
    let summary = render_summary(&spec, false).unwrap();
    assert!(summary.contains("## Overview\nNo description available."));
}

#[test]
fn endpoints_table_placeholder_row() {
    let table = endpoints::emit_endpoints_table(&ApiSpec::default());
    assert!(table.contains("| — | — | No paths found in spec. |"));
}

#[test]
fn endpoints_table_prefers_description_over_summary() {
    let spec = spec(json!({"paths": {
        "/a": {"get": {"summary": "short", "description": "Longer description."}},
        "/b": {"get": {}}
    }}));
    let table = endpoints::emit_endpoints_table(&spec);
    assert!(table.contains("| `/a` | `GET` | Longer description. |"));
    assert!(table.contains("| `/b` | `GET` | — |"));
}

#[test]
fn parameters_table_declared_and_body_rows() {
    let spec = spec(json!({"paths": {"/pets": {"post": {
        "parameters": [
            {"name": "limit", "in": "query", "schema": {"type": "integer"},
             "description": "Max pets to return"}
        ],
        "requestBody": {"content": {"application/json": {"schema": {
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "tag": {"format": "uuid"}
            },
            "required": ["name"]
        }}}}
    }}}}));
    let table = parameters::emit_parameters_table(&spec);

    assert!(table.contains("| `/pets` | `limit` | `query` | `integer` | ❌ | Max pets to return |"));
    assert!(table.contains("| `/pets` | `name` | `body` | `string` | ✅ | — |"));
    // Type falls back to format, then to "object".
    assert!(table.contains("| `/pets` | `tag` | `body` | `uuid` | ❌ | — |"));
}

#[test]
fn parameters_table_placeholder_row() {
    let spec = spec(json!({"paths": {"/ping": {"get": {}}}}));
    let table = parameters::emit_parameters_table(&spec);
    assert!(table.contains("| — | — | — | — | — | No parameters discovered. |"));
}

#[test]
fn auth_section_no_auth_notice() {
    let section = auth::emit_auth_section(&ApiSpec::default());
    assert!(section.contains("No global auth defined."));
}

#[test]
fn auth_section_lists_schemes() {
    let spec = spec(json!({
        "paths": {},
        "security": [{"bearerAuth": []}],
        "components": {"securitySchemes": {
            "bearerAuth": {"type": "http", "scheme": "bearer", "bearerFormat": "JWT"},
            "oauth": {"type": "oauth2", "flows": {"implicit": {}}}
        }}
    }));
    let section = auth::emit_auth_section(&spec);

    assert!(section.contains("- **bearerAuth** — type: `http`, scheme: `bearer`, bearerFormat: `JWT`"));
    assert!(section.contains("- **oauth** — type: `oauth2`"));
    assert!(section.contains("  - OAuth2 flows: implicit"));
    assert!(section.contains("- Global security requirement present (auth needed by default)."));
}

#[test]
fn summary_overview_uses_collected_descriptions() {
    let spec = spec(json!({
        "info": {"title": "Notes", "description": "The notes service stores short text snippets for later retrieval."},
        "paths": {"/notes": {"get": {"summary": "List notes"}}}
    }));
    let summary = render_summary(&spec, false).unwrap();
    assert!(summary.starts_with("# Notes — Summary"));
    assert!(summary.contains(
        "## Overview\nThe notes service stores short text snippets for later retrieval."
    ));
}
