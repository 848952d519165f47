use serde_json::json;
use specdoc_core::config::FlowDirection;
use specdoc_core::model::ApiSpec;
use specdoc_core::normalize;
use specdoc_mermaid::render_flow;

fn spec(document: serde_json::Value) -> ApiSpec {
    normalize::normalize(&document)
}

#[test]
fn render_is_byte_deterministic() {
    let spec = spec(json!({"paths": {
        "/users": {"get": {}, "post": {}},
        "/users/{id}": {"get": {}, "delete": {}}
    }}));
    let first = render_flow(&spec, FlowDirection::Lr);
    let second = render_flow(&spec, FlowDirection::Lr);
    assert_eq!(first, second);
}

#[test]
fn render_resource_edges() {
    let spec = spec(json!({"paths": {
        "/users": {"get": {}},
        "/users/{id}": {"get": {}, "put": {}}
    }}));
    let diagram = render_flow(&spec, FlowDirection::Lr);

    assert!(diagram.starts_with("```mermaid\nflowchart LR\n    Client((Client))"));
    assert!(diagram.ends_with("```"));
    assert!(diagram.contains("Client --> GET__users[\"List users\"]"));
    assert!(diagram.contains("Client --> GET__users_id[\"Get users detail\"]"));
    assert!(diagram.contains("Client --> PUT__users_id[\"Update users\"]"));
}

#[test]
fn render_auth_edges_once() {
    // Two matching auth paths still emit each canonical flow only once.
    let spec = spec(json!({"paths": {
        "/api/login": {"post": {}},
        "/api/token/refresh": {"post": {}},
        "/signup": {"post": {}}
    }}));
    let diagram = render_flow(&spec, FlowDirection::Lr);

    assert_eq!(diagram.matches("Client --> Register[\"Create account\"]").count(), 1);
    assert_eq!(diagram.matches("Client --> Login[\"Authenticate\"]").count(), 1);
    assert_eq!(diagram.matches("Login --> Token[\"Issue access token\"]").count(), 1);

    // Auth edges come before the resource edges.
    let register = diagram.find("Register").unwrap();
    let first_resource = diagram.find("POST__api_login").unwrap();
    assert!(register < first_resource);
}

#[test]
fn render_empty_spec_keeps_entry_node() {
    let diagram = render_flow(&ApiSpec::default(), FlowDirection::Lr);
    assert_eq!(
        diagram,
        "```mermaid\nflowchart LR\n    Client((Client))\n```"
    );
}

#[test]
fn render_direction_td() {
    let diagram = render_flow(&ApiSpec::default(), FlowDirection::Td);
    assert!(diagram.contains("flowchart TD"));
}
