//! Client→resource interaction diagram inferred from path shapes.

use heck::ToSnakeCase;

use specdoc_core::config::FlowDirection;
use specdoc_core::model::ApiSpec;

/// Render the spec as a fenced Mermaid flowchart.
///
/// Output is fully deterministic: the same spec always renders the same
/// bytes. An empty spec still renders the bare entry node.
pub fn render_flow(spec: &ApiSpec, direction: FlowDirection) -> String {
    let mut lines = vec![
        "```mermaid".to_string(),
        format!("flowchart {}", direction.as_str()),
        "    Client((Client))".to_string(),
    ];

    for edge in auth_edges(spec) {
        lines.push(format!("    {edge}"));
    }

    for (path, verb, _) in spec.operations() {
        let id = node_id(verb, path);
        let label = node_label(verb, path);
        lines.push(format!("    Client --> {id}[\"{label}\"]"));
    }

    lines.push("```".to_string());
    lines.join("\n")
}

/// Canonical auth-flow edges, prepended ahead of the resource edges when a
/// well-known auth path fragment appears anywhere in the spec. Each flow is
/// emitted at most once, however many paths match.
fn auth_edges(spec: &ApiSpec) -> Vec<&'static str> {
    let mut has_register = false;
    let mut has_token = false;
    for path in spec.paths.keys() {
        let path = path.to_lowercase();
        if path.contains("signup") || path.contains("register") {
            has_register = true;
        }
        if path.contains("login") || path.contains("auth") || path.contains("token") {
            has_token = true;
        }
    }

    let mut edges = Vec::new();
    if has_register {
        edges.push("Client --> Register[\"Create account\"]");
    }
    if has_token {
        edges.push("Client --> Login[\"Authenticate\"]");
        edges.push("Login --> Token[\"Issue access token\"]");
    }
    edges
}

/// Deterministic, collision-safe node identifier for a (verb, path) pair.
fn node_id(verb: &str, path: &str) -> String {
    format!("{}_{}", verb.to_uppercase(), path)
        .replace('/', "_")
        .replace(['{', '}'], "")
}

/// Human label: verb intent + resource, with a detail/collection variant
/// for GET depending on whether the path carries a `{param}` segment.
fn node_label(verb: &str, path: &str) -> String {
    let Some(resource) = resource_name(path) else {
        return format!("{} {}", verb.to_uppercase(), path);
    };
    match verb.to_lowercase().as_str() {
        "get" if has_param(path) => format!("Get {resource} detail"),
        "get" => format!("List {resource}"),
        "post" => format!("Create {resource}"),
        "put" | "patch" => format!("Update {resource}"),
        "delete" => format!("Delete {resource}"),
        other => format!("{} {resource}", other.to_uppercase()),
    }
}

/// First path segment that is not a `{param}` placeholder, humanized.
fn resource_name(path: &str) -> Option<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .find(|segment| !(segment.starts_with('{') && segment.ends_with('}')))
        .map(|segment| segment.to_snake_case().replace('_', " "))
}

fn has_param(path: &str) -> bool {
    path.contains('{')
}
