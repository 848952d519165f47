//! Endpoints table.

use specdoc_core::model::ApiSpec;

use super::EMPTY_CELL;

/// One row per (path, verb) pair; a placeholder row when the spec has no
/// paths at all.
pub fn emit_endpoints_table(spec: &ApiSpec) -> String {
    let mut rows = vec![
        "### Endpoints:".to_string(),
        "| Endpoint | Method | Purpose |".to_string(),
        "|----------|--------|---------|".to_string(),
    ];
    if spec.paths.is_empty() {
        rows.push("| — | — | No paths found in spec. |".to_string());
        return rows.join("\n");
    }
    for (path, verb, op) in spec.operations() {
        let purpose = match op.effective_description() {
            "" => EMPTY_CELL,
            text => text,
        };
        rows.push(format!(
            "| `{path}` | `{}` | {purpose} |",
            verb.to_uppercase()
        ));
    }
    rows.join("\n")
}
