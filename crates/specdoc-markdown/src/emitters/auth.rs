//! Authentication section.

use specdoc_core::model::ApiSpec;

/// List the declared security schemes, or the fixed no-auth notice when the
/// spec declares none and no global requirement exists.
pub fn emit_auth_section(spec: &ApiSpec) -> String {
    let mut lines = vec!["## Authentication".to_string()];

    if spec.security_schemes.is_empty() && !spec.global_security {
        lines.push(
            "No global auth defined. Endpoints may be public or define their own security."
                .to_string(),
        );
        return lines.join("\n");
    }

    for (name, scheme) in &spec.security_schemes {
        let scheme_type = scheme.scheme_type.as_deref().unwrap_or("—");
        let mut line = format!("- **{name}** — type: `{scheme_type}`");
        if let Some(s) = scheme.scheme.as_deref() {
            line.push_str(&format!(", scheme: `{s}`"));
        }
        if let Some(fmt) = scheme.bearer_format.as_deref() {
            line.push_str(&format!(", bearerFormat: `{fmt}`"));
        }
        lines.push(line);
        if !scheme.flows.is_empty() {
            lines.push(format!("  - OAuth2 flows: {}", scheme.flows.join(", ")));
        }
    }

    if spec.global_security {
        lines.push("- Global security requirement present (auth needed by default).".to_string());
    }
    lines.join("\n")
}
