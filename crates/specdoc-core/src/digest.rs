//! Per-endpoint summary, keyword, and example digest.

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::ApiSpec;
use crate::{snippet, text};

/// Digest of one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointDigest {
    pub summary: String,
    pub keywords: Vec<String>,
    pub example_request: serde_json::Value,
    pub example_response: serde_json::Value,
}

/// Digest keyed path → UPPERCASE verb.
pub type SpecDigest = IndexMap<String, IndexMap<String, EndpointDigest>>;

/// Summarize and keyword-rank every operation's effective description.
pub fn build_digest(spec: &ApiSpec, top_k: usize) -> SpecDigest {
    let mut digest = SpecDigest::new();
    for (path, verbs) in &spec.paths {
        let mut per_verb = IndexMap::new();
        for (verb, op) in verbs {
            let source = op.effective_description();
            per_verb.insert(
                verb.to_uppercase(),
                EndpointDigest {
                    summary: text::summarize(source),
                    keywords: text::extract_keywords(source, top_k),
                    example_request: snippet::example_request(path, verb, op),
                    example_response: snippet::example_response(op),
                },
            );
        }
        digest.insert(path.clone(), per_verb);
    }
    digest
}
