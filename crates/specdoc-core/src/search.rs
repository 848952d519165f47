//! Keyword search over the normalized spec.

use serde::Serialize;

use crate::error::SearchError;
use crate::model::{ApiSpec, Operation};
use crate::text;

/// Hard cap on accepted keyword length.
pub const MAX_KEYWORD_CHARS: usize = 128;

/// Minimum score a ranked hit must reach to be returned.
pub const RELEVANCE_CUTOFF: f64 = 0.5;

/// A single search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub endpoint: String,
    pub method: String,
    pub summary: String,
    pub description: String,
}

/// Substring search across path, verb, and serialized operation details.
///
/// An empty hit list is a valid outcome; only blank or oversized keywords
/// are rejected. Hits follow the spec's own iteration order.
pub fn search(spec: &ApiSpec, keyword: &str) -> Result<Vec<SearchHit>, SearchError> {
    let needle = validate_keyword(keyword)?.to_lowercase();

    let mut hits = Vec::new();
    for (path, verb, op) in spec.operations() {
        let blob = serde_json::to_string(op).unwrap_or_default().to_lowercase();
        if path.to_lowercase().contains(&needle) || verb.contains(&needle) || blob.contains(&needle)
        {
            hits.push(SearchHit {
                endpoint: path.to_string(),
                method: verb.to_uppercase(),
                summary: op.summary.clone(),
                description: describe(path, verb, op),
            });
        }
    }
    Ok(hits)
}

fn validate_keyword(keyword: &str) -> Result<&str, SearchError> {
    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        return Err(SearchError::EmptyKeyword);
    }
    if trimmed.chars().count() > MAX_KEYWORD_CHARS {
        return Err(SearchError::KeywordTooLong {
            limit: MAX_KEYWORD_CHARS,
        });
    }
    Ok(trimmed)
}

/// Fallback description assembled from whatever the operation declares:
/// operation id, tags, parameter names, request fields, response fields.
fn describe(path: &str, verb: &str, op: &Operation) -> String {
    if !op.description.is_empty() {
        return op.description.clone();
    }
    if !op.summary.is_empty() {
        return op.summary.clone();
    }

    let mut parts = Vec::new();
    if let Some(id) = op.operation_id.as_deref() {
        parts.push(format!("operation id: {id}"));
    }
    if !op.tags.is_empty() {
        parts.push(format!("tags: {}", op.tags.join(", ")));
    }
    if !op.parameters.is_empty() {
        let names: Vec<&str> = op.parameters.iter().map(|p| p.name.as_str()).collect();
        parts.push(format!("parameters: {}", names.join(", ")));
    }
    if let Some(fields) = request_fields(op) {
        parts.push(format!("request fields: {fields}"));
    }
    if let Some(fields) = response_fields(op) {
        parts.push(format!("returns: {fields}"));
    }

    let verb = verb.to_uppercase();
    if parts.is_empty() {
        return format!("{verb} {path} → No description available");
    }
    format!("{verb} {path} → {}", parts.join("; "))
}

fn request_fields(op: &Operation) -> Option<String> {
    let body = op.request_body.as_ref()?;
    let media = body
        .content
        .get("application/json")
        .or_else(|| body.content.first().map(|(_, media)| media))?;
    property_names(media.schema.as_ref()?)
}

fn response_fields(op: &Operation) -> Option<String> {
    let resp = op.responses.get("200")?;
    let media = resp
        .content
        .get("application/json")
        .or_else(|| resp.content.first().map(|(_, media)| media))?;
    property_names(media.schema.as_ref()?)
}

fn property_names(schema: &crate::model::Schema) -> Option<String> {
    if schema.properties.is_empty() {
        return None;
    }
    Some(
        schema
            .properties
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// Pluggable relevance scoring for ranked search.
pub trait RelevanceScorer {
    /// Similarity in `[0, 1]` between the query and a candidate text.
    fn score(&self, query: &str, candidate: &str) -> f64;
}

/// A ranked hit with its relevance score.
#[derive(Debug, Clone, Serialize)]
pub struct RankedHit {
    #[serde(flatten)]
    pub hit: SearchHit,
    pub score: f64,
}

/// Ranked search behind the same validation rules as [`search`].
///
/// Candidates are each operation's summary and description; hits at or
/// below the cutoff are dropped, the rest sorted by descending score and
/// limited to `top_k`.
pub fn search_ranked<S: RelevanceScorer>(
    spec: &ApiSpec,
    keyword: &str,
    scorer: &S,
    top_k: usize,
) -> Result<Vec<RankedHit>, SearchError> {
    let query = validate_keyword(keyword)?;

    let mut hits = Vec::new();
    for (path, verb, op) in spec.operations() {
        let candidate = format!("{} {}", op.summary, op.description);
        let candidate = candidate.trim();
        if candidate.is_empty() {
            continue;
        }
        let score = scorer.score(query, candidate);
        if score > RELEVANCE_CUTOFF {
            hits.push(RankedHit {
                hit: SearchHit {
                    endpoint: path.to_string(),
                    method: verb.to_uppercase(),
                    summary: op.summary.clone(),
                    description: describe(path, verb, op),
                },
                score,
            });
        }
    }
    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    hits.truncate(top_k);
    Ok(hits)
}

/// Deterministic scorer: the fraction of query tokens present in the
/// candidate text. A stand-in seam for embedding-similarity backends.
#[derive(Debug, Default)]
pub struct TokenOverlapScorer;

impl RelevanceScorer for TokenOverlapScorer {
    fn score(&self, query: &str, candidate: &str) -> f64 {
        let query = query.to_lowercase();
        let candidate = candidate.to_lowercase();
        let query_tokens = text::tokens(&query);
        if query_tokens.is_empty() {
            return 0.0;
        }
        let candidate_tokens: std::collections::HashSet<&str> =
            text::tokens(&candidate).into_iter().collect();
        let matched = query_tokens
            .iter()
            .filter(|token| candidate_tokens.contains(*token))
            .count();
        matched as f64 / query_tokens.len() as f64
    }
}
