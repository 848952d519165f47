//! Deterministic summary and keyword derivation over free text.

use indexmap::IndexMap;

use crate::model::ApiSpec;

/// Fixed placeholder used when no text is available.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Sentences shorter than this fall back to a prefix of the full text.
const MIN_SENTENCE_CHARS: usize = 30;

/// Upper bound for the fallback prefix.
const MAX_SUMMARY_CHARS: usize = 220;

/// Words carrying no salience for keyword ranking.
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "have", "how", "i",
    "if", "in", "into", "is", "it", "its", "of", "on", "or", "that", "the", "their", "them",
    "they", "this", "to", "was", "were", "what", "when", "where", "which", "who", "will", "with",
    "you", "your",
];

/// Produce the short summary of a free-text description.
///
/// Empty input yields the fixed placeholder. Otherwise the first sentence
/// is used, unless it is shorter than the minimum, in which case the
/// summary falls back to a bounded prefix of the whole trimmed text.
pub fn summarize(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return NO_DESCRIPTION.to_string();
    }
    let sentence = first_sentence(trimmed).trim();
    if sentence.chars().count() < MIN_SENTENCE_CHARS {
        return truncate_chars(trimmed, MAX_SUMMARY_CHARS).trim_end().to_string();
    }
    sentence.to_string()
}

/// Everything up to the first `.`/`!`/`?` that is followed by whitespace.
fn first_sentence(text: &str) -> &str {
    let mut chars = text.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        if matches!(ch, '.' | '!' | '?') {
            if let Some((_, next)) = chars.peek() {
                if next.is_whitespace() {
                    return &text[..i + ch.len_utf8()];
                }
            }
        }
    }
    text
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}

/// Rank the most frequent salient tokens in `text`.
///
/// Frequency-based, not semantic: stop words and tokens shorter than three
/// characters are discarded, the rest are counted, and ties keep
/// first-encountered order.
pub fn extract_keywords(text: &str, top_k: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut freq: IndexMap<&str, usize> = IndexMap::new();
    for token in tokens(&lowered) {
        if token.len() < 3 || STOPWORDS.contains(&token) {
            continue;
        }
        *freq.entry(token).or_insert(0) += 1;
    }
    let mut ranked: Vec<(&str, usize)> = freq.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(top_k)
        .map(|(word, _)| word.to_string())
        .collect()
}

/// Tokens are an ASCII letter followed by at least one more letter, digit,
/// `_`, or `-`.
pub(crate) fn tokens(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;
    for (i, ch) in text.char_indices() {
        match start {
            Some(s) => {
                if !(ch.is_ascii_alphanumeric() || ch == '_' || ch == '-') {
                    if i - s >= 2 {
                        out.push(&text[s..i]);
                    }
                    start = None;
                }
            }
            None => {
                if ch.is_ascii_alphabetic() {
                    start = Some(i);
                }
            }
        }
    }
    if let Some(s) = start {
        if text.len() - s >= 2 {
            out.push(&text[s..]);
        }
    }
    out
}

/// Join the info description and every operation's effective description
/// into one overview-source text.
pub fn collect_descriptions(spec: &ApiSpec) -> String {
    let mut chunks: Vec<&str> = Vec::new();
    if let Some(desc) = spec.info.description.as_deref() {
        if !desc.is_empty() {
            chunks.push(desc);
        }
    }
    for (_, _, op) in spec.operations() {
        let effective = op.effective_description();
        if !effective.is_empty() {
            chunks.push(effective);
        }
    }
    chunks.join(" ").trim().to_string()
}
