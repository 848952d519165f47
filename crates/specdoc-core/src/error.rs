use thiserror::Error;

/// Errors produced while decoding an uploaded document.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("document exceeds the {limit}-byte upload limit ({size} bytes)")]
    TooLarge { size: usize, limit: usize },

    #[error("invalid JSON/YAML: {0}")]
    Syntax(#[from] serde_yaml_ng::Error),

    #[error("document must decode to a JSON/YAML object")]
    NotAnObject,
}

/// Input-validation errors for keyword search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("empty keyword")]
    EmptyKeyword,

    #[error("keyword exceeds the {limit}-character limit")]
    KeywordTooLong { limit: usize },
}

/// Errors produced by the shared spec store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no API specification has been loaded")]
    NotLoaded,
}
