//! Multi-format detection and conversion to the normalized model.
//!
//! Detection is a fixed priority chain; the first matching shape wins.
//! Every branch degrades to empty collections rather than failing, since
//! the system documents whatever the user uploads.

mod endpoints;
mod minimal;
mod openapi;
mod postman;

use serde_json::Value;

use crate::lookup;
use crate::model::ApiSpec;

/// Which conversion strategy a document matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    OpenApi,
    Postman,
    Endpoints,
    Minimal,
}

/// Detect the source format of a decoded document.
pub fn detect(document: &Value) -> SourceFormat {
    if lookup::obj_field(document, "paths").is_some() {
        return SourceFormat::OpenApi;
    }
    if lookup::seq_field(document, "item").is_some() {
        return SourceFormat::Postman;
    }
    if lookup::seq_field(document, "endpoints").is_some() {
        return SourceFormat::Endpoints;
    }
    // Version markers alone are enough to retry the OpenAPI conversion
    // best-effort, even when `paths` is missing or malformed.
    if document.get("swagger").is_some() || document.get("openapi").is_some() {
        return SourceFormat::OpenApi;
    }
    SourceFormat::Minimal
}

/// Convert a decoded document into the normalized model. Never fails:
/// structurally odd input yields an empty `paths` mapping.
pub fn normalize(document: &Value) -> ApiSpec {
    let format = detect(document);
    log::debug!("normalizing document as {format:?}");
    match format {
        SourceFormat::OpenApi => openapi::convert(document),
        SourceFormat::Postman => postman::convert(document),
        SourceFormat::Endpoints => endpoints::convert(document),
        SourceFormat::Minimal => minimal::convert(document),
    }
}
