//! Process-wide cache for the live normalized spec.

use std::sync::{Arc, RwLock};

use serde::Serialize;

use crate::error::{DecodeError, StoreError};
use crate::model::ApiSpec;
use crate::{decode, normalize};

/// Receipt returned after a document is loaded into the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestReceipt {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub path_count: usize,
}

/// Shared holder for the live spec.
///
/// Each load builds a complete spec off to the side and swaps it in behind
/// the lock, so readers observe either the previous instance or the new
/// one, never a partial update. There is no partial update or deletion:
/// a new load replaces the previous spec in full.
#[derive(Debug, Default)]
pub struct SpecStore {
    inner: RwLock<Option<Arc<ApiSpec>>>,
}

impl SpecStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the live spec.
    pub fn get(&self) -> Result<Arc<ApiSpec>, StoreError> {
        self.inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
            .ok_or(StoreError::NotLoaded)
    }

    /// Replace the live spec wholesale.
    pub fn replace(&self, spec: ApiSpec) {
        let mut slot = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *slot = Some(Arc::new(spec));
    }

    /// Decode, normalize, and publish an uploaded document in one step.
    ///
    /// On any decode error the previously published spec stays live.
    pub fn ingest(&self, bytes: &[u8], max_bytes: usize) -> Result<IngestReceipt, DecodeError> {
        let document = decode::decode_document(bytes, max_bytes)?;
        let spec = normalize::normalize(&document);
        let receipt = IngestReceipt {
            title: spec.info.title().to_string(),
            version: spec.info.version.clone(),
            path_count: spec.paths.len(),
        };
        self.replace(spec);
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 1024 * 1024;

    #[test]
    fn test_get_before_first_load() {
        let store = SpecStore::new();
        assert_eq!(store.get().unwrap_err(), StoreError::NotLoaded);
    }

    #[test]
    fn test_ingest_publishes_and_reports() {
        let store = SpecStore::new();
        let receipt = store
            .ingest(
                br#"{"info": {"title": "Petstore", "version": "1.0"}, "paths": {"/pets": {"get": {}}}}"#,
                MAX,
            )
            .unwrap();
        assert_eq!(receipt.title, "Petstore");
        assert_eq!(receipt.version.as_deref(), Some("1.0"));
        assert_eq!(receipt.path_count, 1);

        let spec = store.get().unwrap();
        assert!(spec.paths.contains_key("/pets"));
    }

    #[test]
    fn test_failed_ingest_keeps_previous_spec() {
        let store = SpecStore::new();
        store
            .ingest(br#"{"paths": {"/pets": {"get": {}}}}"#, MAX)
            .unwrap();
        assert!(store.ingest(b"[not an object]", MAX).is_err());
        assert!(store.get().unwrap().paths.contains_key("/pets"));
    }

    #[test]
    fn test_replace_swaps_wholesale() {
        let store = SpecStore::new();
        store
            .ingest(br#"{"paths": {"/old": {"get": {}}}}"#, MAX)
            .unwrap();
        store
            .ingest(br#"{"paths": {"/new": {"get": {}}}}"#, MAX)
            .unwrap();
        let spec = store.get().unwrap();
        assert!(spec.paths.contains_key("/new"));
        assert!(!spec.paths.contains_key("/old"));
    }
}
