use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::locations::models::LocationHierarchy;
use crate::features::locations::services::MarathiResolver;
use crate::modules::document_store::{DocumentStore, InMemoryDocumentStore};
use crate::modules::storage::ObjectStorage;
use crate::modules::transliteration::Transliterator;

/// Location data shipped with the service
pub fn test_hierarchy() -> Arc<LocationHierarchy> {
    Arc::new(
        LocationHierarchy::from_json(
            include_str!("../../data/address_data.json"),
            include_str!("../../data/marathi_locations.json"),
        )
        .expect("bundled location data is valid"),
    )
}

pub fn memory_store() -> Arc<dyn DocumentStore> {
    Arc::new(InMemoryDocumentStore::new())
}

/// Deterministic transliterator: known words map to fixed Marathi text,
/// anything else is prefixed with `mr:`
#[derive(Default)]
pub struct StubTransliterator {
    known: HashMap<String, String>,
    calls: AtomicUsize,
}

impl StubTransliterator {
    pub fn with_words(words: &[(&str, &str)]) -> Self {
        Self {
            known: words
                .iter()
                .map(|(en, mr)| (en.to_string(), mr.to_string()))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transliterator for StubTransliterator {
    async fn transliterate(&self, text: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if text.is_empty() {
            return Ok(String::new());
        }
        Ok(self
            .known
            .get(text)
            .cloned()
            .unwrap_or_else(|| format!("mr:{}", text)))
    }
}

pub fn stub_resolver(transliterator: Arc<dyn Transliterator>) -> Arc<MarathiResolver> {
    Arc::new(MarathiResolver::new(test_hierarchy(), transliterator))
}

/// Object storage that records calls instead of storing anything
#[derive(Default)]
pub struct CountingStorage {
    uploads: AtomicUsize,
}

impl CountingStorage {
    pub fn uploads(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ObjectStorage for CountingStorage {
    async fn upload(&self, key: &str, _data: Vec<u8>, _content_type: &str) -> Result<String> {
        self.uploads.fetch_add(1, Ordering::SeqCst);
        Ok(format!("public/{}", key))
    }

    fn public_url(&self, key: &str) -> String {
        format!("http://storage.test/trust-uploads/{}", key)
    }
}
