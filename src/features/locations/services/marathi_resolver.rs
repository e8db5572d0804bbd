use std::sync::Arc;

use futures::future::join_all;

use crate::features::locations::models::LocationHierarchy;
use crate::modules::transliteration::Transliterator;

/// Marathi values for English input.
///
/// Place names resolve through the dictionary first, then transliteration,
/// then fall back to the original text. Free text skips the dictionary.
pub struct MarathiResolver {
    hierarchy: Arc<LocationHierarchy>,
    transliterator: Arc<dyn Transliterator>,
}

impl MarathiResolver {
    pub fn new(hierarchy: Arc<LocationHierarchy>, transliterator: Arc<dyn Transliterator>) -> Self {
        Self {
            hierarchy,
            transliterator,
        }
    }

    pub async fn place_name(&self, english: &str) -> String {
        let english = english.trim();
        if english.is_empty() {
            return String::new();
        }
        if let Some(marathi) = self.hierarchy.marathi_name(english) {
            return marathi.to_string();
        }
        self.transliterator.transliterate_or_original(english).await
    }

    pub async fn place_names(&self, names: &[String]) -> Vec<String> {
        join_all(names.iter().map(|name| self.place_name(name))).await
    }

    pub async fn text(&self, english: &str) -> String {
        let english = english.trim();
        if english.is_empty() {
            return String::new();
        }
        self.transliterator.transliterate_or_original(english).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{AppError, Result};
    use crate::features::locations::models::District;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct Prefixing;

    #[async_trait]
    impl Transliterator for Prefixing {
        async fn transliterate(&self, text: &str) -> Result<String> {
            Ok(format!("mr:{}", text))
        }
    }

    struct Unreachable;

    #[async_trait]
    impl Transliterator for Unreachable {
        async fn transliterate(&self, _text: &str) -> Result<String> {
            Err(AppError::ExternalServiceError("connection refused".to_string()))
        }
    }

    fn hierarchy() -> Arc<LocationHierarchy> {
        let names = HashMap::from([("Pune".to_string(), "पुणे".to_string())]);
        Arc::new(LocationHierarchy::new(Vec::<District>::new(), names))
    }

    #[tokio::test]
    async fn test_dictionary_then_transliteration() {
        let resolver = MarathiResolver::new(hierarchy(), Arc::new(Prefixing));

        assert_eq!(resolver.place_name("Pune").await, "पुणे");
        assert_eq!(resolver.place_name("Haveli").await, "mr:Haveli");
        assert_eq!(resolver.text("Pune").await, "mr:Pune");
        assert_eq!(resolver.place_name("  ").await, "");
    }

    #[tokio::test]
    async fn test_unreachable_collaborator_falls_back_to_original() {
        let resolver = MarathiResolver::new(hierarchy(), Arc::new(Unreachable));

        assert_eq!(resolver.place_name("Pune").await, "पुणे");
        assert_eq!(
            resolver
                .place_names(&["Wagholi".to_string(), "Lohegaon".to_string()])
                .await,
            vec!["Wagholi", "Lohegaon"]
        );
        assert_eq!(resolver.text("Ramesh").await, "Ramesh");
    }
}
