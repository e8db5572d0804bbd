//! English to Marathi transliteration
//!
//! The input-tools endpoint is an external collaborator: failures never
//! surface to users, callers fall back to the original text.

mod client;
mod sequencer;

use async_trait::async_trait;
use futures::future::join_all;

use crate::core::error::Result;

pub use client::GoogleInputTransliterator;
pub use sequencer::SequencedTransliterator;

#[async_trait]
pub trait Transliterator: Send + Sync {
    /// Transliterate one text. Empty input yields empty output; transport
    /// failures are returned to the caller.
    async fn transliterate(&self, text: &str) -> Result<String>;

    /// Never fails: any error yields `text` unchanged
    async fn transliterate_or_original(&self, text: &str) -> String {
        match self.transliterate(text).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Transliteration of '{}' failed: {}", text, e);
                text.to_string()
            }
        }
    }

    /// Element-wise `transliterate_or_original`, preserving order
    async fn transliterate_all(&self, texts: &[String]) -> Vec<String> {
        join_all(texts.iter().map(|text| self.transliterate_or_original(text))).await
    }
}
