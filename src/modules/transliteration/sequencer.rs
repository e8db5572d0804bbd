use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use uuid::Uuid;

use super::Transliterator;

/// Sequences whose latest ticket was never applied are dropped after this
const DEFAULT_EXPIRY: Duration = Duration::from_secs(300);

/// One field of one open form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceKey {
    pub form_id: Uuid,
    pub field: String,
}

impl SequenceKey {
    pub fn new(form_id: Uuid, field: &str) -> Self {
        Self {
            form_id,
            field: field.to_string(),
        }
    }
}

/// Proof of one issued request for a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub key: SequenceKey,
    pub seq: u64,
}

struct Issued {
    seq: u64,
    at: Instant,
}

#[derive(Default)]
struct SequencerState {
    next_seq: u64,
    latest: HashMap<SequenceKey, Issued>,
}

/// Monotonically increasing request numbers per form field.
///
/// Only the response for the most recently issued ticket of a key is
/// applied; earlier ones are stale no matter when they complete. Sequence
/// numbers are never reused, so a key is forgotten as soon as its latest
/// ticket is applied, and abandoned keys expire.
pub struct FieldSequencer {
    state: Mutex<SequencerState>,
    expiry: Duration,
}

impl Default for FieldSequencer {
    fn default() -> Self {
        Self::with_expiry(DEFAULT_EXPIRY)
    }
}

impl FieldSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expiry(expiry: Duration) -> Self {
        Self {
            state: Mutex::new(SequencerState::default()),
            expiry,
        }
    }

    pub async fn issue(&self, key: SequenceKey) -> Ticket {
        let mut state = self.state.lock().await;
        let now = Instant::now();
        let expiry = self.expiry;
        state
            .latest
            .retain(|_, issued| now.duration_since(issued.at) < expiry);

        state.next_seq += 1;
        let seq = state.next_seq;
        state.latest.insert(key.clone(), Issued { seq, at: now });
        Ticket { key, seq }
    }

    /// `Some(value)` when `ticket` is still the latest for its key
    pub async fn apply<T>(&self, ticket: &Ticket, value: T) -> Option<T> {
        let mut state = self.state.lock().await;
        let current = state
            .latest
            .get(&ticket.key)
            .is_some_and(|issued| issued.seq == ticket.seq);
        if current {
            state.latest.remove(&ticket.key);
            Some(value)
        } else {
            tracing::debug!(
                "Discarding stale response for '{}' of form {} (seq {})",
                ticket.key.field,
                ticket.key.form_id,
                ticket.seq
            );
            None
        }
    }

    #[cfg(test)]
    async fn tracked(&self) -> usize {
        self.state.lock().await.latest.len()
    }
}

/// Transliteration of live-edited fields where only the newest request wins
pub struct SequencedTransliterator {
    transliterator: Arc<dyn Transliterator>,
    sequencer: FieldSequencer,
}

impl SequencedTransliterator {
    pub fn new(transliterator: Arc<dyn Transliterator>) -> Self {
        Self {
            transliterator,
            sequencer: FieldSequencer::new(),
        }
    }

    /// Returns `None` when a newer request for the same form field was issued meanwhile
    pub async fn transliterate_field(
        &self,
        form_id: Uuid,
        field: &str,
        text: &str,
    ) -> Option<String> {
        let ticket = self.sequencer.issue(SequenceKey::new(form_id, field)).await;
        let result = self.transliterator.transliterate_or_original(text).await;
        self.sequencer.apply(&ticket, result).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Result;
    use async_trait::async_trait;

    #[tokio::test]
    async fn test_out_of_order_responses_apply_latest_only() {
        let sequencer = FieldSequencer::new();
        let form = Uuid::new_v4();
        let first = sequencer.issue(SequenceKey::new(form, "full_name")).await;
        let second = sequencer.issue(SequenceKey::new(form, "full_name")).await;
        let other_field = sequencer.issue(SequenceKey::new(form, "city")).await;

        // Second response arrives first and is applied
        assert_eq!(sequencer.apply(&second, "रमेश").await, Some("रमेश"));
        // First response arrives late and is discarded
        assert_eq!(sequencer.apply(&first, "र").await, None);
        // Fields are sequenced independently
        assert_eq!(sequencer.apply(&other_field, "पुणे").await, Some("पुणे"));
        assert!(second.seq > first.seq);
    }

    #[tokio::test]
    async fn test_forms_do_not_interfere_on_same_field() {
        let sequencer = FieldSequencer::new();
        let form_a = sequencer
            .issue(SequenceKey::new(Uuid::new_v4(), "fullName"))
            .await;
        let form_b = sequencer
            .issue(SequenceKey::new(Uuid::new_v4(), "fullName"))
            .await;

        assert_eq!(sequencer.apply(&form_a, "अ").await, Some("अ"));
        assert_eq!(sequencer.apply(&form_b, "ब").await, Some("ब"));
    }

    #[tokio::test]
    async fn test_applied_keys_are_forgotten() {
        let sequencer = FieldSequencer::new();
        let form = Uuid::new_v4();
        for i in 0..100 {
            let ticket = sequencer
                .issue(SequenceKey::new(form, &format!("field{}", i)))
                .await;
            assert!(sequencer.apply(&ticket, ()).await.is_some());
        }
        assert_eq!(sequencer.tracked().await, 0);

        // A late response for a forgotten key is still stale
        let early = sequencer.issue(SequenceKey::new(form, "name")).await;
        let late = sequencer.issue(SequenceKey::new(form, "name")).await;
        assert!(sequencer.apply(&late, ()).await.is_some());
        let again = sequencer.issue(SequenceKey::new(form, "name")).await;
        assert_eq!(sequencer.apply(&early, ()).await, None);
        assert!(sequencer.apply(&again, ()).await.is_some());
    }

    #[tokio::test]
    async fn test_abandoned_keys_expire() {
        let sequencer = FieldSequencer::with_expiry(Duration::from_millis(10));
        let abandoned = sequencer
            .issue(SequenceKey::new(Uuid::new_v4(), "name"))
            .await;
        tokio::time::sleep(Duration::from_millis(30)).await;

        sequencer
            .issue(SequenceKey::new(Uuid::new_v4(), "city"))
            .await;
        assert_eq!(sequencer.tracked().await, 1);
        assert_eq!(sequencer.apply(&abandoned, ()).await, None);
    }

    /// Echoes the input after a delay proportional to its length
    struct SlowEcho;

    #[async_trait]
    impl Transliterator for SlowEcho {
        async fn transliterate(&self, text: &str) -> Result<String> {
            tokio::time::sleep(Duration::from_millis(20 * text.len() as u64)).await;
            Ok(format!("mr:{}", text))
        }
    }

    #[tokio::test]
    async fn test_slow_earlier_request_is_discarded() {
        let sequenced = Arc::new(SequencedTransliterator::new(Arc::new(SlowEcho)));
        let form = Uuid::new_v4();

        let slow = {
            let sequenced = sequenced.clone();
            tokio::spawn(
                async move { sequenced.transliterate_field(form, "name", "Rameshwar").await },
            )
        };
        tokio::time::sleep(Duration::from_millis(5)).await;
        let fast = sequenced.transliterate_field(form, "name", "Ram").await;

        assert_eq!(fast, Some("mr:Ram".to_string()));
        assert_eq!(slow.await.unwrap(), None);
    }
}
