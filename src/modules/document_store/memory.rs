use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{DocumentStore, OrderBy, OrderField, SortDirection, StoredDocument};
use crate::core::error::Result;

#[derive(Default)]
struct Inner {
    collections: HashMap<String, Vec<StoredDocument>>,
    last_timestamp: Option<DateTime<Utc>>,
}

impl Inner {
    /// Strictly increasing clock so ordering by timestamp is deterministic
    fn tick(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let next = match self.last_timestamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_timestamp = Some(next);
        next
    }

    fn find_mut(&mut self, collection: &str, id: Uuid) -> Option<&mut StoredDocument> {
        self.collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
    }
}

/// Process-local document store
#[derive(Default)]
pub struct InMemoryDocumentStore {
    inner: RwLock<Inner>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn compare(a: &StoredDocument, b: &StoredDocument, order: OrderBy) -> Ordering {
        let ordering = match order.field {
            OrderField::CreatedAt => a.created_at.cmp(&b.created_at),
            OrderField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            OrderField::Data(field) => {
                let left = a.data.get(field).and_then(Value::as_str);
                let right = b.data.get(field).and_then(Value::as_str);
                match (left, right) {
                    (Some(l), Some(r)) => l.cmp(r),
                    // Missing values sort last in both directions
                    (Some(_), None) => return Ordering::Less,
                    (None, Some(_)) => return Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            }
        };

        let ordering = ordering.then_with(|| a.id.cmp(&b.id));
        match order.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, collection: &str, data: Map<String, Value>) -> Result<StoredDocument> {
        let mut inner = self.inner.write().await;
        let now = inner.tick();
        let document = StoredDocument {
            id: Uuid::now_v7(),
            data,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };

        inner
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(document.clone());

        Ok(document)
    }

    async fn get(&self, collection: &str, id: Uuid) -> Result<Option<StoredDocument>> {
        let inner = self.inner.read().await;
        Ok(inner
            .collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .cloned())
    }

    async fn query(
        &self,
        collection: &str,
        is_deleted: Option<bool>,
        order: OrderBy,
    ) -> Result<Vec<StoredDocument>> {
        let inner = self.inner.read().await;
        let mut documents: Vec<StoredDocument> = inner
            .collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| is_deleted.map_or(true, |flag| doc.is_deleted == flag))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        documents.sort_by(|a, b| Self::compare(a, b, order));
        Ok(documents)
    }

    async fn merge(
        &self,
        collection: &str,
        id: Uuid,
        patch: Map<String, Value>,
    ) -> Result<Option<StoredDocument>> {
        let mut inner = self.inner.write().await;
        let now = inner.tick();
        Ok(inner.find_mut(collection, id).map(|doc| {
            for (key, value) in patch {
                doc.data.insert(key, value);
            }
            doc.updated_at = now;
            doc.clone()
        }))
    }

    async fn set_deleted(
        &self,
        collection: &str,
        id: Uuid,
        is_deleted: bool,
    ) -> Result<Option<StoredDocument>> {
        let mut inner = self.inner.write().await;
        let now = inner.tick();
        Ok(inner.find_mut(collection, id).map(|doc| {
            doc.is_deleted = is_deleted;
            doc.updated_at = now;
            doc.clone()
        }))
    }
}
