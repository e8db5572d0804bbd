use std::marker::PhantomData;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use super::{DocumentStore, OrderBy, OrderField, StoredDocument};
use crate::core::error::{AppError, Result};

/// Keys owned by the store; never accepted from a payload
const RESERVED_KEYS: [&str; 4] = ["id", "is_deleted", "created_at", "updated_at"];

/// Static description of one collection
#[derive(Debug, Clone, Copy)]
pub struct CollectionSpec {
    pub name: &'static str,
    pub order: OrderBy,
    /// Message returned when an id does not exist
    pub not_found: &'static str,
}

/// A typed document together with its store-managed fields
#[derive(Debug, Clone, PartialEq)]
pub struct Record<T> {
    pub id: Uuid,
    pub data: T,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<T: DeserializeOwned> Record<T> {
    fn from_stored(collection: &str, doc: StoredDocument) -> Result<Self> {
        let data = serde_json::from_value(Value::Object(doc.data)).map_err(|e| {
            AppError::Internal(format!(
                "Unreadable document {}/{}: {}",
                collection, doc.id, e
            ))
        })?;

        Ok(Self {
            id: doc.id,
            data,
            is_deleted: doc.is_deleted,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}

fn to_object<P: Serialize>(payload: &P) -> Result<Map<String, Value>> {
    match serde_json::to_value(payload) {
        Ok(Value::Object(mut map)) => {
            for key in RESERVED_KEYS {
                map.remove(key);
            }
            Ok(map)
        }
        Ok(_) => Err(AppError::Internal(
            "Document payload must serialize to an object".to_string(),
        )),
        Err(e) => Err(AppError::Internal(format!(
            "Failed to serialize document: {}",
            e
        ))),
    }
}

/// Top-level fields whose values differ between `before` and `after`.
///
/// Used to turn an edited copy of a record into a minimal shallow-merge patch.
pub fn changed_fields<T: Serialize>(before: &T, after: &T) -> Result<Map<String, Value>> {
    let before = to_object(before)?;
    let mut after = to_object(after)?;
    after.retain(|key, value| before.get(key) != Some(value));
    Ok(after)
}

/// Soft-delete conventions shared by every collection.
///
/// Active lists never contain deleted records, `get_by_id` returns a record
/// whatever its flag, and `restore` is the exact inverse of `soft_delete`.
pub struct SoftDeleteRepository<T> {
    store: Arc<dyn DocumentStore>,
    spec: CollectionSpec,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for SoftDeleteRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            spec: self.spec,
            _marker: PhantomData,
        }
    }
}

impl<T> SoftDeleteRepository<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    pub fn new(store: Arc<dyn DocumentStore>, spec: CollectionSpec) -> Self {
        Self {
            store,
            spec,
            _marker: PhantomData,
        }
    }

    fn decode_all(&self, docs: Vec<StoredDocument>) -> Vec<Record<T>> {
        docs.into_iter()
            .filter_map(|doc| match Record::from_stored(self.spec.name, doc) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("Skipping document: {}", e);
                    None
                }
            })
            .collect()
    }

    fn not_found(&self) -> AppError {
        AppError::NotFound(self.spec.not_found.to_string())
    }

    /// Active records in the collection's configured order
    pub async fn list(&self) -> Result<Vec<Record<T>>> {
        let docs = self
            .store
            .query(self.spec.name, Some(false), self.spec.order)
            .await?;
        Ok(self.decode_all(docs))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Record<T>> {
        let doc = self
            .store
            .get(self.spec.name, id)
            .await?
            .ok_or_else(|| self.not_found())?;
        Record::from_stored(self.spec.name, doc)
    }

    pub async fn create(&self, data: &T) -> Result<Record<T>> {
        let doc = self.store.insert(self.spec.name, to_object(data)?).await?;
        tracing::debug!("Created {}/{}", self.spec.name, doc.id);
        Record::from_stored(self.spec.name, doc)
    }

    /// Shallow merge of `patch` into the stored record
    pub async fn update<P: Serialize>(&self, id: Uuid, patch: &P) -> Result<Record<T>> {
        let doc = self
            .store
            .merge(self.spec.name, id, to_object(patch)?)
            .await?
            .ok_or_else(|| self.not_found())?;
        Record::from_stored(self.spec.name, doc)
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<Record<T>> {
        let doc = self
            .store
            .set_deleted(self.spec.name, id, true)
            .await?
            .ok_or_else(|| self.not_found())?;
        tracing::info!("Soft-deleted {}/{}", self.spec.name, id);
        Record::from_stored(self.spec.name, doc)
    }

    pub async fn restore(&self, id: Uuid) -> Result<Record<T>> {
        let doc = self
            .store
            .set_deleted(self.spec.name, id, false)
            .await?
            .ok_or_else(|| self.not_found())?;
        tracing::info!("Restored {}/{}", self.spec.name, id);
        Record::from_stored(self.spec.name, doc)
    }

    /// Deleted records, most recently deleted first.
    ///
    /// Store failures are logged and reported as an empty list.
    pub async fn list_deleted(&self) -> Vec<Record<T>> {
        match self
            .store
            .query(
                self.spec.name,
                Some(true),
                OrderBy::desc(OrderField::UpdatedAt),
            )
            .await
        {
            Ok(docs) => self.decode_all(docs),
            Err(e) => {
                tracing::error!("Failed to list deleted {}: {}", self.spec.name, e);
                Vec::new()
            }
        }
    }
}
