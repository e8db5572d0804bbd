//! Document store module
//!
//! Collections of JSON documents keyed by a generated id, filtered by the
//! soft-delete flag and ordered by a timestamp or a document field.
//!
//! Two backends implement [`DocumentStore`]:
//! - [`PgDocumentStore`]: a single PostgreSQL `documents` table with a JSONB payload
//! - [`InMemoryDocumentStore`]: process-local storage for tests and demos
//!
//! [`SoftDeleteRepository`] layers the list/get/create/update/soft-delete/restore
//! convention on top, once, for every entity type.

mod memory;
mod postgres;
mod repository;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::core::error::Result;

pub use memory::InMemoryDocumentStore;
pub use postgres::PgDocumentStore;
pub use repository::{changed_fields, CollectionSpec, Record, SoftDeleteRepository};

/// A document as persisted by the store
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: Uuid,
    pub data: Map<String, Value>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Desc,
    Asc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Field a collection is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    CreatedAt,
    UpdatedAt,
    /// Top-level string field inside the document payload (e.g. `event_date`)
    Data(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub field: OrderField,
    pub direction: SortDirection,
}

impl OrderBy {
    pub const fn asc(field: OrderField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub const fn desc(field: OrderField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// Storage seam for the repositories.
///
/// `merge` is a shallow merge: top-level keys of `patch` replace the stored
/// keys wholesale, nested objects and arrays are never merged deeply. Every
/// mutating call refreshes `updated_at`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert(&self, collection: &str, data: Map<String, Value>) -> Result<StoredDocument>;

    async fn get(&self, collection: &str, id: Uuid) -> Result<Option<StoredDocument>>;

    /// List documents, optionally filtered by the soft-delete flag
    async fn query(
        &self,
        collection: &str,
        is_deleted: Option<bool>,
        order: OrderBy,
    ) -> Result<Vec<StoredDocument>>;

    async fn merge(
        &self,
        collection: &str,
        id: Uuid,
        patch: Map<String, Value>,
    ) -> Result<Option<StoredDocument>>;

    async fn set_deleted(
        &self,
        collection: &str,
        id: Uuid,
        is_deleted: bool,
    ) -> Result<Option<StoredDocument>>;
}
