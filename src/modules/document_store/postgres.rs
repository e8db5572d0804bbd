use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{DocumentStore, OrderBy, OrderField, StoredDocument};
use crate::core::error::{AppError, Result};

/// Row shape of the `documents` table
#[derive(Debug, FromRow)]
struct DocumentRow {
    id: Uuid,
    data: Json<Value>,
    is_deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<DocumentRow> for StoredDocument {
    fn from(row: DocumentRow) -> Self {
        let data = match row.data.0 {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            id: row.id,
            data,
            is_deleted: row.is_deleted,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL-backed document store (one JSONB table for all collections)
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn order_clause(order: OrderBy) -> String {
        let direction = order.direction.as_sql();
        match order.field {
            OrderField::CreatedAt => format!("created_at {}, id {}", direction, direction),
            OrderField::UpdatedAt => format!("updated_at {}, id {}", direction, direction),
            // Field name is bound as $3, never interpolated
            OrderField::Data(_) => format!("data ->> $3 {} NULLS LAST, id {}", direction, direction),
        }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: &str, data: Map<String, Value>) -> Result<StoredDocument> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            INSERT INTO documents (id, collection, data, is_deleted)
            VALUES ($1, $2, $3, FALSE)
            RETURNING id, data, is_deleted, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(collection)
        .bind(Json(Value::Object(data)))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert document into {}: {:?}", collection, e);
            AppError::Database(e)
        })?;

        Ok(row.into())
    }

    async fn get(&self, collection: &str, id: Uuid) -> Result<Option<StoredDocument>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, data, is_deleted, created_at, updated_at
            FROM documents
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch document {}/{}: {:?}", collection, id, e);
            AppError::Database(e)
        })?;

        Ok(row.map(Into::into))
    }

    async fn query(
        &self,
        collection: &str,
        is_deleted: Option<bool>,
        order: OrderBy,
    ) -> Result<Vec<StoredDocument>> {
        let sql = format!(
            r#"
            SELECT id, data, is_deleted, created_at, updated_at
            FROM documents
            WHERE collection = $1 AND ($2::BOOLEAN IS NULL OR is_deleted = $2)
            ORDER BY {}
            "#,
            Self::order_clause(order)
        );

        let mut query = sqlx::query_as::<_, DocumentRow>(&sql)
            .bind(collection)
            .bind(is_deleted);
        if let OrderField::Data(field) = order.field {
            query = query.bind(field);
        }

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            tracing::error!("Failed to list documents in {}: {:?}", collection, e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn merge(
        &self,
        collection: &str,
        id: Uuid,
        patch: Map<String, Value>,
    ) -> Result<Option<StoredDocument>> {
        // JSONB `||` replaces top-level keys only
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            UPDATE documents
            SET data = data || $3, updated_at = NOW()
            WHERE collection = $1 AND id = $2
            RETURNING id, data, is_deleted, created_at, updated_at
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(Json(Value::Object(patch)))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update document {}/{}: {:?}", collection, id, e);
            AppError::Database(e)
        })?;

        Ok(row.map(Into::into))
    }

    async fn set_deleted(
        &self,
        collection: &str,
        id: Uuid,
        is_deleted: bool,
    ) -> Result<Option<StoredDocument>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            UPDATE documents
            SET is_deleted = $3, updated_at = NOW()
            WHERE collection = $1 AND id = $2
            RETURNING id, data, is_deleted, created_at, updated_at
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(is_deleted)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to set is_deleted={} on {}/{}: {:?}",
                is_deleted,
                collection,
                id,
                e
            );
            AppError::Database(e)
        })?;

        Ok(row.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_clause_binds_data_field() {
        let clause = PgDocumentStore::order_clause(OrderBy::desc(OrderField::Data("event_date")));
        assert_eq!(clause, "data ->> $3 DESC NULLS LAST, id DESC");
        assert!(!clause.contains("event_date"));

        let clause = PgDocumentStore::order_clause(OrderBy::asc(OrderField::CreatedAt));
        assert_eq!(clause, "created_at ASC, id ASC");
    }
}
