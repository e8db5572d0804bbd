use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::admin::dtos::*;
use crate::features::admin::services::AdminService;
use crate::shared::types::ApiResponse;

/// List soft-deleted members, programs and collectors
#[utoipa::path(
    get,
    path = "/api/admin/deleted",
    responses(
        (status = 200, description = "Deleted records by collection", body = ApiResponse<DeletedItemsDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn list_deleted(
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<DeletedItemsDto>>> {
    let items = service.deleted_items().await;
    Ok(Json(ApiResponse::success(Some(items), None, None)))
}

/// Restore a soft-deleted record
#[utoipa::path(
    post,
    path = "/api/admin/deleted/{kind}/{id}/restore",
    params(
        ("kind" = RecordKind, Path, description = "members, programs or collectors"),
        ("id" = Uuid, Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "Record restored", body = ApiResponse<RestoredItemDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Record not found")
    ),
    tag = "admin",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn restore_deleted(
    State(service): State<Arc<AdminService>>,
    Path((kind, id)): Path<(RecordKind, Uuid)>,
) -> Result<Json<ApiResponse<RestoredItemDto>>> {
    let restored = service.restore(kind, id).await?;
    Ok(Json(ApiResponse::success(
        Some(restored),
        Some("पुनर्संचयित केले (Restored)".to_string()),
        None,
    )))
}
