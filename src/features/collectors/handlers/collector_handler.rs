use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::collectors::dtos::{CollectorRequestDto, CollectorResponseDto};
use crate::features::collectors::services::CollectorService;
use crate::shared::types::{ApiResponse, Meta};

/// List active collectors, newest first
#[utoipa::path(
    get,
    path = "/api/collectors",
    responses(
        (status = 200, description = "Active collectors", body = ApiResponse<Vec<CollectorResponseDto>>),
        (status = 503, description = "Store unavailable")
    ),
    tag = "collectors"
)]
pub async fn list_collectors(
    State(service): State<Arc<CollectorService>>,
) -> Result<Json<ApiResponse<Vec<CollectorResponseDto>>>> {
    let collectors: Vec<CollectorResponseDto> = service
        .list()
        .await?
        .into_iter()
        .map(CollectorResponseDto::from)
        .collect();
    let total = collectors.len();

    Ok(Json(ApiResponse::success(
        Some(collectors),
        None,
        Some(Meta::total(total)),
    )))
}

#[utoipa::path(
    get,
    path = "/api/collectors/{id}",
    params(
        ("id" = Uuid, Path, description = "Collector ID")
    ),
    responses(
        (status = 200, description = "Collector found", body = ApiResponse<CollectorResponseDto>),
        (status = 404, description = "Collector not found")
    ),
    tag = "collectors"
)]
pub async fn get_collector(
    State(service): State<Arc<CollectorService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CollectorResponseDto>>> {
    let collector = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(collector.into()), None, None)))
}

/// Create a collector with one or more working areas
///
/// Place names are stored in Marathi (dictionary, then transliteration);
/// the English input is kept alongside.
#[utoipa::path(
    post,
    path = "/api/collectors",
    request_body = CollectorRequestDto,
    responses(
        (status = 201, description = "Collector created", body = ApiResponse<CollectorResponseDto>),
        (status = 400, description = "Missing name, working area or villages")
    ),
    tag = "collectors"
)]
pub async fn create_collector(
    State(service): State<Arc<CollectorService>>,
    AppJson(payload): AppJson<CollectorRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<CollectorResponseDto>>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let collector = service.create(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(collector.into()),
            Some("संकलक जोडला (Collector added)".to_string()),
            None,
        )),
    ))
}

/// Replace a collector's details and working areas
#[utoipa::path(
    put,
    path = "/api/collectors/{id}",
    params(
        ("id" = Uuid, Path, description = "Collector ID")
    ),
    request_body = CollectorRequestDto,
    responses(
        (status = 200, description = "Collector updated", body = ApiResponse<CollectorResponseDto>),
        (status = 400, description = "Missing name, working area or villages"),
        (status = 404, description = "Collector not found")
    ),
    tag = "collectors"
)]
pub async fn update_collector(
    State(service): State<Arc<CollectorService>>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<CollectorRequestDto>,
) -> Result<Json<ApiResponse<CollectorResponseDto>>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let collector = service.update(id, &payload).await?;
    Ok(Json(ApiResponse::success(
        Some(collector.into()),
        Some("संकलक माहिती अद्यतनित केली (Collector updated)".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/collectors/{id}",
    params(
        ("id" = Uuid, Path, description = "Collector ID")
    ),
    responses(
        (status = 200, description = "Collector moved to deleted items", body = ApiResponse<CollectorResponseDto>),
        (status = 404, description = "Collector not found")
    ),
    tag = "collectors"
)]
pub async fn delete_collector(
    State(service): State<Arc<CollectorService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CollectorResponseDto>>> {
    let collector = service.soft_delete(id).await?;
    Ok(Json(ApiResponse::success(
        Some(collector.into()),
        Some("संकलक हटवला (Collector deleted)".to_string()),
        None,
    )))
}

#[utoipa::path(
    post,
    path = "/api/collectors/{id}/restore",
    params(
        ("id" = Uuid, Path, description = "Collector ID")
    ),
    responses(
        (status = 200, description = "Collector restored", body = ApiResponse<CollectorResponseDto>),
        (status = 404, description = "Collector not found")
    ),
    tag = "collectors"
)]
pub async fn restore_collector(
    State(service): State<Arc<CollectorService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CollectorResponseDto>>> {
    let collector = service.restore(id).await?;
    Ok(Json(ApiResponse::success(
        Some(collector.into()),
        Some("संकलक पुनर्संचयित केला (Collector restored)".to_string()),
        None,
    )))
}
