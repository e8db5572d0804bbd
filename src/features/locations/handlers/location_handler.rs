use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::locations::dtos::{ApplySelectionDto, SelectionResponseDto};
use crate::features::locations::services::LocationService;
use crate::shared::types::{ApiResponse, Meta};

/// List all districts
#[utoipa::path(
    get,
    path = "/api/locations/districts",
    responses(
        (status = 200, description = "District names in file order", body = ApiResponse<Vec<String>>)
    ),
    tag = "locations"
)]
pub async fn list_districts(
    State(service): State<Arc<LocationService>>,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    let districts = service.districts();
    let total = districts.len();
    Ok(Json(ApiResponse::success(
        Some(districts),
        None,
        Some(Meta::total(total)),
    )))
}

/// List talukas of a district (empty for an unknown district)
#[utoipa::path(
    get,
    path = "/api/locations/districts/{district}/talukas",
    params(
        ("district" = String, Path, description = "District name (English)")
    ),
    responses(
        (status = 200, description = "Taluka names in file order", body = ApiResponse<Vec<String>>)
    ),
    tag = "locations"
)]
pub async fn list_talukas(
    State(service): State<Arc<LocationService>>,
    Path(district): Path<String>,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    let talukas = service.talukas(&district);
    let total = talukas.len();
    Ok(Json(ApiResponse::success(
        Some(talukas),
        None,
        Some(Meta::total(total)),
    )))
}

/// List villages of a taluka
#[utoipa::path(
    get,
    path = "/api/locations/districts/{district}/talukas/{taluka}/villages",
    params(
        ("district" = String, Path, description = "District name (English)"),
        ("taluka" = String, Path, description = "Taluka name (English)")
    ),
    responses(
        (status = 200, description = "Village names in file order", body = ApiResponse<Vec<String>>)
    ),
    tag = "locations"
)]
pub async fn list_villages(
    State(service): State<Arc<LocationService>>,
    Path((district, taluka)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    let villages = service.villages(&district, &taluka);
    let total = villages.len();
    Ok(Json(ApiResponse::success(
        Some(villages),
        None,
        Some(Meta::total(total)),
    )))
}

/// Apply one cascading-dropdown interaction
#[utoipa::path(
    post,
    path = "/api/locations/selection",
    request_body = ApplySelectionDto,
    responses(
        (status = 200, description = "Updated selection", body = ApiResponse<SelectionResponseDto>),
        (status = 400, description = "Invalid request body")
    ),
    tag = "locations"
)]
pub async fn apply_selection(
    State(service): State<Arc<LocationService>>,
    AppJson(payload): AppJson<ApplySelectionDto>,
) -> Result<Json<ApiResponse<SelectionResponseDto>>> {
    let selection = service.apply_selection(payload.selection, &payload.action);
    let (talukas, villages) = service.options(&selection);

    Ok(Json(ApiResponse::success(
        Some(SelectionResponseDto {
            selection,
            talukas,
            villages,
        }),
        None,
        None,
    )))
}
