use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::lookups::dto::{
    PostOfficeQuery, TransliterateRequestDto, TransliterateResponseDto,
};
use crate::features::lookups::service::LookupService;
use crate::modules::postal::PostOffice;
use crate::shared::types::{ApiResponse, Meta};

/// Transliterate English text to Marathi
///
/// Never fails because of the upstream service; untranslatable text is
/// returned unchanged.
#[utoipa::path(
    post,
    path = "/api/transliterate",
    request_body = TransliterateRequestDto,
    responses(
        (status = 200, description = "Transliterated text", body = ApiResponse<TransliterateResponseDto>),
        (status = 400, description = "Invalid request")
    ),
    tag = "lookups"
)]
pub async fn transliterate(
    State(service): State<Arc<LookupService>>,
    AppJson(payload): AppJson<TransliterateRequestDto>,
) -> Result<Json<ApiResponse<TransliterateResponseDto>>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let result = service.transliterate(&payload).await?;
    Ok(Json(ApiResponse::success(Some(result), None, None)))
}

/// Find post offices by village name
#[utoipa::path(
    get,
    path = "/api/postal/post-offices",
    params(PostOfficeQuery),
    responses(
        (status = 200, description = "Matching post offices (empty when the lookup fails)", body = ApiResponse<Vec<PostOffice>>)
    ),
    tag = "lookups"
)]
pub async fn post_offices_by_name(
    State(service): State<Arc<LookupService>>,
    Query(query): Query<PostOfficeQuery>,
) -> Result<Json<ApiResponse<Vec<PostOffice>>>> {
    let offices = service.post_offices_by_name(&query.name).await;
    let total = offices.len();
    Ok(Json(ApiResponse::success(
        Some(offices),
        None,
        Some(Meta::total(total)),
    )))
}

/// Find post offices by pincode
#[utoipa::path(
    get,
    path = "/api/postal/pincodes/{pincode}",
    params(
        ("pincode" = String, Path, description = "Six digit Indian pincode")
    ),
    responses(
        (status = 200, description = "Post offices for the pincode (empty when the lookup fails)", body = ApiResponse<Vec<PostOffice>>),
        (status = 400, description = "Malformed pincode")
    ),
    tag = "lookups"
)]
pub async fn post_offices_by_pincode(
    State(service): State<Arc<LookupService>>,
    Path(pincode): Path<String>,
) -> Result<Json<ApiResponse<Vec<PostOffice>>>> {
    let offices = service.post_offices_by_pincode(&pincode).await?;
    let total = offices.len();
    Ok(Json(ApiResponse::success(
        Some(offices),
        None,
        Some(Meta::total(total)),
    )))
}
