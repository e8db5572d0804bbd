use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::members::dtos::{MemberListQuery, MemberRequestDto, MemberResponseDto};
use crate::features::members::services::MemberService;
use crate::shared::types::{ApiResponse, Meta};

/// List active members
///
/// Members are returned in registration order. All filters are optional
/// and combine with AND.
#[utoipa::path(
    get,
    path = "/api/members",
    params(MemberListQuery),
    responses(
        (status = 200, description = "Active members", body = ApiResponse<Vec<MemberResponseDto>>),
        (status = 503, description = "Store unavailable")
    ),
    tag = "members"
)]
pub async fn list_members(
    State(service): State<Arc<MemberService>>,
    Query(query): Query<MemberListQuery>,
) -> Result<Json<ApiResponse<Vec<MemberResponseDto>>>> {
    let members: Vec<MemberResponseDto> = service
        .list(&query.into())
        .await?
        .into_iter()
        .map(MemberResponseDto::from)
        .collect();
    let total = members.len();

    Ok(Json(ApiResponse::success(
        Some(members),
        None,
        Some(Meta::total(total)),
    )))
}

/// Get a member by ID (also returns soft-deleted members)
#[utoipa::path(
    get,
    path = "/api/members/{id}",
    params(
        ("id" = Uuid, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member found", body = ApiResponse<MemberResponseDto>),
        (status = 404, description = "Member not found")
    ),
    tag = "members"
)]
pub async fn get_member(
    State(service): State<Arc<MemberService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MemberResponseDto>>> {
    let member = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(member.into()), None, None)))
}

/// Register a new member
///
/// Missing Marathi fields are filled from the location dictionary or by
/// transliteration. The state defaults to Maharashtra.
#[utoipa::path(
    post,
    path = "/api/members",
    request_body = MemberRequestDto,
    responses(
        (status = 201, description = "Member created", body = ApiResponse<MemberResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "members"
)]
pub async fn create_member(
    State(service): State<Arc<MemberService>>,
    AppJson(payload): AppJson<MemberRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<MemberResponseDto>>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let member = service.create(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(member.into()),
            Some("सदस्य यशस्वीरित्या जोडला (Member added)".to_string()),
            None,
        )),
    ))
}

/// Edit a member; only provided fields are overwritten
#[utoipa::path(
    put,
    path = "/api/members/{id}",
    params(
        ("id" = Uuid, Path, description = "Member ID")
    ),
    request_body = MemberRequestDto,
    responses(
        (status = 200, description = "Member updated", body = ApiResponse<MemberResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Member not found")
    ),
    tag = "members"
)]
pub async fn update_member(
    State(service): State<Arc<MemberService>>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<MemberRequestDto>,
) -> Result<Json<ApiResponse<MemberResponseDto>>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let member = service.update(id, &payload).await?;
    Ok(Json(ApiResponse::success(
        Some(member.into()),
        Some("सदस्य माहिती अद्यतनित केली (Member updated)".to_string()),
        None,
    )))
}

/// Soft-delete a member
#[utoipa::path(
    delete,
    path = "/api/members/{id}",
    params(
        ("id" = Uuid, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member moved to deleted items", body = ApiResponse<MemberResponseDto>),
        (status = 404, description = "Member not found")
    ),
    tag = "members"
)]
pub async fn delete_member(
    State(service): State<Arc<MemberService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MemberResponseDto>>> {
    let member = service.soft_delete(id).await?;
    Ok(Json(ApiResponse::success(
        Some(member.into()),
        Some("सदस्य हटवला (Member deleted)".to_string()),
        None,
    )))
}

/// Restore a soft-deleted member
#[utoipa::path(
    post,
    path = "/api/members/{id}/restore",
    params(
        ("id" = Uuid, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member restored", body = ApiResponse<MemberResponseDto>),
        (status = 404, description = "Member not found")
    ),
    tag = "members"
)]
pub async fn restore_member(
    State(service): State<Arc<MemberService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MemberResponseDto>>> {
    let member = service.restore(id).await?;
    Ok(Json(ApiResponse::success(
        Some(member.into()),
        Some("सदस्य पुनर्संचयित केला (Member restored)".to_string()),
        None,
    )))
}
