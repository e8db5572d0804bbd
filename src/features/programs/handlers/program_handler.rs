use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::programs::dtos::{ProgramFormDto, ProgramRequestDto, ProgramResponseDto};
use crate::features::programs::models::ImageUpload;
use crate::features::programs::services::{ProgramService, IMAGE_TOO_LARGE};
use crate::shared::types::{ApiResponse, Meta};

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::UploadRejected(IMAGE_TOO_LARGE.to_string());
    }
    debug!("Failed to read multipart data: {}", e);
    AppError::BadRequest(format!("Failed to read multipart data: {}", e))
}

/// Split a program form into its text fields and optional `image` file
async fn read_program_form(
    mut multipart: Multipart,
) -> Result<(ProgramRequestDto, Option<ImageUpload>)> {
    let mut fields = Map::new();
    let mut image = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();

        if name == "image" {
            let content_type = field
                .content_type()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());
            let file_name = field.file_name().unwrap_or("image").to_string();
            let data = field.bytes().await.map_err(multipart_error)?;

            // An empty file part means no new image was chosen
            if !data.is_empty() {
                image = Some(ImageUpload {
                    data: data.to_vec(),
                    file_name,
                    content_type,
                });
            }
            continue;
        }

        let text = field.text().await.map_err(multipart_error)?;
        fields.insert(name, Value::String(text));
    }

    let dto: ProgramRequestDto = serde_json::from_value(Value::Object(fields))
        .map_err(|e| AppError::BadRequest(format!("Invalid program form: {}", e)))?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok((dto, image))
}

/// List active programs, latest event first
#[utoipa::path(
    get,
    path = "/api/programs",
    responses(
        (status = 200, description = "Active programs", body = ApiResponse<Vec<ProgramResponseDto>>)
    ),
    tag = "programs"
)]
pub async fn list_programs(
    State(service): State<Arc<ProgramService>>,
) -> Result<Json<ApiResponse<Vec<ProgramResponseDto>>>> {
    let programs: Vec<ProgramResponseDto> = service
        .list()
        .await?
        .into_iter()
        .map(ProgramResponseDto::from)
        .collect();
    let total = programs.len();

    Ok(Json(ApiResponse::success(
        Some(programs),
        None,
        Some(Meta::total(total)),
    )))
}

#[utoipa::path(
    get,
    path = "/api/programs/{id}",
    params(
        ("id" = Uuid, Path, description = "Program ID")
    ),
    responses(
        (status = 200, description = "Program found", body = ApiResponse<ProgramResponseDto>),
        (status = 404, description = "Program not found")
    ),
    tag = "programs"
)]
pub async fn get_program(
    State(service): State<Arc<ProgramService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProgramResponseDto>>> {
    let program = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(program.into()), None, None)))
}

/// Create a program
///
/// Accepts multipart/form-data with the program fields as text parts and an
/// optional `image` file (JPG, PNG, GIF or WEBP, at most 15 MB). When the
/// image cannot be stored the program is not saved.
#[utoipa::path(
    post,
    path = "/api/programs",
    request_body(
        content = ProgramFormDto,
        content_type = "multipart/form-data",
        description = "Program fields with an optional image file",
    ),
    responses(
        (status = 201, description = "Program created", body = ApiResponse<ProgramResponseDto>),
        (status = 400, description = "Missing title/date or image rejected"),
        (status = 502, description = "Image upload failed or timed out")
    ),
    tag = "programs"
)]
pub async fn create_program(
    State(service): State<Arc<ProgramService>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<ProgramResponseDto>>)> {
    let (dto, image) = read_program_form(multipart).await?;

    let program = service.create(&dto, image).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(program.into()),
            Some("कार्यक्रम यशस्वीरित्या जोडला! (Program added)".to_string()),
            None,
        )),
    ))
}

/// Edit a program; only provided fields are overwritten
#[utoipa::path(
    put,
    path = "/api/programs/{id}",
    params(
        ("id" = Uuid, Path, description = "Program ID")
    ),
    request_body(
        content = ProgramFormDto,
        content_type = "multipart/form-data",
        description = "Program fields with an optional replacement image",
    ),
    responses(
        (status = 200, description = "Program updated", body = ApiResponse<ProgramResponseDto>),
        (status = 400, description = "Invalid form or image rejected"),
        (status = 404, description = "Program not found"),
        (status = 502, description = "Image upload failed or timed out")
    ),
    tag = "programs"
)]
pub async fn update_program(
    State(service): State<Arc<ProgramService>>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<ProgramResponseDto>>> {
    let (dto, image) = read_program_form(multipart).await?;

    let program = service.update(id, &dto, image).await?;
    Ok(Json(ApiResponse::success(
        Some(program.into()),
        Some("कार्यक्रम यशस्वीरित्या अपडेट केला! (Program updated)".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/programs/{id}",
    params(
        ("id" = Uuid, Path, description = "Program ID")
    ),
    responses(
        (status = 200, description = "Program moved to deleted items", body = ApiResponse<ProgramResponseDto>),
        (status = 404, description = "Program not found")
    ),
    tag = "programs"
)]
pub async fn delete_program(
    State(service): State<Arc<ProgramService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProgramResponseDto>>> {
    let program = service.soft_delete(id).await?;
    Ok(Json(ApiResponse::success(
        Some(program.into()),
        Some("कार्यक्रम हटवला (Program deleted)".to_string()),
        None,
    )))
}

#[utoipa::path(
    post,
    path = "/api/programs/{id}/restore",
    params(
        ("id" = Uuid, Path, description = "Program ID")
    ),
    responses(
        (status = 200, description = "Program restored", body = ApiResponse<ProgramResponseDto>),
        (status = 404, description = "Program not found")
    ),
    tag = "programs"
)]
pub async fn restore_program(
    State(service): State<Arc<ProgramService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProgramResponseDto>>> {
    let program = service.restore(id).await?;
    Ok(Json(ApiResponse::success(
        Some(program.into()),
        Some("कार्यक्रम पुनर्संचयित केला (Program restored)".to_string()),
        None,
    )))
}
