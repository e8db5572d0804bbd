use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The document store rejected or could not serve the request
    #[error("Store error: {0}")]
    Store(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    /// Image refused before any transfer was attempted (size or type)
    #[error("Upload rejected: {0}")]
    UploadRejected(String),

    /// Transfer failed or timed out; the stored object state is unknown
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Remediation hint attached to store failures
const STORE_HINT: &str =
    "डेटाबेस उपलब्ध नाही. कृपया डेटाबेस कनेक्शन आणि परवानग्या तपासा (check database availability and access permissions)";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    STORE_HINT.to_string(),
                    None,
                )
            }
            AppError::Store(ref msg) => {
                tracing::error!("Store error: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    STORE_HINT.to_string(),
                    Some(vec![msg.clone()]),
                )
            }
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
            AppError::Validation(ref msg) => (
                StatusCode::BAD_REQUEST,
                msg.clone(),
                Some(vec![msg.clone()]),
            ),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::UploadRejected(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::UploadFailed(ref msg) => {
                tracing::error!("Upload failed: {}", msg);
                (StatusCode::BAD_GATEWAY, msg.clone(), None)
            }
            AppError::ExternalServiceError(ref msg) => {
                tracing::error!("External service error: {}", msg);
                (StatusCode::BAD_GATEWAY, msg.clone(), None)
            }
            AppError::Spreadsheet(ref e) => {
                tracing::error!("Spreadsheet error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to build spreadsheet".to_string(),
                    None,
                )
            }
            AppError::Template(ref e) => {
                tracing::error!("Template error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to render document".to_string(),
                    None,
                )
            }
        };

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
