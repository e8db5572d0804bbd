use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Local;

use crate::core::error::Result;
use crate::features::dashboard::dtos::DashboardSummaryDto;
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

/// Get dashboard summary
#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = ApiResponse<DashboardSummaryDto>),
        (status = 503, description = "Store unavailable")
    ),
    tag = "dashboard"
)]
pub async fn get_summary(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<DashboardSummaryDto>>> {
    let summary = service.summary(Local::now().date_naive()).await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}
