use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
};
use chrono::Local;

use crate::core::error::Result;
use crate::features::exports::services::{ExportService, XLSX_CONTENT_TYPE};
use crate::features::members::dtos::MemberListQuery;

fn xlsx_attachment(bytes: Vec<u8>, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    )
        .into_response()
}

/// Member register spreadsheet
///
/// Applies the same filters as the member list.
#[utoipa::path(
    get,
    path = "/api/exports/members.xlsx",
    params(MemberListQuery),
    responses(
        (status = 200, description = "XLSX workbook with the sheet \"Register\"", content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
    ),
    tag = "exports"
)]
pub async fn export_members_xlsx(
    State(service): State<Arc<ExportService>>,
    Query(query): Query<MemberListQuery>,
) -> Result<Response> {
    let bytes = service
        .members_xlsx(&query.into(), Local::now().date_naive())
        .await?;
    Ok(xlsx_attachment(bytes, "members_list.xlsx"))
}

/// Printable member list (HTML that opens the print dialog)
#[utoipa::path(
    get,
    path = "/api/exports/members/print",
    params(MemberListQuery),
    responses(
        (status = 200, description = "HTML document", content_type = "text/html")
    ),
    tag = "exports"
)]
pub async fn print_members(
    State(service): State<Arc<ExportService>>,
    Query(query): Query<MemberListQuery>,
) -> Result<Html<String>> {
    let html = service
        .members_print(&query.into(), Local::now().date_naive())
        .await?;
    Ok(Html(html))
}

/// Collectors spreadsheet
#[utoipa::path(
    get,
    path = "/api/exports/collectors.xlsx",
    responses(
        (status = 200, description = "XLSX workbook with the sheet \"Collectors\"", content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
    ),
    tag = "exports"
)]
pub async fn export_collectors_xlsx(
    State(service): State<Arc<ExportService>>,
) -> Result<Response> {
    let bytes = service.collectors_xlsx(Local::now().date_naive()).await?;
    Ok(xlsx_attachment(bytes, "collectors_list.xlsx"))
}
