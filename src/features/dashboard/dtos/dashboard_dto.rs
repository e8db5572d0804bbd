use serde::Serialize;
use utoipa::ToSchema;

use crate::features::members::dtos::MemberResponseDto;
use crate::features::programs::dtos::ProgramResponseDto;

/// Home page figures
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryDto {
    pub total_members: usize,
    pub total_programs: usize,
    pub total_collectors: usize,
    /// Latest joiners, newest first
    pub recent_members: Vec<MemberResponseDto>,
    /// Next programs, soonest first
    pub upcoming_programs: Vec<ProgramResponseDto>,
}
