use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::collectors::dtos::CollectorResponseDto;
use crate::features::members::dtos::MemberResponseDto;
use crate::features::programs::dtos::ProgramResponseDto;

/// Collection a deleted record belongs to, as used in restore paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Members,
    Programs,
    Collectors,
}

/// Soft-deleted records of every collection
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletedItemsDto {
    pub members: Vec<MemberResponseDto>,
    pub programs: Vec<ProgramResponseDto>,
    pub collectors: Vec<CollectorResponseDto>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestoredItemDto {
    pub kind: RecordKind,
    pub id: Uuid,
}
