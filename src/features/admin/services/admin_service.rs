use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::Result;
use crate::features::admin::dtos::{DeletedItemsDto, RecordKind, RestoredItemDto};
use crate::features::collectors::CollectorService;
use crate::features::members::MemberService;
use crate::features::programs::ProgramService;

/// Service for the deleted-items view
pub struct AdminService {
    members: Arc<MemberService>,
    programs: Arc<ProgramService>,
    collectors: Arc<CollectorService>,
}

impl AdminService {
    pub fn new(
        members: Arc<MemberService>,
        programs: Arc<ProgramService>,
        collectors: Arc<CollectorService>,
    ) -> Self {
        Self {
            members,
            programs,
            collectors,
        }
    }

    /// Soft-deleted records of all three collections.
    ///
    /// A collection that cannot be read contributes an empty list.
    pub async fn deleted_items(&self) -> DeletedItemsDto {
        let (members, programs, collectors) = tokio::join!(
            self.members.list_deleted(),
            self.programs.list_deleted(),
            self.collectors.list_deleted(),
        );

        DeletedItemsDto {
            members: members.into_iter().map(Into::into).collect(),
            programs: programs.into_iter().map(Into::into).collect(),
            collectors: collectors.into_iter().map(Into::into).collect(),
        }
    }

    pub async fn restore(&self, kind: RecordKind, id: Uuid) -> Result<RestoredItemDto> {
        match kind {
            RecordKind::Members => self.members.restore(id).await.map(|_| ())?,
            RecordKind::Programs => self.programs.restore(id).await.map(|_| ())?,
            RecordKind::Collectors => self.collectors.restore(id).await.map(|_| ())?,
        }
        tracing::info!("Restored {:?} record {}", kind, id);
        Ok(RestoredItemDto { kind, id })
    }
}
