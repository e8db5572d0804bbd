use std::sync::Arc;

use chrono::NaiveDate;

use crate::core::error::Result;
use crate::features::collectors::CollectorService;
use crate::features::dashboard::dtos::DashboardSummaryDto;
use crate::features::members::models::MemberFilter;
use crate::features::members::MemberService;
use crate::features::programs::ProgramService;

const RECENT_MEMBERS: usize = 5;
const UPCOMING_PROGRAMS: usize = 5;

/// Read-only aggregation over the three registries
pub struct DashboardService {
    members: Arc<MemberService>,
    programs: Arc<ProgramService>,
    collectors: Arc<CollectorService>,
}

impl DashboardService {
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

    pub async fn summary(&self, today: NaiveDate) -> Result<DashboardSummaryDto> {
        let member_filter = MemberFilter::default();
        let (members, programs, collectors) = tokio::try_join!(
            self.members.list(&member_filter),
            self.programs.list(),
            self.collectors.list(),
        )?;

        let total_members = members.len();
        let total_programs = programs.len();
        let total_collectors = collectors.len();

        // Undated members sort last
        let mut recent_members = members;
        recent_members.sort_by(|a, b| b.data.joining_date.cmp(&a.data.joining_date));
        recent_members.truncate(RECENT_MEMBERS);

        let upcoming_programs = self.programs.upcoming(today, UPCOMING_PROGRAMS).await?;

        tracing::debug!(
            "Dashboard: {} members, {} programs, {} collectors",
            total_members,
            total_programs,
            total_collectors
        );

        Ok(DashboardSummaryDto {
            total_members,
            total_programs,
            total_collectors,
            recent_members: recent_members.into_iter().map(Into::into).collect(),
            upcoming_programs: upcoming_programs.into_iter().map(Into::into).collect(),
        })
    }
}
