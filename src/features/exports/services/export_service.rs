use std::sync::Arc;

use chrono::NaiveDate;

use super::{collectors_xlsx, member_print_html, member_register_xlsx};
use crate::core::config::ExportConfig;
use crate::core::error::Result;
use crate::features::collectors::models::Collector;
use crate::features::collectors::CollectorService;
use crate::features::exports::models::{collector_rows, register_rows, PrintRow, RegisterRow};
use crate::features::locations::LocationHierarchy;
use crate::features::members::models::{Member, MemberFilter};
use crate::features::members::MemberService;

/// Builds export documents from the currently filtered lists
pub struct ExportService {
    members: Arc<MemberService>,
    collectors: Arc<CollectorService>,
    hierarchy: Arc<LocationHierarchy>,
    config: ExportConfig,
}

impl ExportService {
    pub fn new(
        members: Arc<MemberService>,
        collectors: Arc<CollectorService>,
        hierarchy: Arc<LocationHierarchy>,
        config: ExportConfig,
    ) -> Self {
        Self {
            members,
            collectors,
            hierarchy,
            config,
        }
    }

    async fn filtered_members(&self, filter: &MemberFilter) -> Result<Vec<Member>> {
        Ok(self
            .members
            .list(filter)
            .await?
            .into_iter()
            .map(|record| record.data)
            .collect())
    }

    /// Register lines numbered after filtering
    pub async fn member_register_rows(
        &self,
        filter: &MemberFilter,
    ) -> Result<Vec<RegisterRow>> {
        Ok(register_rows(&self.filtered_members(filter).await?))
    }

    pub async fn members_xlsx(&self, filter: &MemberFilter, today: NaiveDate) -> Result<Vec<u8>> {
        let rows = self.member_register_rows(filter).await?;
        let bytes = member_register_xlsx(&rows, &self.config, today)?;
        tracing::info!("Exported {} members to spreadsheet", rows.len());
        Ok(bytes)
    }

    pub async fn members_print(&self, filter: &MemberFilter, today: NaiveDate) -> Result<String> {
        let members = self.filtered_members(filter).await?;
        let rows: Vec<PrintRow> = members.iter().map(PrintRow::from).collect();
        member_print_html(&rows, &self.config, today)
    }

    pub async fn collectors_xlsx(&self, today: NaiveDate) -> Result<Vec<u8>> {
        let collectors: Vec<Collector> = self
            .collectors
            .list()
            .await?
            .into_iter()
            .map(|record| record.data)
            .collect();
        let bytes = collectors_xlsx(&collector_rows(&collectors, &self.hierarchy), today)?;
        tracing::info!("Exported {} collectors to spreadsheet", collectors.len());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::members::dtos::MemberRequestDto;
    use crate::shared::test_helpers::{
        memory_store, stub_resolver, test_hierarchy, StubTransliterator,
    };

    #[tokio::test]
    async fn test_register_serials_follow_filtered_order() {
        let store = memory_store();
        let resolver = stub_resolver(Arc::new(StubTransliterator::default()));
        let members = Arc::new(MemberService::new(store.clone(), resolver.clone()));
        let collectors = Arc::new(CollectorService::new(store, resolver));

        for (name, district) in [
            ("Anil", "Pune"),
            ("Bharat", "Nashik"),
            ("Chetan", "Pune"),
            ("Dinesh", "Pune"),
        ] {
            members
                .create(&MemberRequestDto {
                    full_name: Some(name.to_string()),
                    full_name_marathi: Some(format!("{} (मराठी)", name)),
                    district: Some(district.to_string()),
                    ..Default::default()
                })
                .await
                .unwrap();
        }
        let service = ExportService::new(
            members,
            collectors,
            test_hierarchy(),
            ExportConfig::default(),
        );

        let filter = MemberFilter {
            district: Some("Pune".to_string()),
            ..Default::default()
        };
        let rows = service.member_register_rows(&filter).await.unwrap();

        let numbered: Vec<(usize, &str)> = rows
            .iter()
            .map(|row| (row.serial, row.name.as_str()))
            .collect();
        assert_eq!(
            numbered,
            vec![
                (1, "Anil (मराठी)"),
                (2, "Chetan (मराठी)"),
                (3, "Dinesh (मराठी)"),
            ]
        );

        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let bytes = service.members_xlsx(&filter, today).await.unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
