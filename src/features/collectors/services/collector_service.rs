use std::sync::Arc;

use futures::future::join_all;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::collectors::dtos::{CollectorRequestDto, LocationAssignmentDto};
use crate::features::collectors::models::{AssignedLocation, Collector};
use crate::features::locations::MarathiResolver;
use crate::modules::document_store::{
    CollectionSpec, DocumentStore, OrderBy, OrderField, Record, SoftDeleteRepository,
};
use crate::shared::constants::COLLECTORS_COLLECTION;

pub const COLLECTORS: CollectionSpec = CollectionSpec {
    name: COLLECTORS_COLLECTION,
    order: OrderBy::desc(OrderField::CreatedAt),
    not_found: "संकलक सापडला नाही (Collector not found)",
};

const NAME_REQUIRED: &str = "कृपया नाव प्रविष्ट करा (Please enter name)";
const LOCATION_REQUIRED: &str = "कृपया कमीतकमी एक कार्यक्षेत्र जोडा (Add at least one working area)";
const DISTRICT_TALUKA_REQUIRED: &str = "कृपया जिल्हा आणि तालुका निवडा (Select district and taluka)";
const VILLAGE_REQUIRED: &str = "कृपया निदान एक गाव निवडा (Select at least one village)";

/// Reject a payload before anything is resolved or written
fn check_request(dto: &CollectorRequestDto) -> Result<()> {
    if dto.name.is_none() && dto.name_marathi.is_none() {
        return Err(AppError::Validation(NAME_REQUIRED.to_string()));
    }
    if dto.assigned_locations.is_empty() {
        return Err(AppError::Validation(LOCATION_REQUIRED.to_string()));
    }
    for location in &dto.assigned_locations {
        if location.district.trim().is_empty() || location.taluka.trim().is_empty() {
            return Err(AppError::Validation(DISTRICT_TALUKA_REQUIRED.to_string()));
        }
        if location.villages.iter().all(|v| v.trim().is_empty()) {
            return Err(AppError::Validation(VILLAGE_REQUIRED.to_string()));
        }
    }
    Ok(())
}

/// Service for collectors and their working areas
pub struct CollectorService {
    repo: SoftDeleteRepository<Collector>,
    resolver: Arc<MarathiResolver>,
}

impl CollectorService {
    pub fn new(store: Arc<dyn DocumentStore>, resolver: Arc<MarathiResolver>) -> Self {
        Self {
            repo: SoftDeleteRepository::new(store, COLLECTORS),
            resolver,
        }
    }

    /// Active collectors, newest first
    pub async fn list(&self) -> Result<Vec<Record<Collector>>> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Record<Collector>> {
        self.repo.get_by_id(id).await
    }

    pub async fn create(&self, dto: &CollectorRequestDto) -> Result<Record<Collector>> {
        check_request(dto)?;
        let collector = self.build(dto).await;

        let record = self.repo.create(&collector).await?;
        tracing::info!(
            "Collector {} created with {} working areas",
            record.id,
            record.data.assigned_villages.len()
        );
        Ok(record)
    }

    /// Replace every collector field with the submitted form
    pub async fn update(&self, id: Uuid, dto: &CollectorRequestDto) -> Result<Record<Collector>> {
        check_request(dto)?;
        self.repo.get_by_id(id).await?;
        let collector = self.build(dto).await;
        self.repo.update(id, &collector).await
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<Record<Collector>> {
        self.repo.soft_delete(id).await
    }

    pub async fn restore(&self, id: Uuid) -> Result<Record<Collector>> {
        self.repo.restore(id).await
    }

    pub async fn list_deleted(&self) -> Vec<Record<Collector>> {
        self.repo.list_deleted().await
    }

    async fn build(&self, dto: &CollectorRequestDto) -> Collector {
        let name = match (&dto.name_marathi, &dto.name) {
            (Some(marathi), _) => marathi.clone(),
            (None, Some(english)) => self.resolver.text(english).await,
            (None, None) => String::new(),
        };
        let address = match (&dto.address_marathi, &dto.address) {
            (Some(marathi), _) => Some(marathi.clone()),
            (None, Some(english)) => Some(self.resolver.text(english).await),
            (None, None) => None,
        };

        let assigned_villages =
            join_all(dto.assigned_locations.iter().map(|l| self.resolve_location(l))).await;

        let mut collector = Collector {
            name,
            name_english: dto.name.clone(),
            mobile: dto.mobile.clone(),
            address,
            address_english: dto.address.clone(),
            district: None,
            taluka: None,
            assigned_villages,
        };
        collector.sync_primary_location();
        collector
    }

    async fn resolve_location(&self, location: &LocationAssignmentDto) -> AssignedLocation {
        let district_en = location.district.trim().to_string();
        let taluka_en = location.taluka.trim().to_string();
        let villages_en: Vec<String> = location
            .villages
            .iter()
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();

        let (district, taluka, villages) = tokio::join!(
            self.resolver.place_name(&district_en),
            self.resolver.place_name(&taluka_en),
            self.resolver.place_names(&villages_en),
        );

        AssignedLocation {
            district,
            district_en,
            taluka,
            taluka_en,
            villages,
            villages_en,
        }
    }
}
