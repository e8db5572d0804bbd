use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use super::ImageUploadService;
use crate::core::error::{AppError, Result};
use crate::features::programs::dtos::ProgramRequestDto;
use crate::features::programs::models::{ImageUpload, Program};
use crate::modules::document_store::{
    changed_fields, CollectionSpec, DocumentStore, OrderBy, OrderField, Record,
    SoftDeleteRepository,
};
use crate::shared::constants::PROGRAMS_COLLECTION;

pub const PROGRAMS: CollectionSpec = CollectionSpec {
    name: PROGRAMS_COLLECTION,
    order: OrderBy::desc(OrderField::Data("event_date")),
    not_found: "कार्यक्रम सापडला नाही (Program not found)",
};

const TITLE_REQUIRED: &str = "कृपया शीर्षक प्रविष्ट करा (Please enter title)";
const DATE_REQUIRED: &str = "कृपया तारीख निवडा (Please select date)";

/// Service for programs (events) and their images
pub struct ProgramService {
    repo: SoftDeleteRepository<Program>,
    images: Arc<ImageUploadService>,
}

impl ProgramService {
    pub fn new(store: Arc<dyn DocumentStore>, images: Arc<ImageUploadService>) -> Self {
        Self {
            repo: SoftDeleteRepository::new(store, PROGRAMS),
            images,
        }
    }

    /// Active programs, latest event first
    pub async fn list(&self) -> Result<Vec<Record<Program>>> {
        self.repo.list().await
    }

    /// Programs on or after `today`, soonest first
    pub async fn upcoming(&self, today: NaiveDate, limit: usize) -> Result<Vec<Record<Program>>> {
        let mut programs: Vec<Record<Program>> = self
            .repo
            .list()
            .await?
            .into_iter()
            .filter(|record| record.data.is_upcoming(today))
            .collect();
        programs.sort_by_key(|record| record.data.event_date);
        programs.truncate(limit);
        Ok(programs)
    }

    pub async fn get(&self, id: Uuid) -> Result<Record<Program>> {
        self.repo.get_by_id(id).await
    }

    /// Nothing is stored when the image upload fails
    pub async fn create(
        &self,
        dto: &ProgramRequestDto,
        image: Option<ImageUpload>,
    ) -> Result<Record<Program>> {
        if dto.title.is_none() {
            return Err(AppError::Validation(TITLE_REQUIRED.to_string()));
        }
        if dto.event_date.is_none() {
            return Err(AppError::Validation(DATE_REQUIRED.to_string()));
        }

        let mut program = Program::default();
        dto.apply_to(&mut program);
        if let Some(image) = image {
            program.image_url = Some(self.images.upload(image).await?);
        }

        let record = self.repo.create(&program).await?;
        tracing::info!("Program {} created", record.id);
        Ok(record)
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: &ProgramRequestDto,
        image: Option<ImageUpload>,
    ) -> Result<Record<Program>> {
        let existing = self.repo.get_by_id(id).await?;

        let mut program = existing.data.clone();
        dto.apply_to(&mut program);
        if let Some(image) = image {
            program.image_url = Some(self.images.upload(image).await?);
        }

        let patch = changed_fields(&existing.data, &program)?;
        self.repo.update(id, &patch).await
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<Record<Program>> {
        self.repo.soft_delete(id).await
    }

    pub async fn restore(&self, id: Uuid) -> Result<Record<Program>> {
        self.repo.restore(id).await
    }

    pub async fn list_deleted(&self) -> Vec<Record<Program>> {
        self.repo.list_deleted().await
    }
}
