use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::programs::models::Program;
use crate::modules::document_store::Record;
use crate::shared::validation::{empty_as_none, optional_date};

/// Program form fields.
///
/// Sent as the text parts of a multipart form; an optional `image` file
/// part replaces `imageUrl`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgramRequestDto {
    #[validate(length(max = 300, message = "Title must not exceed 300 characters"))]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub title_marathi: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description_marathi: Option<String>,
    #[serde(default, deserialize_with = "optional_date")]
    #[schema(value_type = Option<String>, format = Date, example = "2024-08-15")]
    pub event_date: Option<NaiveDate>,
    #[validate(length(max = 20, message = "Event time must not exceed 20 characters"))]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub event_time: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub location_marathi: Option<String>,
    #[validate(url(message = "Invalid image URL"))]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image_url: Option<String>,
}

fn overwrite<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        target.clone_from(value);
    }
}

impl ProgramRequestDto {
    pub fn apply_to(&self, program: &mut Program) {
        if let Some(title) = &self.title {
            program.title.clone_from(title);
        }
        overwrite(&mut program.title_marathi, &self.title_marathi);
        overwrite(&mut program.description, &self.description);
        overwrite(&mut program.description_marathi, &self.description_marathi);
        overwrite(&mut program.event_date, &self.event_date);
        overwrite(&mut program.event_time, &self.event_time);
        overwrite(&mut program.location, &self.location);
        overwrite(&mut program.location_marathi, &self.location_marathi);
        overwrite(&mut program.image_url, &self.image_url);
    }
}

/// Multipart form for Swagger UI; the handlers read the parts directly
#[derive(Debug, ToSchema)]
#[schema(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct ProgramFormDto {
    pub title: Option<String>,
    pub title_marathi: Option<String>,
    pub description: Option<String>,
    pub description_marathi: Option<String>,
    #[schema(example = "2024-08-15")]
    pub event_date: Option<String>,
    #[schema(example = "10:30")]
    pub event_time: Option<String>,
    pub location: Option<String>,
    pub location_marathi: Option<String>,
    pub image_url: Option<String>,
    /// JPG, PNG, GIF or WEBP, at most 15 MB
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgramResponseDto {
    pub id: Uuid,
    pub title: String,
    pub title_marathi: Option<String>,
    pub description: Option<String>,
    pub description_marathi: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub event_date: Option<NaiveDate>,
    pub event_time: Option<String>,
    pub location: Option<String>,
    pub location_marathi: Option<String>,
    pub image_url: Option<String>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Record<Program>> for ProgramResponseDto {
    fn from(record: Record<Program>) -> Self {
        let p = record.data;
        Self {
            id: record.id,
            title: p.title,
            title_marathi: p.title_marathi,
            description: p.description,
            description_marathi: p.description_marathi,
            event_date: p.event_date,
            event_time: p.event_time,
            location: p.location,
            location_marathi: p.location_marathi,
            image_url: p.image_url,
            is_deleted: record.is_deleted,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
