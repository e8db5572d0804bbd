use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::collectors::models::{AssignedLocation, Collector};
use crate::modules::document_store::Record;
use crate::shared::validation::empty_as_none;

/// Working area as entered, in English
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationAssignmentDto {
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub taluka: String,
    #[serde(default)]
    pub villages: Vec<String>,
}

/// Create or replace a collector
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectorRequestDto {
    /// English name
    #[validate(length(max = 200, message = "Name must not exceed 200 characters"))]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub name: Option<String>,
    /// Marathi name; transliterated from `name` when omitted
    #[serde(default, deserialize_with = "empty_as_none")]
    pub name_marathi: Option<String>,

    #[validate(regex(
        path = "*crate::shared::validation::MOBILE_REGEX",
        message = "अवैध मोबाईल नंबर (Invalid mobile number)"
    ))]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub mobile: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub address_marathi: Option<String>,

    #[serde(default)]
    pub assigned_locations: Vec<LocationAssignmentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignedLocationDto {
    pub district: String,
    pub district_en: String,
    pub taluka: String,
    pub taluka_en: String,
    pub villages: Vec<String>,
    pub villages_en: Vec<String>,
}

impl From<AssignedLocation> for AssignedLocationDto {
    fn from(location: AssignedLocation) -> Self {
        Self {
            district: location.district,
            district_en: location.district_en,
            taluka: location.taluka,
            taluka_en: location.taluka_en,
            villages: location.villages,
            villages_en: location.villages_en,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectorResponseDto {
    pub id: Uuid,
    /// Marathi display name
    pub name: String,
    pub name_english: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub address_english: Option<String>,
    pub district: Option<String>,
    pub taluka: Option<String>,
    pub assigned_villages: Vec<AssignedLocationDto>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Record<Collector>> for CollectorResponseDto {
    fn from(record: Record<Collector>) -> Self {
        let c = record.data;
        Self {
            id: record.id,
            name: c.name,
            name_english: c.name_english,
            mobile: c.mobile,
            address: c.address,
            address_english: c.address_english,
            district: c.district,
            taluka: c.taluka,
            assigned_villages: c
                .assigned_villages
                .into_iter()
                .map(AssignedLocationDto::from)
                .collect(),
            is_deleted: record.is_deleted,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
