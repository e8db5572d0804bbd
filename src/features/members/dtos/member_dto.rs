use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::members::models::{Member, MemberFilter};
use crate::modules::document_store::Record;
use crate::shared::validation::{empty_as_none, optional_date};

/// Request body for creating or editing a member.
///
/// Only provided fields are written on edit. Marathi fields left out are
/// filled by transliteration when their English counterpart is present.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberRequestDto {
    #[validate(length(max = 200, message = "Full name must not exceed 200 characters"))]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub full_name_marathi: Option<String>,

    #[validate(regex(
        path = "*crate::shared::validation::MOBILE_REGEX",
        message = "अवैध मोबाईल नंबर (Invalid mobile number)"
    ))]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub mobile: Option<String>,

    #[serde(default, deserialize_with = "optional_date")]
    #[schema(value_type = Option<String>, format = Date, example = "2024-03-15")]
    pub joining_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "optional_date")]
    #[schema(value_type = Option<String>, format = Date)]
    pub date_of_birth: Option<NaiveDate>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub address_line1: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub address_line1_marathi: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub address_line2: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub address_line2_marathi: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub state_marathi: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub district: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub district_marathi: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub taluka: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub taluka_marathi: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub city_marathi: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub post_office: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub post_office_marathi: Option<String>,

    #[validate(regex(
        path = "*crate::shared::validation::PINCODE_REGEX",
        message = "अवैध पिनकोड (Pincode must be 6 digits)"
    ))]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub pincode: Option<String>,
}

fn overwrite<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        target.clone_from(value);
    }
}

impl MemberRequestDto {
    /// Copy every provided field onto `member`
    pub fn apply_to(&self, member: &mut Member) {
        if let Some(full_name) = &self.full_name {
            member.full_name.clone_from(full_name);
        }
        overwrite(&mut member.full_name_marathi, &self.full_name_marathi);
        overwrite(&mut member.mobile, &self.mobile);
        overwrite(&mut member.joining_date, &self.joining_date);
        overwrite(&mut member.date_of_birth, &self.date_of_birth);
        overwrite(&mut member.address_line1, &self.address_line1);
        overwrite(&mut member.address_line1_marathi, &self.address_line1_marathi);
        overwrite(&mut member.address_line2, &self.address_line2);
        overwrite(&mut member.address_line2_marathi, &self.address_line2_marathi);
        overwrite(&mut member.state, &self.state);
        overwrite(&mut member.state_marathi, &self.state_marathi);
        overwrite(&mut member.district, &self.district);
        overwrite(&mut member.district_marathi, &self.district_marathi);
        overwrite(&mut member.taluka, &self.taluka);
        overwrite(&mut member.taluka_marathi, &self.taluka_marathi);
        overwrite(&mut member.city, &self.city);
        overwrite(&mut member.city_marathi, &self.city_marathi);
        overwrite(&mut member.post_office, &self.post_office);
        overwrite(&mut member.post_office_marathi, &self.post_office_marathi);
        overwrite(&mut member.pincode, &self.pincode);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponseDto {
    pub id: Uuid,
    pub full_name: String,
    pub full_name_marathi: Option<String>,
    pub mobile: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub joining_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = Date)]
    pub date_of_birth: Option<NaiveDate>,
    pub address_line1: Option<String>,
    pub address_line1_marathi: Option<String>,
    pub address_line2: Option<String>,
    pub address_line2_marathi: Option<String>,
    pub state: Option<String>,
    pub state_marathi: Option<String>,
    pub district: Option<String>,
    pub district_marathi: Option<String>,
    pub taluka: Option<String>,
    pub taluka_marathi: Option<String>,
    pub city: Option<String>,
    pub city_marathi: Option<String>,
    pub post_office: Option<String>,
    pub post_office_marathi: Option<String>,
    pub pincode: Option<String>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Record<Member>> for MemberResponseDto {
    fn from(record: Record<Member>) -> Self {
        let m = record.data;
        Self {
            id: record.id,
            full_name: m.full_name,
            full_name_marathi: m.full_name_marathi,
            mobile: m.mobile,
            joining_date: m.joining_date,
            date_of_birth: m.date_of_birth,
            address_line1: m.address_line1,
            address_line1_marathi: m.address_line1_marathi,
            address_line2: m.address_line2,
            address_line2_marathi: m.address_line2_marathi,
            state: m.state,
            state_marathi: m.state_marathi,
            district: m.district,
            district_marathi: m.district_marathi,
            taluka: m.taluka,
            taluka_marathi: m.taluka_marathi,
            city: m.city,
            city_marathi: m.city_marathi,
            post_office: m.post_office,
            post_office_marathi: m.post_office_marathi,
            pincode: m.pincode,
            is_deleted: record.is_deleted,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Query parameters for listing and exporting members
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct MemberListQuery {
    /// District (English), exact match
    #[param(example = "Pune")]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub district: Option<String>,
    /// Taluka (English), exact match
    #[serde(default, deserialize_with = "empty_as_none")]
    pub taluka: Option<String>,
    /// Village/city (English), exact match
    #[serde(default, deserialize_with = "empty_as_none")]
    pub city: Option<String>,
    /// Earliest joining date, inclusive (YYYY-MM-DD)
    #[param(value_type = Option<String>, format = Date)]
    #[serde(default, deserialize_with = "optional_date")]
    pub from_date: Option<NaiveDate>,
    /// Latest joining date, inclusive (YYYY-MM-DD)
    #[param(value_type = Option<String>, format = Date)]
    #[serde(default, deserialize_with = "optional_date")]
    pub to_date: Option<NaiveDate>,
}

impl From<MemberListQuery> for MemberFilter {
    fn from(query: MemberListQuery) -> Self {
        Self {
            district: query.district,
            taluka: query.taluka,
            city: query.city,
            from_date: query.from_date,
            to_date: query.to_date,
        }
    }
}
