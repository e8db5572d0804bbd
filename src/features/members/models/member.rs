use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Member document as stored.
///
/// Every place and free-text field has a parallel `_marathi` value; the
/// Marathi value is what exports display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    pub full_name: String,
    pub full_name_marathi: Option<String>,
    pub mobile: Option<String>,
    pub joining_date: Option<NaiveDate>,
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
}
