use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer};

lazy_static! {
    /// Indian mobile number, optionally prefixed with +91 or 0
    /// - Valid: "9876543210", "+919876543210", "09876543210"
    /// - Invalid: "12345", "98765 43210", "5876543210"
    pub static ref MOBILE_REGEX: Regex = Regex::new(r"^(?:\+91|0)?[6-9][0-9]{9}$").unwrap();

    /// Six digit Indian postal code, first digit non-zero
    pub static ref PINCODE_REGEX: Regex = Regex::new(r"^[1-9][0-9]{5}$").unwrap();
}

/// Deserialize an optional string, treating blank input as absent.
///
/// Form clients send `""` for untouched inputs.
pub fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}

/// Optional `YYYY-MM-DD` date where blank input counts as absent
pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match empty_as_none(deserializer)? {
        Some(value) => NaiveDate::parse_from_str(&value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                serde::de::Error::custom(format!(
                    "invalid date '{}', expected YYYY-MM-DD",
                    value
                ))
            }),
        None => Ok(None),
    }
}
