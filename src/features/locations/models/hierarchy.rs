use std::collections::HashMap;
use std::fs;

use serde::Deserialize;

use crate::core::config::LocationDataConfig;
use crate::core::error::{AppError, Result};

/// Entry of `address_data.json`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct District {
    #[serde(rename = "district")]
    pub name: String,
    #[serde(default)]
    pub talukas: Vec<Taluka>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Taluka {
    pub name: String,
    #[serde(rename = "cities", default)]
    pub villages: Vec<String>,
}

/// Immutable District -> Taluka -> Village lookup plus the English to
/// Marathi place name dictionary.
///
/// Lookups are scoped by parent; the same taluka or village name may
/// appear under several districts.
#[derive(Debug, Clone, Default)]
pub struct LocationHierarchy {
    districts: Vec<District>,
    marathi_names: HashMap<String, String>,
}

impl LocationHierarchy {
    pub fn new(districts: Vec<District>, marathi_names: HashMap<String, String>) -> Self {
        Self {
            districts,
            marathi_names,
        }
    }

    pub fn from_json(address_data: &str, marathi_mapping: &str) -> Result<Self> {
        let districts: Vec<District> = serde_json::from_str(address_data)
            .map_err(|e| AppError::Internal(format!("Invalid address data: {}", e)))?;
        let marathi_names: HashMap<String, String> = serde_json::from_str(marathi_mapping)
            .map_err(|e| AppError::Internal(format!("Invalid Marathi location mapping: {}", e)))?;

        Ok(Self::new(districts, marathi_names))
    }

    /// Read both data files from disk
    pub fn load(config: &LocationDataConfig) -> Result<Self> {
        let address_data = fs::read_to_string(&config.address_data_path).map_err(|e| {
            AppError::Internal(format!(
                "Failed to read {}: {}",
                config.address_data_path, e
            ))
        })?;
        let marathi_mapping = fs::read_to_string(&config.marathi_mapping_path).map_err(|e| {
            AppError::Internal(format!(
                "Failed to read {}: {}",
                config.marathi_mapping_path, e
            ))
        })?;

        let hierarchy = Self::from_json(&address_data, &marathi_mapping)?;
        tracing::info!(
            "Loaded {} districts and {} Marathi place names",
            hierarchy.districts.len(),
            hierarchy.marathi_names.len()
        );
        Ok(hierarchy)
    }

    /// District names in file order
    pub fn districts(&self) -> Vec<&str> {
        self.districts.iter().map(|d| d.name.as_str()).collect()
    }

    fn district(&self, district: &str) -> Option<&District> {
        self.districts.iter().find(|d| d.name == district)
    }

    /// Talukas of `district` in file order; empty when unknown
    pub fn talukas_of(&self, district: &str) -> Vec<&str> {
        self.district(district)
            .map(|d| d.talukas.iter().map(|t| t.name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Villages of `taluka` within `district`; empty when either is unknown
    pub fn villages_of(&self, district: &str, taluka: &str) -> &[String] {
        self.district(district)
            .and_then(|d| d.talukas.iter().find(|t| t.name == taluka))
            .map(|t| t.villages.as_slice())
            .unwrap_or(&[])
    }

    pub fn marathi_name(&self, english: &str) -> Option<&str> {
        self.marathi_names.get(english.trim()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const ADDRESS_DATA: &str = include_str!("../../../../data/address_data.json");
    const MARATHI_MAPPING: &str = include_str!("../../../../data/marathi_locations.json");

    fn hierarchy() -> LocationHierarchy {
        LocationHierarchy::from_json(ADDRESS_DATA, MARATHI_MAPPING).unwrap()
    }

    #[test]
    fn test_lookups_match_embedded_file_order() {
        let hierarchy = hierarchy();
        let raw: Value = serde_json::from_str(ADDRESS_DATA).unwrap();
        let raw_districts = raw.as_array().unwrap();

        assert_eq!(hierarchy.districts().len(), raw_districts.len());

        for raw_district in raw_districts {
            let district = raw_district["district"].as_str().unwrap();
            let raw_talukas = raw_district["talukas"].as_array().unwrap();
            let expected: Vec<&str> = raw_talukas
                .iter()
                .map(|t| t["name"].as_str().unwrap())
                .collect();
            assert_eq!(hierarchy.talukas_of(district), expected);

            for raw_taluka in raw_talukas {
                let taluka = raw_taluka["name"].as_str().unwrap();
                let expected: Vec<&str> = raw_taluka["cities"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|v| v.as_str().unwrap())
                    .collect();
                assert_eq!(hierarchy.villages_of(district, taluka), expected.as_slice());
            }
        }
    }

    #[test]
    fn test_unknown_or_empty_parents_yield_empty() {
        let hierarchy = hierarchy();

        assert!(hierarchy.talukas_of("Atlantis").is_empty());
        assert!(hierarchy.talukas_of("").is_empty());
        assert!(hierarchy.talukas_of("Mumbai Suburban").is_empty());
        assert!(hierarchy.villages_of("", "Haveli").is_empty());
        assert!(hierarchy.villages_of("Pune", "").is_empty());
        // Taluka exists, but under another district
        assert!(hierarchy.villages_of("Nashik", "Haveli").is_empty());
    }

    #[test]
    fn test_marathi_name_lookup() {
        let hierarchy = hierarchy();

        assert_eq!(hierarchy.marathi_name("Pune"), Some("पुणे"));
        assert_eq!(hierarchy.marathi_name(" Wagholi "), Some("वाघोली"));
        assert_eq!(hierarchy.marathi_name("Atlantis"), None);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(LocationHierarchy::from_json("{", "{}").is_err());
        assert!(LocationHierarchy::from_json("[]", "[]").is_err());
    }
}
