use serde::{Deserialize, Serialize};

/// One working area of a collector.
///
/// `district`, `taluka` and `villages` hold the Marathi display values; the
/// `_en` lists keep the English input verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignedLocation {
    pub district: String,
    pub district_en: String,
    pub taluka: String,
    pub taluka_en: String,
    pub villages: Vec<String>,
    pub villages_en: Vec<String>,
}

/// Collector document as stored.
///
/// Reading accepts the older shapes (flat village list or comma separated
/// string next to top-level district/taluka) and always yields
/// `assigned_villages` as a list of locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredCollector")]
pub struct Collector {
    /// Marathi display name, English when no Marathi value exists
    pub name: String,
    pub name_english: Option<String>,
    pub mobile: Option<String>,
    /// Marathi address
    pub address: Option<String>,
    pub address_english: Option<String>,
    /// District of the first location
    pub district: Option<String>,
    /// Taluka of the first location
    pub taluka: Option<String>,
    pub assigned_villages: Vec<AssignedLocation>,
}

impl Collector {
    /// Copy the first location into the top-level district/taluka
    pub fn sync_primary_location(&mut self) {
        let first = self.assigned_villages.first();
        self.district = first.map(|l| l.district.clone());
        self.taluka = first.map(|l| l.taluka.clone());
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredVillages {
    Locations(Vec<AssignedLocation>),
    Names(Vec<String>),
    Csv(String),
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct StoredCollector {
    name: String,
    name_english: Option<String>,
    mobile: Option<String>,
    address: Option<String>,
    address_english: Option<String>,
    district: Option<String>,
    taluka: Option<String>,
    assigned_villages: Option<StoredVillages>,
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

impl From<StoredCollector> for Collector {
    fn from(stored: StoredCollector) -> Self {
        let district = stored.district.unwrap_or_default();
        let taluka = stored.taluka.unwrap_or_default();

        let legacy = |villages: Vec<String>| {
            if villages.is_empty() {
                return Vec::new();
            }
            vec![AssignedLocation {
                district: district.clone(),
                district_en: district.clone(),
                taluka: taluka.clone(),
                taluka_en: taluka.clone(),
                villages_en: villages.clone(),
                villages,
            }]
        };

        let mut assigned_villages = match stored.assigned_villages {
            Some(StoredVillages::Locations(locations)) => locations,
            Some(StoredVillages::Names(names)) => legacy(names),
            Some(StoredVillages::Csv(csv)) => legacy(split_csv(&csv)),
            None => Vec::new(),
        };

        // Early list-form records carried no English copies
        for location in &mut assigned_villages {
            if location.district_en.is_empty() {
                location.district_en.clone_from(&location.district);
            }
            if location.taluka_en.is_empty() {
                location.taluka_en.clone_from(&location.taluka);
            }
            if location.villages_en.is_empty() {
                location.villages_en.clone_from(&location.villages);
            }
        }

        let mut collector = Self {
            name: stored.name,
            name_english: stored.name_english,
            mobile: stored.mobile,
            address: stored.address,
            address_english: stored.address_english,
            district: None,
            taluka: None,
            assigned_villages,
        };
        collector.sync_primary_location();
        if collector.assigned_villages.is_empty() {
            collector.district = Some(district).filter(|d| !d.is_empty());
            collector.taluka = Some(taluka).filter(|t| !t.is_empty());
        }
        collector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_form_is_read_as_is() {
        let collector: Collector = serde_json::from_value(json!({
            "name": "रमेश",
            "name_english": "Ramesh",
            "assigned_villages": [{
                "district": "पुणे", "district_en": "Pune",
                "taluka": "हवेली", "taluka_en": "Haveli",
                "villages": ["वाघोली"], "villages_en": ["Wagholi"]
            }]
        }))
        .unwrap();

        assert_eq!(collector.assigned_villages.len(), 1);
        assert_eq!(collector.assigned_villages[0].villages_en, vec!["Wagholi"]);
        assert_eq!(collector.district.as_deref(), Some("पुणे"));
    }

    #[test]
    fn test_flat_village_list_is_normalized() {
        let collector: Collector = serde_json::from_value(json!({
            "name": "Suresh",
            "district": "Pune",
            "taluka": "Haveli",
            "assigned_villages": ["Wagholi", "Lohegaon"]
        }))
        .unwrap();

        assert_eq!(
            collector.assigned_villages,
            vec![AssignedLocation {
                district: "Pune".to_string(),
                district_en: "Pune".to_string(),
                taluka: "Haveli".to_string(),
                taluka_en: "Haveli".to_string(),
                villages: vec!["Wagholi".to_string(), "Lohegaon".to_string()],
                villages_en: vec!["Wagholi".to_string(), "Lohegaon".to_string()],
            }]
        );
    }

    #[test]
    fn test_csv_string_is_normalized() {
        let collector: Collector = serde_json::from_value(json!({
            "name": "Suresh",
            "district": "Satara",
            "taluka": "Wai",
            "assigned_villages": "Bavdhan, Kavathe,,"
        }))
        .unwrap();

        let location = &collector.assigned_villages[0];
        assert_eq!(location.district, "Satara");
        assert_eq!(location.villages, vec!["Bavdhan", "Kavathe"]);
    }

    #[test]
    fn test_missing_villages_keep_top_level_location() {
        let collector: Collector = serde_json::from_value(json!({
            "name": "Suresh",
            "district": "Pune"
        }))
        .unwrap();

        assert!(collector.assigned_villages.is_empty());
        assert_eq!(collector.district.as_deref(), Some("Pune"));
        assert_eq!(collector.taluka, None);
    }

    #[test]
    fn test_save_writes_first_location_at_top_level() {
        let mut collector = Collector {
            name: "रमेश".to_string(),
            assigned_villages: vec![
                AssignedLocation {
                    district: "पुणे".to_string(),
                    taluka: "हवेली".to_string(),
                    ..Default::default()
                },
                AssignedLocation {
                    district: "नाशिक".to_string(),
                    taluka: "सिन्नर".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        collector.sync_primary_location();

        let value = serde_json::to_value(&collector).unwrap();
        assert_eq!(value["district"], "पुणे");
        assert_eq!(value["taluka"], "हवेली");
        assert_eq!(value["assigned_villages"][1]["district"], "नाशिक");
    }
}
