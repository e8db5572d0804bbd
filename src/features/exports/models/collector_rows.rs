use crate::features::collectors::models::{AssignedLocation, Collector};
use crate::features::locations::models::LocationHierarchy;
use crate::shared::bilingual::non_empty;
use crate::shared::constants::EMPTY_CELL;

pub const COLLECTOR_HEADERS: [&str; 6] = [
    "अ.क्र. (Sr No)",
    "संकलक नाव (Collector Name)",
    "मोबाईल (Mobile)",
    "कार्यक्षेत्र - जिल्हा (District)",
    "कार्यक्षेत्र - तालुका (Taluka)",
    "नियुक्त गावे (Assigned Villages)",
];

/// Dictionary name of the English value, then the stored Marathi value,
/// then the English value
fn place<'a>(hierarchy: &'a LocationHierarchy, english: &'a str, marathi: &'a str) -> &'a str {
    hierarchy
        .marathi_name(english)
        .or_else(|| non_empty(Some(marathi)))
        .unwrap_or(english)
}

fn unique_joined<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !value.is_empty() && !seen.contains(&value) {
            seen.push(value);
        }
    }
    if seen.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        seen.join(", ")
    }
}

fn location_block(hierarchy: &LocationHierarchy, location: &AssignedLocation) -> String {
    let villages: Vec<&str> = location
        .villages_en
        .iter()
        .enumerate()
        .map(|(i, english)| {
            let marathi = location.villages.get(i).map(String::as_str).unwrap_or("");
            place(hierarchy, english, marathi)
        })
        .collect();

    format!(
        "[{} - {}]: {}",
        place(hierarchy, &location.district_en, &location.district),
        place(hierarchy, &location.taluka_en, &location.taluka),
        villages.join(", ")
    )
}

/// One line of the collectors spreadsheet
#[derive(Debug, Clone, PartialEq)]
pub struct CollectorRow {
    pub serial: usize,
    pub name: String,
    pub mobile: String,
    pub districts: String,
    pub talukas: String,
    pub villages: String,
}

impl CollectorRow {
    pub fn new(serial: usize, collector: &Collector, hierarchy: &LocationHierarchy) -> Self {
        let locations = &collector.assigned_villages;

        Self {
            serial,
            name: non_empty(Some(collector.name.as_str()))
                .or(non_empty(collector.name_english.as_deref()))
                .unwrap_or(EMPTY_CELL)
                .to_string(),
            mobile: non_empty(collector.mobile.as_deref())
                .unwrap_or(EMPTY_CELL)
                .to_string(),
            districts: unique_joined(
                locations
                    .iter()
                    .map(|l| place(hierarchy, &l.district_en, &l.district)),
            ),
            talukas: unique_joined(
                locations
                    .iter()
                    .map(|l| place(hierarchy, &l.taluka_en, &l.taluka)),
            ),
            villages: locations
                .iter()
                .map(|l| location_block(hierarchy, l))
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }

    pub fn text_cells(&self) -> [&str; 5] {
        [
            self.name.as_str(),
            self.mobile.as_str(),
            self.districts.as_str(),
            self.talukas.as_str(),
            self.villages.as_str(),
        ]
    }
}

pub fn collector_rows(collectors: &[Collector], hierarchy: &LocationHierarchy) -> Vec<CollectorRow> {
    collectors
        .iter()
        .enumerate()
        .map(|(index, collector)| CollectorRow::new(index + 1, collector, hierarchy))
        .collect()
}
