use std::sync::Arc;

use crate::features::locations::models::{
    LocationHierarchy, LocationLevel, LocationSelection, SelectionAction,
};

/// Read-only access to the location hierarchy
pub struct LocationService {
    hierarchy: Arc<LocationHierarchy>,
}

impl LocationService {
    pub fn new(hierarchy: Arc<LocationHierarchy>) -> Self {
        Self { hierarchy }
    }

    pub fn districts(&self) -> Vec<String> {
        self.hierarchy
            .districts()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn talukas(&self, district: &str) -> Vec<String> {
        self.hierarchy
            .talukas_of(district)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn villages(&self, district: &str, taluka: &str) -> Vec<String> {
        self.hierarchy.villages_of(district, taluka).to_vec()
    }

    /// Apply one interaction and return the new selection
    pub fn apply_selection(
        &self,
        mut selection: LocationSelection,
        action: &SelectionAction,
    ) -> LocationSelection {
        selection.apply(action, &self.hierarchy);
        selection
    }

    /// Dropdown options under the current selection; a level typed in
    /// manually has none
    pub fn options(&self, selection: &LocationSelection) -> (Vec<String>, Vec<String>) {
        let talukas = if selection.is_manual(LocationLevel::Taluka) {
            Vec::new()
        } else {
            self.talukas(&selection.district)
        };
        let villages = if selection.is_manual(LocationLevel::Village) {
            Vec::new()
        } else {
            self.villages(&selection.district, &selection.taluka)
        };
        (talukas, villages)
    }
}
