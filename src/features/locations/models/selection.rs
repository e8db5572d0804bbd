use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::LocationHierarchy;
use crate::shared::constants::OTHER_OPTION;

/// Level of the cascading location selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LocationLevel {
    District,
    Taluka,
    Village,
}

/// Cascading District -> Taluka -> Villages selection.
///
/// A level in manual mode holds free text instead of a dropdown value; no
/// consistency between manual parents and children is checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationSelection {
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub taluka: String,
    #[serde(default)]
    pub villages: Vec<String>,
    #[serde(default)]
    pub manual_district: bool,
    #[serde(default)]
    pub manual_taluka: bool,
    #[serde(default)]
    pub manual_village: bool,
}

/// One user interaction with the selection
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionAction {
    SelectDistrict { value: String },
    SelectTaluka { value: String },
    /// Single-village pick (member forms)
    SelectVillage { value: String },
    /// Multi-village toggle (collector forms)
    ToggleVillage { value: String },
    /// Select every village of the current taluka, or clear when all are selected
    SelectAllVillages,
    /// Leave manual mode for a level and return to its dropdown
    ClearManual { level: LocationLevel },
}

impl LocationSelection {
    pub fn is_manual(&self, level: LocationLevel) -> bool {
        match level {
            LocationLevel::District => self.manual_district,
            LocationLevel::Taluka => self.manual_taluka,
            LocationLevel::Village => self.manual_village,
        }
    }

    /// Picking a district always clears taluka and villages, even when the
    /// same district is picked again.
    pub fn select_district(&mut self, value: &str) {
        if value == OTHER_OPTION {
            self.manual_district = true;
            self.district.clear();
            self.clear_below_district();
            return;
        }

        self.district = value.to_string();
        if !self.manual_district {
            self.clear_below_district();
        }
    }

    pub fn select_taluka(&mut self, value: &str) {
        if value == OTHER_OPTION {
            self.manual_taluka = true;
            self.taluka.clear();
            self.clear_below_taluka();
            return;
        }

        self.taluka = value.to_string();
        if !self.manual_taluka {
            self.clear_below_taluka();
        }
    }

    pub fn select_village(&mut self, value: &str) {
        if value == OTHER_OPTION {
            self.manual_village = true;
            self.villages.clear();
            return;
        }

        self.villages = if value.is_empty() {
            Vec::new()
        } else {
            vec![value.to_string()]
        };
    }

    /// Clears the level's typed value; lower levels are left as they are
    pub fn clear_manual(&mut self, level: LocationLevel) {
        match level {
            LocationLevel::District => {
                self.manual_district = false;
                self.district.clear();
            }
            LocationLevel::Taluka => {
                self.manual_taluka = false;
                self.taluka.clear();
            }
            LocationLevel::Village => {
                self.manual_village = false;
                self.villages.clear();
            }
        }
    }

    pub fn toggle_village(&mut self, village: &str) {
        if let Some(pos) = self.villages.iter().position(|v| v == village) {
            self.villages.remove(pos);
        } else {
            self.villages.push(village.to_string());
        }
    }

    pub fn select_all_villages(&mut self, available: &[String]) {
        let all_selected = !available.is_empty()
            && available.iter().all(|v| self.villages.contains(v));
        self.villages = if all_selected {
            Vec::new()
        } else {
            available.to_vec()
        };
    }

    pub fn apply(&mut self, action: &SelectionAction, hierarchy: &LocationHierarchy) {
        match action {
            SelectionAction::SelectDistrict { value } => self.select_district(value),
            SelectionAction::SelectTaluka { value } => self.select_taluka(value),
            SelectionAction::SelectVillage { value } => self.select_village(value),
            SelectionAction::ToggleVillage { value } => self.toggle_village(value),
            SelectionAction::SelectAllVillages => {
                let available = hierarchy.villages_of(&self.district, &self.taluka);
                self.select_all_villages(available);
            }
            SelectionAction::ClearManual { level } => self.clear_manual(*level),
        }
    }

    fn clear_below_district(&mut self) {
        self.manual_taluka = false;
        self.taluka.clear();
        self.clear_below_taluka();
    }

    fn clear_below_taluka(&mut self) {
        self.manual_village = false;
        self.villages.clear();
    }
}
