use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::locations::models::{LocationSelection, SelectionAction};

/// Current selection plus the interaction to apply to it
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplySelectionDto {
    #[serde(default)]
    pub selection: LocationSelection,
    pub action: SelectionAction,
}

/// Updated selection with the options of the dependent dropdowns
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponseDto {
    pub selection: LocationSelection,
    pub talukas: Vec<String>,
    pub villages: Vec<String>,
}
