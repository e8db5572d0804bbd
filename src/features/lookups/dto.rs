use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Either `text` or `texts` must be present.
///
/// With `formId` and `field`, the request joins that form field's sequence:
/// a response overtaken by a newer request for the same field of the same
/// form comes back `stale`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransliterateRequestDto {
    #[validate(length(max = 500))]
    pub text: Option<String>,
    #[validate(length(max = 200))]
    pub texts: Option<Vec<String>>,
    #[validate(length(min = 1, max = 100))]
    pub field: Option<String>,
    /// Identifies one open form; required together with `field`
    pub form_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransliterateResponseDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texts: Option<Vec<String>>,
    /// True when a newer request for the same form field superseded this one
    pub stale: bool,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PostOfficeQuery {
    /// Village or post office name
    #[param(example = "Wagholi")]
    pub name: String,
}
