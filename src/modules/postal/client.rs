use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::core::config::PostalConfig;
use crate::core::error::{AppError, Result};

/// Post office record as returned by the postal API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PostOffice {
    pub name: String,
    #[serde(default)]
    pub branch_type: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
}

/// Best-effort lookup client: every failure yields an empty list
pub struct PostalClient {
    client: reqwest::Client,
    base_url: String,
}

/// `[{"Status": "Success", "PostOffice": [...]}]` to the office list
pub fn parse_post_offices(body: &Value) -> Vec<PostOffice> {
    let Some(first) = body.get(0) else {
        return Vec::new();
    };
    if first.get("Status").and_then(Value::as_str) != Some("Success") {
        return Vec::new();
    }

    first
        .get("PostOffice")
        .and_then(Value::as_array)
        .map(|offices| {
            offices
                .iter()
                .filter_map(|office| serde_json::from_value(office.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

impl PostalClient {
    pub fn new(config: &PostalConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("AtmapravartakCore/1.0")
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Post offices whose name matches a village name
    pub async fn by_office_name(&self, name: &str) -> Vec<PostOffice> {
        if name.trim().is_empty() {
            return Vec::new();
        }
        let url = format!("{}/postoffice/{}", self.base_url, urlencoding::encode(name.trim()));
        self.fetch(&url).await
    }

    pub async fn by_pincode(&self, pincode: &str) -> Vec<PostOffice> {
        if pincode.trim().is_empty() {
            return Vec::new();
        }
        let url = format!("{}/pincode/{}", self.base_url, urlencoding::encode(pincode.trim()));
        self.fetch(&url).await
    }

    async fn fetch(&self, url: &str) -> Vec<PostOffice> {
        tracing::debug!("Postal lookup -> {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Postal lookup failed: {}", e);
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            tracing::warn!("Postal API returned status: {}", response.status());
            return Vec::new();
        }

        match response.json::<Value>().await {
            Ok(body) => parse_post_offices(&body),
            Err(e) => {
                tracing::warn!("Failed to parse postal response: {}", e);
                Vec::new()
            }
        }
    }
}
