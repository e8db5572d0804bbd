use async_trait::async_trait;
use serde_json::Value;

use super::Transliterator;
use crate::core::config::TransliterationConfig;
use crate::core::error::{AppError, Result};

/// Client for the Google input-tools transliteration endpoint
pub struct GoogleInputTransliterator {
    client: reqwest::Client,
    base_url: String,
    input_tool: String,
}

impl GoogleInputTransliterator {
    pub fn new(config: &TransliterationConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("AtmapravartakCore/1.0")
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            input_tool: config.input_tool.clone(),
        })
    }

    fn request_url(&self, text: &str) -> String {
        format!(
            "{}/request?text={}&itc={}&num=1&cp=0&cs=1&ie=utf-8&oe=utf-8",
            self.base_url,
            urlencoding::encode(text),
            self.input_tool
        )
    }
}

/// Extract the first suggestion from `["SUCCESS", [[input, [suggestion, ...]]]]`.
///
/// Any other shape is a non-match.
pub fn parse_suggestion(body: &Value) -> Option<String> {
    if body.get(0).and_then(Value::as_str) != Some("SUCCESS") {
        return None;
    }

    body.get(1)
        .and_then(|results| results.get(0))
        .and_then(|entry| entry.get(1))
        .and_then(|suggestions| suggestions.get(0))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl Transliterator for GoogleInputTransliterator {
    async fn transliterate(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let url = self.request_url(text);
        tracing::debug!("Transliterating '{}' -> {}", text, url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Transliteration request failed: {}", e))
        })?;

        if !response.status().is_success() {
            tracing::warn!("Transliteration returned status: {}", response.status());
            return Ok(text.to_string());
        }

        let body: Value = response.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!(
                "Failed to parse transliteration response: {}",
                e
            ))
        })?;

        Ok(parse_suggestion(&body).unwrap_or_else(|| text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    /// Serves `router` on an ephemeral local port and returns a client for it
    async fn client_for(router: Router) -> GoogleInputTransliterator {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

        GoogleInputTransliterator::new(&TransliterationConfig {
            base_url: format!("http://{}", addr),
            input_tool: "mr-t-i0-und".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_parse_suggestion_success_shape() {
        let body = json!(["SUCCESS", [["ramesh", ["रमेश", "रामेश"], [], {}]]]);
        assert_eq!(parse_suggestion(&body), Some("रमेश".to_string()));
    }

    #[test]
    fn test_parse_suggestion_rejects_malformed_shapes() {
        let cases = [
            json!(["FAILED_TO_PROCESS_REQUEST", [["ramesh", ["रमेश"]]]]),
            json!(["SUCCESS"]),
            json!(["SUCCESS", []]),
            json!(["SUCCESS", [["ramesh"]]]),
            json!(["SUCCESS", [["ramesh", []]]]),
            json!(["SUCCESS", [["ramesh", [42]]]]),
            json!({ "status": "SUCCESS" }),
            json!(null),
        ];

        for body in cases {
            assert_eq!(parse_suggestion(&body), None, "body: {}", body);
        }
    }

    #[test]
    fn test_request_url_encodes_text() {
        let client = GoogleInputTransliterator::new(&TransliterationConfig {
            base_url: "https://inputtools.google.com/".to_string(),
            input_tool: "mr-t-i0-und".to_string(),
        })
        .unwrap();

        assert_eq!(
            client.request_url("new pune"),
            "https://inputtools.google.com/request?text=new%20pune&itc=mr-t-i0-und&num=1&cp=0&cs=1&ie=utf-8&oe=utf-8"
        );
    }

    #[tokio::test]
    async fn test_empty_input_skips_network() {
        let client = GoogleInputTransliterator::new(&TransliterationConfig {
            // Unroutable; reaching the network would fail the call
            base_url: "http://127.0.0.1:9".to_string(),
            input_tool: "mr-t-i0-und".to_string(),
        })
        .unwrap();

        assert_eq!(client.transliterate("").await.unwrap(), "");
        assert_eq!(client.transliterate_or_original("Pune").await, "Pune");
    }

    #[tokio::test]
    async fn test_success_response_is_used() {
        let client = client_for(Router::new().route(
            "/request",
            get(|| async { Json(json!(["SUCCESS", [["Pune", ["पुणे"]]]])) }),
        ))
        .await;

        assert_eq!(client.transliterate("Pune").await.unwrap(), "पुणे");
    }

    #[tokio::test]
    async fn test_malformed_body_falls_back_to_original() {
        let client = client_for(
            Router::new().route("/request", get(|| async { "<html>not json" })),
        )
        .await;

        assert!(matches!(
            client.transliterate("Pune").await,
            Err(AppError::ExternalServiceError(_))
        ));
        assert_eq!(client.transliterate_or_original("Pune").await, "Pune");
        assert_eq!(
            client
                .transliterate_all(&["Pune".to_string(), "Haveli".to_string()])
                .await,
            vec!["Pune".to_string(), "Haveli".to_string()]
        );
    }

    #[tokio::test]
    async fn test_error_status_returns_original() {
        let client = client_for(Router::new().route(
            "/request",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "busy") }),
        ))
        .await;

        assert_eq!(client.transliterate("Pune").await.unwrap(), "Pune");
        assert_eq!(client.transliterate_or_original("Pune").await, "Pune");
    }
}
