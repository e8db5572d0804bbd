use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::lookups::handler;
use crate::features::lookups::service::LookupService;

pub fn routes(service: Arc<LookupService>) -> Router {
    Router::new()
        .route("/api/transliterate", post(handler::transliterate))
        .route(
            "/api/postal/post-offices",
            get(handler::post_offices_by_name),
        )
        .route(
            "/api/postal/pincodes/{pincode}",
            get(handler::post_offices_by_pincode),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PostalConfig;
    use crate::modules::postal::PostalClient;
    use crate::shared::test_helpers::StubTransliterator;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let transliterator = Arc::new(StubTransliterator::with_words(&[("Pune", "पुणे")]));
        let postal = Arc::new(
            PostalClient::new(&PostalConfig {
                base_url: "http://127.0.0.1:9".to_string(),
            })
            .unwrap(),
        );
        TestServer::new(routes(Arc::new(LookupService::new(transliterator, postal)))).unwrap()
    }

    #[tokio::test]
    async fn test_transliterate_single_and_batch() {
        let server = server();

        let body: Value = server
            .post("/api/transliterate")
            .json(&json!({ "text": "Pune" }))
            .await
            .json();
        assert_eq!(body["data"]["text"], "पुणे");
        assert_eq!(body["data"]["stale"], false);

        let body: Value = server
            .post("/api/transliterate")
            .json(&json!({ "texts": ["Pune", "Haveli"] }))
            .await
            .json();
        assert_eq!(body["data"]["texts"], json!(["पुणे", "mr:Haveli"]));

        let body: Value = server
            .post("/api/transliterate")
            .json(&json!({
                "text": "Pune",
                "field": "city",
                "formId": "0191f2b4-7c1e-7a2b-9c3d-4e5f60718293"
            }))
            .await
            .json();
        assert_eq!(body["data"]["text"], "पुणे");
        assert_eq!(body["data"]["stale"], false);
    }

    #[tokio::test]
    async fn test_transliterate_requires_exactly_one_input() {
        let response = server()
            .post("/api/transliterate")
            .json(&json!({ "text": "a", "texts": ["b"] }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server().post("/api/transliterate").json(&json!({})).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server()
            .post("/api/transliterate")
            .json(&json!({ "text": "Pune", "field": "city" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_postal_lookup_degrades_to_empty() {
        let server = server();

        let response = server.get("/api/postal/post-offices?name=Wagholi").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"], json!([]));

        let response = server.get("/api/postal/pincodes/12ab").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
