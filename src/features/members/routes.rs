use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::members::handlers;
use crate::features::members::services::MemberService;

pub fn routes(service: Arc<MemberService>) -> Router {
    Router::new()
        .route(
            "/api/members",
            get(handlers::list_members).post(handlers::create_member),
        )
        .route(
            "/api/members/{id}",
            get(handlers::get_member)
                .put(handlers::update_member)
                .delete(handlers::delete_member),
        )
        .route("/api/members/{id}/restore", post(handlers::restore_member))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{memory_store, stub_resolver, StubTransliterator};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let transliterator = Arc::new(StubTransliterator::with_words(&[("Ramesh", "रमेश")]));
        let service = MemberService::new(memory_store(), stub_resolver(transliterator));
        TestServer::new(routes(Arc::new(service))).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_fetch() {
        let server = server();

        let response = server
            .post("/api/members")
            .json(&json!({
                "fullName": "Ramesh",
                "mobile": "9876543210",
                "joiningDate": "2024-03-15",
                "district": "Pune",
                "taluka": "Haveli",
                "pincode": ""
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        let id = body["data"]["id"].as_str().unwrap().to_string();
        assert_eq!(body["data"]["fullNameMarathi"], "रमेश");
        assert_eq!(body["data"]["districtMarathi"], "पुणे");
        assert_eq!(body["data"]["pincode"], Value::Null);
        assert_eq!(body["data"]["isDeleted"], false);

        let body: Value = server.get(&format!("/api/members/{}", id)).await.json();
        assert_eq!(body["data"]["joiningDate"], "2024-03-15");
    }

    #[tokio::test]
    async fn test_invalid_mobile_is_rejected() {
        let server = server();

        let response = server
            .post("/api/members")
            .json(&json!({ "fullName": "Ramesh", "mobile": "12345" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = server.get("/api/members").await.json();
        assert_eq!(body["meta"]["total"], 0);
    }

    #[tokio::test]
    async fn test_delete_and_restore() {
        let server = server();
        let body: Value = server
            .post("/api/members")
            .json(&json!({ "fullName": "Ramesh" }))
            .await
            .json();
        let id = body["data"]["id"].as_str().unwrap().to_string();

        server
            .delete(&format!("/api/members/{}", id))
            .await
            .assert_status_ok();
        let body: Value = server.get("/api/members").await.json();
        assert_eq!(body["data"], json!([]));

        server
            .post(&format!("/api/members/{}/restore", id))
            .await
            .assert_status_ok();
        let body: Value = server.get("/api/members").await.json();
        assert_eq!(body["data"][0]["id"], id);
    }

    #[tokio::test]
    async fn test_filter_by_joining_date() {
        let server = server();
        for (name, date) in [("A", "2024-01-10"), ("B", "2024-06-01")] {
            server
                .post("/api/members")
                .json(&json!({ "fullName": name, "joiningDate": date }))
                .await
                .assert_status(StatusCode::CREATED);
        }
        server
            .post("/api/members")
            .json(&json!({ "fullName": "Undated" }))
            .await
            .assert_status(StatusCode::CREATED);

        let body: Value = server
            .get("/api/members?fromDate=2024-01-01&toDate=2024-01-31")
            .await
            .json();
        assert_eq!(body["meta"]["total"], 1);
        assert_eq!(body["data"][0]["fullName"], "A");
    }

    #[tokio::test]
    async fn test_unknown_member_is_not_found() {
        server()
            .get(&format!("/api/members/{}", uuid::Uuid::new_v4()))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
