use std::sync::Arc;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};

use crate::core::middleware::basic_auth_middleware;
use crate::features::admin::handlers;
use crate::features::admin::services::AdminService;

/// Admin routes, relative to their `/api/admin` mount point.
///
/// Every route requires basic auth with `credentials` ("username:password").
pub fn routes(admin_service: Arc<AdminService>, credentials: Arc<String>) -> Router {
    Router::new()
        .route("/deleted", get(handlers::list_deleted))
        .route(
            "/deleted/{kind}/{id}/restore",
            post(handlers::restore_deleted),
        )
        .route_layer(from_fn(basic_auth_middleware(credentials, "admin")))
        .with_state(admin_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::collectors::CollectorService;
    use crate::features::members::dtos::MemberRequestDto;
    use crate::features::members::models::MemberFilter;
    use crate::features::members::MemberService;
    use crate::features::programs::{ImageUploadService, ProgramService};
    use crate::shared::test_helpers::{
        memory_store, stub_resolver, CountingStorage, StubTransliterator,
    };
    use axum::http::{header, StatusCode};
    use axum_test::TestServer;
    use base64::prelude::*;
    use serde_json::Value;
    use std::time::Duration;

    const CREDENTIALS: &str = "trustee:secret";

    fn authorization() -> String {
        format!("Basic {}", BASE64_STANDARD.encode(CREDENTIALS))
    }

    fn setup() -> (TestServer, Arc<MemberService>) {
        let store = memory_store();
        let resolver = stub_resolver(Arc::new(StubTransliterator::default()));
        let images = Arc::new(ImageUploadService::new(
            Arc::new(CountingStorage::default()),
            Duration::from_secs(5),
        ));
        let members = Arc::new(MemberService::new(store.clone(), resolver.clone()));
        let service = AdminService::new(
            members.clone(),
            Arc::new(ProgramService::new(store.clone(), images)),
            Arc::new(CollectorService::new(store, resolver)),
        );
        let app = Router::new().nest(
            "/api/admin",
            routes(Arc::new(service), Arc::new(CREDENTIALS.to_string())),
        );
        (TestServer::new(app).unwrap(), members)
    }

    async fn deleted_member(members: &MemberService) -> uuid::Uuid {
        let member = members
            .create(&MemberRequestDto {
                full_name: Some("Ramesh".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        members.soft_delete(member.id).await.unwrap();
        member.id
    }

    #[tokio::test]
    async fn test_requires_basic_auth() {
        let (server, _) = setup();

        let response = server.get("/api/admin/deleted").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        assert!(response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .is_some());

        let wrong = format!("Basic {}", BASE64_STANDARD.encode("trustee:guess"));
        server
            .get("/api/admin/deleted")
            .add_header(header::AUTHORIZATION, wrong)
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_lists_deleted_by_collection() {
        let (server, members) = setup();
        let id = deleted_member(&members).await;

        let response = server
            .get("/api/admin/deleted")
            .add_header(header::AUTHORIZATION, authorization())
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["data"]["members"][0]["id"], id.to_string());
        assert_eq!(body["data"]["members"][0]["isDeleted"], true);
        assert!(body["data"]["programs"].as_array().unwrap().is_empty());
        assert!(body["data"]["collectors"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_restore_by_kind() {
        let (server, members) = setup();
        let id = deleted_member(&members).await;

        let response = server
            .post(&format!("/api/admin/deleted/members/{}/restore", id))
            .add_header(header::AUTHORIZATION, authorization())
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["data"]["kind"], "members");
        assert_eq!(
            members.list(&MemberFilter::default()).await.unwrap().len(),
            1
        );
        assert!(members.list_deleted().await.is_empty());
    }

    #[tokio::test]
    async fn test_restore_unknown_record_is_not_found() {
        let (server, _) = setup();

        server
            .post(&format!(
                "/api/admin/deleted/programs/{}/restore",
                uuid::Uuid::new_v4()
            ))
            .add_header(header::AUTHORIZATION, authorization())
            .await
            .assert_status(StatusCode::NOT_FOUND);

        server
            .post(&format!(
                "/api/admin/deleted/donors/{}/restore",
                uuid::Uuid::new_v4()
            ))
            .add_header(header::AUTHORIZATION, authorization())
            .await
            .assert_status_failure();
    }
}
