use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

pub fn routes(dashboard_service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/dashboard", get(handlers::get_summary))
        .with_state(dashboard_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::collectors::CollectorService;
    use crate::features::members::dtos::MemberRequestDto;
    use crate::features::members::MemberService;
    use crate::features::programs::{ImageUploadService, ProgramService};
    use crate::shared::test_helpers::{
        memory_store, stub_resolver, CountingStorage, StubTransliterator,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;
    use std::time::Duration;

    #[tokio::test]
    async fn test_summary_envelope() {
        let store = memory_store();
        let resolver = stub_resolver(Arc::new(StubTransliterator::default()));
        let images = Arc::new(ImageUploadService::new(
            Arc::new(CountingStorage::default()),
            Duration::from_secs(5),
        ));
        let members = Arc::new(MemberService::new(store.clone(), resolver.clone()));
        members
            .create(&MemberRequestDto {
                full_name: Some("Ramesh".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let service = DashboardService::new(
            members,
            Arc::new(ProgramService::new(store.clone(), images)),
            Arc::new(CollectorService::new(store, resolver)),
        );
        let server = TestServer::new(routes(Arc::new(service))).unwrap();

        let response = server.get("/api/dashboard").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["totalMembers"], 1);
        assert_eq!(body["data"]["totalPrograms"], 0);
        assert_eq!(body["data"]["recentMembers"][0]["fullName"], "Ramesh");
        assert!(body["data"]["upcomingPrograms"].as_array().unwrap().is_empty());
    }
}
