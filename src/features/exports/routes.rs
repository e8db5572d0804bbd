use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::exports::handlers;
use crate::features::exports::services::ExportService;

pub fn routes(service: Arc<ExportService>) -> Router {
    Router::new()
        .route(
            "/api/exports/members.xlsx",
            get(handlers::export_members_xlsx),
        )
        .route("/api/exports/members/print", get(handlers::print_members))
        .route(
            "/api/exports/collectors.xlsx",
            get(handlers::export_collectors_xlsx),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ExportConfig;
    use crate::features::collectors::CollectorService;
    use crate::features::members::dtos::MemberRequestDto;
    use crate::features::members::MemberService;
    use crate::shared::test_helpers::{
        memory_store, stub_resolver, test_hierarchy, StubTransliterator,
    };
    use axum::http::header;
    use axum_test::TestServer;

    async fn server() -> TestServer {
        let store = memory_store();
        let resolver = stub_resolver(Arc::new(StubTransliterator::default()));
        let members = Arc::new(MemberService::new(store.clone(), resolver.clone()));
        let collectors = Arc::new(CollectorService::new(store, resolver));

        for (name, district) in [("Ramesh", "Pune"), ("Suresh", "Nashik")] {
            members
                .create(&MemberRequestDto {
                    full_name: Some(name.to_string()),
                    full_name_marathi: Some(format!("{} (मराठी)", name)),
                    district: Some(district.to_string()),
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        let service = ExportService::new(
            members,
            collectors,
            test_hierarchy(),
            ExportConfig::default(),
        );
        TestServer::new(routes(Arc::new(service))).unwrap()
    }

    #[tokio::test]
    async fn test_print_applies_member_filter() {
        let server = server().await;

        let response = server.get("/api/exports/members/print?district=Pune").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("Ramesh (मराठी)"));
        assert!(!html.contains("Suresh (मराठी)"));
        assert!(html.contains("Total Members: 1"));
    }

    #[tokio::test]
    async fn test_spreadsheet_download_headers() {
        let server = server().await;

        let response = server.get("/api/exports/members.xlsx").await;

        response.assert_status_ok();
        assert_eq!(
            response.header(header::CONTENT_TYPE),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert!(response.as_bytes().starts_with(b"PK"));

        server
            .get("/api/exports/collectors.xlsx")
            .await
            .assert_status_ok();
    }
}
