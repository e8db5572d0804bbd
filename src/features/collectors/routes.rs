use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::collectors::handlers;
use crate::features::collectors::services::CollectorService;

pub fn routes(service: Arc<CollectorService>) -> Router {
    Router::new()
        .route(
            "/api/collectors",
            get(handlers::list_collectors).post(handlers::create_collector),
        )
        .route(
            "/api/collectors/{id}",
            get(handlers::get_collector)
                .put(handlers::update_collector)
                .delete(handlers::delete_collector),
        )
        .route(
            "/api/collectors/{id}/restore",
            post(handlers::restore_collector),
        )
        .with_state(service)
}
