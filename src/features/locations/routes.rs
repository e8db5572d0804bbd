use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::locations::handlers;
use crate::features::locations::services::LocationService;

pub fn routes(service: Arc<LocationService>) -> Router {
    Router::new()
        .route("/api/locations/districts", get(handlers::list_districts))
        .route(
            "/api/locations/districts/{district}/talukas",
            get(handlers::list_talukas),
        )
        .route(
            "/api/locations/districts/{district}/talukas/{taluka}/villages",
            get(handlers::list_villages),
        )
        .route("/api/locations/selection", post(handlers::apply_selection))
        .with_state(service)
}
