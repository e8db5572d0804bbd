use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::features::programs::handlers;
use crate::features::programs::services::{ProgramService, MAX_IMAGE_SIZE};

/// Room for the text fields of a form carrying a maximum-size image
const FORM_OVERHEAD: usize = 1024 * 1024;

pub fn routes(service: Arc<ProgramService>) -> Router {
    Router::new()
        .route(
            "/api/programs",
            get(handlers::list_programs).post(handlers::create_program),
        )
        .route(
            "/api/programs/{id}",
            get(handlers::get_program)
                .put(handlers::update_program)
                .delete(handlers::delete_program),
        )
        .route("/api/programs/{id}/restore", post(handlers::restore_program))
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + FORM_OVERHEAD))
        .with_state(service)
}
