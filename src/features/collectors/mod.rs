//! Collectors and their assigned working areas.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/collectors` | List active collectors |
//! | POST | `/api/collectors` | Create a collector |
//! | GET | `/api/collectors/{id}` | Get a collector |
//! | PUT | `/api/collectors/{id}` | Replace a collector |
//! | DELETE | `/api/collectors/{id}` | Soft-delete |
//! | POST | `/api/collectors/{id}/restore` | Restore |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::CollectorService;
