//! Static District -> Taluka -> Village hierarchy.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/locations/districts` | List districts |
//! | GET | `/api/locations/districts/{district}/talukas` | List talukas of a district |
//! | GET | `/api/locations/districts/{district}/talukas/{taluka}/villages` | List villages of a taluka |
//! | POST | `/api/locations/selection` | Apply a cascading-dropdown interaction |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::LocationHierarchy;
pub use routes::routes;
pub use services::{LocationService, MarathiResolver};
