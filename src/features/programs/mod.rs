//! Programs (events) with optional poster images.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/programs` | List active programs |
//! | POST | `/api/programs` | Create (multipart, optional image) |
//! | GET | `/api/programs/{id}` | Get a program |
//! | PUT | `/api/programs/{id}` | Edit (multipart, optional image) |
//! | DELETE | `/api/programs/{id}` | Soft-delete |
//! | POST | `/api/programs/{id}/restore` | Restore |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::{ImageUploadService, ProgramService};
