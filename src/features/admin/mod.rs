//! Deleted-items administration, behind HTTP basic auth.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/admin/deleted` | Soft-deleted members, programs, collectors |
//! | POST | `/api/admin/deleted/{kind}/{id}/restore` | Restore one record |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::AdminService;
