//! Member register and collector spreadsheets, printable member list.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/exports/members.xlsx` | Member register (filterable) |
//! | GET | `/api/exports/members/print` | Printable member list (filterable) |
//! | GET | `/api/exports/collectors.xlsx` | Collectors list |

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::ExportService;
