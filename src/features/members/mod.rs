//! Member registry.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/members` | List active members (filterable) |
//! | POST | `/api/members` | Register a member |
//! | GET | `/api/members/{id}` | Get a member |
//! | PUT | `/api/members/{id}` | Edit provided fields |
//! | DELETE | `/api/members/{id}` | Soft-delete |
//! | POST | `/api/members/{id}/restore` | Restore |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::MemberService;
