//! Data-entry assists: Marathi transliteration and India Post lookups.
//!
//! Both collaborators are best-effort; their failures degrade to the
//! original text or an empty list.

pub mod dto;
pub mod handler;
pub mod routes;
pub mod service;

pub use routes::routes;
pub use service::LookupService;
