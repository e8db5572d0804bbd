//! Modules layer - Infrastructure components for external integrations
//!
//! Document persistence, blob storage and the HTTP collaborators
//! (transliteration, postal lookup).

pub mod document_store;
pub mod postal;
pub mod storage;
pub mod transliteration;
