pub mod admin;
pub mod collectors;
pub mod dashboard;
pub mod exports;
pub mod locations;
pub mod lookups;
pub mod members;
pub mod programs;
