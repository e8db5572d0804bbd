//! India Post office lookup (api.postalpincode.in)

mod client;

pub use client::{PostOffice, PostalClient};
