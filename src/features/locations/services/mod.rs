mod location_service;
mod marathi_resolver;

pub use location_service::LocationService;
pub use marathi_resolver::MarathiResolver;
