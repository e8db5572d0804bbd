mod location_handler;

pub use location_handler::*;
