mod collector_handler;

pub use collector_handler::*;
