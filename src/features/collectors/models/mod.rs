mod collector;

pub use collector::{AssignedLocation, Collector};
