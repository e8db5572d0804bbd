mod collector_service;

pub use collector_service::CollectorService;
