mod collector_rows;
mod member_rows;

pub use collector_rows::{collector_rows, CollectorRow, COLLECTOR_HEADERS};
pub use member_rows::{register_rows, PrintRow, RegisterRow, REGISTER_HEADERS};
