pub mod attendance;
pub mod date_key;
pub mod month;
pub mod stats;
