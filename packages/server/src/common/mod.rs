// Common types and utilities shared across the application

pub mod locations;
pub mod records;
pub mod timestamps;

pub use locations::{label_to_slug, MonitoredLocation, LOCATIONS};
pub use records::SensorWindowRecord;
pub use timestamps::{normalize_window_end, now_rfc3339, parse_timestamp, sort_newest_first};
