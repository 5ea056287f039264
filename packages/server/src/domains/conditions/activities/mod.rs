//! Conditions domain activities - entry-point view builders
//!
//! Called from the HTTP routes. Each activity takes `&ServerDeps`, queries the
//! document store, and returns plain data ready to serialize.

pub mod all;
pub mod history;
pub mod latest;
pub mod status;

pub use all::all_records;
pub use history::{history_for_location, parse_history_limit, DEFAULT_HISTORY_LIMIT};
pub use latest::latest_conditions;
pub use status::status_summary;
