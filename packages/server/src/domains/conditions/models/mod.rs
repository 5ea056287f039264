pub mod views;

pub use views::{
    AllRecords, HistoryEntry, LatestEntry, LocationStatus, OverallStatus, StatusSummary,
};
