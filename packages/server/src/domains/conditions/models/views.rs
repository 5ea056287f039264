use serde::Serialize;
use serde_json::Value;

use crate::common::SensorWindowRecord;

/// Most recent window for one location, as served by `/api/latest`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestEntry {
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_status: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_end_time: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ice_thickness: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_surface_temperature: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_snow_accumulation: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_external_temperature: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_count: Option<Value>,
}

impl LatestEntry {
    pub fn from_record(label: &str, record: SensorWindowRecord) -> Self {
        Self {
            location: label.to_string(),
            safety_status: record.safety_status,
            window_end_time: record.window_end_time,
            avg_ice_thickness: record.avg_ice_thickness_cm,
            avg_surface_temperature: record.avg_surface_temperature_c,
            max_snow_accumulation: record.max_snow_accumulation_cm,
            avg_external_temperature: record.avg_external_temperature_c,
            reading_count: record.reading_count,
        }
    }
}

/// One point of a location's chart series, as served by `/api/history`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_end_time: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ice_thickness: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_surface_temperature: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_snow_accumulation: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_status: Option<Value>,
}

impl HistoryEntry {
    pub fn from_record(label: &str, record: SensorWindowRecord) -> Self {
        Self {
            location: label.to_string(),
            window_end_time: record.window_end_time,
            avg_ice_thickness: record.avg_ice_thickness_cm,
            avg_surface_temperature: record.avg_surface_temperature_c,
            max_snow_accumulation: record.max_snow_accumulation_cm,
            safety_status: record.safety_status,
        }
    }
}

/// Latest safety status of one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationStatus {
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_status: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_end_time: Option<Value>,
}

/// Worst-case roll-up of every location's latest status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverallStatus {
    Safe,
    Caution,
    Unsafe,
}

impl OverallStatus {
    /// Roll up per-location statuses.
    ///
    /// `Safe` only when there is at least one status and all of them are
    /// exactly "Safe"; `Unsafe` when any is exactly "Unsafe"; `Caution`
    /// otherwise, including for an empty input.
    pub fn from_statuses<'a, I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let statuses: Vec<Option<&str>> = statuses.into_iter().collect();

        if !statuses.is_empty() && statuses.iter().all(|s| *s == Some("Safe")) {
            OverallStatus::Safe
        } else if statuses.iter().any(|s| *s == Some("Unsafe")) {
            OverallStatus::Unsafe
        } else {
            OverallStatus::Caution
        }
    }
}

/// Result of the status view.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSummary {
    pub overall_status: OverallStatus,
    pub locations: Vec<LocationStatus>,
}

/// Result of the all-records view.
#[derive(Debug, Clone, PartialEq)]
pub struct AllRecords {
    pub count: usize,
    pub data: Vec<SensorWindowRecord>,
}
