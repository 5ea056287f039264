//! Test fixtures for creating window records.

use serde_json::json;
use skateway_core::common::SensorWindowRecord;

/// A window record ending at `12:MM:00Z` on a fixed day.
pub fn window_at(slug: &str, minute: u32, status: &str) -> SensorWindowRecord {
    SensorWindowRecord {
        location: Some(json!(slug)),
        window_end_time: Some(json!(end_time(minute))),
        safety_status: Some(json!(status)),
        avg_ice_thickness_cm: Some(json!(30.0 + minute as f64 / 10.0)),
        avg_surface_temperature_c: Some(json!(-3.0)),
        max_snow_accumulation_cm: Some(json!(1.5)),
        avg_external_temperature_c: Some(json!(-8.0)),
        reading_count: Some(json!(30)),
        ..Default::default()
    }
}

/// Same as `window_at`, but only carrying the legacy `windowEnd` field.
pub fn legacy_window_at(slug: &str, minute: u32, status: &str) -> SensorWindowRecord {
    let mut record = window_at(slug, minute, status);
    record.window_end = record.window_end_time.take();
    record
}

pub fn end_time(minute: u32) -> String {
    format!("2025-01-15T12:{:02}:00Z", minute)
}
