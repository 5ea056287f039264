//! Window-end timestamp handling.
//!
//! Older documents carry the end of their aggregation window in `windowEnd`,
//! newer ones in `windowEndTime`. Views normalize to `windowEndTime` before
//! sorting.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::Value;

use super::records::SensorWindowRecord;

/// Current time as an RFC 3339 string with millisecond precision (`...Z`).
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Null and empty strings count as absent, same as a missing field.
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Copy `windowEnd` into `windowEndTime` wherever the canonical field is absent.
///
/// Idempotent; records that have neither field are left alone.
pub fn normalize_window_end(records: &mut [SensorWindowRecord]) {
    for record in records.iter_mut() {
        if !is_present(record.window_end_time.as_ref()) && is_present(record.window_end.as_ref())
        {
            record.window_end_time = record.window_end.clone();
        }
    }
}

/// Parse a stored timestamp.
///
/// Accepts RFC 3339 strings, ISO 8601 date-times with minute precision or
/// without an offset (read as UTC), bare dates (UTC midnight) and epoch
/// milliseconds.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_timestamp_str(s.trim()),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // 2025-01-15T12:00+01:00
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M%:z") {
        return Some(dt.with_timezone(&Utc));
    }

    // A trailing `Z` on anything shorter than full RFC 3339 is still UTC
    let naive = s.strip_suffix(|c| c == 'Z' || c == 'z').unwrap_or(s);
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(naive, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

impl SensorWindowRecord {
    /// Parsed `windowEndTime`, if present and valid.
    pub fn window_end_at(&self) -> Option<DateTime<Utc>> {
        self.window_end_time.as_ref().and_then(parse_timestamp)
    }
}

/// Newest first; missing or unparseable timestamps sort after every valid one.
fn newest_first(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort by `windowEndTime`, most recent first.
pub fn sort_newest_first(records: &mut [SensorWindowRecord]) {
    records.sort_by(|a, b| newest_first(a.window_end_at(), b.window_end_at()));
}
