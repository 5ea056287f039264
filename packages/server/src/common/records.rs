use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One aggregation window of sensor readings, as stored in the document store.
///
/// Documents are never validated. The fields the views read are kept as raw
/// JSON so an oddly typed value (`"readingCount": 30.0`, a string
/// measurement) passes through instead of failing the whole page, and an
/// explicit `null` survives re-serialization. Everything else on the document
/// (`id`, `_rid`, `_ts`, ...) is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SensorWindowRecord {
    #[serde(deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,

    /// Canonical end-of-window timestamp.
    #[serde(deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub window_end_time: Option<Value>,

    /// Legacy name for `window_end_time`, still present on older documents.
    #[serde(deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub window_end: Option<Value>,

    /// "Safe", "Caution" or "Unsafe" by convention; opaque here.
    #[serde(deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub safety_status: Option<Value>,

    #[serde(deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub avg_ice_thickness_cm: Option<Value>,

    #[serde(deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub avg_surface_temperature_c: Option<Value>,

    #[serde(deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub max_snow_accumulation_cm: Option<Value>,

    #[serde(deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub avg_external_temperature_c: Option<Value>,

    #[serde(deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub reading_count: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A present field is `Some`, even when it holds `null`; only an absent field
/// falls back to `None` through `#[serde(default)]`.
fn keep_null<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl SensorWindowRecord {
    /// `location`, when it is a string
    pub fn location_str(&self) -> Option<&str> {
        self.location.as_ref().and_then(Value::as_str)
    }

    /// `safetyStatus`, when it is a string
    pub fn safety_status_str(&self) -> Option<&str> {
        self.safety_status.as_ref().and_then(Value::as_str)
    }
}
