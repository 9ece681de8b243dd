use chrono::{DateTime, SecondsFormat};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::EventKind;

/// Lenient deserializer for optional session-line fields.
///
/// Any JSON value is accepted; a value of the wrong shape becomes `None` so
/// one off-type field never rejects the whole line.
pub fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Event `type` that maps anything other than a known kind name to [`EventKind::Other`]
pub fn deserialize_event_kind<'de, D>(deserializer: D) -> Result<EventKind, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(EventKind::deserialize(value).unwrap_or_default())
}

/// Lenient timestamp deserializer for session lines.
///
/// Accepts RFC3339 strings (kept verbatim, even if unparseable) and integer
/// Unix timestamps in milliseconds (normalized to RFC3339). Any other shape
/// yields `None` instead of an error so the surrounding line still parses.
pub fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
        _ => None,
    })
}
