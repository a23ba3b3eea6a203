use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

/// Numeric timestamps below this value are epoch seconds, at or above it
/// epoch milliseconds. Known heuristic: a second-granularity producer past
/// 2286-11-20 (1e12 seconds) would be misread as milliseconds.
pub const EPOCH_MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

/// Normalize a raw timestamp field of unknown shape into epoch milliseconds.
///
/// Strings are parsed as ISO 8601; numbers are disambiguated by magnitude.
/// Missing or unparseable values yield `None`.
pub fn normalize(value: &Value) -> Option<i64> {
    match value {
        Value::String(s) => parse_datetime(s).ok().map(|dt| dt.timestamp_millis()),
        Value::Number(n) => {
            let raw = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            if raw < EPOCH_MILLIS_THRESHOLD {
                Some(raw * 1000)
            } else {
                Some(raw)
            }
        }
        _ => None,
    }
}

/// Parse an ISO 8601 timestamp string into a `DateTime<Utc>`.
/// Handles both Z suffix and timezone info formats.
pub fn parse_datetime(timestamp_str: &str) -> Result<DateTime<Utc>> {
    // Handle both Z suffix and timezone info
    let timestamp = if timestamp_str.ends_with('Z') {
        timestamp_str.replace('Z', "+00:00")
    } else {
        timestamp_str.to_string()
    };

    // Try parsing as ISO 8601
    if let Ok(dt) = DateTime::parse_from_rfc3339(&timestamp) {
        return Ok(dt.with_timezone(&Utc));
    }

    // Try parsing as naive datetime and assume UTC
    if let Ok(naive) = NaiveDateTime::parse_from_str(&timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(DateTime::from_naive_utc_and_offset(naive, Utc));
    }

    anyhow::bail!("Failed to parse timestamp: {}", timestamp_str)
}
