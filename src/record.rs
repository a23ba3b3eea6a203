//! Log record decoding.
//!
//! Session logs are newline-delimited JSON with several record kinds mixed
//! together. Each line decodes into a [`LogRecord`]: an assistant turn
//! carrying usage counters, a human-readable session title, or an unknown
//! record we only keep the timestamp from. Fields are optional throughout;
//! a line that is not valid JSON decodes to nothing and is skipped upstream.

use serde::Deserialize;
use serde_json::Value;

use crate::timestamp;

/// Token counters as they appear on an assistant turn. Missing counters
/// default to zero.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TurnUsage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub cache_creation_input_tokens: u64,
    #[serde(default)]
    pub cache_read_input_tokens: u64,
}

impl TurnUsage {
    pub fn total(&self) -> u64 {
        self.input_tokens
            + self.output_tokens
            + self.cache_creation_input_tokens
            + self.cache_read_input_tokens
    }
}

/// The message payload of an assistant turn.
#[derive(Debug, Clone, Deserialize)]
pub struct TurnMessage {
    pub id: Option<String>,
    pub model: Option<String>,
    pub usage: Option<TurnUsage>,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "type")]
    kind: Option<String>,
    timestamp: Option<Value>,
    summary: Option<String>,
    message: Option<TurnMessage>,
    #[serde(rename = "requestId")]
    request_id: Option<String>,
    #[serde(rename = "costUSD")]
    cost_usd: Option<f64>,
}

/// One decoded log line.
#[derive(Debug)]
pub enum LogRecord {
    /// An assistant turn that may carry usage counters.
    Assistant {
        timestamp: Option<i64>,
        message: TurnMessage,
        request_id: Option<String>,
        cost_usd: Option<f64>,
    },
    /// A human-readable session title; the last one wins.
    Summary { timestamp: Option<i64>, title: String },
    /// Any other record kind. Only its timestamp is of interest.
    Unknown { timestamp: Option<i64> },
}

impl LogRecord {
    /// Decode one log line. Returns `None` for lines that are not valid
    /// JSON or whose shape cannot be decoded at all.
    pub fn parse(line: &str) -> Option<LogRecord> {
        let raw: RawRecord = serde_json::from_str(line).ok()?;
        let ts = raw.timestamp.as_ref().and_then(timestamp::normalize);

        Some(match raw.kind.as_deref() {
            Some("assistant") => match raw.message {
                Some(message) => LogRecord::Assistant {
                    timestamp: ts,
                    message,
                    request_id: raw.request_id,
                    cost_usd: raw.cost_usd,
                },
                None => LogRecord::Unknown { timestamp: ts },
            },
            Some("summary") => match raw.summary {
                Some(title) => LogRecord::Summary {
                    timestamp: ts,
                    title,
                },
                None => LogRecord::Unknown { timestamp: ts },
            },
            _ => LogRecord::Unknown { timestamp: ts },
        })
    }

    pub fn timestamp(&self) -> Option<i64> {
        match self {
            LogRecord::Assistant { timestamp, .. }
            | LogRecord::Summary { timestamp, .. }
            | LogRecord::Unknown { timestamp } => *timestamp,
        }
    }
}
