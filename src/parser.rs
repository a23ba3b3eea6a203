//! Session log parsing.
//!
//! Consumes the raw text of one newline-delimited JSON log and produces at
//! most one [`SessionSummary`]. Deduplication state is shared across files:
//! the caller owns a set of `"message_id:request_id"` keys and passes it
//! into every parse call of one invocation, so a billing event recorded in
//! more than one file is only counted once.

use std::collections::HashSet;

use chrono::Utc;

use crate::models::{SessionSummary, UsageData};
use crate::pricing;
use crate::record::LogRecord;

/// Build the deduplication key for one assistant turn.
/// Returns `None` unless both identifiers are present and non-empty.
pub fn dedup_key(message_id: &str, request_id: &str) -> Option<String> {
    if message_id.is_empty() || request_id.is_empty() {
        return None;
    }

    Some(format!("{}:{}", message_id, request_id))
}

/// Parse one session log against the shared dedup set.
///
/// Returns `None` when the log contributes no token usage at all, so an
/// all-zero session never reaches the aggregates. The session timestamp is
/// the first parseable timestamp in line order, falling back to the time of
/// processing when the log carries none.
pub fn parse_session_log(
    session_id: &str,
    content: &str,
    seen: &mut HashSet<String>,
) -> Option<SessionSummary> {
    let mut usage = UsageData::default();
    let mut first_timestamp: Option<i64> = None;
    let mut model = String::from("unknown");
    let mut total_cost = 0.0f64;
    let mut title: Option<String> = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(record) = LogRecord::parse(line) else {
            continue;
        };

        if first_timestamp.is_none() {
            first_timestamp = record.timestamp();
        }

        match record {
            LogRecord::Summary { title: t, .. } => title = Some(t),
            LogRecord::Assistant {
                message,
                request_id,
                cost_usd,
                ..
            } => {
                let Some(turn) = message.usage else {
                    continue;
                };

                // The key is inserted before the zero-token check: a turn is
                // "seen" regardless of payload, so a later duplicate under
                // the same key stays dropped even if it carries tokens.
                if let (Some(message_id), Some(request_id)) = (&message.id, &request_id) {
                    if let Some(key) = dedup_key(message_id, request_id) {
                        if !seen.insert(key) {
                            tracing::debug!(
                                message_id = %message_id,
                                request_id = %request_id,
                                "skipping duplicate entry"
                            );
                            continue;
                        }
                    }
                }

                if turn.total() == 0 {
                    continue;
                }

                if model == "unknown" {
                    if let Some(m) = message.model.as_deref() {
                        if !m.is_empty() {
                            model = m.to_string();
                        }
                    }
                }

                usage.input_tokens += turn.input_tokens;
                usage.output_tokens += turn.output_tokens;
                usage.cache_write_tokens += turn.cache_creation_input_tokens;
                usage.cache_read_tokens += turn.cache_read_input_tokens;

                // A cost supplied by the log entry wins over the computed one
                total_cost += match cost_usd {
                    Some(cost) => cost,
                    None => pricing::calculate_cost(
                        message.model.as_deref().unwrap_or(""),
                        turn.input_tokens,
                        turn.output_tokens,
                        turn.cache_creation_input_tokens,
                        turn.cache_read_input_tokens,
                    ),
                };
            }
            LogRecord::Unknown { .. } => {}
        }
    }

    usage.total_tokens = usage.component_sum();
    if usage.total_tokens == 0 {
        return None;
    }

    let timestamp = first_timestamp.unwrap_or_else(|| Utc::now().timestamp_millis());

    Some(SessionSummary {
        session_id: session_id.to_string(),
        timestamp,
        model,
        usage,
        cost: total_cost,
        summary: title,
    })
}
