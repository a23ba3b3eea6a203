//! Core Data Models
//!
//! Value objects for the statistics pipeline. Data flows through these types
//! in one direction:
//!
//! 1. [`SessionSummary`] - one parsed session log (see [`crate::parser`])
//! 2. [`DailyUsage`], [`ModelUsage`], [`WeeklyComparison`] - aggregate views
//! 3. [`ProjectStatistics`] - the composed result for one invocation
//!
//! All public types serialize with camelCase wire names for JSON output.
//! Aggregates are owned by the invocation that produced them and are never
//! persisted; every call recomputes from source logs.

use serde::Serialize;

/// Token consumption, broken down by kind.
///
/// Invariant: `total_tokens` equals the sum of the four components wherever
/// this type appears.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsageData {
    #[serde(rename = "inputTokens")]
    pub input_tokens: u64,
    #[serde(rename = "outputTokens")]
    pub output_tokens: u64,
    #[serde(rename = "cacheWriteTokens")]
    pub cache_write_tokens: u64,
    #[serde(rename = "cacheReadTokens")]
    pub cache_read_tokens: u64,
    #[serde(rename = "totalTokens")]
    pub total_tokens: u64,
}

impl UsageData {
    /// Accumulate another usage record into this one, all five fields.
    pub fn add(&mut self, other: &UsageData) {
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
        self.cache_write_tokens += other.cache_write_tokens;
        self.cache_read_tokens += other.cache_read_tokens;
        self.total_tokens += other.total_tokens;
    }

    pub fn component_sum(&self) -> u64 {
        self.input_tokens + self.output_tokens + self.cache_write_tokens + self.cache_read_tokens
    }
}

/// One session reconstructed from a single log file.
///
/// Produced once by the parser and immutable thereafter. `session_id` is the
/// log filename stem; `timestamp` is the first observed event time in epoch
/// milliseconds.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub timestamp: i64,
    pub model: String,
    pub usage: UsageData,
    pub cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Usage rolled up per model identifier, ordered by descending total cost.
#[derive(Debug, Clone, Serialize)]
pub struct ModelUsage {
    pub model: String,
    #[serde(rename = "totalCost")]
    pub total_cost: f64,
    #[serde(rename = "totalTokens")]
    pub total_tokens: u64,
    #[serde(rename = "inputTokens")]
    pub input_tokens: u64,
    #[serde(rename = "outputTokens")]
    pub output_tokens: u64,
    #[serde(rename = "cacheCreationTokens")]
    pub cache_creation_tokens: u64,
    #[serde(rename = "cacheReadTokens")]
    pub cache_read_tokens: u64,
    #[serde(rename = "sessionCount")]
    pub session_count: u64,
}

/// Usage rolled up per UTC calendar date, ordered by ascending date.
#[derive(Debug, Clone, Serialize)]
pub struct DailyUsage {
    pub date: String,
    pub sessions: u64,
    pub usage: UsageData,
    pub cost: f64,
    #[serde(rename = "modelsUsed")]
    pub models_used: Vec<String>,
}

/// Totals for one 7-day window.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WeekTotals {
    pub sessions: u64,
    pub cost: f64,
    pub tokens: u64,
}

/// Percentage deltas between the two windows; 0 when the prior window's
/// value for that metric is 0.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WeeklyTrends {
    pub sessions: f64,
    pub cost: f64,
    pub tokens: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WeeklyComparison {
    #[serde(rename = "currentWeek")]
    pub current_week: WeekTotals,
    #[serde(rename = "lastWeek")]
    pub last_week: WeekTotals,
    pub trends: WeeklyTrends,
}

/// The aggregate root: everything known about one project (or all projects
/// combined) at the time of the call that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectStatistics {
    #[serde(rename = "projectPath")]
    pub project_path: String,
    #[serde(rename = "projectName")]
    pub project_name: String,
    #[serde(rename = "totalSessions")]
    pub total_sessions: u64,
    #[serde(rename = "totalUsage")]
    pub total_usage: UsageData,
    #[serde(rename = "estimatedCost")]
    pub estimated_cost: f64,
    pub sessions: Vec<SessionSummary>,
    #[serde(rename = "dailyUsage")]
    pub daily_usage: Vec<DailyUsage>,
    #[serde(rename = "weeklyComparison")]
    pub weekly_comparison: WeeklyComparison,
    #[serde(rename = "byModel")]
    pub by_model: Vec<ModelUsage>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: i64,
}
