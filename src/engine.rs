//! Statistics Orchestration
//!
//! The orchestrator composes parsing and aggregation into one
//! [`ProjectStatistics`] per call. It owns the deduplication set for the
//! duration of a single invocation: per-project calls get a set scoped to
//! that call, the all-projects call shares one set across every project's
//! logs so a billing event mirrored into two projects is still counted once.
//!
//! Both entry operations are pure functions of their inputs plus the clock;
//! an empty log set yields a well-formed zero-valued result, never an error.
//! [`StatisticsService`] wraps them with a [`LogSource`] and an injectable
//! clock for the binary and for deterministic tests.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::aggregation;
use crate::models::{ProjectStatistics, SessionSummary, UsageData};
use crate::parser;
use crate::source::{LogSource, SessionLog};

/// How many daily buckets the composed result keeps.
pub const DAILY_WINDOW_DAYS: usize = 30;

/// Project label used for the combined all-projects view.
pub const ALL_PROJECTS_PATH: &str = "all";
pub const ALL_PROJECTS_NAME: &str = "All Projects";

/// Compute statistics for one project from its resolved log contents.
///
/// The dedup set is scoped to this call. An empty `logs` slice produces a
/// zero-valued result with empty lists.
pub fn project_statistics(
    project_path: &str,
    logs: &[SessionLog],
    now: DateTime<Utc>,
) -> ProjectStatistics {
    let mut seen: HashSet<String> = HashSet::new();
    let sessions = parse_logs(logs, &mut seen);

    assemble(
        project_path.to_string(),
        project_name_of(project_path),
        sessions,
        now,
    )
}

/// Compute combined statistics across every project's logs.
///
/// One dedup set is shared across all projects for the whole call, so an
/// event recorded under two projects is counted exactly once.
pub fn all_projects_statistics(
    logs_by_project: &[(String, Vec<SessionLog>)],
    now: DateTime<Utc>,
) -> ProjectStatistics {
    let mut seen: HashSet<String> = HashSet::new();
    let mut sessions = Vec::new();

    for (_, logs) in logs_by_project {
        sessions.extend(parse_logs(logs, &mut seen));
    }

    assemble(
        ALL_PROJECTS_PATH.to_string(),
        ALL_PROJECTS_NAME.to_string(),
        sessions,
        now,
    )
}

fn parse_logs(logs: &[SessionLog], seen: &mut HashSet<String>) -> Vec<SessionSummary> {
    logs.iter()
        .filter_map(|log| parser::parse_session_log(&log.session_id, &log.content, seen))
        .collect()
}

fn project_name_of(project_path: &str) -> String {
    Path::new(project_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| project_path.to_string())
}

fn assemble(
    project_path: String,
    project_name: String,
    sessions: Vec<SessionSummary>,
    now: DateTime<Utc>,
) -> ProjectStatistics {
    let mut total_usage = UsageData::default();
    let mut estimated_cost = 0.0f64;
    for session in &sessions {
        total_usage.add(&session.usage);
        estimated_cost += session.cost;
    }

    let daily = aggregation::aggregate_daily(&sessions);
    let daily_usage = if daily.len() > DAILY_WINDOW_DAYS {
        daily[daily.len() - DAILY_WINDOW_DAYS..].to_vec()
    } else {
        daily
    };

    ProjectStatistics {
        total_sessions: sessions.len() as u64,
        total_usage,
        estimated_cost,
        daily_usage,
        weekly_comparison: aggregation::compare_weeks(&sessions, now),
        by_model: aggregation::aggregate_by_model(&sessions),
        sessions: aggregation::select_top_sessions(&sessions),
        project_path,
        project_name,
        last_updated: now.timestamp_millis(),
    }
}

/// Entry point tying a [`LogSource`] and a clock to the two operations.
pub struct StatisticsService<S: LogSource> {
    source: S,
    clock: fn() -> DateTime<Utc>,
}

impl<S: LogSource> StatisticsService<S> {
    pub fn new(source: S) -> Self {
        Self::with_clock(source, Utc::now)
    }

    /// A fixed clock makes the weekly comparison deterministic in tests.
    pub fn with_clock(source: S, clock: fn() -> DateTime<Utc>) -> Self {
        Self { source, clock }
    }

    /// Statistics for one project, or `None` when the source has no log
    /// directory for it.
    pub fn project_statistics(&self, project_path: &str) -> Option<ProjectStatistics> {
        let logs = self.source.project_logs(project_path)?;
        Some(project_statistics(project_path, &logs, (self.clock)()))
    }

    /// Combined statistics across all projects, or `None` when the source
    /// itself is unavailable.
    pub fn all_projects_statistics(&self) -> Option<ProjectStatistics> {
        let grouped = self.source.all_project_logs()?;
        Some(all_projects_statistics(&grouped, (self.clock)()))
    }
}
