//! Claude Stats Library
//!
//! A usage-accounting aggregation engine for Claude Code session logs. The
//! engine scans per-session JSONL activity logs, reconstructs token-usage
//! and cost facts per session, and rolls them up into several simultaneous
//! views: per-day, per-model, per-project, a week-over-week trend, and a
//! bounded "most relevant sessions" list.
//!
//! ## Architecture Overview
//!
//! - [`models`] - Value objects for sessions and all aggregate views
//! - [`record`] - Tagged decoding of individual JSONL log lines
//! - [`timestamp`] - Normalization of heterogeneous timestamp encodings
//! - [`pricing`] - Tiered cost model per model family
//! - [`parser`] - Per-log parsing against a shared deduplication set
//! - [`aggregation`] - Pure reductions over the parsed session list
//! - [`engine`] - The orchestrator composing everything into one result
//! - [`source`] - Log discovery under `~/.claude/projects`
//! - [`display`] - Terminal and JSON rendering
//! - [`config`] / [`logging`] - Configuration and tracing setup
//!
//! Data flows one way: raw log bytes → decoded records → session summaries
//! → aggregation passes → one [`models::ProjectStatistics`]. A single
//! invocation is stateless end-to-end except for the intra-call dedup set,
//! which is discarded when the call returns.
//!
//! ## Usage Example
//!
//! ```no_run
//! use claude_stats::engine::StatisticsService;
//! use claude_stats::source::FsLogSource;
//!
//! let source = FsLogSource::new(dirs::home_dir().unwrap().join(".claude"));
//! let service = StatisticsService::new(source);
//! if let Some(stats) = service.project_statistics("/home/dev/my-project") {
//!     println!("{} sessions, ${:.2}", stats.total_sessions, stats.estimated_cost);
//! }
//! ```

pub mod aggregation;
pub mod config;
pub mod display;
pub mod engine;
pub mod logging;
pub mod models;
pub mod parser;
pub mod pricing;
pub mod record;
pub mod source;
pub mod timestamp;

pub use engine::{all_projects_statistics, project_statistics, StatisticsService};
pub use models::*;
pub use source::{FsLogSource, LogSource, SessionLog};
