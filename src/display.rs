//! Output Formatting
//!
//! Renders one [`ProjectStatistics`] either as pretty-printed JSON for
//! programmatic consumption or as a colored terminal report: totals,
//! week-over-week comparison, per-model breakdown, recent daily activity,
//! and the most relevant sessions.

use crate::models::{ProjectStatistics, WeeklyComparison};
use chrono::DateTime;
use colored::Colorize;

/// How many daily rows and sessions the terminal report shows.
const DAILY_DISPLAY_LIMIT: usize = 7;
const SESSION_DISPLAY_LIMIT: usize = 10;

pub struct ReportRenderer;

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, stats: &ProjectStatistics, json_output: bool) {
        if json_output {
            match serde_json::to_string_pretty(stats) {
                Ok(json_str) => println!("{}", json_str),
                Err(e) => eprintln!("Error serializing statistics to JSON: {}", e),
            }
            return;
        }

        println!("\n{}", "=".repeat(80).bright_cyan());
        println!(
            "{}",
            format!("Claude Code Usage Report - {}", stats.project_name)
                .bright_white()
                .bold()
        );
        println!("{}", stats.project_path.bright_black());
        println!("{}", "=".repeat(80).bright_cyan());

        println!(
            "\n{} {} sessions • {} tokens • {} total\n",
            "📊".bright_yellow(),
            stats.total_sessions.to_string().bright_white().bold(),
            format_tokens(stats.total_usage.total_tokens)
                .bright_white()
                .bold(),
            format!("${:.2}", stats.estimated_cost).bright_green().bold()
        );

        self.render_weekly(&stats.weekly_comparison);
        self.render_models(stats);
        self.render_daily(stats);
        self.render_sessions(stats);
    }

    fn render_weekly(&self, weekly: &WeeklyComparison) {
        println!("{} This week vs last week:", "📈".bright_blue());
        println!(
            "   Sessions: {} vs {} ({})",
            weekly.current_week.sessions.to_string().bright_white(),
            weekly.last_week.sessions.to_string().bright_white(),
            format_trend(weekly.trends.sessions)
        );
        println!(
            "   Cost: {} vs {} ({})",
            format!("${:.2}", weekly.current_week.cost).bright_green(),
            format!("${:.2}", weekly.last_week.cost).bright_green(),
            format_trend(weekly.trends.cost)
        );
        println!(
            "   Tokens: {} vs {} ({})",
            format_tokens(weekly.current_week.tokens).bright_white(),
            format_tokens(weekly.last_week.tokens).bright_white(),
            format_trend(weekly.trends.tokens)
        );
        println!();
    }

    fn render_models(&self, stats: &ProjectStatistics) {
        if stats.by_model.is_empty() {
            return;
        }

        println!("{} By model:", "🤖".bright_yellow());
        for model in &stats.by_model {
            let percentage = if stats.estimated_cost > 0.0 {
                model.total_cost / stats.estimated_cost * 100.0
            } else {
                0.0
            };
            println!(
                "   {}: {} ({}%, {} sessions, {} tokens)",
                model.model.bright_cyan(),
                format!("${:.2}", model.total_cost).bright_green(),
                format!("{:.0}", percentage).bright_yellow(),
                model.session_count.to_string().bright_white(),
                format_tokens(model.total_tokens).bright_white()
            );
        }
        println!();
    }

    fn render_daily(&self, stats: &ProjectStatistics) {
        if stats.daily_usage.is_empty() {
            return;
        }

        let recent: Vec<_> = stats
            .daily_usage
            .iter()
            .rev()
            .take(DAILY_DISPLAY_LIMIT)
            .collect();
        println!(
            "{} Recent daily usage (last {}):",
            "📅".bright_blue(),
            recent.len().to_string().bright_white().bold()
        );
        for day in recent.iter().rev() {
            println!(
                "   {}: {} ({} sessions, {} tokens)",
                day.date.bright_white().bold(),
                format!("${:.2}", day.cost).bright_green(),
                day.sessions.to_string().bright_white(),
                format_tokens(day.usage.total_tokens).bright_white()
            );
        }
        println!();
    }

    fn render_sessions(&self, stats: &ProjectStatistics) {
        if stats.sessions.is_empty() {
            return;
        }

        let shown = stats.sessions.iter().take(SESSION_DISPLAY_LIMIT);
        println!("{} Most relevant sessions:", "💬".bright_magenta());
        for session in shown {
            let date = DateTime::from_timestamp_millis(session.timestamp)
                .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "unknown".to_string());
            let title = session
                .summary
                .as_deref()
                .unwrap_or(session.session_id.as_str());
            println!(
                "   {} — {} ({}, {} tokens)",
                date.bright_white(),
                title.bright_cyan(),
                format!("${:.2}", session.cost).bright_green(),
                format_tokens(session.usage.total_tokens).bright_white()
            );
        }
        println!();
    }
}

fn format_trend(pct: f64) -> String {
    if pct > 0.0 {
        format!("↑{:.0}%", pct).bright_red().to_string()
    } else if pct < 0.0 {
        format!("↓{:.0}%", pct.abs()).bright_green().to_string()
    } else {
        "→0%".bright_black().to_string()
    }
}

fn format_tokens(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}k", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}
