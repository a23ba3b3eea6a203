//! Aggregation passes over the parsed session list.
//!
//! Every function here is a pure reduction over `&[SessionSummary]`: daily
//! and per-model bucketing, the week-over-week comparison, and the bounded
//! top-session selection. Accumulation is commutative, so input order never
//! changes the totals.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    DailyUsage, ModelUsage, SessionSummary, UsageData, WeekTotals, WeeklyComparison, WeeklyTrends,
};

/// How many most-recent sessions the selector always keeps.
pub const RECENT_SESSION_LIMIT: usize = 100;
/// How many highest-cost sessions the selector always keeps.
pub const COSTLY_SESSION_LIMIT: usize = 100;

fn utc_date(timestamp_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .format("%Y-%m-%d")
        .to_string()
}

/// Bucket sessions by the UTC calendar date of their timestamp, ascending
/// by date.
pub fn aggregate_daily(sessions: &[SessionSummary]) -> Vec<DailyUsage> {
    let mut buckets: HashMap<String, DailyUsage> = HashMap::new();

    for session in sessions {
        let date = utc_date(session.timestamp);
        let daily = buckets.entry(date.clone()).or_insert_with(|| DailyUsage {
            date,
            sessions: 0,
            usage: UsageData::default(),
            cost: 0.0,
            models_used: Vec::new(),
        });

        daily.sessions += 1;
        daily.usage.add(&session.usage);
        daily.cost += session.cost;
        if !daily.models_used.contains(&session.model) {
            daily.models_used.push(session.model.clone());
        }
    }

    let mut days: Vec<DailyUsage> = buckets.into_values().collect();
    days.sort_by(|a, b| a.date.cmp(&b.date));
    days
}

/// Bucket sessions by model string, descending by total cost.
pub fn aggregate_by_model(sessions: &[SessionSummary]) -> Vec<ModelUsage> {
    let mut buckets: HashMap<String, ModelUsage> = HashMap::new();

    for session in sessions {
        let entry = buckets
            .entry(session.model.clone())
            .or_insert_with(|| ModelUsage {
                model: session.model.clone(),
                total_cost: 0.0,
                total_tokens: 0,
                input_tokens: 0,
                output_tokens: 0,
                cache_creation_tokens: 0,
                cache_read_tokens: 0,
                session_count: 0,
            });

        entry.total_cost += session.cost;
        entry.total_tokens += session.usage.total_tokens;
        entry.input_tokens += session.usage.input_tokens;
        entry.output_tokens += session.usage.output_tokens;
        entry.cache_creation_tokens += session.usage.cache_write_tokens;
        entry.cache_read_tokens += session.usage.cache_read_tokens;
        entry.session_count += 1;
    }

    let mut models: Vec<ModelUsage> = buckets.into_values().collect();
    models.sort_by(|a, b| b.total_cost.total_cmp(&a.total_cost));
    models
}

fn trend_pct(current: f64, prior: f64) -> f64 {
    if prior == 0.0 {
        0.0
    } else {
        (current - prior) / prior * 100.0
    }
}

/// Compare the two most recent 7-day windows.
///
/// Windows are half-open: current is `[now-7d, now)`, last is
/// `[now-14d, now-7d)`, so no session is counted in both.
pub fn compare_weeks(sessions: &[SessionSummary], now: DateTime<Utc>) -> WeeklyComparison {
    let now_ms = now.timestamp_millis();
    let week_ms = Duration::days(7).num_milliseconds();
    let current_start = now_ms - week_ms;
    let last_start = now_ms - 2 * week_ms;

    let mut current_week = WeekTotals::default();
    let mut last_week = WeekTotals::default();

    for session in sessions {
        let ts = session.timestamp;
        let totals = if ts >= current_start && ts < now_ms {
            &mut current_week
        } else if ts >= last_start && ts < current_start {
            &mut last_week
        } else {
            continue;
        };

        totals.sessions += 1;
        totals.cost += session.cost;
        totals.tokens += session.usage.total_tokens;
    }

    let trends = WeeklyTrends {
        sessions: trend_pct(current_week.sessions as f64, last_week.sessions as f64),
        cost: trend_pct(current_week.cost, last_week.cost),
        tokens: trend_pct(current_week.tokens as f64, last_week.tokens as f64),
    };

    WeeklyComparison {
        current_week,
        last_week,
        trends,
    }
}

/// Reduce a session list to a bounded, display-ready subset.
///
/// Takes the union of the 100 most recent and the 100 highest-cost sessions
/// keyed by session id, then orders it by timestamp descending. The newest
/// and the most expensive session are always present; the result never
/// exceeds 200 entries.
pub fn select_top_sessions(sessions: &[SessionSummary]) -> Vec<SessionSummary> {
    let mut by_time: Vec<&SessionSummary> = sessions.iter().collect();
    by_time.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut by_cost: Vec<&SessionSummary> = sessions.iter().collect();
    by_cost.sort_by(|a, b| b.cost.total_cmp(&a.cost));

    let mut seen_ids: HashSet<&str> = HashSet::new();
    let mut selected: Vec<SessionSummary> = Vec::new();

    for session in by_time
        .iter()
        .take(RECENT_SESSION_LIMIT)
        .chain(by_cost.iter().take(COSTLY_SESSION_LIMIT))
    {
        if seen_ids.insert(session.session_id.as_str()) {
            selected.push((*session).clone());
        }
    }

    selected.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session(id: &str, timestamp: i64, cost: f64, tokens: u64) -> SessionSummary {
        SessionSummary {
            session_id: id.to_string(),
            timestamp,
            model: "claude-sonnet-4".to_string(),
            usage: UsageData {
                input_tokens: tokens,
                output_tokens: 0,
                cache_write_tokens: 0,
                cache_read_tokens: 0,
                total_tokens: tokens,
            },
            cost,
            summary: None,
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_daily_buckets_sorted_ascending() {
        let day = Duration::days(1).num_milliseconds();
        let base = fixed_now().timestamp_millis();
        let sessions = vec![
            session("a", base, 1.0, 100),
            session("b", base - 2 * day, 2.0, 200),
            session("c", base - day, 3.0, 300),
        ];
        let daily = aggregate_daily(&sessions);
        assert_eq!(daily.len(), 3);
        assert!(daily.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_daily_totals_are_order_independent() {
        let base = fixed_now().timestamp_millis();
        let mut sessions = vec![
            session("a", base, 1.0, 100),
            session("b", base + 1000, 2.0, 200),
            session("c", base + 2000, 4.0, 400),
        ];
        let forward = aggregate_daily(&sessions);
        sessions.reverse();
        let reversed = aggregate_daily(&sessions);
        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].sessions, reversed[0].sessions);
        assert_eq!(forward[0].usage.total_tokens, reversed[0].usage.total_tokens);
        assert_eq!(forward[0].cost, reversed[0].cost);
    }

    #[test]
    fn test_model_aggregation_orders_by_cost() {
        let base = fixed_now().timestamp_millis();
        let mut cheap = session("a", base, 0.5, 100);
        cheap.model = "claude-haiku-4".to_string();
        let mut pricey = session("b", base, 9.0, 100);
        pricey.model = "claude-opus-4".to_string();

        let models = aggregate_by_model(&[cheap, pricey]);
        assert_eq!(models[0].model, "claude-opus-4");
        assert_eq!(models[1].model, "claude-haiku-4");
        assert_eq!(models[0].session_count, 1);
    }

    #[test]
    fn test_weekly_trend_zero_prior_is_zero() {
        let now = fixed_now();
        let day = Duration::days(1).num_milliseconds();
        let sessions = vec![session("a", now.timestamp_millis() - 2 * day, 5.0, 100)];
        let comparison = compare_weeks(&sessions, now);
        assert_eq!(comparison.current_week.sessions, 1);
        assert_eq!(comparison.last_week.sessions, 0);
        assert_eq!(comparison.trends.cost, 0.0);
        assert_eq!(comparison.trends.sessions, 0.0);
        assert!(comparison.trends.tokens.is_finite());
    }

    #[test]
    fn test_weekly_cost_trend() {
        // 2 days old at 1.00 vs 9 days old at 5.00: (1-5)/5*100 = -80
        let now = fixed_now();
        let day = Duration::days(1).num_milliseconds();
        let sessions = vec![
            session("recent", now.timestamp_millis() - 2 * day, 1.0, 100),
            session("older", now.timestamp_millis() - 9 * day, 5.0, 100),
        ];
        let comparison = compare_weeks(&sessions, now);
        assert_eq!(comparison.current_week.sessions, 1);
        assert_eq!(comparison.last_week.sessions, 1);
        assert!((comparison.trends.cost - (-80.0)).abs() < 1e-9);
    }

    #[test]
    fn test_window_boundary_is_half_open() {
        let now = fixed_now();
        let week = Duration::days(7).num_milliseconds();
        // Exactly on the 7-day boundary belongs to the current window only
        let sessions = vec![session("edge", now.timestamp_millis() - week, 1.0, 100)];
        let comparison = compare_weeks(&sessions, now);
        assert_eq!(comparison.current_week.sessions, 1);
        assert_eq!(comparison.last_week.sessions, 0);
    }

    #[test]
    fn test_top_sessions_bounded_and_complete() {
        let base = fixed_now().timestamp_millis();
        // 300 sessions: newest have low cost, oldest have high cost
        let sessions: Vec<SessionSummary> = (0..300)
            .map(|i| session(&format!("s{}", i), base - i as i64 * 60_000, i as f64, 100))
            .collect();

        let top = select_top_sessions(&sessions);
        assert!(top.len() <= RECENT_SESSION_LIMIT + COSTLY_SESSION_LIMIT);
        // Globally newest (s0) and globally highest-cost (s299) both survive
        assert!(top.iter().any(|s| s.session_id == "s0"));
        assert!(top.iter().any(|s| s.session_id == "s299"));
        // Presentation order is timestamp descending
        assert!(top.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn test_top_sessions_union_counts_once() {
        let base = fixed_now().timestamp_millis();
        // The same session is both newest and most expensive
        let sessions = vec![session("only", base, 100.0, 100)];
        let top = select_top_sessions(&sessions);
        assert_eq!(top.len(), 1);
    }
}
