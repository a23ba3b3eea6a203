//! Performance benchmarks for parsing and aggregation
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::HashSet;

use claude_stats::engine;
use claude_stats::parser::parse_session_log;
use claude_stats::source::SessionLog;

/// Generate test JSONL data with specified number of lines. The salt keeps
/// message ids distinct between generated logs so deduplication does not
/// short-circuit the work being measured.
fn generate_test_jsonl(num_lines: usize, salt: usize, include_errors: bool) -> String {
    let mut lines = Vec::new();

    for i in 0..num_lines {
        if include_errors && i % 10 == 5 {
            // Insert malformed line every 10th entry
            lines.push("{broken json}".to_string());
        } else {
            lines.push(format!(
                r#"{{"timestamp":"2025-06-{:02}T10:30:{:02}Z","type":"assistant","message":{{"id":"msg_{}_{}","model":"claude-sonnet-4-20250514","usage":{{"input_tokens":{},"output_tokens":{},"cache_creation_input_tokens":{},"cache_read_input_tokens":{}}}}},"requestId":"req_{}_{}"}}"#,
                1 + i % 28,
                i % 60,
                salt,
                i,
                100 + i,
                200 + i,
                i % 50,
                i % 100,
                salt,
                i
            ));
        }
    }

    lines.join("\n")
}

fn benchmark_parse_session_log(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_session_log");

    for size in [10usize, 100, 1000, 10000].iter() {
        let content = generate_test_jsonl(*size, 0, true);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut seen = HashSet::new();
                parse_session_log("bench-session", black_box(&content), &mut seen)
            });
        });
    }

    group.finish();
}

fn benchmark_project_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("project_statistics");

    for num_logs in [10usize, 100, 500].iter() {
        let logs: Vec<SessionLog> = (0..*num_logs)
            .map(|i| SessionLog {
                session_id: format!("session-{}", i),
                content: generate_test_jsonl(50, i, false),
            })
            .collect();
        let now = chrono::Utc::now();

        group.bench_with_input(BenchmarkId::from_parameter(num_logs), num_logs, |b, _| {
            b.iter(|| engine::project_statistics("/home/dev/bench", black_box(&logs), now));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse_session_log,
    benchmark_project_statistics
);
criterion_main!(benches);
