use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
pub fn create_test_jsonl(dir: &Path, filename: &str, content: &str) -> Result<()> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(())
}

/// Create `<claude_home>/projects/<project_folder>` and return its path.
#[allow(dead_code)]
pub fn setup_project_dir(claude_home: &Path, project_folder: &str) -> Result<PathBuf> {
    let dir = claude_home.join("projects").join(project_folder);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// One assistant turn line with the given identifiers and token counts.
#[allow(dead_code)]
pub fn assistant_line(
    timestamp: &str,
    message_id: &str,
    request_id: &str,
    model: &str,
    input_tokens: u64,
    output_tokens: u64,
) -> String {
    format!(
        r#"{{"type":"assistant","timestamp":"{}","message":{{"id":"{}","model":"{}","usage":{{"input_tokens":{},"output_tokens":{},"cache_creation_input_tokens":0,"cache_read_input_tokens":0}}}},"requestId":"{}"}}"#,
        timestamp, message_id, model, input_tokens, output_tokens, request_id
    )
}

/// Same turn but with a pre-calculated cost attached.
#[allow(dead_code)]
pub fn assistant_line_with_cost(
    timestamp: &str,
    message_id: &str,
    request_id: &str,
    model: &str,
    input_tokens: u64,
    output_tokens: u64,
    cost_usd: f64,
) -> String {
    format!(
        r#"{{"type":"assistant","timestamp":"{}","costUSD":{},"message":{{"id":"{}","model":"{}","usage":{{"input_tokens":{},"output_tokens":{}}}}},"requestId":"{}"}}"#,
        timestamp, cost_usd, message_id, model, input_tokens, output_tokens, request_id
    )
}
