//! Log discovery.
//!
//! The engine consumes already-resolved log contents through the
//! [`LogSource`] trait; [`FsLogSource`] is the filesystem implementation
//! over `~/.claude/projects`, where each project directory holds one
//! `*.jsonl` file per session. Directory names are the mangled form of the
//! project path: leading dash, `/` replaced by `-`, non-ASCII characters
//! replaced by `-`.

use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;
use rayon::prelude::*;

use crate::config::get_config;

/// One session log: its identity (the filename stem) plus raw contents.
#[derive(Debug, Clone)]
pub struct SessionLog {
    pub session_id: String,
    pub content: String,
}

/// Supplies raw log contents to the orchestrator.
///
/// `None` means the source is unavailable (no directory for the project, or
/// no projects root at all); `Some(vec![])` means the source exists but has
/// no logs. Unreadable individual files degrade to fewer logs, never to an
/// error.
pub trait LogSource {
    fn project_logs(&self, project_path: &str) -> Option<Vec<SessionLog>>;
    fn all_project_logs(&self) -> Option<Vec<(String, Vec<SessionLog>)>>;
}

/// Convert a project path to its log directory name.
///
/// Mirrors the assistant's own mangling: non-ASCII characters become `-`,
/// the leading path separator is dropped, remaining separators become `-`,
/// and the whole name is prefixed with `-`.
pub fn project_folder_name(project_path: &str) -> String {
    let clean: String = project_path
        .chars()
        .map(|c| if c.is_ascii() { c } else { '-' })
        .collect();

    format!("-{}", clean.get(1..).unwrap_or("").replace('/', "-"))
}

/// Filesystem-backed log source rooted at a Claude home directory.
pub struct FsLogSource {
    projects_dir: PathBuf,
}

impl FsLogSource {
    pub fn new(claude_home: PathBuf) -> Self {
        Self {
            projects_dir: claude_home.join("projects"),
        }
    }

    pub fn from_config() -> Self {
        Self::new(get_config().paths.claude_home.clone())
    }

    fn read_logs(&self, project_dir: &Path) -> Vec<SessionLog> {
        let pattern = project_dir.join("*.jsonl");
        let mut files: Vec<PathBuf> = glob(&pattern.to_string_lossy())
            .map(|paths| paths.flatten().collect())
            .unwrap_or_default();
        files.sort();

        // Reads run in parallel; dedup-sensitive parsing stays sequential in
        // the orchestrator.
        files
            .par_iter()
            .filter_map(|path| match fs::read_to_string(path) {
                Ok(content) => Some(SessionLog {
                    session_id: session_id_of(path),
                    content,
                }),
                Err(err) => {
                    tracing::warn!(
                        file = %path.display(),
                        error = %err,
                        "skipping unreadable session log"
                    );
                    None
                }
            })
            .collect()
    }
}

fn session_id_of(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl LogSource for FsLogSource {
    fn project_logs(&self, project_path: &str) -> Option<Vec<SessionLog>> {
        let project_dir = self.projects_dir.join(project_folder_name(project_path));
        if !project_dir.is_dir() {
            tracing::warn!(dir = %project_dir.display(), "project log directory not found");
            return None;
        }

        Some(self.read_logs(&project_dir))
    }

    fn all_project_logs(&self) -> Option<Vec<(String, Vec<SessionLog>)>> {
        if !self.projects_dir.is_dir() {
            return None;
        }
        let entries = fs::read_dir(&self.projects_dir).ok()?;

        let mut grouped: Vec<(String, Vec<SessionLog>)> = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                let name = entry.file_name().to_string_lossy().into_owned();
                grouped.push((name, self.read_logs(&path)));
            }
        }

        grouped.sort_by(|a, b| a.0.cmp(&b.0));
        Some(grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_folder_name() {
        assert_eq!(
            project_folder_name("/Users/dev/Desktop/project"),
            "-Users-dev-Desktop-project"
        );
    }

    #[test]
    fn test_project_folder_name_non_ascii() {
        assert_eq!(
            project_folder_name("/Users/dev/新project"),
            "-Users-dev--project"
        );
    }

    #[test]
    fn test_project_folder_name_degenerate() {
        assert_eq!(project_folder_name(""), "-");
        assert_eq!(project_folder_name("/"), "-");
    }

    #[test]
    fn test_session_id_is_file_stem() {
        assert_eq!(
            session_id_of(Path::new("/tmp/projects/-p/abc-123.jsonl")),
            "abc-123"
        );
    }
}
