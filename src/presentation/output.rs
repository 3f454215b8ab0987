//! Output Rendering
//!
//! Text and JSON forms of what the local commands print.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::application::WatchEvent;
use crate::domain::value_objects::ModTime;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Serialize)]
struct IndexEntryJson {
    path: String,
    mtime: ModTime,
}

#[derive(Serialize)]
struct IndexJson {
    root: String,
    count: usize,
    entries: Vec<IndexEntryJson>,
}

/// Render one walk of `root`.
///
/// Text paths are shown relative to the root; JSON keeps them absolute.
pub fn render_index(root: &Path, entries: &[(PathBuf, ModTime)], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for (path, mtime) in entries {
                let shown = path.strip_prefix(root).unwrap_or(path);
                out.push_str(&format!("{}  {}\n", mtime, shown.display()));
            }
            out.push_str(&format!(
                "{} files under {}\n",
                entries.len(),
                root.display()
            ));
            out
        }
        OutputFormat::Json => {
            let json = IndexJson {
                root: root.display().to_string(),
                count: entries.len(),
                entries: entries
                    .iter()
                    .map(|(path, mtime)| IndexEntryJson {
                        path: path.display().to_string(),
                        mtime: *mtime,
                    })
                    .collect(),
            };
            serde_json::to_string_pretty(&json).unwrap_or_default()
        }
    }
}

/// Render one watch event as a single line.
///
/// `clock` is the local wall-clock time shown in text mode.
pub fn render_watch_event(event: &WatchEvent, clock: &str, format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        return event.to_json();
    }
    match event {
        WatchEvent::WatchStarted { root } => {
            format!("[{}] Watching {} (Ctrl+C to stop)", clock, root)
        }
        WatchEvent::Changed { path: Some(path) } => format!("[{}] Changed: {}", clock, path),
        WatchEvent::Changed { path: None } => format!("[{}] Changed", clock),
        WatchEvent::Error { message } => format!("[{}] Error: {}", clock, message),
        WatchEvent::Shutdown => format!("[{}] Stopped", clock),
    }
}
