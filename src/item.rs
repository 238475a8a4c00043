//! The unit of work flowing through a pipeline.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{Map, Value, json};

/// A single item in a file-processing pipeline, conventionally a file.
///
/// The debug stage treats items as read-only: it never mutates one, and
/// always forwards the exact value it received. `path` and `stat` are
/// optional because an item may not be backed by a real file (e.g. an
/// in-memory record early in a pipeline).
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// Working directory the pipeline was started from.
    pub cwd: PathBuf,
    /// Base directory the item was resolved against (glob base, etc.).
    pub base: PathBuf,
    /// Full path of the item, when it has one.
    pub path: Option<PathBuf>,
    /// Stat-like metadata block, rendered only in verbose mode.
    pub stat: Option<Value>,
}

impl Item {
    pub fn new(cwd: impl Into<PathBuf>, base: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            base: base.into(),
            path: None,
            stat: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_stat(mut self, stat: Value) -> Self {
        self.stat = Some(stat);
        self
    }

    /// Attach a stat block derived from filesystem metadata.
    ///
    /// Timestamps are rendered as ISO 8601 strings rather than raw epoch
    /// seconds so the verbose output is readable without a calculator.
    pub fn with_fs_stat(mut self, metadata: &std::fs::Metadata) -> Self {
        let mut stat = Map::new();
        stat.insert("size".into(), json!(metadata.len()));
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            stat.insert("mode".into(), json!(metadata.mode()));
            stat.insert("uid".into(), json!(metadata.uid()));
            stat.insert("gid".into(), json!(metadata.gid()));
        }
        stat.insert("is_dir".into(), json!(metadata.is_dir()));
        stat.insert("is_file".into(), json!(metadata.is_file()));
        stat.insert("readonly".into(), json!(metadata.permissions().readonly()));
        if let Ok(modified) = metadata.modified() {
            stat.insert("modified".into(), json!(format_system_time(modified)));
        }
        if let Ok(accessed) = metadata.accessed() {
            stat.insert("accessed".into(), json!(format_system_time(accessed)));
        }
        self.stat = Some(Value::Object(stat));
        self
    }
}

/// Format a `SystemTime` as ISO 8601 (e.g. "2025-01-01T00:00:00Z").
fn format_system_time(time: SystemTime) -> String {
    let secs = time
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    chrono::DateTime::from_timestamp(secs, 0)
        .unwrap_or_default()
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
}
