//! Run configuration.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::database::DEFAULT_DB_PATH;

/// How progress is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Emoji-annotated progress text
    #[default]
    Human,
    /// One JSON document at the end of the run
    Json,
}

/// Whether (and where) to snapshot the store before the first step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackupPolicy {
    /// No backup
    #[default]
    None,
    /// `<db>.bak-<timestamp>` next to the store
    Auto,
    /// An explicit destination
    To(PathBuf),
}

/// Configuration for a repair run.
///
/// # Example
///
/// ```ignore
/// let config = RepairConfig::new()
///     .path("pb_data/data.db")
///     .auto_backup()
///     .output(OutputMode::Json);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairConfig {
    db_path: PathBuf,
    backup: BackupPolicy,
    output: OutputMode,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            backup: BackupPolicy::None,
            output: OutputMode::Human,
        }
    }
}

impl RepairConfig {
    /// Defaults: `pb_data/data.db`, no backup, human output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the store path.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.db_path = path.as_ref().to_path_buf();
        self
    }

    /// Back up next to the store with a timestamped name.
    pub fn auto_backup(mut self) -> Self {
        self.backup = BackupPolicy::Auto;
        self
    }

    /// Back up to an explicit path.
    pub fn backup_to(mut self, dest: impl AsRef<Path>) -> Self {
        self.backup = BackupPolicy::To(dest.as_ref().to_path_buf());
        self
    }

    /// Set the output mode.
    pub fn output(mut self, mode: OutputMode) -> Self {
        self.output = mode;
        self
    }

    /// Store path.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Output mode.
    pub fn output_mode(&self) -> OutputMode {
        self.output
    }

    /// Backup policy as configured.
    pub fn backup_policy(&self) -> &BackupPolicy {
        &self.backup
    }

    /// Resolve the backup destination, if any.
    pub fn backup_path(&self) -> Option<PathBuf> {
        match &self.backup {
            BackupPolicy::None => None,
            BackupPolicy::To(dest) => Some(dest.clone()),
            BackupPolicy::Auto => {
                let stamp = Local::now().format("%Y%m%d%H%M%S%3f");
                let mut name = self.db_path.as_os_str().to_os_string();
                name.push(format!(".bak-{}", stamp));
                Some(PathBuf::from(name))
            }
        }
    }
}
