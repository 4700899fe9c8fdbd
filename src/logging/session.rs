//! Session log file naming and initialization state

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Generate the session log file path for a session starting at `started`
///
/// Produces `<logs_dir>/<prefix>_<YYYYMMDD>_<HHMMSS>.log`.
pub fn session_file_path(logs_dir: &Path, prefix: &str, started: DateTime<Local>) -> PathBuf {
    let timestamp = started.format("%Y%m%d_%H%M%S");
    logs_dir.join(format!("{}_{}.log", prefix, timestamp))
}

/// Initialization state of a logger's session file.
///
/// Moves from `Uninitialized` to `Initialized` exactly once and never back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Uninitialized,
    Initialized {
        /// Session file path, fixed at the first call
        path: PathBuf,
        /// Whether the containing directory was created
        directory_ready: bool,
    },
}

impl SessionState {
    pub fn is_initialized(&self) -> bool {
        matches!(self, SessionState::Initialized { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SessionState::Uninitialized => None,
            SessionState::Initialized { path, .. } => Some(path),
        }
    }
}
