//! Configuration for the session logger
//!
//! The logger reads no files or environment variables itself. Hosts build a
//! [`LoggerConfig`] in code, or keep one in a TOML file and load it with
//! [`LoggerConfig::load`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Directory holding session log files, relative to the working directory
    #[serde(default = "default_logs_dir")]
    pub logs_dir: PathBuf,

    /// File name prefix; files are named `<prefix>_<YYYYMMDD>_<HHMMSS>.log`
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

fn default_logs_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_file_prefix() -> String {
    "chat_server".to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            logs_dir: default_logs_dir(),
            file_prefix: default_file_prefix(),
        }
    }
}

impl LoggerConfig {
    /// Parse configuration from TOML, filling unset fields with defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse logger config")
    }

    /// Load configuration from a TOML file, or return the default if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content =
                std::fs::read_to_string(path).context("Failed to read logger config file")?;
            Self::from_toml_str(&content)
        } else {
            Ok(Self::default())
        }
    }
}
