//! A single log record and its rendered line

use chrono::{DateTime, Local};

use super::level::LogLevel;

/// One leveled, timestamped message.
///
/// Built and dropped within a single logging call; never queued.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    /// Local wall-clock time of the call
    pub timestamp: DateTime<Local>,
    /// Log level
    pub level: LogLevel,
    /// Log message
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    pub fn new(level: LogLevel, message: &'a str, timestamp: DateTime<Local>) -> Self {
        Self {
            timestamp,
            level,
            message,
        }
    }

    /// Render as `[HH:MM:SS] [LEVEL] message`, without a trailing newline
    pub fn render(&self) -> String {
        format!(
            "[{}] [{}] {}",
            self.timestamp.format("%H:%M:%S"),
            self.level.as_str(),
            self.message
        )
    }
}
