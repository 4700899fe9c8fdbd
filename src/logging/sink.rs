//! Output sinks for rendered log lines
//!
//! A sink receives the record and its already-rendered line, so every sink
//! writes byte-identical content for a given call.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{DateTime, Local};

use super::error::LogError;
use super::record::LogRecord;
use super::session::{session_file_path, SessionState};

/// A destination for rendered log lines
pub trait LogSink: Send {
    /// Write one rendered line. `line` carries no trailing newline.
    fn write(&mut self, record: &LogRecord<'_>, line: &str) -> Result<(), LogError>;
}

/// Console sink, flushing after every line
pub struct ConsoleSink<W: Write + Send> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> LogSink for ConsoleSink<W> {
    fn write(&mut self, _record: &LogRecord<'_>, line: &str) -> Result<(), LogError> {
        // One write_all per line so the stream lock is taken once
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.out
            .write_all(buf.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(LogError::Console)
    }
}

/// Session file sink.
///
/// The file name is fixed from the timestamp of the first record written
/// and the directory is created at that point, once. Every write opens the
/// file in append mode, writes one line and closes it again.
#[derive(Debug)]
pub struct FileSink {
    logs_dir: PathBuf,
    prefix: String,
    state: SessionState,
}

impl FileSink {
    pub fn new(logs_dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            logs_dir: logs_dir.into(),
            prefix: prefix.into(),
            state: SessionState::Uninitialized,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Fix the session path and create its directory if this is the first call.
    ///
    /// A directory creation failure is reported only on the transition; the
    /// path stays fixed and creation is not retried.
    pub fn ensure_session(&mut self, started: DateTime<Local>) -> Result<PathBuf, LogError> {
        if let SessionState::Initialized { path, .. } = &self.state {
            return Ok(path.clone());
        }

        let path = session_file_path(&self.logs_dir, &self.prefix, started);
        let created = fs::create_dir_all(&self.logs_dir);
        self.state = SessionState::Initialized {
            path: path.clone(),
            directory_ready: created.is_ok(),
        };

        created
            .map(|_| path)
            .map_err(|source| LogError::DirectoryCreate {
                path: self.logs_dir.clone(),
                source,
            })
    }
}

impl LogSink for FileSink {
    fn write(&mut self, record: &LogRecord<'_>, line: &str) -> Result<(), LogError> {
        let path = self.ensure_session(record.timestamp)?;

        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .and_then(|mut file| file.write_all(buf.as_bytes()))
            .map_err(|source| LogError::FileWrite {
                path: path.clone(),
                source,
            })
    }
}
