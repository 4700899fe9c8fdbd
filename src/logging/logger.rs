//! The session logger
//!
//! Every call renders one line and writes it to the console and to the
//! session file while holding a single mutex, so concurrent callers never
//! see interleaved or partial lines and the session file is initialized
//! exactly once.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::config::LoggerConfig;

use super::clock::{Clock, SystemClock};
use super::error::LogError;
use super::level::LogLevel;
use super::record::LogRecord;
use super::sink::{ConsoleSink, FileSink, LogSink};

/// Leveled logger writing to the console and a session log file
pub struct Logger {
    config: LoggerConfig,
    clock: Box<dyn Clock>,
    inner: Mutex<Inner>,
}

/// Everything mutated by a logging call; only touched under the lock
struct Inner {
    console: Box<dyn LogSink>,
    file: FileSink,
    diagnostics: Box<dyn Write + Send>,
    /// Set after the first file-sink failure has been reported
    diagnosed: bool,
}

impl Inner {
    fn report(&mut self, err: &LogError) {
        if self.diagnosed {
            return;
        }
        self.diagnosed = true;
        let _ = writeln!(self.diagnostics, "[logger] {}", err);
        let _ = self.diagnostics.flush();
    }
}

impl Logger {
    /// Create a logger writing to stdout and to a session file under
    /// `config.logs_dir`
    pub fn new(config: LoggerConfig) -> Self {
        LoggerBuilder::new(config).build()
    }

    pub fn builder(config: LoggerConfig) -> LoggerBuilder {
        LoggerBuilder::new(config)
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Debug, message);
    }

    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Error, message);
    }

    /// Render and write one line to every sink.
    ///
    /// Never fails: a file-sink error degrades this call to console-only
    /// output, and the first such error per logger is reported once on the
    /// diagnostics stream.
    pub fn emit(&self, level: LogLevel, message: &str) {
        let mut inner = self.lock();

        let record = LogRecord::new(level, message, self.clock.now());
        let line = record.render();

        // Nowhere left to report a failing console
        let _ = inner.console.write(&record, &line);

        if let Err(err) = inner.file.write(&record, &line) {
            inner.report(&err);
        }
    }

    /// Path of the session log file, `None` until the first call
    pub fn session_path(&self) -> Option<PathBuf> {
        self.lock().file.state().path().map(|p| p.to_path_buf())
    }

    pub fn is_initialized(&self) -> bool {
        self.lock().file.state().is_initialized()
    }

    /// A panic while holding the lock leaves the state consistent between
    /// calls, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("session_path", &self.session_path())
            .finish()
    }
}

/// Builder for a [`Logger`] with non-default console, diagnostics or clock
pub struct LoggerBuilder {
    config: LoggerConfig,
    console: Option<Box<dyn Write + Send>>,
    diagnostics: Option<Box<dyn Write + Send>>,
    clock: Option<Box<dyn Clock>>,
}

impl LoggerBuilder {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            console: None,
            diagnostics: None,
            clock: None,
        }
    }

    /// Replace stdout as the console stream
    pub fn console_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.console = Some(Box::new(writer));
        self
    }

    /// Replace stderr as the stream for the one-time failure diagnostic
    pub fn diagnostics_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.diagnostics = Some(Box::new(writer));
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn build(self) -> Logger {
        let console: Box<dyn LogSink> = match self.console {
            Some(writer) => Box::new(ConsoleSink::new(writer)),
            None => Box::new(ConsoleSink::stdout()),
        };

        let file = FileSink::new(&self.config.logs_dir, &self.config.file_prefix);

        Logger {
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            inner: Mutex::new(Inner {
                console,
                file,
                diagnostics: self
                    .diagnostics
                    .unwrap_or_else(|| Box::new(io::stderr())),
                diagnosed: false,
            }),
            config: self.config,
        }
    }
}

static GLOBAL: OnceLock<Arc<Logger>> = OnceLock::new();

/// The process-wide logger.
///
/// Built with [`LoggerConfig::default`] on first use unless
/// [`install_global`] ran earlier. Clone the `Arc` to hand the same logger
/// to [`init_tracing`](super::init_tracing) so both paths share one
/// session file.
pub fn global() -> &'static Arc<Logger> {
    GLOBAL.get_or_init(|| Arc::new(Logger::new(LoggerConfig::default())))
}

/// Install `logger` as the process-wide logger.
///
/// Fails, handing the logger back, if the global logger already exists.
pub fn install_global(logger: Arc<Logger>) -> Result<(), Arc<Logger>> {
    GLOBAL.set(logger)
}

pub fn info(message: &str) {
    global().info(message);
}

pub fn debug(message: &str) {
    global().debug(message);
}

pub fn warn(message: &str) {
    global().warn(message);
}

pub fn error(message: &str) {
    global().error(message);
}
