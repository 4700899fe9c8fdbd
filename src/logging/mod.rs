//! Session logging for the chat server
//!
//! Leveled, timestamped lines go to stdout and to one log file per logger,
//! named from the time of the first call. Safe to call from any number of
//! threads.

mod bridge;
mod clock;
mod error;
mod level;
mod logger;
mod macros;
mod record;
mod session;
mod sink;
#[cfg(test)]
mod test_support;

pub use bridge::{init_tracing, SessionLayer};
pub use clock::{Clock, SystemClock};
pub use error::LogError;
pub use level::LogLevel;
pub use logger::{debug, error, global, info, install_global, warn, Logger, LoggerBuilder};
pub use record::LogRecord;
pub use session::{session_file_path, SessionState};
pub use sink::{ConsoleSink, FileSink, LogSink};
