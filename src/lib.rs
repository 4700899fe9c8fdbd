//! Chat server session logger
//!
//! A thread-safe logging facility that writes leveled, timestamped lines to
//! stdout and to one log file per session.

pub mod config;
pub mod logging;
