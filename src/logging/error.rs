//! Error types for the logging sinks
//!
//! None of these reach callers of the logger. They are caught inside the
//! write path and turned into console-only degradation plus a one-time
//! diagnostic.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure inside a sink
#[derive(Debug, Error)]
pub enum LogError {
    #[error("cannot create log directory {}: {}", .path.display(), kind_message(.source))]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot append to log file {}: {}", .path.display(), kind_message(.source))]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("console write failed: {0}")]
    Console(#[source] io::Error),
}

/// Short description of an I/O failure for the diagnostic line
fn kind_message(e: &io::Error) -> String {
    // ENOSPC on Linux and macOS, EDQUOT on Linux then macOS
    const DISK_FULL_CODES: [i32; 3] = [28, 122, 69];

    match e.kind() {
        io::ErrorKind::StorageFull | io::ErrorKind::WriteZero => "disk full".to_string(),
        io::ErrorKind::PermissionDenied => "permission denied".to_string(),
        io::ErrorKind::NotFound => "no such file or directory".to_string(),
        _ if cfg!(unix) && e.raw_os_error().is_some_and(|c| DISK_FULL_CODES.contains(&c)) => {
            "disk full".to_string()
        }
        _ => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = LogError::FileWrite {
            path: PathBuf::from("logs/a.log"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(
            err.to_string(),
            "cannot append to log file logs/a.log: no such file or directory"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_enospc_reads_as_disk_full() {
        let err = LogError::FileWrite {
            path: PathBuf::from("logs/a.log"),
            source: io::Error::from_raw_os_error(28),
        };
        assert_eq!(err.to_string(), "cannot append to log file logs/a.log: disk full");
    }

    #[test]
    fn test_file_write_message() {
        let err = LogError::FileWrite {
            path: PathBuf::from("logs/chat_server_20240501_140502.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
        };
        assert_eq!(
            err.to_string(),
            "cannot append to log file logs/chat_server_20240501_140502.log: permission denied"
        );
    }

    #[test]
    fn test_other_errors_keep_os_text() {
        let err = LogError::DirectoryCreate {
            path: PathBuf::from("logs"),
            source: io::Error::new(io::ErrorKind::Other, "weird"),
        };
        assert_eq!(err.to_string(), "cannot create log directory logs: weird");
    }
}
