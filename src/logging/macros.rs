//! `format!`-style shorthands for the process-wide logger

/// Log at INFO through the process-wide logger
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::info(&::std::format!($($arg)*))
    };
}

/// Log at DEBUG through the process-wide logger
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::debug(&::std::format!($($arg)*))
    };
}

/// Log at WARN through the process-wide logger
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logging::warn(&::std::format!($($arg)*))
    };
}

/// Log at ERROR through the process-wide logger
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::error(&::std::format!($($arg)*))
    };
}
