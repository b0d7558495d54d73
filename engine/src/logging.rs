//! FILENAME: engine/src/logging.rs
// PURPOSE: Category-tagged logging on top of the `log` facade.
// CONTEXT: Every line carries a short category (CALC, EVAL, ...) which becomes
//          the `log` target. The engine never installs a logger; the host
//          application decides where lines go.

use std::fmt;

pub use log::Level;

/// Write a log line for `category`.
pub fn write_log(level: Level, category: &str, args: fmt::Arguments<'_>) {
    log::log!(target: category, level, "{}", args);
}

/// Write an ENTER line for function entry.
pub fn write_log_enter(level: Level, category: &str, func_name: &str, params: Option<fmt::Arguments<'_>>) {
    match params {
        Some(params) => write_log(level, category, format_args!("ENTER {} {}", func_name, params)),
        None => write_log(level, category, format_args!("ENTER {}", func_name)),
    }
}

/// Write an EXIT line for function exit.
pub fn write_log_exit(level: Level, category: &str, func_name: &str, result: Option<fmt::Arguments<'_>>) {
    match result {
        Some(result) => write_log(level, category, format_args!("EXIT {} {}", func_name, result)),
        None => write_log(level, category, format_args!("EXIT {}", func_name)),
    }
}

// ============================================================================
// MACRO DEFINITIONS & EXPORTS
// ============================================================================

#[macro_export]
macro_rules! log_debug {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log($crate::logging::Level::Debug, $cat, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log($crate::logging::Level::Info, $cat, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log($crate::logging::Level::Warn, $cat, format_args!($($arg)*))
    };
}

// ENTER/EXIT macros for function tracing

#[macro_export]
macro_rules! log_enter {
    ($cat:expr, $func:expr) => {
        $crate::logging::write_log_enter($crate::logging::Level::Debug, $cat, $func, None)
    };
    ($cat:expr, $func:expr, $($arg:tt)*) => {
        $crate::logging::write_log_enter($crate::logging::Level::Debug, $cat, $func, Some(format_args!($($arg)*)))
    };
}

#[macro_export]
macro_rules! log_exit {
    ($cat:expr, $func:expr) => {
        $crate::logging::write_log_exit($crate::logging::Level::Debug, $cat, $func, None)
    };
    ($cat:expr, $func:expr, $($arg:tt)*) => {
        $crate::logging::write_log_exit($crate::logging::Level::Debug, $cat, $func, Some(format_args!($($arg)*)))
    };
}
