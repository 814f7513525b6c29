//! Logging macros backed by either `log` or `tracing`
//!
//! The router logs registrations at debug level, table scans at trace level
//! and dispatch outcomes at debug/info/warn. The backend is picked at compile
//! time:
//!
//! - `log` (default) - forwards to the `log` crate
//! - `tracing` - forwards to the `tracing` crate
//!
//! Enable one of them. With neither enabled the macros expand to nothing.
//!
//! ```ignore
//! use spa_router::{debug_log, trace_log};
//!
//! debug_log!("Registered route {} {}", method, pattern);
//! trace_log!("Scanning {} before filters", count);
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __router_log {
    ($level:ident, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)*);
        #[cfg(feature = "log")]
        ::log::$level!($($arg)*);
    };
}

/// Trace-level logging, used for per-entry lookup detail.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        $crate::__router_log!(trace, $($arg)*)
    };
}

/// Debug-level logging.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::__router_log!(debug, $($arg)*)
    };
}

/// Info-level logging.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        $crate::__router_log!(info, $($arg)*)
    };
}

/// Warn-level logging.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::__router_log!(warn, $($arg)*)
    };
}

/// Error-level logging.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::__router_log!(error, $($arg)*)
    };
}
