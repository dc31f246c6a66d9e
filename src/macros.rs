//! Logging macros for ergonomic log message formatting.
//!
//! These macros log through the process-wide logger with `format!`-style
//! arguments. Unlike the plain functions, they also record the name of the
//! enclosing function, so prefixes can show `[main.rs run() line12]`.
//!
//! # Examples
//!
//! ```no_run
//! use sinklog::{info, warning};
//!
//! info!("Server started");
//!
//! let port = 8080;
//! info!("Server listening on port {}", port);
//! warning!("Retry attempt {} of {}", 3, 5);
//!
//! sinklog::shutdown();
//! ```

/// Captures the [`CallSite`](crate::CallSite) of the place it is expanded in.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(
            ::std::file!(),
            ::std::line!(),
            ::std::option::Option::Some($crate::__function_path!()),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        name.strip_suffix("::__here").unwrap_or(name)
    }};
}

/// Log a message at the given level.
///
/// # Examples
///
/// ```no_run
/// use sinklog::{log, LogLevel};
/// log!(LogLevel::Info, "Simple message");
/// log!(LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::log_at($level, ::std::format_args!($($arg)+), $crate::call_site!())
    };
}

/// Log a message through a specific [`Logger`](crate::Logger) instead of the
/// process-wide one.
///
/// # Examples
///
/// ```
/// use sinklog::{log_to, LogLevel, Logger, OutputTarget};
///
/// let logger = Logger::builder().output(OutputTarget::NONE).build().unwrap();
/// log_to!(logger, LogLevel::Warning, "disk {}% full", 91);
/// ```
#[macro_export]
macro_rules! log_to {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at($level, ::std::format_args!($($arg)+), $crate::call_site!())
    };
}

/// Log a debug-level message.
///
/// ```no_run
/// sinklog::debug!("Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// ```no_run
/// sinklog::info!("Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```no_run
/// sinklog::warning!("Low disk space");
/// ```
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```no_run
/// sinklog::error!("Failed to connect: {}", "timeout");
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// Only logs; the process keeps running.
///
/// ```no_run
/// sinklog::fatal!("Unrecoverable state in {}", "scheduler");
/// ```
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Fatal, $($arg)+)
    };
}
