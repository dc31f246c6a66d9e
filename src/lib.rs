//! # sinklog
//!
//! A small process-wide logger. Calls from any thread are queued and written
//! in order by one background thread to the terminal, a file, or both, each
//! line carrying a configurable prefix.
//!
//! ```no_run
//! use sinklog::{FormatFlags, OutputTarget};
//!
//! sinklog::set_output_type(OutputTarget::BOTH);
//! sinklog::set_flags(FormatFlags::TIME | FormatFlags::LEVEL);
//! sinklog::set_file_name("app.log");
//!
//! sinklog::info("service started");
//! sinklog::warning!("{} retries left", 2);
//!
//! sinklog::shutdown();
//! ```
//!
//! ## Features
//!
//! - **Ordered**: one queue, one writer, records appear in emit order
//! - **Backpressure**: a full queue blocks callers instead of dropping records
//! - **Lazy file**: the log file is opened once, on the first record that needs it
//! - **Graceful stop**: [`shutdown`] writes out everything still queued

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        CallSite, CallerInfo, CallerInfoResolver, FormatFlags, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, OutputTarget, Result,
    };
}

pub use crate::appenders::{ConsoleAppender, FileAppender};
pub use crate::core::{
    Appender, CallSite, CallerInfo, CallerInfoResolver, FormatFlags, LogLevel, LogRecord, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, OutputTarget, PrefixFormatter,
    Result, SourceResolver, DEFAULT_FILE_NAME, DEFAULT_QUEUE_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT,
    TIMESTAMP_FORMAT,
};
pub use crate::global::{
    active_file_path, debug, error, fatal, flush, info, log, log_at, metrics, set_file_name,
    set_file_path, set_flags, set_level, set_output_type, shutdown, shutdown_timeout, warning,
};
