//! Process-wide logger facade
//!
//! The global [`Logger`] is built on first use with the default
//! configuration: every level, terminal and file output, the full prefix,
//! and `test.log` in the working directory. It is never exposed directly;
//! these functions are the only way to reach it.
//!
//! The global logger is never dropped, so call [`shutdown`] before the
//! process exits to write out records still in the queue.

use crate::core::{
    CallSite, FormatFlags, LogLevel, Logger, LoggerConfig, LoggerMetrics, OutputTarget, Result,
    DEFAULT_SHUTDOWN_TIMEOUT,
};
use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

static LOGGER: OnceLock<Logger> = OnceLock::new();

fn instance() -> &'static Logger {
    LOGGER.get_or_init(|| {
        Logger::builder().build().unwrap_or_else(|e| {
            eprintln!("[LOGGER CRITICAL] Global logger unavailable, records will be dropped: {}", e);
            Logger::detached(LoggerConfig::default())
        })
    })
}

/// Emit a record attributed to `site`. Used by the logging macros.
pub fn log_at(level: LogLevel, message: impl fmt::Display, site: CallSite) {
    instance().log_at(level, message, site);
}

#[track_caller]
pub fn log(level: LogLevel, message: impl fmt::Display) {
    instance().log_at(level, message, CallSite::caller());
}

#[track_caller]
pub fn debug(message: impl fmt::Display) {
    instance().log_at(LogLevel::Debug, message, CallSite::caller());
}

#[track_caller]
pub fn info(message: impl fmt::Display) {
    instance().log_at(LogLevel::Info, message, CallSite::caller());
}

#[track_caller]
pub fn warning(message: impl fmt::Display) {
    instance().log_at(LogLevel::Warning, message, CallSite::caller());
}

#[track_caller]
pub fn error(message: impl fmt::Display) {
    instance().log_at(LogLevel::Error, message, CallSite::caller());
}

#[track_caller]
pub fn fatal(message: impl fmt::Display) {
    instance().log_at(LogLevel::Fatal, message, CallSite::caller());
}

pub fn set_level(level: LogLevel) {
    instance().set_level(level);
}

pub fn set_output_type(output: OutputTarget) {
    instance().set_output_type(output);
}

pub fn set_flags(flags: FormatFlags) {
    instance().set_flags(flags);
}

/// Name of the log file. Ignored once the file has been opened.
pub fn set_file_name(name: impl Into<String>) {
    instance().set_file_name(name);
}

/// Directory of the log file. Ignored once the file has been opened.
pub fn set_file_path(dir: impl Into<PathBuf>) {
    instance().set_file_path(dir);
}

/// Path of the open log file, if any record has been written to it.
pub fn active_file_path() -> Option<PathBuf> {
    instance().active_file_path()
}

pub fn metrics() -> &'static LoggerMetrics {
    instance().metrics()
}

/// Block until every record emitted so far is written.
pub fn flush() -> Result<()> {
    instance().flush()
}

/// Drain the queue and stop the background writer, waiting up to
/// [`DEFAULT_SHUTDOWN_TIMEOUT`]. Later records are dropped.
pub fn shutdown() -> bool {
    shutdown_timeout(DEFAULT_SHUTDOWN_TIMEOUT)
}

pub fn shutdown_timeout(timeout: Duration) -> bool {
    instance().shutdown(timeout)
}
