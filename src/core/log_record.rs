//! Log record structure

use super::caller::CallerInfo;
use super::log_level::LogLevel;
use chrono::Local;

/// strftime layout of record timestamps, second precision in local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One log entry on its way from a producer to the drain loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: String,
    pub file: String,
    pub function: String,
    pub line: u32,
}

impl LogRecord {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so every record stays on a single output line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: &str, caller: CallerInfo) -> Self {
        Self::with_timestamp(
            level,
            message,
            Local::now().format(TIMESTAMP_FORMAT).to_string(),
            caller,
        )
    }

    pub fn with_timestamp(
        level: LogLevel,
        message: &str,
        timestamp: impl Into<String>,
        caller: CallerInfo,
    ) -> Self {
        Self {
            level,
            message: Self::sanitize_message(message),
            timestamp: timestamp.into(),
            file: caller.file,
            function: caller.function,
            line: caller.line,
        }
    }
}
