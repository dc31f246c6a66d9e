//! Core logger types and traits

pub mod appender;
pub mod caller;
pub mod config;
pub mod error;
pub mod flags;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod prefix;

pub use appender::Appender;
pub use caller::{CallSite, CallerInfo, CallerInfoResolver, SourceResolver};
pub use config::{LoggerConfig, DEFAULT_FILE_NAME};
pub use error::{LoggerError, Result};
pub use flags::{FormatFlags, OutputTarget};
pub use log_level::{LogLevel, LEVEL_LABEL_WIDTH};
pub use log_record::{LogRecord, TIMESTAMP_FORMAT};
pub use logger::{Logger, LoggerBuilder, DEFAULT_QUEUE_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT};
pub use metrics::LoggerMetrics;
pub use prefix::PrefixFormatter;
