//! Logger configuration

use super::error::{LoggerError, Result};
use super::flags::{FormatFlags, OutputTarget};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default log file name, created in the working directory.
pub const DEFAULT_FILE_NAME: &str = "test.log";

/// Settings read by the logger on every record.
///
/// Can be built in code, through [`crate::LoggerBuilder`], or loaded from
/// JSON where every field is optional:
///
/// ```
/// use sinklog::{FormatFlags, LoggerConfig, OutputTarget};
///
/// let config = LoggerConfig::from_json(r#"{ "output": 1, "flags": 3, "file_name": "app.log" }"#).unwrap();
/// assert_eq!(config.output, OutputTarget::TERMINAL);
/// assert_eq!(config.flags, FormatFlags::TIME | FormatFlags::LEVEL);
/// assert_eq!(config.file_name, "app.log");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Records below this level are discarded at the call site
    pub level: LogLevel,
    pub output: OutputTarget,
    pub flags: FormatFlags,
    pub file_name: String,
    /// Directory the log file is created in
    pub file_dir: PathBuf,
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.file_name.trim().is_empty() {
            return Err(LoggerError::config("LoggerConfig", "file_name must not be empty"));
        }
        Ok(())
    }

    /// Location the file sink opens on first use.
    pub fn file_path(&self) -> PathBuf {
        self.file_dir.join(&self.file_name)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Debug,
            output: OutputTarget::BOTH,
            flags: FormatFlags::ALL,
            file_name: DEFAULT_FILE_NAME.to_string(),
            file_dir: working_dir(),
        }
    }
}

fn working_dir() -> PathBuf {
    match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!(
                "[LOGGER WARNING] Cannot resolve working directory ({}), using '.' for log files",
                e
            );
            PathBuf::from(".")
        }
    }
}
