//! File appender implementation
//!
//! The file is opened lazily, at most once per logger, the first time a
//! record needs file output. The path is taken from the configuration at that
//! moment; later file name changes do not move the open handle.

use crate::core::{Appender, LoggerConfig, LoggerError, LoggerMetrics, Result};
use parking_lot::{Mutex, RwLock};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

struct OpenFile {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

pub struct FileAppender {
    config: Arc<RwLock<LoggerConfig>>,
    metrics: Arc<LoggerMetrics>,
    /// `Some(None)` once an open attempt failed: file output stays disabled.
    handle: OnceLock<Option<OpenFile>>,
}

impl FileAppender {
    pub fn new(config: Arc<RwLock<LoggerConfig>>, metrics: Arc<LoggerMetrics>) -> Self {
        Self {
            config,
            metrics,
            handle: OnceLock::new(),
        }
    }

    /// Open the file if no attempt has been made yet.
    ///
    /// Concurrent callers block until the single winning attempt finishes.
    /// Returns whether a usable handle exists.
    pub fn ensure_open(&self) -> bool {
        self.file().is_some()
    }

    /// Path of the open log file, `None` before the first open or after a
    /// failed one.
    pub fn active_path(&self) -> Option<&Path> {
        self.handle
            .get()
            .and_then(Option::as_ref)
            .map(|file| file.path.as_path())
    }

    /// Whether an open was attempted and failed.
    pub fn is_disabled(&self) -> bool {
        matches!(self.handle.get(), Some(None))
    }

    fn file(&self) -> Option<&OpenFile> {
        self.handle.get_or_init(|| self.open()).as_ref()
    }

    fn open(&self) -> Option<OpenFile> {
        let path = self.config.read().file_path();
        self.metrics.record_file_open();

        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Some(OpenFile {
                path,
                writer: Mutex::new(BufWriter::new(file)),
            }),
            Err(e) => {
                eprintln!(
                    "[LOGGER ERROR] {}. File output disabled.",
                    LoggerError::file_open(&path, e)
                );
                None
            }
        }
    }
}

impl Appender for FileAppender {
    fn append(&self, line: &str) -> Result<()> {
        // A failed open has already been reported
        let Some(file) = self.file() else {
            return Ok(());
        };

        let mut writer = file.writer.lock();
        writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.write_all(b"\n"))
            .map_err(|e| {
                LoggerError::io_operation(
                    "writing log file",
                    file.path.display().to_string(),
                    e,
                )
            })
    }

    fn flush(&self) -> Result<()> {
        if let Some(Some(file)) = self.handle.get() {
            file.writer.lock().flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn appender(dir: &Path, name: &str) -> FileAppender {
        let config = LoggerConfig {
            file_dir: dir.to_path_buf(),
            file_name: name.to_string(),
            ..LoggerConfig::default()
        };
        FileAppender::new(
            Arc::new(RwLock::new(config)),
            Arc::new(LoggerMetrics::new()),
        )
    }

    #[test]
    fn test_opens_lazily() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let appender = appender(temp_dir.path(), "lazy.log");

        assert!(appender.active_path().is_none());
        assert!(!temp_dir.path().join("lazy.log").exists());

        appender.append("line").unwrap();
        appender.flush().unwrap();

        assert_eq!(appender.active_path(), Some(temp_dir.path().join("lazy.log").as_path()));
        let content = std::fs::read_to_string(temp_dir.path().join("lazy.log")).unwrap();
        assert_eq!(content, "line\n");
    }

    #[test]
    fn test_appends_to_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("existing.log");
        std::fs::write(&path, "old\n").unwrap();

        let appender = appender(temp_dir.path(), "existing.log");
        appender.append("new").unwrap();
        appender.flush().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old\nnew\n");
    }

    #[test]
    fn test_name_change_after_open_ignored() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let appender = appender(temp_dir.path(), "first.log");
        assert!(appender.ensure_open());

        appender.config.write().file_name = "second.log".to_string();
        appender.append("still first").unwrap();
        appender.flush().unwrap();

        assert!(!temp_dir.path().join("second.log").exists());
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("first.log")).unwrap(),
            "still first\n"
        );
        assert_eq!(appender.metrics.file_opens(), 1);
    }

    #[test]
    fn test_failed_open_disables_sink() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("missing");
        let appender = appender(&missing, "never.log");

        assert!(!appender.ensure_open());
        assert!(appender.is_disabled());
        // Writes become no-ops and no second open is attempted
        assert!(appender.append("dropped").is_ok());
        assert!(appender.append("dropped").is_ok());
        assert_eq!(appender.metrics.file_opens(), 1);
    }
}
