//! Console appender implementation

use crate::core::{Appender, Result};
use parking_lot::Mutex;
use std::io::{self, Write};

/// Writes one line per record to standard output.
pub struct ConsoleAppender {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Send output to `writer` instead of stdout.
    ///
    /// # Example
    ///
    /// ```
    /// use sinklog::appenders::ConsoleAppender;
    /// use sinklog::Appender;
    ///
    /// let appender = ConsoleAppender::with_writer(Vec::new());
    /// appender.append("hello").unwrap();
    /// ```
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&self, line: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
