//! Appender trait for log output destinations

use super::error::Result;

/// A sink receiving fully rendered lines from the drain loop.
///
/// Lines come without a trailing newline; the appender terminates each one.
pub trait Appender: Send + Sync {
    fn append(&self, line: &str) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
