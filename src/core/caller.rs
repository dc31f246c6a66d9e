//! Call-site capture and caller info resolution
//!
//! A [`CallSite`] is captured where a log call is written, either by the
//! logging macros (file, line and enclosing function path) or through
//! `#[track_caller]` (file and line only). A [`CallerInfoResolver`] turns it
//! into the short `(file, function, line)` triple shown in prefixes.

use super::error::{LoggerError, Result};
use std::panic::Location;

/// Raw location of a logging call as the compiler reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    /// Full path of the enclosing function, e.g. `app::server::accept`.
    pub function: Option<&'static str>,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32, function: Option<&'static str>) -> Self {
        Self { file, line, function }
    }

    /// Site of the nearest caller not marked `#[track_caller]`.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            function: None,
        }
    }
}

/// Resolved caller metadata carried by a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerInfo {
    pub file: String,
    pub function: String,
    pub line: u32,
}

impl CallerInfo {
    pub fn new(file: impl Into<String>, function: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            function: function.into(),
            line,
        }
    }
}

/// Turns a captured call site into caller info.
///
/// The logger calls this on the producer side for every record. A failure is
/// reported and the record is still emitted with empty caller fields.
pub trait CallerInfoResolver: Send + Sync {
    fn resolve(&self, site: &CallSite) -> Result<CallerInfo>;
}

/// Default resolver: keeps the file's base name and the function's last path
/// segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceResolver;

impl CallerInfoResolver for SourceResolver {
    fn resolve(&self, site: &CallSite) -> Result<CallerInfo> {
        if site.file.is_empty() {
            return Err(LoggerError::caller(format!(
                "no source file recorded for line {}",
                site.line
            )));
        }

        Ok(CallerInfo {
            file: base_name(site.file).to_string(),
            function: site.function.map(short_function_name).unwrap_or_default().to_string(),
            line: site.line,
        })
    }
}

fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// `app::net::accept::{{closure}}` -> `accept`
fn short_function_name(path: &'static str) -> &'static str {
    path.split("::")
        .filter(|segment| !segment.is_empty() && *segment != "{{closure}}")
        .last()
        .unwrap_or("")
}
