//! Prefix rendering for log records
//!
//! The prefix is built from two bracketed groups, each followed by a single
//! space and left out entirely when none of its fields is enabled:
//!
//! - time/level: `[2025-01-08 10:30:45] [INFO   ] `
//! - caller: `[server.rs accept() line42] `
//!
//! Example with every field: `[2025-01-08 10:30:45] [ERROR  ] [bar.rs Foo() line42] x`

use super::flags::FormatFlags;
use super::log_record::LogRecord;

/// Renders records according to a set of [`FormatFlags`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefixFormatter {
    flags: FormatFlags,
}

impl PrefixFormatter {
    pub const fn new(flags: FormatFlags) -> Self {
        Self { flags }
    }

    /// Full output line without the trailing newline.
    pub fn render(&self, record: &LogRecord) -> String {
        let mut line = self.prefix(record);
        line.push_str(&record.message);
        line
    }

    pub fn prefix(&self, record: &LogRecord) -> String {
        if self.flags.is_empty() {
            return String::new();
        }

        if self.flags.is_all() {
            return format!(
                "[{}] [{}] [{} {}() line{}] ",
                record.timestamp,
                record.level.label(),
                record.file,
                record.function,
                record.line
            );
        }

        let mut prefix = String::new();
        self.push_group(&mut prefix, &self.time_level_parts(record), false);
        self.push_group(&mut prefix, &self.caller_parts(record), true);
        prefix
    }

    fn time_level_parts(&self, record: &LogRecord) -> Vec<String> {
        let mut parts = Vec::with_capacity(2);
        if self.flags.contains(FormatFlags::TIME) {
            parts.push(record.timestamp.clone());
        }
        if self.flags.contains(FormatFlags::LEVEL) {
            parts.push(record.level.label().to_string());
        }
        parts
    }

    fn caller_parts(&self, record: &LogRecord) -> Vec<String> {
        let mut parts = Vec::with_capacity(3);
        if self.flags.contains(FormatFlags::FILENAME) {
            parts.push(record.file.clone());
        }
        if self.flags.contains(FormatFlags::FUNCNAME) {
            parts.push(format!("{}()", record.function));
        }
        if self.flags.contains(FormatFlags::LINENO) {
            parts.push(format!("line{}", record.line));
        }
        parts
    }

    /// Time and level get a bracket pair each; caller parts share one.
    fn push_group(&self, out: &mut String, parts: &[String], shared_brackets: bool) {
        if parts.is_empty() {
            return;
        }

        if shared_brackets {
            out.push('[');
            out.push_str(&parts.join(" "));
            out.push(']');
        } else {
            let bracketed: Vec<String> = parts.iter().map(|part| format!("[{}]", part)).collect();
            out.push_str(&bracketed.join(" "));
        }
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CallerInfo, LogLevel};

    fn record(level: LogLevel) -> LogRecord {
        LogRecord::with_timestamp(
            level,
            "x",
            "2024-05-06 07:08:09",
            CallerInfo::new("bar.rs", "Foo", 42),
        )
    }

    fn render(flags: FormatFlags) -> String {
        PrefixFormatter::new(flags).render(&record(LogLevel::Error))
    }

    #[test]
    fn test_none_renders_bare_message() {
        assert_eq!(render(FormatFlags::NONE), "x");
    }

    #[test]
    fn test_all_renders_canonical_layout() {
        assert_eq!(
            render(FormatFlags::ALL),
            "[2024-05-06 07:08:09] [ERROR  ] [bar.rs Foo() line42] x"
        );
    }

    #[test]
    fn test_time_and_level_bracketed_separately() {
        assert_eq!(render(FormatFlags::TIME), "[2024-05-06 07:08:09] x");
        assert_eq!(render(FormatFlags::LEVEL), "[ERROR  ] x");
        assert_eq!(
            render(FormatFlags::TIME | FormatFlags::LEVEL),
            "[2024-05-06 07:08:09] [ERROR  ] x"
        );
    }

    #[test]
    fn test_caller_fields_share_brackets() {
        assert_eq!(render(FormatFlags::FILENAME), "[bar.rs] x");
        assert_eq!(render(FormatFlags::FUNCNAME), "[Foo()] x");
        assert_eq!(render(FormatFlags::LINENO), "[line42] x");
        assert_eq!(
            render(FormatFlags::FILENAME | FormatFlags::FUNCNAME),
            "[bar.rs Foo()] x"
        );
        assert_eq!(
            render(FormatFlags::FUNCNAME | FormatFlags::LINENO),
            "[Foo() line42] x"
        );
        assert_eq!(
            render(FormatFlags::FILENAME | FormatFlags::LINENO),
            "[bar.rs line42] x"
        );
    }

    #[test]
    fn test_groups_joined_by_single_space() {
        assert_eq!(
            render(FormatFlags::LEVEL | FormatFlags::LINENO),
            "[ERROR  ] [line42] x"
        );
        assert_eq!(
            render(FormatFlags::TIME | FormatFlags::FILENAME | FormatFlags::FUNCNAME),
            "[2024-05-06 07:08:09] [bar.rs Foo()] x"
        );
    }

    #[test]
    fn test_composed_all_matches_canonical() {
        let formatter = PrefixFormatter::new(FormatFlags::ALL);
        let rec = record(LogLevel::Info);
        let mut composed = String::new();
        formatter.push_group(&mut composed, &formatter.time_level_parts(&rec), false);
        formatter.push_group(&mut composed, &formatter.caller_parts(&rec), true);
        assert_eq!(composed, formatter.prefix(&rec));
    }
}
