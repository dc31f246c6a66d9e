//! Helpers shared by the integration test binaries

#![allow(dead_code)]

use sinklog::{CallSite, CallerInfo, CallerInfoResolver, Result};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Console writer capturing output in memory.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("buffer lock poisoned")).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer lock poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Resolver reporting every record as coming from `Foo` at `bar.rs:42`.
pub struct FixedResolver;

impl CallerInfoResolver for FixedResolver {
    fn resolve(&self, _site: &CallSite) -> Result<CallerInfo> {
        Ok(CallerInfo::new("bar.rs", "Foo", 42))
    }
}

/// Strips the leading `[timestamp] ` group from a line rendered with
/// `FormatFlags::ALL` or `FormatFlags::TIME`.
pub fn strip_timestamp(line: &str) -> &str {
    let end = line.find("] ").expect("line has no timestamp group");
    &line[end + 2..]
}
