//! Logger metrics for observability
//!
//! Counters for monitoring the delivery pipeline: records accepted and
//! written, backpressure events, write failures and file opens.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use sinklog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_enqueued();
/// metrics.add_written(1);
///
/// assert_eq!(metrics.total_enqueued(), 1);
/// assert_eq!(metrics.total_written(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records accepted into the queue
    total_enqueued: AtomicU64,

    /// Records fully delivered to every enabled sink
    total_written: AtomicU64,

    /// Records with at least one failed sink write
    write_failures: AtomicU64,

    /// Number of times a producer had to wait for queue space
    block_events: AtomicU64,

    /// Records discarded because the logger was shut down
    dropped_count: AtomicU64,

    /// Records below the level threshold
    filtered_count: AtomicU64,

    /// Times the log file was opened
    file_opens: AtomicU64,

    /// Call sites that could not be resolved
    caller_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_enqueued: AtomicU64::new(0),
            total_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            block_events: AtomicU64::new(0),
            dropped_count: AtomicU64::new(0),
            filtered_count: AtomicU64::new(0),
            file_opens: AtomicU64::new(0),
            caller_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_enqueued(&self) -> u64 {
        self.total_enqueued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn total_written(&self) -> u64 {
        self.total_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn block_events(&self) -> u64 {
        self.block_events.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_opens(&self) -> u64 {
        self.file_opens.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn caller_failures(&self) -> u64 {
        self.caller_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_enqueued(&self) -> u64 {
        self.total_enqueued.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Count `count` records as delivered at once, after a successful sink flush
    #[inline]
    pub fn add_written(&self, count: u64) -> u64 {
        self.total_written.fetch_add(count, Ordering::Relaxed)
    }

    /// Count `count` records as lost at once, after a failed sink flush
    #[inline]
    pub fn add_write_failures(&self, count: u64) -> u64 {
        self.write_failures.fetch_add(count, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_block(&self) -> u64 {
        self.block_events.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_open(&self) -> u64 {
        self.file_opens.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_caller_failure(&self) -> u64 {
        self.caller_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Records accepted but not yet written or failed
    pub fn pending(&self) -> u64 {
        self.total_enqueued()
            .saturating_sub(self.total_written() + self.write_failures())
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            total_enqueued: AtomicU64::new(self.total_enqueued()),
            total_written: AtomicU64::new(self.total_written()),
            write_failures: AtomicU64::new(self.write_failures()),
            block_events: AtomicU64::new(self.block_events()),
            dropped_count: AtomicU64::new(self.dropped_count()),
            filtered_count: AtomicU64::new(self.filtered_count()),
            file_opens: AtomicU64::new(self.file_opens()),
            caller_failures: AtomicU64::new(self.caller_failures()),
        }
    }
}
