//! Main logger implementation
//!
//! Producers build [`LogRecord`]s on the calling thread and push them into a
//! bounded channel. A single drain thread renders each record and writes it to
//! the enabled sinks in the order the records were queued.

use super::{
    appender::Appender,
    caller::{CallSite, CallerInfo, CallerInfoResolver, SourceResolver},
    config::LoggerConfig,
    error::{LoggerError, Result},
    flags::{FormatFlags, OutputTarget},
    log_level::LogLevel,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    prefix::PrefixFormatter,
};
use crate::appenders::{ConsoleAppender, FileAppender};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TrySendError};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Default shutdown timeout for logger cleanup (5 seconds)
///
/// This timeout is used when the logger is dropped without explicit shutdown.
/// For custom timeout control, use the `shutdown()` method instead.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Number of records the queue holds before producers block.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1000;

/// Upper bound of commands handled between two sink flushes.
const BATCH_SIZE: usize = 64;

enum Command {
    Record(LogRecord),
    /// Carries back the outcome of the sink flush
    Flush(Sender<Result<()>>),
}

struct Worker {
    handle: thread::JoinHandle<()>,
    /// Disconnects when the drain thread exits.
    done: Receiver<()>,
}

pub struct Logger {
    config: Arc<RwLock<LoggerConfig>>,
    resolver: Arc<dyn CallerInfoResolver>,
    file: Arc<FileAppender>,
    sender: RwLock<Option<Sender<Command>>>,
    worker: Mutex<Option<Worker>>,
    metrics: Arc<LoggerMetrics>,
    capacity: usize,
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use sinklog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .level(LogLevel::Info)
    ///     .output(OutputTarget::TERMINAL)
    ///     .flags(FormatFlags::LEVEL)
    ///     .build()
    ///     .unwrap();
    /// logger.info("ready");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn spawn(
        config: LoggerConfig,
        capacity: usize,
        resolver: Arc<dyn CallerInfoResolver>,
        console: ConsoleAppender,
    ) -> Result<Self> {
        let config = Arc::new(RwLock::new(config));
        let metrics = Arc::new(LoggerMetrics::new());
        let file = Arc::new(FileAppender::new(Arc::clone(&config), Arc::clone(&metrics)));

        let (sender, receiver) = bounded(capacity);
        let (done_tx, done_rx) = bounded::<()>(1);
        let drain = Drain {
            config: Arc::clone(&config),
            console,
            file: Arc::clone(&file),
            metrics: Arc::clone(&metrics),
        };

        let handle = thread::Builder::new()
            .name("sinklog-drain".to_string())
            .spawn(move || {
                let _done = done_tx;
                drain.run(receiver);
            })
            .map_err(|e| LoggerError::io_operation("starting logger", "cannot spawn drain thread", e))?;

        Ok(Self {
            config,
            resolver,
            file,
            sender: RwLock::new(Some(sender)),
            worker: Mutex::new(Some(Worker {
                handle,
                done: done_rx,
            })),
            metrics,
            capacity,
        })
    }

    /// A logger with no drain thread; every record is counted as dropped.
    pub(crate) fn detached(config: LoggerConfig) -> Self {
        let config = Arc::new(RwLock::new(config));
        let metrics = Arc::new(LoggerMetrics::new());
        let file = Arc::new(FileAppender::new(Arc::clone(&config), Arc::clone(&metrics)));

        Self {
            config,
            resolver: Arc::new(SourceResolver),
            file,
            sender: RwLock::new(None),
            worker: Mutex::new(None),
            metrics,
            capacity: 0,
        }
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        self.log_at(level, message, CallSite::caller());
    }

    /// Emit a record attributed to an explicit call site.
    ///
    /// Blocks while the queue is full. Never fails: records emitted after
    /// [`Logger::shutdown`] are counted in [`LoggerMetrics::dropped_count`].
    pub fn log_at(&self, level: LogLevel, message: impl fmt::Display, site: CallSite) {
        let writes_file = {
            let config = self.config.read();
            if level < config.level {
                self.metrics.record_filtered();
                return;
            }
            config.output.writes_file()
        };

        let Some(sender) = self.sender.read().clone() else {
            self.metrics.record_dropped();
            return;
        };

        let caller = match self.resolver.resolve(&site) {
            Ok(caller) => caller,
            Err(e) => {
                self.metrics.record_caller_failure();
                eprintln!("[LOGGER WARNING] {}", e);
                CallerInfo::default()
            }
        };

        if writes_file {
            self.file.ensure_open();
        }

        let record = LogRecord::new(level, &message.to_string(), caller);
        if Self::enqueue(&sender, Command::Record(record), &self.metrics) {
            self.metrics.record_enqueued();
        } else {
            self.metrics.record_dropped();
        }
    }

    /// Queue a command, waiting for space when the queue is full.
    fn enqueue(sender: &Sender<Command>, command: Command, metrics: &LoggerMetrics) -> bool {
        match sender.try_send(command) {
            Ok(()) => true,
            Err(TrySendError::Full(command)) => {
                metrics.record_block();
                sender.send(command).is_ok()
            }
            // Drain thread is gone
            Err(TrySendError::Disconnected(_)) => false,
        }
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log_at(LogLevel::Debug, message, CallSite::caller());
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log_at(LogLevel::Info, message, CallSite::caller());
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, message: impl fmt::Display) {
        self.log_at(LogLevel::Warning, message, CallSite::caller());
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log_at(LogLevel::Error, message, CallSite::caller());
    }

    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) {
        self.log_at(LogLevel::Fatal, message, CallSite::caller());
    }

    pub fn set_level(&self, level: LogLevel) {
        self.config.write().level = level;
    }

    pub fn set_output_type(&self, output: OutputTarget) {
        self.config.write().output = output;
    }

    pub fn set_flags(&self, flags: FormatFlags) {
        self.config.write().flags = flags;
    }

    /// Has no effect on the file once it has been opened.
    pub fn set_file_name(&self, name: impl Into<String>) {
        self.config.write().file_name = name.into();
    }

    /// Has no effect on the file once it has been opened.
    pub fn set_file_path(&self, dir: impl Into<PathBuf>) {
        self.config.write().file_dir = dir.into();
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> LoggerConfig {
        self.config.read().clone()
    }

    /// Path of the open log file, if file output has started.
    pub fn active_file_path(&self) -> Option<PathBuf> {
        self.file.active_path().map(PathBuf::from)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use sinklog::{Logger, OutputTarget};
    ///
    /// let logger = Logger::builder().output(OutputTarget::NONE).build().unwrap();
    /// logger.info("counted");
    /// logger.flush().unwrap();
    ///
    /// assert_eq!(logger.metrics().total_written(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Wait until every record queued before this call is written and the
    /// sinks are flushed.
    ///
    /// Returns the first sink error if the flush failed; the records it held
    /// are counted in [`LoggerMetrics::write_failures`].
    pub fn flush(&self) -> Result<()> {
        let sender = self.sender.read().clone().ok_or(LoggerError::LoggerStopped)?;
        let (ack_tx, ack_rx) = bounded(1);

        if !Self::enqueue(&sender, Command::Flush(ack_tx), &self.metrics) {
            return Err(LoggerError::LoggerStopped);
        }
        drop(sender);

        ack_rx.recv().map_err(|_| LoggerError::LoggerStopped)?
    }

    /// Gracefully shutdown the logger with a custom timeout
    ///
    /// Stops accepting records, lets the drain thread write everything still
    /// queued, then flushes the sinks. Records emitted afterwards are dropped.
    ///
    /// # Returns
    ///
    /// `true` if shutdown completed successfully within timeout, `false` otherwise
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sinklog::Logger;
    /// use std::time::Duration;
    ///
    /// let logger = Logger::builder().build().unwrap();
    /// logger.info("Important message");
    ///
    /// if !logger.shutdown(Duration::from_secs(10)) {
    ///     eprintln!("Warning: Logger shutdown timed out");
    /// }
    /// ```
    pub fn shutdown(&self, timeout: Duration) -> bool {
        // Closing our sender disconnects the channel once in-flight producers finish
        drop(self.sender.write().take());

        let Some(worker) = self.worker.lock().take() else {
            return true;
        };

        if let Err(RecvTimeoutError::Timeout) = worker.done.recv_timeout(timeout) {
            eprintln!(
                "[LOGGER WARNING] Drain thread did not finish within {:?} timeout. \
                 Some logs may be lost.",
                timeout
            );
            return false;
        }

        if let Err(e) = worker.handle.join() {
            eprintln!("[LOGGER ERROR] Drain thread panicked during shutdown: {:?}", e);
            return false;
        }

        if let Err(e) = self.file.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
            return false;
        }

        true
    }

    pub fn is_running(&self) -> bool {
        self.sender.read().is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);

        let failures = self.metrics.write_failures();
        if failures > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} failed record writes",
                failures
            );
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &*self.config.read())
            .field("capacity", &self.capacity)
            .field("running", &self.is_running())
            .finish()
    }
}

/// Consumer side of the queue, owned by the drain thread.
struct Drain {
    config: Arc<RwLock<LoggerConfig>>,
    console: ConsoleAppender,
    file: Arc<FileAppender>,
    metrics: Arc<LoggerMetrics>,
}

impl Drain {
    fn run(self, receiver: Receiver<Command>) {
        let mut batch = Vec::with_capacity(BATCH_SIZE);
        // Records handed to the sinks since the last flush
        let mut unflushed = 0u64;

        // Blocks while idle; ends once every sender is gone and the queue is empty
        while let Ok(command) = receiver.recv() {
            batch.push(command);
            batch.extend(receiver.try_iter().take(BATCH_SIZE - 1));

            for command in batch.drain(..) {
                match command {
                    Command::Record(record) => {
                        if self.write(&record) {
                            unflushed += 1;
                        }
                    }
                    Command::Flush(ack) => {
                        let _ = ack.send(self.flush(&mut unflushed));
                    }
                }
            }

            let _ = self.flush(&mut unflushed);
        }
    }

    /// Render once and hand the line to every enabled sink. A record that
    /// fails on any sink is counted as a write failure right away.
    fn write(&self, record: &LogRecord) -> bool {
        let (output, flags) = {
            let config = self.config.read();
            (config.output, config.flags)
        };
        let line = PrefixFormatter::new(flags).render(record);

        let mut ok = true;
        if output.writes_terminal() {
            let result = Self::isolated(&self.console, || self.console.append(&line));
            ok &= Self::report(&self.console, "write", &result);
        }
        if output.writes_file() {
            let file = self.file.as_ref();
            let result = Self::isolated(file, || file.append(&line));
            ok &= Self::report(file, "write", &result);
        }

        if !ok {
            self.metrics.record_write_failure();
        }
        ok
    }

    /// Flush both sinks and settle the `unflushed` records: written if every
    /// flush succeeded, failed otherwise.
    fn flush(&self, unflushed: &mut u64) -> Result<()> {
        let count = std::mem::take(unflushed);
        let appenders: [&dyn Appender; 2] = [&self.console, self.file.as_ref()];

        let mut outcome = Ok(());
        for appender in appenders {
            let result = Self::isolated(appender, || appender.flush());
            if !Self::report(appender, "flush", &result) && outcome.is_ok() {
                outcome = result;
            }
        }

        if outcome.is_ok() {
            self.metrics.add_written(count);
        } else {
            self.metrics.add_write_failures(count);
        }
        outcome
    }

    /// Run one appender call, turning a panic into an error so the drain
    /// thread keeps running.
    fn isolated(appender: &dyn Appender, op: impl FnOnce() -> Result<()>) -> Result<()> {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(op)) {
            Ok(result) => result,
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                Err(LoggerError::appender_panic(appender.name(), panic_msg))
            }
        }
    }

    fn report(appender: &dyn Appender, action: &str, result: &Result<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e @ LoggerError::AppenderPanic { .. }) => {
                eprintln!(
                    "[LOGGER CRITICAL] {} during {}. Other appenders continue to function.",
                    e, action
                );
                false
            }
            Err(e) => {
                eprintln!("[LOGGER ERROR] Appender '{}' {} failed: {}", appender.name(), action, e);
                false
            }
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use sinklog::prelude::*;
///
/// let logger = Logger::builder()
///     .level(LogLevel::Debug)
///     .output(OutputTarget::TERMINAL)
///     .flags(FormatFlags::TIME | FormatFlags::LEVEL)
///     .capacity(256)
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    capacity: usize,
    resolver: Arc<dyn CallerInfoResolver>,
    console: Option<ConsoleAppender>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            capacity: DEFAULT_QUEUE_CAPACITY,
            resolver: Arc::new(SourceResolver),
            console: None,
        }
    }

    /// Replace the whole configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, output: OutputTarget) -> Self {
        self.config.output = output;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: FormatFlags) -> Self {
        self.config.flags = flags;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.config.file_name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.file_dir = dir.into();
        self
    }

    /// Set the queue capacity; producers block once it is reached.
    #[must_use = "builder methods return a new value"]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Use a custom caller info resolver
    #[must_use = "builder methods return a new value"]
    pub fn resolver<R: CallerInfoResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    /// Send terminal output to `writer` instead of stdout
    #[must_use = "builder methods return a new value"]
    pub fn console_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.console = Some(ConsoleAppender::with_writer(writer));
        self
    }

    /// Build the Logger and start its drain thread
    pub fn build(self) -> Result<Logger> {
        self.config.validate()?;
        if self.capacity == 0 {
            return Err(LoggerError::config("LoggerBuilder", "queue capacity must be at least 1"));
        }

        Logger::spawn(
            self.config,
            self.capacity,
            self.resolver,
            self.console.unwrap_or_default(),
        )
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn lines(&self) -> Vec<String> {
            String::from_utf8_lossy(&self.0.lock())
                .lines()
                .map(String::from)
                .collect()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FixedResolver;

    impl CallerInfoResolver for FixedResolver {
        fn resolve(&self, _site: &CallSite) -> Result<CallerInfo> {
            Ok(CallerInfo::new("bar.rs", "Foo", 42))
        }
    }

    struct FailingResolver;

    impl CallerInfoResolver for FailingResolver {
        fn resolve(&self, _site: &CallSite) -> Result<CallerInfo> {
            Err(LoggerError::caller("stack too shallow"))
        }
    }

    fn console_logger(buffer: &SharedBuffer) -> LoggerBuilder {
        Logger::builder()
            .output(OutputTarget::TERMINAL)
            .console_writer(buffer.clone())
            .resolver(FixedResolver)
    }

    #[test]
    fn test_builder_rejects_zero_capacity() {
        let err = Logger::builder().capacity(0).build().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_builder_rejects_empty_file_name() {
        let err = Logger::builder().file_name("").build().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_bare_message_without_flags() {
        let buffer = SharedBuffer::default();
        let logger = console_logger(&buffer).flags(FormatFlags::NONE).build().unwrap();

        logger.info("x");
        logger.flush().unwrap();

        assert_eq!(buffer.lines(), vec!["x"]);
    }

    #[test]
    fn test_full_prefix_uses_resolved_caller() {
        let buffer = SharedBuffer::default();
        let logger = console_logger(&buffer).flags(FormatFlags::ALL).build().unwrap();

        logger.error("x");
        logger.flush().unwrap();

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with('['));
        assert!(
            lines[0].ends_with("] [ERROR  ] [bar.rs Foo() line42] x"),
            "unexpected line: {}",
            lines[0]
        );
    }

    #[test]
    fn test_level_threshold_filters() {
        let buffer = SharedBuffer::default();
        let logger = console_logger(&buffer)
            .flags(FormatFlags::LEVEL)
            .level(LogLevel::Warning)
            .build()
            .unwrap();

        logger.debug("hidden");
        logger.info("hidden");
        logger.warning("shown");
        logger.fatal("shown too");
        logger.flush().unwrap();

        assert_eq!(buffer.lines(), vec!["[WARNING] shown", "[FATAL  ] shown too"]);
        assert_eq!(logger.metrics().filtered_count(), 2);
    }

    #[test]
    fn test_flag_change_applies_to_later_records() {
        let buffer = SharedBuffer::default();
        let logger = console_logger(&buffer).flags(FormatFlags::NONE).build().unwrap();

        logger.info("plain");
        logger.flush().unwrap();
        logger.set_flags(FormatFlags::LINENO);
        logger.info("numbered");
        logger.flush().unwrap();

        assert_eq!(buffer.lines(), vec!["plain", "[line42] numbered"]);
    }

    #[test]
    fn test_caller_failure_still_emits() {
        let buffer = SharedBuffer::default();
        let logger = Logger::builder()
            .output(OutputTarget::TERMINAL)
            .console_writer(buffer.clone())
            .resolver(FailingResolver)
            .flags(FormatFlags::FILENAME | FormatFlags::FUNCNAME | FormatFlags::LINENO)
            .build()
            .unwrap();

        logger.info("still here");
        logger.flush().unwrap();

        assert_eq!(buffer.lines(), vec!["[ () line0] still here"]);
        assert_eq!(logger.metrics().caller_failures(), 1);
    }

    #[test]
    fn test_track_caller_reports_call_site() {
        let buffer = SharedBuffer::default();
        let logger = Logger::builder()
            .output(OutputTarget::TERMINAL)
            .console_writer(buffer.clone())
            .flags(FormatFlags::FILENAME | FormatFlags::LINENO)
            .build()
            .unwrap();

        let line = line!() + 1;
        logger.info("here");
        logger.flush().unwrap();

        assert_eq!(buffer.lines(), vec![format!("[logger.rs line{}] here", line)]);
    }

    #[test]
    fn test_shutdown_drains_queue() {
        let buffer = SharedBuffer::default();
        let logger = console_logger(&buffer).flags(FormatFlags::NONE).build().unwrap();

        for i in 0..200 {
            logger.info(format!("message {}", i));
        }
        assert!(logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT));

        let lines = buffer.lines();
        assert_eq!(lines.len(), 200);
        assert_eq!(lines[0], "message 0");
        assert_eq!(lines[199], "message 199");
        assert_eq!(logger.metrics().total_written(), 200);
    }

    #[test]
    fn test_emit_after_shutdown_is_dropped() {
        let buffer = SharedBuffer::default();
        let logger = console_logger(&buffer).build().unwrap();

        assert!(logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT));
        assert!(!logger.is_running());
        logger.info("too late");

        assert_eq!(logger.metrics().dropped_count(), 1);
        assert!(matches!(logger.flush(), Err(LoggerError::LoggerStopped)));
        // Second shutdown is a no-op
        assert!(logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT));
        assert!(buffer.lines().is_empty());
    }

    #[test]
    fn test_panicking_console_does_not_stop_drain() {
        struct PanickingWriter;

        impl Write for PanickingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                panic!("console exploded");
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let logger = Logger::builder()
            .output(OutputTarget::TERMINAL)
            .console_writer(PanickingWriter)
            .build()
            .unwrap();

        logger.info("first");
        logger.info("second");
        logger.flush().unwrap();

        assert_eq!(logger.metrics().write_failures(), 2);
        assert!(logger.is_running());
    }

    #[test]
    fn test_panicking_flush_does_not_stop_drain() {
        struct FlushPanics(SharedBuffer);

        impl Write for FlushPanics {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.write(buf)
            }

            fn flush(&mut self) -> io::Result<()> {
                panic!("flush exploded");
            }
        }

        let buffer = SharedBuffer::default();
        let logger = Logger::builder()
            .output(OutputTarget::TERMINAL)
            .flags(FormatFlags::NONE)
            .console_writer(FlushPanics(buffer.clone()))
            .build()
            .unwrap();

        logger.info("a");
        assert!(matches!(
            logger.flush(),
            Err(LoggerError::AppenderPanic { .. })
        ));
        logger.info("b");
        assert!(logger.flush().is_err());

        assert_eq!(buffer.lines(), vec!["a", "b"]);
        assert!(logger.is_running());
        assert_eq!(logger.metrics().dropped_count(), 0);
        assert_eq!(logger.metrics().total_written(), 0);
        assert_eq!(logger.metrics().write_failures(), 2);
    }

    #[test]
    fn test_failed_flush_counts_records_as_lost() {
        struct FlushFails;

        impl Write for FlushFails {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::WriteZero, "device full"))
            }
        }

        let logger = Logger::builder()
            .output(OutputTarget::TERMINAL)
            .console_writer(FlushFails)
            .build()
            .unwrap();

        logger.info("one");
        logger.info("two");
        let err = logger.flush().unwrap_err();

        assert!(err.to_string().contains("device full"), "unexpected error: {}", err);
        assert_eq!(logger.metrics().total_written(), 0);
        assert_eq!(logger.metrics().write_failures(), 2);
        assert_eq!(logger.metrics().pending(), 0);
    }

    #[test]
    fn test_detached_logger_drops_everything() {
        let logger = Logger::detached(LoggerConfig::default());
        logger.info("nowhere");

        assert_eq!(logger.metrics().dropped_count(), 1);
        assert!(logger.flush().is_err());
        assert!(logger.shutdown(Duration::from_millis(10)));
    }
}
