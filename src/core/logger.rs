//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    line_format::{LineFlags, LineFormatter},
    log_level::Level,
    sink::SharedSink,
};
use crate::sinks::{FileSink, StdoutSink};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Leveled logger writing to a single, swappable sink.
///
/// Every emission method is synchronous: the line is formatted and written
/// before the call returns. Write failures are ignored. Lines from
/// concurrent callers never interleave, and swapping the sink (directly or by
/// [`rotate`](Logger::rotate)) waits for the line in flight.
///
/// # Example
///
/// ```
/// use leveled_logger::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::builder()
///     .with_writer(sink.clone())
///     .with_min_level(Level::WARN)
///     .build()
///     .unwrap();
///
/// logger.info("dropped");
/// logger.warnf(format_args!("count={}", 3));
/// assert_eq!(sink.contents_string(), "[\x1b[1;43;37mWARN\x1b[0m]count=3\n");
/// ```
pub struct Logger {
    min_level: RwLock<Level>,
    output: Mutex<Output>,
}

/// State touched by every write. Kept behind one lock so a line is always
/// formatted and written against the same sink.
struct Output {
    sink: SharedSink,
    formatter: LineFormatter,
    buf: Vec<u8>,
}

impl Logger {
    /// Build a logger from its configuration.
    ///
    /// An injected writer is used as is. Otherwise the configured file is
    /// opened for appending (created with mode `0o666` if missing); if that
    /// fails no logger is returned.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        let LoggerConfig {
            writer,
            file_path,
            prefix,
            flags,
            min_level,
        } = config;

        let sink: SharedSink = match (writer, file_path) {
            (Some(writer), _) => writer,
            (None, Some(path)) => {
                let file = FileSink::open(&path).map_err(|e| LoggerError::open(&path, e))?;
                Arc::new(file)
            }
            (None, None) => {
                return Err(LoggerError::config(
                    "LoggerConfig",
                    "either a writer or a file path is required",
                ))
            }
        };

        Ok(Self::with_parts(
            sink,
            min_level,
            LineFormatter::new(prefix, flags),
        ))
    }

    /// Start building a configuration for [`Logger::new`].
    #[must_use]
    pub fn builder() -> LoggerConfig {
        LoggerConfig::new()
    }

    fn with_parts(sink: SharedSink, min_level: Level, formatter: LineFormatter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            output: Mutex::new(Output {
                sink,
                formatter,
                buf: Vec::new(),
            }),
        }
    }

    /// The active sink. The returned handle is the same `Arc` the logger
    /// writes to.
    pub fn sink(&self) -> SharedSink {
        Arc::clone(&self.output.lock().sink)
    }

    /// Replace the active sink, returning the previous one.
    ///
    /// The previous sink is neither flushed nor closed here. Dropping the
    /// returned handle closes it only if nobody else holds a reference.
    pub fn set_sink(&self, sink: SharedSink) -> SharedSink {
        std::mem::replace(&mut self.output.lock().sink, sink)
    }

    /// Reopen the log file by path and swap the new handle in.
    ///
    /// Returns `Ok(None)` without doing anything if the active sink is not a
    /// file. On success the pre-rotation handle is returned so the caller can
    /// close it once external tooling has moved the old file. If reopening
    /// fails the active sink is left in place and logging carries on.
    pub fn rotate(&self) -> Result<Option<SharedSink>> {
        let mut output = self.output.lock();

        let Some(current) = output.sink.as_file() else {
            return Ok(None);
        };
        let fresh = current
            .reopen()
            .map_err(|e| LoggerError::rotate(current.path(), e))?;

        Ok(Some(std::mem::replace(&mut output.sink, Arc::new(fresh))))
    }

    /// Flush the active sink.
    pub fn flush(&self) -> Result<()> {
        self.output.lock().sink.flush()?;
        Ok(())
    }

    pub fn min_level(&self) -> Level {
        *self.min_level.read()
    }

    pub fn set_min_level(&self, level: impl Into<Level>) {
        *self.min_level.write() = level.into();
    }

    /// Whether a line at `level` would be written.
    #[inline]
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= *self.min_level.read()
    }

    pub fn prefix(&self) -> String {
        self.output.lock().formatter.prefix().to_string()
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.output.lock().formatter.set_prefix(prefix);
    }

    pub fn flags(&self) -> LineFlags {
        self.output.lock().formatter.flags()
    }

    pub fn set_flags(&self, flags: LineFlags) {
        self.output.lock().formatter.set_flags(flags);
    }

    /// Write `label + values + "\n"` if `level` passes the threshold.
    ///
    /// `caller` is reported by the file/line flags.
    fn emit(&self, caller: &Location<'_>, level: Level, values: &dyn fmt::Display) {
        if !self.is_enabled(level) {
            return;
        }
        let message = format!("{}{}\n", level.label(), values);
        self.output(caller, &message);
    }

    /// Same as `emit`, with the body produced from format arguments.
    fn emitf(&self, caller: &Location<'_>, level: Level, args: fmt::Arguments<'_>) {
        if !self.is_enabled(level) {
            return;
        }
        let message = format!("{}{}\n", level.label(), args);
        self.output(caller, &message);
    }

    fn output(&self, caller: &Location<'_>, message: &str) {
        let mut output = self.output.lock();
        let Output {
            sink,
            formatter,
            buf,
        } = &mut *output;

        buf.clear();
        let now = formatter.timestamp();
        formatter.format_into(buf, now, caller, message);
        let _ = sink.write(buf);
    }

    /// Log at an explicit, possibly unknown, level.
    #[track_caller]
    pub fn log(&self, level: impl Into<Level>, message: impl fmt::Display) {
        self.emit(Location::caller(), level.into(), &message);
    }

    /// Formatted variant of [`log`](Logger::log).
    #[track_caller]
    pub fn logf(&self, level: impl Into<Level>, args: fmt::Arguments<'_>) {
        self.emitf(Location::caller(), level.into(), args);
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Location::caller(), Level::INFO, &message);
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emitf(Location::caller(), Level::INFO, args);
    }

    #[track_caller]
    pub fn notice(&self, message: impl fmt::Display) {
        self.emit(Location::caller(), Level::NOTICE, &message);
    }

    #[track_caller]
    pub fn noticef(&self, args: fmt::Arguments<'_>) {
        self.emitf(Location::caller(), Level::NOTICE, args);
    }

    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.emit(Location::caller(), Level::WARN, &message);
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emitf(Location::caller(), Level::WARN, args);
    }

    #[track_caller]
    pub fn err(&self, message: impl fmt::Display) {
        self.emit(Location::caller(), Level::ERR, &message);
    }

    #[track_caller]
    pub fn errf(&self, args: fmt::Arguments<'_>) {
        self.emitf(Location::caller(), Level::ERR, args);
    }

    #[track_caller]
    pub fn crit(&self, message: impl fmt::Display) {
        self.emit(Location::caller(), Level::CRIT, &message);
    }

    #[track_caller]
    pub fn critf(&self, args: fmt::Arguments<'_>) {
        self.emitf(Location::caller(), Level::CRIT, args);
    }

    #[track_caller]
    pub fn emerg(&self, message: impl fmt::Display) {
        self.emit(Location::caller(), Level::EMERG, &message);
    }

    #[track_caller]
    pub fn emergf(&self, args: fmt::Arguments<'_>) {
        self.emitf(Location::caller(), Level::EMERG, args);
    }
}

impl Default for Logger {
    /// Logger on standard output with the `INFO` threshold and no header.
    fn default() -> Self {
        Self::with_parts(
            Arc::new(StdoutSink::new()),
            Level::INFO,
            LineFormatter::default(),
        )
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let output = self.output.lock();
        f.debug_struct("Logger")
            .field("min_level", &self.min_level())
            .field("sink", &output.sink.name())
            .field("formatter", &output.formatter)
            .finish()
    }
}
