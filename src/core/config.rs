//! Logger construction arguments

use super::{
    error::Result,
    line_format::LineFlags,
    log_level::Level,
    sink::{SharedSink, Sink},
};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Everything needed to build a [`Logger`](super::Logger).
///
/// An injected `writer` takes precedence over `file_path`. One of the two
/// must be present.
///
/// # Example
///
/// ```
/// use leveled_logger::prelude::*;
///
/// let config = LoggerConfig::from_json(
///     r#"{ "file_path": "/var/log/app.log", "min_level": "warn", "flags": "DATE | TIME" }"#,
/// )
/// .unwrap();
/// assert_eq!(config.min_level, Level::WARN);
/// ```
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    #[serde(skip)]
    pub writer: Option<SharedSink>,
    pub file_path: Option<PathBuf>,
    pub prefix: String,
    pub flags: LineFlags,
    pub min_level: Level,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. The writer can only be injected in code.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_writer(mut self, writer: SharedSink) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Same as [`with_writer`](Self::with_writer) for a sink that is not yet shared.
    #[must_use = "builder methods return a new value"]
    pub fn with_sink<S: Sink + 'static>(self, sink: S) -> Self {
        self.with_writer(Arc::new(sink))
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_flags(mut self, flags: LineFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_min_level(mut self, level: impl Into<Level>) -> Self {
        self.min_level = level.into();
        self
    }

    /// Build the logger. Shorthand for `Logger::new(config)`.
    pub fn build(self) -> Result<super::Logger> {
        super::Logger::new(self)
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("writer", &self.writer.as_ref().map(|w| w.name().to_string()))
            .field("file_path", &self.file_path)
            .field("prefix", &self.prefix)
            .field("flags", &self.flags)
            .field("min_level", &self.min_level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::new();
        assert!(config.writer.is_none());
        assert!(config.file_path.is_none());
        assert_eq!(config.prefix, "");
        assert_eq!(config.flags, LineFlags::empty());
        assert_eq!(config.min_level, Level::INFO);
    }

    #[test]
    fn test_builder() {
        let config = LoggerConfig::new()
            .with_sink(MemorySink::new())
            .with_file_path("/tmp/ignored.log")
            .with_prefix("svc ")
            .with_flags(LineFlags::SHORT_FILE)
            .with_min_level(Level::ERR);

        assert!(config.writer.is_some());
        assert_eq!(config.prefix, "svc ");
        assert_eq!(config.flags, LineFlags::SHORT_FILE);
        assert_eq!(config.min_level, Level::ERR);
    }

    #[test]
    fn test_from_json() {
        let config = LoggerConfig::from_json(
            r#"{"file_path": "/tmp/x.log", "prefix": "p ", "flags": "DATE | UTC", "min_level": 2}"#,
        )
        .unwrap();

        assert_eq!(config.file_path, Some(PathBuf::from("/tmp/x.log")));
        assert_eq!(config.prefix, "p ");
        assert_eq!(config.flags, LineFlags::DATE | LineFlags::UTC);
        assert_eq!(config.min_level, Level::WARN);
    }

    #[test]
    fn test_from_json_rejects_bad_level() {
        let err = LoggerConfig::from_json(r#"{"min_level": "loud"}"#).unwrap_err();
        assert!(matches!(err, crate::core::LoggerError::Json(_)));
    }

    #[test]
    fn test_debug_hides_writer() {
        let config = LoggerConfig::new().with_sink(MemorySink::new());
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("Some(\"memory\")"));
    }
}
