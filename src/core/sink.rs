//! Sink trait for log output destinations

use crate::sinks::FileSink;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Shared handle to a sink. The logger and its callers hold clones of the
/// same `Arc`, so the sink is closed only when the last handle is dropped.
pub type SharedSink = Arc<dyn Sink>;

/// A writable stream that receives fully formatted log lines.
///
/// Each call to [`Sink::write`] carries exactly one complete line. The logger
/// serializes calls, so implementations only need interior mutability for
/// callers that use the sink outside the logger.
pub trait Sink: Send + Sync {
    fn write(&self, buf: &[u8]) -> io::Result<()>;

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;

    /// Returns the file-backed sink, if this is one. Rotation only applies
    /// to file-backed sinks.
    fn as_file(&self) -> Option<&FileSink> {
        None
    }
}

impl fmt::Debug for dyn Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sink").field(&self.name()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    #[test]
    fn test_shared_sink_debug() {
        let sink: SharedSink = Arc::new(MemorySink::new());
        assert_eq!(format!("{:?}", sink), "Sink(\"memory\")");
        assert_eq!(format!("{:?}", Some(sink)), "Some(Sink(\"memory\"))");
    }
}
