//! Adapter turning any `io::Write` into a sink

use crate::core::Sink;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Wraps an arbitrary writer (socket, pipe, `Vec<u8>`, ...) so it can be
/// injected into a logger.
pub struct WriterSink<W> {
    writer: Mutex<W>,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            name: "writer".to_string(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Run `f` with exclusive access to the wrapped writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.writer.lock())
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&self, buf: &[u8]) -> io::Result<()> {
        self.writer.lock().write_all(buf)
    }

    fn flush(&self) -> io::Result<()> {
        self.writer.lock().flush()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
