//! Standard output sink

use crate::core::Sink;
use std::io::{self, Write};

/// Writes lines to the process standard output. Used by `Logger::default()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn write(&self, buf: &[u8]) -> io::Result<()> {
        io::stdout().lock().write_all(buf)
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().flush()
    }

    fn name(&self) -> &str {
        "stdout"
    }
}
