//! In-memory sink, mostly useful for tests and for capturing output

use crate::core::Sink;
use parking_lot::Mutex;
use std::io;

#[derive(Debug, Default)]
pub struct MemorySink {
    buffer: Mutex<Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Drain the buffer, returning what was in it.
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.buffer.lock())
    }
}

impl Sink for MemorySink {
    fn write(&self, buf: &[u8]) -> io::Result<()> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_writes() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.write(b"one\n").unwrap();
        sink.write(b"two\n").unwrap();

        assert_eq!(sink.contents_string(), "one\ntwo\n");
        assert_eq!(sink.len(), 8);
        assert!(sink.as_file().is_none());
    }

    #[test]
    fn test_take_drains() {
        let sink = MemorySink::new();
        sink.write(b"line\n").unwrap();

        assert_eq!(sink.take(), b"line\n");
        assert!(sink.is_empty());
    }
}
