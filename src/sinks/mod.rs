//! Sink implementations

pub mod console;
pub mod file;
pub mod memory;
pub mod writer;

pub use console::StdoutSink;
pub use file::{FileSink, FILE_MODE};
pub use memory::MemorySink;
pub use writer::WriterSink;

pub use crate::core::{SharedSink, Sink};
