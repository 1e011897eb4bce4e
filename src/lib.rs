//! # Leveled Logger
//!
//! A small, synchronous leveled logger. Lines carry a colorized level marker,
//! are filtered against a threshold and written to a single sink, which can
//! be swapped or reopened at runtime to cooperate with external log rotation.
//!
//! ## Features
//!
//! - **Six levels**: `INFO < NOTICE < WARN < ERR < CRIT < EMERG`, plus any other
//!   integer level with a generic marker
//! - **Swappable sinks**: files, in-memory buffers, any `io::Write`
//! - **Rotation**: reopen the log file by path and hand the old handle back
//! - **Thread Safe**: lines from concurrent callers never interleave
//! - **Best effort**: write failures never reach the caller
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::{infof, warn};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Logger::builder().with_writer(sink.clone()).build().unwrap();
//!
//! warn!(logger, "disk ", 91, "% full");
//! infof!(logger, "{} jobs queued", 4);
//! assert_eq!(sink.contents_string().lines().count(), 2);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Concat, Level, LineFlags, Logger, LoggerConfig, LoggerError, Result, SharedSink, Sink,
    };
    pub use crate::sinks::{FileSink, MemorySink, StdoutSink, WriterSink};
}

pub use crate::core::{
    Concat, Level, LineFlags, LineFormatter, Logger, LoggerConfig, LoggerError, Result,
    SharedSink, Sink,
};
pub use sinks::{FileSink, MemorySink, StdoutSink, WriterSink, FILE_MODE};
