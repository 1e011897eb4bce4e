//! Core logger types and traits

pub mod concat;
pub mod config;
pub mod error;
pub mod line_format;
pub mod log_level;
pub mod logger;
pub mod sink;

pub use concat::Concat;
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use line_format::{LineFlags, LineFormatter};
pub use log_level::Level;
pub use logger::Logger;
pub use sink::{SharedSink, Sink};
