//! Logging macros for every level.
//!
//! The plain macros (`info!`, `warn!`, ...) take any number of `Display`
//! values, including none, and write them back to back, with no separator.
//! The `f` macros (`infof!`, `warnf!`, ...) take a format string like
//! `format!`.
//! Nothing is rendered when the level is below the logger threshold, and
//! file/line flags report the macro call site.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::{err, errf, log};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Logger::builder().with_writer(sink.clone()).build().unwrap();
//!
//! let user_id = 42;
//! err!(logger, "login failed for ", user_id);
//! errf!(logger, "login failed for {}", user_id);
//! log!(logger, 7, "custom level");
//!
//! let lines: Vec<String> = sink.contents_string().lines().map(String::from).collect();
//! assert_eq!(lines[0], lines[1]);
//! assert_eq!(lines[2], "[level 7]custom level");
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __concat {
    ($($value:expr),+) => {
        $crate::Concat(&[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Log values at an explicit level.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::default();
/// use leveled_logger::log;
/// log!(logger, Level::NOTICE, "Simple message");
/// log!(logger, 12, "Code: ", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(,)?) => {
        $logger.log($level, $crate::Concat(&[]))
    };
    ($logger:expr, $level:expr, $($value:expr),+ $(,)?) => {
        $logger.log($level, $crate::__concat!($($value),+))
    };
}

/// Log a formatted message at an explicit level.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::default();
/// use leveled_logger::logf;
/// logf!(logger, Level::ERR, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr $(,)?) => {
        $logger.info($crate::Concat(&[]))
    };
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.info($crate::__concat!($($value),+))
    };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! notice {
    ($logger:expr $(,)?) => {
        $logger.notice($crate::Concat(&[]))
    };
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.notice($crate::__concat!($($value),+))
    };
}

#[macro_export]
macro_rules! noticef {
    ($logger:expr, $($arg:tt)+) => {
        $logger.noticef(format_args!($($arg)+))
    };
}

/// Log a warning.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::default();
/// use leveled_logger::{warn, warnf};
/// warn!(logger, "Low disk space");
/// warnf!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr $(,)?) => {
        $logger.warn($crate::Concat(&[]))
    };
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.warn($crate::__concat!($($value),+))
    };
}

#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! err {
    ($logger:expr $(,)?) => {
        $logger.err($crate::Concat(&[]))
    };
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.err($crate::__concat!($($value),+))
    };
}

#[macro_export]
macro_rules! errf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! crit {
    ($logger:expr $(,)?) => {
        $logger.crit($crate::Concat(&[]))
    };
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.crit($crate::__concat!($($value),+))
    };
}

#[macro_export]
macro_rules! critf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.critf(format_args!($($arg)+))
    };
}

/// Log an emergency.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::default();
/// use leveled_logger::{emerg, emergf};
/// emerg!(logger, "Unable to recover: ", "disk full");
/// emergf!(logger, "Unable to recover: {}", "disk full");
/// ```
#[macro_export]
macro_rules! emerg {
    ($logger:expr $(,)?) => {
        $logger.emerg($crate::Concat(&[]))
    };
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.emerg($crate::__concat!($($value),+))
    };
}

#[macro_export]
macro_rules! emergf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.emergf(format_args!($($arg)+))
    };
}
