//! Line header formatting
//!
//! Every line handed to a sink is `[prefix][header][msgprefix]message\n`,
//! where the header is selected by [`LineFlags`]. With an empty prefix and no
//! flags the message is written byte-for-byte.

use chrono::{DateTime, Local, Utc};
use std::panic::Location;

bitflags::bitflags! {
    /// Annotations added in front of each line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LineFlags: u32 {
        /// Local date: `2009/01/23 `
        const DATE = 1 << 0;
        /// Local time: `01:23:23 `
        const TIME = 1 << 1;
        /// Microsecond resolution: `01:23:23.123123 `. Implies `TIME`.
        const MICROSECONDS = 1 << 2;
        /// Full file name and line number: `/a/b/c.rs:23: `
        const LONG_FILE = 1 << 3;
        /// File name element and line number: `c.rs:23: `. Overrides `LONG_FILE`.
        const SHORT_FILE = 1 << 4;
        /// Use UTC rather than the local time zone
        const UTC = 1 << 5;
        /// Move the prefix from the start of the line to just before the message
        const MSG_PREFIX = 1 << 6;
        /// Initial values for a standard logger
        const STD_FLAGS = Self::DATE.bits() | Self::TIME.bits();
    }
}

impl serde::Serialize for LineFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for LineFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}

/// Builds complete output lines from a prefix, flags and message.
#[derive(Debug, Clone, Default)]
pub struct LineFormatter {
    prefix: String,
    flags: LineFlags,
}

impl LineFormatter {
    pub fn new(prefix: impl Into<String>, flags: LineFlags) -> Self {
        Self {
            prefix: prefix.into(),
            flags,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    pub fn flags(&self) -> LineFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: LineFlags) {
        self.flags = flags;
    }

    /// Whether formatting needs the caller's source location.
    pub fn wants_location(&self) -> bool {
        self.flags
            .intersects(LineFlags::LONG_FILE | LineFlags::SHORT_FILE)
    }

    /// Whether formatting needs the wall clock.
    pub fn wants_time(&self) -> bool {
        self.flags
            .intersects(LineFlags::DATE | LineFlags::TIME | LineFlags::MICROSECONDS)
    }

    /// Current time if the header shows it, `None` otherwise.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.wants_time().then(Utc::now)
    }

    /// Append a complete line to `buf`.
    ///
    /// The time header is written only when `now` is given. A newline is
    /// added only if `message` does not already end with one.
    pub fn format_into(
        &self,
        buf: &mut Vec<u8>,
        now: Option<DateTime<Utc>>,
        caller: &Location<'_>,
        message: &str,
    ) {
        if !self.flags.contains(LineFlags::MSG_PREFIX) {
            buf.extend_from_slice(self.prefix.as_bytes());
        }

        if let Some(now) = now.filter(|_| self.wants_time()) {
            if self.flags.contains(LineFlags::UTC) {
                self.write_time(buf, &now);
            } else {
                self.write_time(buf, &now.with_timezone(&Local));
            }
        }

        if self.wants_location() {
            let file = if self.flags.contains(LineFlags::SHORT_FILE) {
                short_file(caller.file())
            } else {
                caller.file()
            };
            buf.extend_from_slice(format!("{}:{}: ", file, caller.line()).as_bytes());
        }

        if self.flags.contains(LineFlags::MSG_PREFIX) {
            buf.extend_from_slice(self.prefix.as_bytes());
        }

        buf.extend_from_slice(message.as_bytes());
        if !message.ends_with('\n') {
            buf.push(b'\n');
        }
    }

    fn write_time<Tz>(&self, buf: &mut Vec<u8>, at: &DateTime<Tz>)
    where
        Tz: chrono::TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        if self.flags.contains(LineFlags::DATE) {
            buf.extend_from_slice(at.format("%Y/%m/%d ").to_string().as_bytes());
        }
        if self.flags.contains(LineFlags::MICROSECONDS) {
            buf.extend_from_slice(at.format("%H:%M:%S%.6f ").to_string().as_bytes());
        } else if self.flags.contains(LineFlags::TIME) {
            buf.extend_from_slice(at.format("%H:%M:%S ").to_string().as_bytes());
        }
    }
}

/// Last path element, accepting both separators.
fn short_file(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}
