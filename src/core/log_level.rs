//! Log level definitions
//!
//! Levels are plain integers so that callers with a dynamic level value can
//! log at any severity. Six of them are known and carry a fixed, colorized
//! label; every other value gets a generic `[level N]` label.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Severity of a log line.
///
/// Ordering is plain integer ordering and is only used to compare a line
/// against the logger threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Level(i32);

impl Level {
    pub const INFO: Level = Level(0);
    pub const NOTICE: Level = Level(1);
    pub const WARN: Level = Level(2);
    pub const ERR: Level = Level(3);
    pub const CRIT: Level = Level(4);
    pub const EMERG: Level = Level(5);

    /// All known levels in ascending order.
    pub const ALL: [Level; 6] = [
        Level::INFO,
        Level::NOTICE,
        Level::WARN,
        Level::ERR,
        Level::CRIT,
        Level::EMERG,
    ];

    #[must_use]
    pub const fn new(value: i32) -> Self {
        Level(value)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        self.0 >= 0 && self.0 < LABELS.len() as i32
    }

    /// Upper-case name of a known level, `None` otherwise.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("INFO"),
            1 => Some("NOTICE"),
            2 => Some("WARN"),
            3 => Some("ERR"),
            4 => Some("CRIT"),
            5 => Some("EMERG"),
            _ => None,
        }
    }

    /// Marker written in front of every line of this level.
    ///
    /// Known levels get their bracketed ANSI label; any other value yields
    /// `[level N]`. Never fails and never returns an empty string.
    ///
    /// ```
    /// use leveled_logger::Level;
    ///
    /// assert_eq!(Level::WARN.label(), "[\x1b[1;43;37mWARN\x1b[0m]");
    /// assert_eq!(Level::new(7).label(), "[level 7]");
    /// ```
    #[must_use]
    pub fn label(self) -> Cow<'static, str> {
        match self.known_label() {
            Some(label) => Cow::Borrowed(label),
            None => Cow::Owned(format!("[level {}]", self.0)),
        }
    }

    fn known_label(self) -> Option<&'static str> {
        usize::try_from(self.0)
            .ok()
            .and_then(|idx| LABELS.get(idx))
            .copied()
    }
}

/// Level markers, indexed by level value. Downstream scrapers match these
/// bytes exactly.
const LABELS: [&str; 6] = [
    "[\x1b[1;42;37mINFO\x1b[0m]",
    "[\x1b[1;42;37mNOTICE\x1b[0m]",
    "[\x1b[1;43;37mWARN\x1b[0m]",
    "[\x1b[1;41;37mERR\x1b[0m]",
    "[\x1b[1;45;37mCRIT\x1b[0m]",
    "[\x1b[1;45;37mEMERG\x1b[0m]",
];

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Level(value)
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "level {}", self.0),
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_uppercase().as_str() {
            "INFO" => Ok(Level::INFO),
            "NOTICE" => Ok(Level::NOTICE),
            "WARN" | "WARNING" => Ok(Level::WARN),
            "ERR" | "ERROR" => Ok(Level::ERR),
            "CRIT" | "CRITICAL" => Ok(Level::CRIT),
            "EMERG" | "EMERGENCY" => Ok(Level::EMERG),
            _ => trimmed
                .parse::<i32>()
                .map(Level)
                .map_err(|_| format!("Invalid log level: '{}'", s)),
        }
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_i32(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Value(i32),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Value(value) => Ok(Level(value)),
            Repr::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}
