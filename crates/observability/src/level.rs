//! Log level vocabularies: the user-facing names and the logger's internal levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ObservabilityError;

/// Level names accepted from users (CLI flags, config files).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserLogLevel {
    None,
    Error,
    Warning,
    Info,
    Debug,
    All,
}

impl UserLogLevel {
    /// Every user level, quietest first.
    pub const ALL: [UserLogLevel; 6] = [
        UserLogLevel::None,
        UserLogLevel::Error,
        UserLogLevel::Warning,
        UserLogLevel::Info,
        UserLogLevel::Debug,
        UserLogLevel::All,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UserLogLevel::None => "none",
            UserLogLevel::Error => "error",
            UserLogLevel::Warning => "warning",
            UserLogLevel::Info => "info",
            UserLogLevel::Debug => "debug",
            UserLogLevel::All => "all",
        }
    }

    /// Exact (trimmed) match on the label; `None` for anything else.
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == label.trim())
    }

    /// The logger level this user level stands for.
    pub fn internal(self) -> InternalLevel {
        match self {
            UserLogLevel::None => InternalLevel::Silent,
            UserLogLevel::Error => InternalLevel::Error,
            UserLogLevel::Warning => InternalLevel::Warn,
            UserLogLevel::Info => InternalLevel::Info,
            UserLogLevel::Debug => InternalLevel::Debug,
            UserLogLevel::All => InternalLevel::Silly,
        }
    }
}

impl fmt::Display for UserLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserLogLevel {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            ObservabilityError::Config(format!(
                "unknown log level '{}' (expected one of: none, error, warning, info, debug, all)",
                s
            ))
        })
    }
}

/// Map a user-facing level name to the internal logger level.
///
/// Unknown names map to [`InternalLevel::Error`]; this never fails.
pub fn map_log_level(user_level: &str) -> InternalLevel {
    UserLogLevel::parse(user_level)
        .map(UserLogLevel::internal)
        .unwrap_or(InternalLevel::Error)
}

/// Levels understood by the logger. Any other label is carried verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InternalLevel {
    Silent,
    Error,
    Warn,
    Info,
    Debug,
    Silly,
    Other(String),
}

impl InternalLevel {
    /// Accepts any label; known ones become their variant, the rest `Other`.
    pub fn parse(label: &str) -> Self {
        match label {
            "silent" => InternalLevel::Silent,
            "error" => InternalLevel::Error,
            "warn" => InternalLevel::Warn,
            "info" => InternalLevel::Info,
            "debug" => InternalLevel::Debug,
            "silly" => InternalLevel::Silly,
            other => InternalLevel::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            InternalLevel::Silent => "silent",
            InternalLevel::Error => "error",
            InternalLevel::Warn => "warn",
            InternalLevel::Info => "info",
            InternalLevel::Debug => "debug",
            InternalLevel::Silly => "silly",
            InternalLevel::Other(raw) => raw,
        }
    }

    /// Silent or error: the levels that switch on console filtering.
    pub fn is_quiet(&self) -> bool {
        matches!(self, InternalLevel::Silent | InternalLevel::Error)
    }

    /// Numeric priority (lower is more severe). `Silent` has none; unknown labels rank as `Error`.
    fn priority(&self) -> Option<u8> {
        match self {
            InternalLevel::Silent => None,
            InternalLevel::Error | InternalLevel::Other(_) => Some(0),
            InternalLevel::Warn => Some(1),
            InternalLevel::Info => Some(2),
            InternalLevel::Debug => Some(5),
            InternalLevel::Silly => Some(6),
        }
    }

    /// Whether an event at `event` passes this level.
    pub fn allows(&self, event: tracing::Level) -> bool {
        match self.priority() {
            Some(max) => event_priority(event) <= max,
            None => false,
        }
    }
}

/// Priority of a tracing event level on the internal scale (TRACE is `silly`).
pub(crate) fn event_priority(level: tracing::Level) -> u8 {
    match level {
        tracing::Level::ERROR => 0,
        tracing::Level::WARN => 1,
        tracing::Level::INFO => 2,
        tracing::Level::DEBUG => 5,
        tracing::Level::TRACE => 6,
    }
}

impl fmt::Display for InternalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for InternalLevel {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<String> for InternalLevel {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<InternalLevel> for String {
    fn from(level: InternalLevel) -> Self {
        level.as_str().to_string()
    }
}

impl From<UserLogLevel> for InternalLevel {
    fn from(level: UserLogLevel) -> Self {
        level.internal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn maps_every_user_level() {
        assert_eq!(map_log_level("none"), InternalLevel::Silent);
        assert_eq!(map_log_level("error"), InternalLevel::Error);
        assert_eq!(map_log_level("warning"), InternalLevel::Warn);
        assert_eq!(map_log_level("info"), InternalLevel::Info);
        assert_eq!(map_log_level("debug"), InternalLevel::Debug);
        assert_eq!(map_log_level("all"), InternalLevel::Silly);
    }

    #[test]
    fn unknown_user_level_maps_to_error() {
        assert_eq!(map_log_level("verbose"), InternalLevel::Error);
        assert_eq!(map_log_level(""), InternalLevel::Error);
        assert_eq!(map_log_level("INFO"), InternalLevel::Error);
        assert_eq!(map_log_level("warn"), InternalLevel::Error);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(map_log_level("  debug\n"), InternalLevel::Debug);
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!("loud".parse::<UserLogLevel>().is_err());
        assert_eq!("all".parse::<UserLogLevel>().unwrap(), UserLogLevel::All);
    }

    #[test]
    fn internal_parse_keeps_raw_label() {
        let level = InternalLevel::parse("verbose");
        assert_eq!(level, InternalLevel::Other("verbose".into()));
        assert_eq!(level.as_str(), "verbose");
        assert_eq!(InternalLevel::parse("warn"), InternalLevel::Warn);
    }

    #[test]
    fn quiet_levels() {
        assert!(InternalLevel::Silent.is_quiet());
        assert!(InternalLevel::Error.is_quiet());
        assert!(!InternalLevel::Warn.is_quiet());
        assert!(!InternalLevel::Other("error ".into()).is_quiet());
    }

    #[test]
    fn allows_follows_priority() {
        assert!(InternalLevel::Info.allows(Level::WARN));
        assert!(InternalLevel::Info.allows(Level::INFO));
        assert!(!InternalLevel::Info.allows(Level::DEBUG));
        assert!(InternalLevel::Silly.allows(Level::TRACE));
        assert!(!InternalLevel::Silent.allows(Level::ERROR));
        assert!(InternalLevel::Other("bogus".into()).allows(Level::ERROR));
        assert!(!InternalLevel::Other("bogus".into()).allows(Level::WARN));
    }

    #[test]
    fn serializes_as_plain_label() {
        let json = serde_json::to_string(&InternalLevel::Silly).unwrap();
        assert_eq!(json, "\"silly\"");
        let back: InternalLevel = serde_json::from_str("\"verbose\"").unwrap();
        assert_eq!(back, InternalLevel::Other("verbose".into()));
    }
}
