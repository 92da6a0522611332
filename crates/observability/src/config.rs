//! Configuration for process logging

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::env::LOG_LEVEL_VAR;
use crate::level::{map_log_level, InternalLevel};

/// Sink for runtime log lines (e.g. TUI debug traces). Called from the tracing layer; must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

/// Variable holding a user-facing level name (`none` … `all`).
pub const USER_LOG_LEVEL_VAR: &str = "PARLEY_LOG_LEVEL";

/// Observability configuration
#[derive(Clone)]
pub struct ObservabilityConfig {
    /// Service name, attached to the startup event
    pub service_name: String,

    /// Internal log level. Defaults to `info` if not set
    pub log_level: Option<InternalLevel>,

    /// Print accepted events to the console
    pub enable_console: bool,

    /// Colorize level labels on the console
    pub colorize: bool,

    /// Optional sink for each formatted log line (e.g. TUI debug traces). Not serialized.
    pub log_sink: Option<LogSink>,
}

// Serde doesn't support Arc<dyn Fn>, so we don't derive Serialize/Deserialize for the whole struct.
impl Serialize for ObservabilityConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("ObservabilityConfig", 4)?;
        s.serialize_field("service_name", &self.service_name)?;
        s.serialize_field("log_level", &self.log_level)?;
        s.serialize_field("enable_console", &self.enable_console)?;
        s.serialize_field("colorize", &self.colorize)?;
        s.end()
    }
}

impl<'de> Deserialize<'de> for ObservabilityConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ObservabilityConfigDe {
            #[serde(default = "default_service_name")]
            service_name: String,
            log_level: Option<InternalLevel>,
            #[serde(default = "default_true")]
            enable_console: bool,
            #[serde(default = "default_true")]
            colorize: bool,
        }
        fn default_service_name() -> String {
            "parley".to_string()
        }
        fn default_true() -> bool {
            true
        }
        let de = ObservabilityConfigDe::deserialize(deserializer)?;
        Ok(ObservabilityConfig {
            service_name: de.service_name,
            log_level: de.log_level,
            enable_console: de.enable_console,
            colorize: de.colorize,
            log_sink: None,
        })
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "parley".to_string(),
            log_level: None,
            enable_console: true,
            colorize: true,
            log_sink: None,
        }
    }
}

impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("service_name", &self.service_name)
            .field("log_level", &self.log_level)
            .field("enable_console", &self.enable_console)
            .field("colorize", &self.colorize)
            .field("log_sink", &self.log_sink.as_ref().map(|_| "Some(LogSink)"))
            .finish()
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Set log level from a user-facing name (`none`, `error`, `warning`, `info`, `debug`, `all`).
    /// Unknown names become `error`.
    pub fn with_log_level(mut self, user_level: &str) -> Self {
        self.log_level = Some(map_log_level(user_level));
        self
    }

    /// Set the internal level directly
    pub fn with_internal_level(mut self, level: impl Into<InternalLevel>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Sink for runtime log lines (e.g. TUI debug traces). Called from the tracing layer; must not block.
    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// Level to apply: the configured one or `info`.
    pub fn effective_level(&self) -> InternalLevel {
        self.log_level.clone().unwrap_or(InternalLevel::Info)
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `PARLEY_LOG_LEVEL` → log_level (user-facing name, mapped)
    /// - `LOG_LEVEL` → log_level (internal label, used as-is) when the former is unset
    /// - `NO_COLOR` → disables colorize
    pub fn from_env() -> Self {
        let log_level = std::env::var(USER_LOG_LEVEL_VAR)
            .map(|v| map_log_level(&v))
            .or_else(|_| std::env::var(LOG_LEVEL_VAR).map(InternalLevel::from))
            .ok();

        Self {
            log_level,
            colorize: std::env::var_os("NO_COLOR").is_none(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_maps_user_level() {
        let config = ObservabilityConfig::new("svc").with_log_level("warning");
        assert_eq!(config.log_level, Some(InternalLevel::Warn));
        let config = ObservabilityConfig::new("svc").with_log_level("shout");
        assert_eq!(config.effective_level(), InternalLevel::Error);
    }

    #[test]
    fn default_level_is_info() {
        assert_eq!(ObservabilityConfig::default().effective_level(), InternalLevel::Info);
    }

    #[test]
    fn deserialize_skips_sink() {
        let config: ObservabilityConfig =
            serde_json::from_str(r#"{"log_level":"silly","colorize":false}"#).unwrap();
        assert_eq!(config.service_name, "parley");
        assert_eq!(config.log_level, Some(InternalLevel::Silly));
        assert!(config.enable_console);
        assert!(!config.colorize);
        assert!(config.log_sink.is_none());
    }

    #[test]
    fn serialize_omits_sink() {
        let sink: LogSink = Arc::new(|_| {});
        let config = ObservabilityConfig::new("svc").with_log_sink(sink);
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("log_sink").is_none());
        assert_eq!(json["service_name"], "svc");
    }
}
