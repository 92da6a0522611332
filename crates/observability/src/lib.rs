//! Parley Observability - process-wide log level control
//!
//! This crate maps user-facing log level names to the logger's internal levels
//! and applies a level to the whole process: the published `LOG_LEVEL`
//! variable, the shared [Logger], and the filtered [Console] channels.
//!
//! # Features
//!
//! - Fixed user → internal level mapping ([map_log_level])
//! - One-call process configuration ([configure_global_log_level])
//! - Console channels with noisy-line suppression and injectable sinks
//! - `tracing` integration: every event is gated by the logger's level
//! - Optional line sink for TUI debug panes
//!
//! # Quick Start
//!
//! ```no_run
//! use parley_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("parley").with_log_level("warning");
//! init(config)?;
//!
//! // Later, e.g. from a --quiet flag:
//! parley_observability::configure_global_log_level("error");
//!
//! tracing::warn!("Visible at warn and above");
//! # Ok::<(), parley_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `PARLEY_LOG_LEVEL` - User-facing level name read by [ObservabilityConfig::from_env]
//! - `LOG_LEVEL` - Internal level, written on every configuration and read as a fallback
//! - `NODE_NO_WARNINGS` - Set to `1` when the level is `silent` or `error`

pub mod config;
pub mod console;
pub mod controller;
pub mod env;
pub mod error;
pub mod level;
pub mod logger;
pub mod subscriber;
pub mod tui_log_layer;
mod visitor;

pub use config::{LogSink, ObservabilityConfig};
pub use console::{CaptureSink, Channel, ChannelMode, Console, OutputSink, StdioSink};
pub use controller::{configure_global_log_level, LogLevelController};
pub use env::{level_from_env, EnvStore, MemoryEnv, ProcessEnv, LOG_LEVEL_VAR, NO_WARNINGS_VAR};
pub use error::ObservabilityError;
pub use level::{map_log_level, InternalLevel, UserLogLevel};
pub use logger::{ConsoleTransport, Logger, LoggerLayer};
pub use subscriber::{init, init_from_env};
