//! Applies a log level to the whole process: published env vars, logger, console channels.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::console::{Channel, ChannelMode, Console};
use crate::env::{self, EnvStore, ProcessEnv, LOG_LEVEL_VAR, NO_WARNINGS_VAR};
use crate::level::InternalLevel;
use crate::logger::{self, ConsoleTransport, Logger};

/// Owns the process-wide logging knobs. Calls are expected to be serialized by
/// the caller; each call fully replaces the previous configuration.
pub struct LogLevelController {
    env: Arc<dyn EnvStore>,
    logger: Arc<Logger>,
    colorize: AtomicBool,
}

impl std::fmt::Debug for LogLevelController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogLevelController")
            .field("logger", &self.logger)
            .field("colorize", &self.colorize.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl LogLevelController {
    pub fn new(env: Arc<dyn EnvStore>, logger: Arc<Logger>) -> Self {
        Self {
            env,
            logger,
            colorize: AtomicBool::new(true),
        }
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    pub fn console(&self) -> &Arc<Console> {
        self.logger.console()
    }

    /// Whether transports installed by [Self::configure] colorize level labels.
    pub fn set_colorize(&self, colorize: bool) {
        self.colorize.store(colorize, Ordering::Relaxed);
    }

    /// Apply `level` everywhere. Any label is accepted without validation.
    pub fn configure(&self, level: impl Into<InternalLevel>) {
        let level = level.into();

        self.env.set(LOG_LEVEL_VAR, level.as_str());
        if level.is_quiet() {
            self.env.set(NO_WARNINGS_VAR, "1");
        }

        let transport = ConsoleTransport::new(level.clone())
            .with_colorize(self.colorize.load(Ordering::Relaxed));
        self.logger.configure(level.clone(), vec![transport]);
        // Some readers look at the level directly rather than at the transports.
        self.logger.set_level(level.clone());

        let console = self.logger.console();
        console.reset();
        if level.is_quiet() {
            console.set_mode(Channel::Log, ChannelMode::Filtered);
            console.set_mode(Channel::Info, ChannelMode::Filtered);
        }
        if level == InternalLevel::Silent {
            console.set_mode(Channel::Error, ChannelMode::Muted);
            console.set_mode(Channel::Warn, ChannelMode::Muted);
            console.set_mode(Channel::Debug, ChannelMode::Muted);
        }

        tracing::debug!(level = %level, "log level configured");
    }

    /// Level last published by this controller's env store.
    pub fn published_level(&self) -> Option<InternalLevel> {
        env::published_level_in(self.env.as_ref())
    }

    pub fn warnings_suppressed(&self) -> bool {
        self.env.get(NO_WARNINGS_VAR).as_deref() == Some("1")
    }
}

static GLOBAL_CONTROLLER: Lazy<LogLevelController> =
    Lazy::new(|| LogLevelController::new(Arc::new(ProcessEnv), logger::global()));

/// Controller over the process environment, global logger and global console.
pub fn global() -> &'static LogLevelController {
    &GLOBAL_CONTROLLER
}

/// Configure the process-wide logging state at `level` (internal vocabulary).
pub fn configure_global_log_level(level: &str) {
    global().configure(InternalLevel::parse(level));
}
