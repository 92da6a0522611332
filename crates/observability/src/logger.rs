//! Process-wide logger: an active level plus console transports.
//!
//! [LoggerLayer] plugs the logger into `tracing`, so every `tracing` event in the
//! process is gated by the logger's level and written through its transports.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::subscriber::Interest;
use tracing::{Level, Metadata};
use tracing_subscriber::layer::{Context, Layer};

use crate::console::{self, Channel, Console};
use crate::level::InternalLevel;
use crate::visitor::EventFields;

/// Writes accepted events to a [Console] as `level: message fields`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleTransport {
    pub level: InternalLevel,
    pub colorize: bool,
    pub silent: bool,
}

impl ConsoleTransport {
    /// Colorized transport at `level`; silent when `level` is silent.
    pub fn new(level: InternalLevel) -> Self {
        let silent = level == InternalLevel::Silent;
        Self {
            level,
            colorize: true,
            silent,
        }
    }

    pub fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    pub fn accepts(&self, level: Level) -> bool {
        !self.silent && self.level.allows(level)
    }

    /// Simple format: `<level>: <message>` followed by any extra fields.
    pub fn format(&self, level: Level, message: &str, fields: &str) -> String {
        let name = level_name(level);
        let label = if self.colorize {
            level_style(level).apply_to(name).to_string()
        } else {
            name.to_string()
        };
        if fields.is_empty() {
            format!("{}: {}", label, message)
        } else {
            format!("{}: {} {}", label, message, fields)
        }
    }
}

/// Internal level name for a tracing level.
fn level_name(level: Level) -> &'static str {
    match level {
        Level::ERROR => "error",
        Level::WARN => "warn",
        Level::INFO => "info",
        Level::DEBUG => "debug",
        Level::TRACE => "silly",
    }
}

fn level_style(level: Level) -> ::console::Style {
    let style = ::console::Style::new().force_styling(true);
    match level {
        Level::ERROR => style.red(),
        Level::WARN => style.yellow(),
        Level::INFO => style.green(),
        Level::DEBUG => style.blue(),
        Level::TRACE => style.magenta(),
    }
}

fn channel_for(level: Level) -> Channel {
    match level {
        Level::ERROR => Channel::Error,
        Level::WARN => Channel::Warn,
        Level::INFO => Channel::Info,
        Level::DEBUG | Level::TRACE => Channel::Debug,
    }
}

/// Level and transports, shared by `Arc`.
#[derive(Debug)]
pub struct Logger {
    level: RwLock<InternalLevel>,
    transports: RwLock<Vec<ConsoleTransport>>,
    console: Arc<Console>,
}

impl Logger {
    /// Logger at `info` with one colorized console transport.
    pub fn new(console: Arc<Console>) -> Self {
        Self {
            level: RwLock::new(InternalLevel::Info),
            transports: RwLock::new(vec![ConsoleTransport::new(InternalLevel::Info)]),
            console,
        }
    }

    /// Replace level and transports in one step.
    pub fn configure(&self, level: InternalLevel, transports: Vec<ConsoleTransport>) {
        *self.transports.write() = transports;
        *self.level.write() = level;
    }

    pub fn set_level(&self, level: InternalLevel) {
        *self.level.write() = level;
    }

    pub fn level(&self) -> InternalLevel {
        self.level.read().clone()
    }

    pub fn transports(&self) -> Vec<ConsoleTransport> {
        self.transports.read().clone()
    }

    pub fn console(&self) -> &Arc<Console> {
        &self.console
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.level.read().allows(level)
    }

    /// Write one event through every transport that accepts it.
    pub fn log(&self, level: Level, message: &str, fields: &str) {
        if !self.enabled(level) {
            return;
        }
        let channel = channel_for(level);
        for transport in self.transports.read().iter() {
            if transport.accepts(level) {
                self.console.emit(channel, &transport.format(level, message, fields));
            }
        }
    }
}

static GLOBAL_LOGGER: Lazy<Arc<Logger>> = Lazy::new(|| Arc::new(Logger::new(console::global())));

/// The process-wide logger, writing to the global console.
pub fn global() -> Arc<Logger> {
    GLOBAL_LOGGER.clone()
}

/// Routes `tracing` events through a [Logger].
#[derive(Clone)]
pub struct LoggerLayer {
    logger: Arc<Logger>,
    write: bool,
}

impl LoggerLayer {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self {
            logger,
            write: true,
        }
    }

    /// When `write` is false the layer only gates by level and prints nothing.
    pub fn with_output(mut self, write: bool) -> Self {
        self.write = write;
        self
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        // The level changes at runtime; never let tracing cache a decision.
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        !metadata.is_event() || self.logger.enabled(*metadata.level())
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if !self.write {
            return;
        }
        let fields = EventFields::from_event(event);
        self.logger
            .log(*event.metadata().level(), &fields.message, &fields.fields);
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::layer::SubscriberExt;

    use super::*;
    use crate::console::CaptureSink;

    fn capture_logger() -> (Arc<CaptureSink>, Arc<Logger>) {
        let sink = Arc::new(CaptureSink::new());
        let logger = Arc::new(Logger::new(Arc::new(Console::new(sink.clone()))));
        (sink, logger)
    }

    #[test]
    fn simple_format_without_color() {
        let t = ConsoleTransport::new(InternalLevel::Info).with_colorize(false);
        assert_eq!(t.format(Level::INFO, "ready", ""), "info: ready");
        assert_eq!(t.format(Level::TRACE, "tick", "n=1"), "silly: tick n=1");
    }

    #[test]
    fn colorized_label_keeps_name() {
        let t = ConsoleTransport::new(InternalLevel::Info);
        let line = t.format(Level::WARN, "slow", "");
        assert!(line.contains("warn"));
        assert!(line.contains('\u{1b}'));
    }

    #[test]
    fn silent_transport_accepts_nothing() {
        let t = ConsoleTransport::new(InternalLevel::Silent);
        assert!(t.silent);
        assert!(!t.accepts(Level::ERROR));
    }

    #[test]
    fn log_respects_logger_level() {
        let (sink, logger) = capture_logger();
        logger.configure(
            InternalLevel::Warn,
            vec![ConsoleTransport::new(InternalLevel::Warn).with_colorize(false)],
        );
        logger.log(Level::INFO, "hidden", "");
        logger.log(Level::ERROR, "boom", "");
        assert_eq!(sink.take(), vec![(Channel::Error, "error: boom".to_string())]);
    }

    #[test]
    fn each_transport_writes_once() {
        let (sink, logger) = capture_logger();
        logger.configure(
            InternalLevel::Debug,
            vec![
                ConsoleTransport::new(InternalLevel::Debug).with_colorize(false),
                ConsoleTransport::new(InternalLevel::Info).with_colorize(false),
            ],
        );
        logger.log(Level::DEBUG, "detail", "");
        logger.log(Level::INFO, "note", "");
        assert_eq!(sink.lines_for(Channel::Debug).len(), 1);
        assert_eq!(sink.lines_for(Channel::Info).len(), 2);
    }

    #[test]
    fn layer_sees_level_changes_immediately() {
        let (sink, logger) = capture_logger();
        logger.configure(
            InternalLevel::Info,
            vec![ConsoleTransport::new(InternalLevel::Silly).with_colorize(false)],
        );
        let subscriber = tracing_subscriber::registry().with(LoggerLayer::new(logger.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("before");
            logger.set_level(InternalLevel::Debug);
            tracing::debug!(step = 2, "after");
        });

        assert_eq!(sink.lines_for(Channel::Debug), vec!["debug: after step=2".to_string()]);
    }

    #[test]
    fn layer_without_output_only_gates() {
        let (sink, logger) = capture_logger();
        let subscriber = tracing_subscriber::registry()
            .with(LoggerLayer::new(logger.clone()).with_output(false));
        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("not printed");
        });
        assert!(sink.lines().is_empty());
    }
}
