//! Console output channels with per-channel filtering.
//!
//! A [Console] owns the original [OutputSink] it was built with. Every message
//! that is not suppressed goes straight to that sink, so changing a channel's
//! mode never stacks one filter on top of another.

use std::io::Write;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};

/// Substrings of known noisy lines dropped from filtered channels.
pub const SUPPRESSION_PATTERNS: &[&str] = &[
    "info:",
    "debug:",
    "verbose:",
    "{\"service\":",
    "\"level\":\"info\"",
    "\"level\":\"debug\"",
    "initialized",
    "Discovered",
    "Registered",
    "Session created",
    "[INFO]",
    "[DEBUG]",
    "[VERBOSE]",
    "Starting",
    "is running",
    "server",
];

/// True when `message` contains any of [SUPPRESSION_PATTERNS].
pub fn is_suppressed(message: &str) -> bool {
    SUPPRESSION_PATTERNS.iter().any(|p| message.contains(p))
}

/// One console output function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Log,
    Info,
    Error,
    Warn,
    Debug,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::Log,
        Channel::Info,
        Channel::Error,
        Channel::Warn,
        Channel::Debug,
    ];

    fn index(self) -> usize {
        match self {
            Channel::Log => 0,
            Channel::Info => 1,
            Channel::Error => 2,
            Channel::Warn => 3,
            Channel::Debug => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Log => "log",
            Channel::Info => "info",
            Channel::Error => "error",
            Channel::Warn => "warn",
            Channel::Debug => "debug",
        }
    }

    /// Error and warn go to stderr; the rest to stdout.
    pub fn is_stderr(self) -> bool {
        matches!(self, Channel::Error | Channel::Warn)
    }
}

/// How a channel treats incoming messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelMode {
    /// Everything reaches the sink.
    #[default]
    Passthrough,
    /// Messages matching a suppression pattern are dropped.
    Filtered,
    /// Nothing reaches the sink.
    Muted,
}

/// Final destination of console lines. Must not block for long.
pub trait OutputSink: Send + Sync {
    fn write_line(&self, channel: Channel, line: &str);
}

/// Writes to stdout / stderr depending on the channel.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdioSink;

impl OutputSink for StdioSink {
    fn write_line(&self, channel: Channel, line: &str) {
        if channel.is_stderr() {
            let mut err = std::io::stderr().lock();
            let _ = writeln!(err, "{}", line);
        } else {
            let mut out = std::io::stdout().lock();
            let _ = writeln!(out, "{}", line);
        }
    }
}

/// Keeps every line in memory (tests, TUI panes).
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<(Channel, String)>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of captured lines.
    pub fn lines(&self) -> Vec<(Channel, String)> {
        self.lines.lock().clone()
    }

    /// Captured lines for one channel.
    pub fn lines_for(&self, channel: Channel) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, l)| l.clone())
            .collect()
    }

    /// Drain captured lines.
    pub fn take(&self) -> Vec<(Channel, String)> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl OutputSink for CaptureSink {
    fn write_line(&self, channel: Channel, line: &str) {
        self.lines.lock().push((channel, line.to_string()));
    }
}

/// Five output channels sharing one original sink.
pub struct Console {
    original: Arc<dyn OutputSink>,
    modes: RwLock<[ChannelMode; 5]>,
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("modes", &*self.modes.read())
            .finish_non_exhaustive()
    }
}

impl Console {
    /// Console writing to `sink`. The sink is captured here, once.
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self {
            original: sink,
            modes: RwLock::new([ChannelMode::Passthrough; 5]),
        }
    }

    /// Console over stdout / stderr.
    pub fn stdio() -> Self {
        Self::new(Arc::new(StdioSink))
    }

    pub fn mode(&self, channel: Channel) -> ChannelMode {
        self.modes.read()[channel.index()]
    }

    pub fn set_mode(&self, channel: Channel, mode: ChannelMode) {
        self.modes.write()[channel.index()] = mode;
    }

    /// Every channel back to passthrough.
    pub fn reset(&self) {
        *self.modes.write() = [ChannelMode::Passthrough; 5];
    }

    /// Send `message` on `channel`. Returns whether it reached the sink.
    pub fn emit(&self, channel: Channel, message: &str) -> bool {
        let pass = match self.mode(channel) {
            ChannelMode::Passthrough => true,
            ChannelMode::Filtered => !is_suppressed(message),
            ChannelMode::Muted => false,
        };
        if pass {
            self.original.write_line(channel, message);
        }
        pass
    }

    pub fn log(&self, message: &str) -> bool {
        self.emit(Channel::Log, message)
    }

    pub fn info(&self, message: &str) -> bool {
        self.emit(Channel::Info, message)
    }

    pub fn error(&self, message: &str) -> bool {
        self.emit(Channel::Error, message)
    }

    pub fn warn(&self, message: &str) -> bool {
        self.emit(Channel::Warn, message)
    }

    pub fn debug(&self, message: &str) -> bool {
        self.emit(Channel::Debug, message)
    }
}

static GLOBAL_CONSOLE: Lazy<Arc<Console>> = Lazy::new(|| Arc::new(Console::stdio()));

/// Process-wide console over stdout / stderr.
pub fn global() -> Arc<Console> {
    GLOBAL_CONSOLE.clone()
}
