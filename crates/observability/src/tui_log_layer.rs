//! Tracing layer that forwards formatted log lines to a sink (e.g. TUI debug traces).

use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;
use crate::visitor::EventFields;

/// Longest line forwarded; longer lines are cut and annotated with their length.
const MAX_LEN: usize = 32_000;

/// Layer that sends each formatted event to the given sink when present. The sink must not block.
pub(crate) fn tui_log_layer(sink: Option<LogSink>) -> TuiLogLayer {
    TuiLogLayer { sink }
}

#[derive(Clone)]
pub(crate) struct TuiLogLayer {
    sink: Option<LogSink>,
}

/// "[LEVEL] target: message key=value ..."
pub(crate) fn format_line(level: tracing::Level, target: &str, fields: &EventFields) -> String {
    let mut rest = fields.message.clone();
    if !fields.fields.is_empty() {
        if !rest.is_empty() {
            rest.push(' ');
        }
        rest.push_str(&fields.fields);
    }
    let line = if rest.is_empty() {
        format!("[{}] {}", level, target)
    } else {
        format!("[{}] {}: {}", level, target, rest)
    };
    if line.len() > MAX_LEN {
        let trunc: String = line.chars().take(MAX_LEN).collect();
        format!("{}… ({} chars)", trunc, line.len())
    } else {
        line
    }
}

impl<S> Layer<S> for TuiLogLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let Some(ref sink) = self.sink else {
            return;
        };
        let fields = EventFields::from_event(event);
        let meta = event.metadata();
        sink(format_line(*meta.level(), meta.target(), &fields));
    }
}
