//! Collects an event's message and its other fields as `key=value` text.

use std::fmt::Write;

use tracing::field::{Field, Visit};

#[derive(Default)]
pub(crate) struct EventFields {
    pub(crate) message: String,
    pub(crate) fields: String,
}

impl EventFields {
    pub(crate) fn from_event(event: &tracing::Event<'_>) -> Self {
        let mut visitor = Self::default();
        event.record(&mut visitor);
        visitor
    }

    fn push_field(&mut self, name: &str, value: &dyn std::fmt::Debug) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        write!(self.fields, "{}={:?}", name, value).ok();
    }
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field.name(), &value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            write!(self.message, "{:?}", value).ok();
        } else {
            self.push_field(field.name(), value);
        }
    }
}
