//! Builds the view tree for one chat message.
//!
//! Layout:
//! - Outer box: rounded border in the role color, padding 1 on each side, one blank line below
//! - Header row: bold role symbol, content, spinner while streaming
//! - Tools section, only when there are tool calls
//! - Token line, only when token usage is known

use std::sync::Arc;

use super::chat::ChatMessage;
use super::role::role_style;
use super::tokens::token_line;
use super::tool::tool_section;
use crate::utils::{MESSAGE_MARGIN_BOTTOM, MESSAGE_PADDING_X};
use crate::view::{
    BorderStyle, IndicatorPrimitive, LayoutPrimitives, NamedColor, PlaceholderPrimitives, Props,
    SpinnerKind, ViewNode,
};

/// Renders chat messages with a fixed set of primitives. Stateless; cheap to clone.
#[derive(Clone)]
pub struct MessageRenderer {
    layout: Arc<dyn LayoutPrimitives>,
    indicator: Arc<dyn IndicatorPrimitive>,
    placeholder: bool,
}

impl std::fmt::Debug for MessageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageRenderer")
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

impl Default for MessageRenderer {
    /// Renderer over placeholder primitives (nothing loaded yet).
    fn default() -> Self {
        Self {
            layout: Arc::new(PlaceholderPrimitives),
            indicator: Arc::new(PlaceholderPrimitives),
            placeholder: true,
        }
    }
}

impl MessageRenderer {
    pub fn new(layout: Arc<dyn LayoutPrimitives>, indicator: Arc<dyn IndicatorPrimitive>) -> Self {
        Self {
            layout,
            indicator,
            placeholder: false,
        }
    }

    /// True until built from loaded primitives.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn render(&self, message: &ChatMessage) -> ViewNode {
        let style = role_style(message.role);
        let layout = self.layout.as_ref();

        let mut header = vec![
            layout.text(
                Props::new().color(style.symbol_color).bold(),
                &format!("{} ", style.symbol),
            ),
            layout.text(Props::new(), &message.content),
        ];
        if message.is_streaming {
            header.push(layout.text(Props::new(), " "));
            header.push(
                self.indicator
                    .indicator(Props::new().color(NamedColor::Yellow).spinner(SpinnerKind::Dots)),
            );
        }

        let mut children = vec![layout.container(Props::new().row(), header)];
        if let Some(section) = message
            .tool_calls
            .as_deref()
            .and_then(|calls| tool_section(layout, calls))
        {
            children.push(section);
        }
        if let Some(tokens) = &message.tokens {
            children.push(token_line(layout, tokens));
        }

        layout.container(
            Props::new()
                .border(BorderStyle::Round, style.border_color)
                .padding_x(MESSAGE_PADDING_X)
                .column()
                .margin_bottom(MESSAGE_MARGIN_BOTTOM),
            children,
        )
    }
}
