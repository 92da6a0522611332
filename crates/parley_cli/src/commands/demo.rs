//! `parley demo`: a short sample conversation.

use std::time::Duration;

use anyhow::Result;
use parley_tui::{ChatMessage, TokenUsage, ToolCall};
use serde_json::json;

use super::{draw, load_renderer};
use crate::cli::ViewArgs;
use crate::output;

fn conversation() -> Vec<ChatMessage> {
    vec![
        ChatMessage::user("Where is the retry limit configured?"),
        ChatMessage::assistant("Searching the workspace for retry settings")
            .with_tool_call(
                ToolCall::new("grep")
                    .with_argument("pattern", "max_retries")
                    .with_argument("path", "src/"),
            )
            .with_tool_call(
                ToolCall::new("read_file")
                    .with_argument("path", "src/config.rs")
                    .with_result(json!({ "lines": 42 })),
            )
            .with_tokens(TokenUsage::new(1280, 96, 1376))
            .streaming(true),
        ChatMessage::system("Session restored from checkpoint"),
    ]
}

pub async fn handle(view_args: ViewArgs, animate_ms: u64) -> Result<()> {
    let messages = conversation();
    let renderer = load_renderer().await?;
    let views: Vec<_> = messages.iter().map(|m| renderer.render(m)).collect();
    tracing::debug!(messages = views.len(), "sample conversation rendered");

    if output::is_json() {
        output::data("conversation", &views);
        return Ok(());
    }
    draw::draw(&views, view_args, Duration::from_millis(animate_ms)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_tui::Role;

    #[test]
    fn sample_covers_every_section() {
        let messages = conversation();
        let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::System]);
        let assistant = &messages[1];
        assert!(assistant.is_streaming);
        assert_eq!(assistant.tool_calls.as_ref().map(Vec::len), Some(2));
        assert!(assistant.tokens.is_some());
    }
}
