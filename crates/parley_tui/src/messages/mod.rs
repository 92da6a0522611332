//! Chat message model and its view tree.
//!
//! - **chat**: [ChatMessage], roles, tool calls, token usage.
//! - **role**: Border color and symbol per role.
//! - **tool**: Tool call section.
//! - **tokens**: Token usage line.
//! - **renderer**: [MessageRenderer]: message → view tree.

pub mod chat;
pub mod renderer;
pub mod role;
pub mod tokens;
pub mod tool;

pub use chat::{ChatMessage, Role, TokenUsage, ToolCall};
pub use renderer::MessageRenderer;
pub use role::{role_style, RoleStyle};
pub use tokens::token_summary;
pub use tool::tool_call_label;
