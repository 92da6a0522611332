//! parley-tui: chat message views for the terminal.
//!
//! A [ChatMessage] is turned into a [ViewNode] tree by a [MessageRenderer];
//! the tree is drawn with ratatui through [MessageView].
//!
//! Renderers are built by [load_message_renderer], which resolves the layout
//! and indicator primitives concurrently. [MessageRenderer::default] renders
//! with placeholder primitives (text only, no styling).
//!
//! ```no_run
//! use parley_tui::{load_message_renderer, render_to_strings, ChatMessage, TerminalPrimitiveSource};
//! use parley_tui::animation::Spinner;
//! use parley_tui::theme::ParleyPalette;
//!
//! # async fn demo() -> Result<(), parley_tui::RenderError> {
//! let renderer = load_message_renderer(&TerminalPrimitiveSource).await?;
//! let view = renderer.render(&ChatMessage::user("hello"));
//! for row in render_to_strings(&view, &ParleyPalette::default(), &Spinner::new(), 80) {
//!     println!("{row}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod animation;
pub mod error;
pub mod layouts;
pub mod loader;
pub mod messages;
pub mod theme;
pub mod utils;
pub mod view;

pub use error::RenderError;
pub use loader::{load_message_renderer, PrimitiveSource, TerminalPrimitiveSource};
pub use messages::{ChatMessage, MessageRenderer, Role, TokenUsage, ToolCall};
pub use view::{render_to_strings, view_height, MessageView, ViewNode};
