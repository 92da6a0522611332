//! Command dispatch.

pub mod demo;
pub mod draw;
pub mod levels;
pub mod render;

use anyhow::Result;
use parley_tui::{load_message_renderer, MessageRenderer, TerminalPrimitiveSource};

use crate::cli::{Cli, Command};
use crate::output;

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Levels => levels::handle(),
        Command::Render { input, view } => render::handle(&input, view).await,
        Command::Demo { view, animate_ms } => demo::handle(view, animate_ms).await,
    }
}

/// Load the terminal primitives behind a spinner.
async fn load_renderer() -> Result<MessageRenderer> {
    let spinner = output::spinner("Loading view primitives");
    let loaded = load_message_renderer(&TerminalPrimitiveSource).await;
    spinner.finish_and_clear();
    Ok(loaded?)
}
