//! `parley render`: one ChatMessage from a file or stdin.

use std::time::Duration;

use anyhow::{Context, Result};
use parley_tui::ChatMessage;
use tokio::io::AsyncReadExt;

use super::{draw, load_renderer};
use crate::cli::ViewArgs;
use crate::output;

pub async fn handle(input: &str, view_args: ViewArgs) -> Result<()> {
    let json = read_input(input).await?;
    let message =
        ChatMessage::from_json(&json).with_context(|| format!("reading message from {input}"))?;
    tracing::debug!(role = %message.role, streaming = message.is_streaming, "message parsed");

    let renderer = load_renderer().await?;
    let view = renderer.render(&message);
    if output::is_json() {
        output::data("view", &view);
        return Ok(());
    }
    draw::draw(std::slice::from_ref(&view), view_args, Duration::ZERO).await
}

async fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("reading stdin")?;
        return Ok(buf);
    }
    tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("reading {input}"))
}
