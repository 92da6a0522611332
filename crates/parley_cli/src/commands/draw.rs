//! Puts rendered view trees on the terminal.
//!
//! On a terminal the trees are drawn in an inline ratatui viewport (colors,
//! animated spinners). Piped output gets plain text rows instead.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use console::Term;
use parley_tui::animation::{Spinner, FRAME_INTERVAL};
use parley_tui::theme::ParleyPalette;
use parley_tui::view::ElementKind;
use parley_tui::{render_to_strings, view_height, MessageView, ViewNode};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Position, Rect};
use ratatui::{Frame, Terminal, TerminalOptions, Viewport};

use crate::cli::ViewArgs;

/// Draw `views` top to bottom. Spinners animate for `animate` when any view has one.
pub async fn draw(views: &[ViewNode], args: ViewArgs, animate: Duration) -> Result<()> {
    let palette = ParleyPalette::for_appearance(args.appearance);
    let stdout = Term::stdout();
    if !stdout.is_term() {
        let spinner = Spinner::new();
        for view in views {
            for row in render_to_strings(view, &palette, &spinner, args.width) {
                println!("{row}");
            }
        }
        return Ok(());
    }

    let (_, columns) = stdout.size();
    let width = args.width.min(columns).max(1);
    if width < args.width {
        tracing::debug!(requested = args.width, width, "clamped to terminal width");
    }
    let heights: Vec<u16> = views.iter().map(|v| view_height(v, width)).collect();
    let total = heights.iter().fold(0u16, |acc, h| acc.saturating_add(*h));

    let mut terminal = Terminal::with_options(
        CrosstermBackend::new(io::stdout()),
        TerminalOptions {
            viewport: Viewport::Inline(total),
        },
    )?;

    let animated = views
        .iter()
        .any(|v| v.find(&|n| n.kind == ElementKind::Spinner).is_some());
    let deadline = Instant::now() + if animated { animate } else { Duration::ZERO };
    let mut ticker = tokio::time::interval(FRAME_INTERVAL);
    let mut spinner = Spinner::new();

    loop {
        ticker.tick().await;
        spinner.tick();
        let last = Instant::now() >= deadline;
        terminal.draw(|frame| draw_frame(frame, views, &heights, width, &palette, &spinner, last))?;
        if last {
            break;
        }
    }
    println!();
    Ok(())
}

fn draw_frame(
    frame: &mut Frame,
    views: &[ViewNode],
    heights: &[u16],
    width: u16,
    palette: &ParleyPalette,
    spinner: &Spinner,
    last: bool,
) {
    let area = frame.area();
    let mut y = area.y;
    for (view, height) in views.iter().zip(heights) {
        let rows = (*height).min(area.bottom().saturating_sub(y));
        if rows == 0 {
            break;
        }
        let rect = Rect::new(area.x, y, width.min(area.width), rows);
        frame.render_widget(MessageView::new(view, palette).spinner(spinner), rect);
        y = y.saturating_add(*height);
    }
    if last {
        // Leave the cursor below the conversation.
        frame.set_cursor_position(Position::new(area.x, area.bottom().saturating_sub(1)));
    }
}
