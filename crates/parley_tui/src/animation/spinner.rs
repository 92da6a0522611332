//! Spinner: cycles through a fixed set of frames as time passes.
//!
//! Uses `parley_tui::theme` for colors when producing a styled span.

use std::time::{Duration, Instant};

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::theme::ParleyPalette;
use crate::view::{NamedColor, SpinnerKind};

/// Time each frame stays on screen.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(80);

const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const LINE: &[&str] = &["-", "\\", "|", "/"];

/// Frames for a spinner kind.
pub fn frames(kind: SpinnerKind) -> &'static [&'static str] {
    match kind {
        SpinnerKind::Dots => DOTS,
        SpinnerKind::Line => LINE,
    }
}

/// Spinner state: frame counter plus time not yet converted into frames.
#[derive(Debug, Clone)]
pub struct Spinner {
    /// Frames advanced since start (taken modulo the frame count when read).
    step: usize,
    /// Elapsed time below one frame interval.
    carry: Duration,
    /// Last time we advanced.
    last_tick: Instant,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            step: 0,
            carry: Duration::ZERO,
            last_tick: Instant::now(),
        }
    }
}

impl Spinner {
    /// Creates a spinner at its first frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances by wall-clock time since the last tick. Call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.advance(elapsed);
    }

    /// Advances by `elapsed`, one step per [FRAME_INTERVAL].
    pub fn advance(&mut self, elapsed: Duration) {
        self.carry += elapsed;
        let steps = self.carry.as_millis() / FRAME_INTERVAL.as_millis();
        self.step = self.step.wrapping_add(steps as usize);
        self.carry -= FRAME_INTERVAL * steps as u32;
    }

    /// Back to the first frame.
    pub fn reset(&mut self) {
        self.step = 0;
        self.carry = Duration::ZERO;
        self.last_tick = Instant::now();
    }

    /// Current frame for `kind`.
    pub fn frame(&self, kind: SpinnerKind) -> &'static str {
        let frames = frames(kind);
        frames[self.step % frames.len()]
    }

    /// Current frame as a bold span in `color` (palette text when `None`).
    pub fn styled_span(
        &self,
        kind: SpinnerKind,
        color: Option<NamedColor>,
        palette: &ParleyPalette,
    ) -> Span<'static> {
        let rgb = color.map_or(palette.text, |c| palette.named(c));
        let style = Style::default()
            .fg(Color::from(rgb))
            .add_modifier(Modifier::BOLD);
        Span::styled(self.frame(kind), style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_frame() {
        let s = Spinner::new();
        assert_eq!(s.frame(SpinnerKind::Dots), "⠋");
        assert_eq!(s.frame(SpinnerKind::Line), "-");
    }

    #[test]
    fn advances_one_frame_per_interval() {
        let mut s = Spinner::new();
        s.advance(Duration::from_millis(79));
        assert_eq!(s.frame(SpinnerKind::Dots), "⠋");
        s.advance(Duration::from_millis(1));
        assert_eq!(s.frame(SpinnerKind::Dots), "⠙");
        s.advance(FRAME_INTERVAL * 3);
        assert_eq!(s.frame(SpinnerKind::Line), "-");
    }

    #[test]
    fn wraps_around() {
        let mut s = Spinner::new();
        s.advance(FRAME_INTERVAL * DOTS.len() as u32);
        assert_eq!(s.frame(SpinnerKind::Dots), "⠋");
    }

    #[test]
    fn reset_returns_to_first_frame() {
        let mut s = Spinner::new();
        s.advance(FRAME_INTERVAL * 3 + Duration::from_millis(40));
        assert_eq!(s.frame(SpinnerKind::Dots), "⠸");
        s.reset();
        s.advance(Duration::from_millis(40));
        assert_eq!(s.frame(SpinnerKind::Dots), "⠋");
    }

    #[test]
    fn styled_span_uses_named_color() {
        let palette = ParleyPalette::parley_dark();
        let span = Spinner::new().styled_span(SpinnerKind::Dots, Some(NamedColor::Yellow), &palette);
        assert_eq!(span.style.fg, Some(Color::from(palette.yellow)));
    }
}
