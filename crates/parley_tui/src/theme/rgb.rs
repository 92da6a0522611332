//! RGB color for theme. Portable (u8) for TUI, CLI, or UI.

use ratatui::style::Color;

/// RGB triplet. Converts into a ratatui [Color].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    /// Tuple for ratatui/crossterm: `(r, g, b)`.
    pub fn tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }

    /// `#rrggbb`.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.0, c.1, c.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(Rgb(97, 175, 239).hex(), "#61afef");
        assert_eq!(Rgb(0, 8, 255).hex(), "#0008ff");
    }

    #[test]
    fn converts_to_ratatui_color() {
        assert_eq!(Color::from(Rgb(1, 2, 3)), Color::Rgb(1, 2, 3));
    }
}
