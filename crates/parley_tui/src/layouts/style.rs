//! Map theme palette and view props to ratatui styles.

use ratatui::style::{Color, Modifier, Style};

use crate::theme::{ParleyPalette, Rgb};
use crate::view::Props;

/// Convert theme [Rgb] to ratatui [Color].
#[inline]
pub fn rgb_to_color(rgb: Rgb) -> Color {
    Color::from(rgb)
}

/// Style for a text run: named color (or palette text), bold, dim.
/// Dim text without an explicit color uses `text_muted`.
pub fn text_style(props: &Props, palette: &ParleyPalette) -> Style {
    let fg = match (props.color, props.dim) {
        (Some(color), _) => palette.named(color),
        (None, true) => palette.text_muted,
        (None, false) => palette.text,
    };
    let mut style = Style::default().fg(rgb_to_color(fg));
    if props.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if props.dim {
        style = style.add_modifier(Modifier::DIM);
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::NamedColor;

    #[test]
    fn plain_text_uses_palette_text() {
        let palette = ParleyPalette::parley_dark();
        let style = text_style(&Props::new(), &palette);
        assert_eq!(style.fg, Some(rgb_to_color(palette.text)));
        assert!(style.add_modifier.is_empty());
    }

    #[test]
    fn dim_uses_muted_and_modifier() {
        let palette = ParleyPalette::parley_dark();
        let style = text_style(&Props::new().dim(), &palette);
        assert_eq!(style.fg, Some(rgb_to_color(palette.text_muted)));
        assert!(style.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn bold_colored() {
        let palette = ParleyPalette::parley_light();
        let style = text_style(&Props::new().color(NamedColor::Cyan).bold(), &palette);
        assert_eq!(style.fg, Some(rgb_to_color(palette.cyan)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
