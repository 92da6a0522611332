//! Parley palette: base text roles plus the named colors views refer to.

use super::Appearance;
use super::rgb::Rgb;
use crate::view::NamedColor;

/// One full palette for an appearance (dark or light).
#[derive(Clone, Debug, PartialEq)]
pub struct ParleyPalette {
    // --- Base
    pub text: Rgb,
    /// Used for dim text.
    pub text_muted: Rgb,

    // --- Named
    pub blue: Rgb,
    pub green: Rgb,
    pub yellow: Rgb,
    pub cyan: Rgb,
    pub red: Rgb,
    pub magenta: Rgb,
    pub gray: Rgb,
    pub white: Rgb,
}

impl ParleyPalette {
    /// Default dark palette.
    pub fn parley_dark() -> Self {
        Self {
            text: Rgb(200, 210, 245),
            text_muted: Rgb(110, 118, 150),
            blue: Rgb(99, 148, 255),
            green: Rgb(120, 220, 120),
            yellow: Rgb(240, 185, 100),
            cyan: Rgb(100, 200, 255),
            red: Rgb(255, 100, 120),
            magenta: Rgb(198, 120, 221),
            gray: Rgb(70, 78, 110),
            white: Rgb(235, 238, 250),
        }
    }

    /// Default light palette.
    pub fn parley_light() -> Self {
        Self {
            text: Rgb(26, 27, 38),
            text_muted: Rgb(86, 95, 137),
            blue: Rgb(52, 84, 200),
            green: Rgb(56, 142, 60),
            yellow: Rgb(180, 120, 20),
            cyan: Rgb(0, 130, 170),
            red: Rgb(200, 50, 70),
            magenta: Rgb(150, 60, 170),
            gray: Rgb(161, 161, 170),
            white: Rgb(26, 27, 38),
        }
    }

    /// Palette for the given appearance.
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::parley_dark(),
            Appearance::Light => Self::parley_light(),
        }
    }

    pub fn named(&self, color: NamedColor) -> Rgb {
        match color {
            NamedColor::Blue => self.blue,
            NamedColor::Green => self.green,
            NamedColor::Yellow => self.yellow,
            NamedColor::Cyan => self.cyan,
            NamedColor::Red => self.red,
            NamedColor::Magenta => self.magenta,
            NamedColor::Gray => self.gray,
            NamedColor::White => self.white,
        }
    }
}

impl Default for ParleyPalette {
    fn default() -> Self {
        Self::parley_dark()
    }
}
