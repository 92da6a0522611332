//! Parley theme: palette that resolves view colors to terminal colors.
//!
//! # Example
//!
//! ```ignore
//! use parley_tui::theme::{Appearance, ParleyPalette};
//! use parley_tui::view::NamedColor;
//!
//! let palette = ParleyPalette::for_appearance(Appearance::Light);
//! let border = palette.named(NamedColor::Blue);
//! ```

mod appearance;
mod palette;
mod rgb;

pub use appearance::Appearance;
pub use palette::ParleyPalette;
pub use rgb::Rgb;
