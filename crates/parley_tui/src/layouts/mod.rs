//! Layout components built from [crate::theme] and view [crate::view::Props].
//!
//! - **[panel]**: Bordered block for a box node.
//! - **[style]**: Map palette colors and text props to ratatui styles.

mod panel;
mod style;

pub use panel::{block_for_box, border_type};
pub use style::{rgb_to_color, text_style};
