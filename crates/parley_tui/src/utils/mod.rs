//! Shared utilities for parley views.
//!
//! - **[constants]**: Spacing, glyphs, default width.
//! - **[format]**: Column width and word wrapping.

mod constants;
mod format;

pub use constants::*;
pub use format::{display_width, wrap_lines};
