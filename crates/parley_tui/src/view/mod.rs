//! View trees and how they reach the terminal.
//!
//! - **node**: [ViewNode], element kinds and [Props].
//! - **primitives**: Element constructors the message renderer composes.
//! - **widget**: [MessageView] and helpers that draw a tree with ratatui.

mod node;
mod primitives;
mod widget;

pub use node::{BorderStyle, ElementKind, FlexDirection, NamedColor, Props, SpinnerKind, ViewNode};
pub use primitives::{
    IndicatorPrimitive, LayoutPrimitives, PlaceholderPrimitives, TerminalIndicator,
    TerminalPrimitives,
};
pub use widget::{render_to_strings, view_height, view_lines, MessageView};
