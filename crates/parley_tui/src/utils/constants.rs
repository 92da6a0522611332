//! Spacing and glyph constants for message views.

/// Horizontal padding inside a message border (each side).
pub const MESSAGE_PADDING_X: u16 = 1;

/// Blank lines below each message box.
pub const MESSAGE_MARGIN_BOTTOM: u16 = 1;

/// Bullet in front of each tool call.
pub const TOOL_BULLET: &str = "•";

/// Heading of the tool call section.
pub const TOOL_SECTION_LABEL: &str = "Tools:";

/// Width used when no terminal width is known.
pub const DEFAULT_RENDER_WIDTH: u16 = 80;
