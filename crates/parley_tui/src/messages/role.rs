//! Per-role border color and leading symbol.

use super::chat::Role;
use crate::view::NamedColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleStyle {
    pub border_color: NamedColor,
    pub symbol: &'static str,
    pub symbol_color: NamedColor,
}

pub const USER_STYLE: RoleStyle = RoleStyle {
    border_color: NamedColor::Blue,
    symbol: "❯",
    symbol_color: NamedColor::Cyan,
};

pub const ASSISTANT_STYLE: RoleStyle = RoleStyle {
    border_color: NamedColor::Green,
    symbol: "◆",
    symbol_color: NamedColor::Green,
};

pub const SYSTEM_STYLE: RoleStyle = RoleStyle {
    border_color: NamedColor::Yellow,
    symbol: "⚙",
    symbol_color: NamedColor::Yellow,
};

pub fn role_style(role: Role) -> RoleStyle {
    match role {
        Role::User => USER_STYLE,
        Role::Assistant => ASSISTANT_STYLE,
        Role::System => SYSTEM_STYLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_distinct_border() {
        let borders = [Role::User, Role::Assistant, Role::System].map(|r| role_style(r).border_color);
        assert_ne!(borders[0], borders[1]);
        assert_ne!(borders[1], borders[2]);
        assert_ne!(borders[0], borders[2]);
    }

    #[test]
    fn user_style_matches_table() {
        assert_eq!(role_style(Role::User), USER_STYLE);
        assert_eq!(USER_STYLE.symbol_color, NamedColor::Cyan);
    }
}
