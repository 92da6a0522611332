//! Bordered block for a box node: border type and color from props, inner padding.

use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Borders, Padding};

use super::style::rgb_to_color;
use crate::theme::ParleyPalette;
use crate::view::{BorderStyle, Props};

pub fn border_type(style: BorderStyle) -> BorderType {
    match style {
        BorderStyle::Single => BorderType::Plain,
        BorderStyle::Round => BorderType::Rounded,
        BorderStyle::Double => BorderType::Double,
    }
}

/// Build a [Block] for a box with `props`. Without a border style, the block only pads.
/// Draw this block in the outer area, then render content in `block.inner(area)`.
pub fn block_for_box(props: &Props, palette: &ParleyPalette) -> Block<'static> {
    let padding = Padding::new(
        props.padding_x.unwrap_or(0),
        props.padding_x.unwrap_or(0),
        props.padding_y.unwrap_or(0),
        props.padding_y.unwrap_or(0),
    );
    let block = Block::default().padding(padding);
    match props.border_style {
        Some(style) => {
            let color = props.border_color.map_or(palette.gray, |c| palette.named(c));
            block
                .borders(Borders::ALL)
                .border_type(border_type(style))
                .border_style(Style::default().fg(rgb_to_color(color)))
        }
        None => block,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::*;
    use crate::view::NamedColor;

    #[test]
    fn bordered_inner_is_inset_by_border_and_padding() {
        let palette = ParleyPalette::parley_dark();
        let props = Props::new().border(BorderStyle::Round, NamedColor::Blue).padding_x(1);
        let block = block_for_box(&props, &palette);
        let inner = block.inner(Rect::new(0, 0, 20, 5));
        assert_eq!(inner, Rect::new(2, 1, 16, 3));
    }

    #[test]
    fn unbordered_block_only_pads() {
        let palette = ParleyPalette::parley_dark();
        let block = block_for_box(&Props::new().padding_x(2), &palette);
        let inner = block.inner(Rect::new(0, 0, 20, 5));
        assert_eq!(inner, Rect::new(2, 0, 16, 5));
    }
}
