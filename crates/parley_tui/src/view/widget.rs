//! Draws a view tree with ratatui.
//!
//! Rules:
//! - A box with a border style at the root becomes a [Block]; its children fill the inner area
//! - Row boxes collapse into one line of spans; column boxes stack their children
//! - A newline in text starts a new line (inside a row the spans continue there)
//! - Nested borders are not drawn (nested boxes lay out like plain boxes)
//! - Placeholders stack like columns and carry no style

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use super::node::{ElementKind, FlexDirection, ViewNode};
use crate::animation::Spinner;
use crate::layouts::{block_for_box, text_style};
use crate::theme::ParleyPalette;
use crate::utils::wrap_lines;

/// Widget for one view tree.
pub struct MessageView<'a> {
    node: &'a ViewNode,
    palette: &'a ParleyPalette,
    spinner: Option<&'a Spinner>,
}

impl<'a> MessageView<'a> {
    pub fn new(node: &'a ViewNode, palette: &'a ParleyPalette) -> Self {
        Self {
            node,
            palette,
            spinner: None,
        }
    }

    /// Spinner whose current frame is drawn for spinner nodes.
    pub fn spinner(mut self, spinner: &'a Spinner) -> Self {
        self.spinner = Some(spinner);
        self
    }
}

impl Widget for MessageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fallback = Spinner::new();
        let spinner = self.spinner.unwrap_or(&fallback);
        let node = self.node;

        if node.kind != ElementKind::Box {
            Paragraph::new(view_lines(node, self.palette, spinner))
                .wrap(Wrap { trim: false })
                .render(area, buf);
            return;
        }

        let top = node.props.margin_top.unwrap_or(0).min(area.height);
        let bottom = node.props.margin_bottom.unwrap_or(0);
        let area = Rect {
            y: area.y + top,
            height: area.height.saturating_sub(top).saturating_sub(bottom),
            ..area
        };
        let block = block_for_box(&node.props, self.palette);
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(content_lines(node, self.palette, spinner))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// Lines for `node` including its margins.
pub fn view_lines(node: &ViewNode, palette: &ParleyPalette, spinner: &Spinner) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    push_view_lines(node, palette, spinner, &mut lines);
    lines
}

fn push_view_lines(
    node: &ViewNode,
    palette: &ParleyPalette,
    spinner: &Spinner,
    out: &mut Vec<Line<'static>>,
) {
    let blank = |n: Option<u16>| (0..n.unwrap_or(0)).map(|_| Line::default());
    out.extend(blank(node.props.margin_top));
    match node.kind {
        ElementKind::Text | ElementKind::Spinner => {
            let mut rows = vec![Vec::new()];
            push_spans(node, palette, spinner, &mut rows);
            out.extend(rows.into_iter().map(Line::from));
        }
        ElementKind::Placeholder if node.children.is_empty() => {
            if let Some(text) = &node.text {
                out.extend(text.split('\n').map(|part| Line::from(part.to_string())));
            }
        }
        ElementKind::Box | ElementKind::Placeholder => {
            out.extend(content_lines(node, palette, spinner));
        }
    }
    out.extend(blank(node.props.margin_bottom));
}

/// Lines for a container's children, without the container's own margins.
fn content_lines(node: &ViewNode, palette: &ParleyPalette, spinner: &Spinner) -> Vec<Line<'static>> {
    let row = node.kind == ElementKind::Box && node.direction() == FlexDirection::Row;
    if row {
        let mut rows = vec![Vec::new()];
        for child in &node.children {
            push_spans(child, palette, spinner, &mut rows);
        }
        return rows.into_iter().map(Line::from).collect();
    }
    let mut lines = Vec::new();
    for child in &node.children {
        push_view_lines(child, palette, spinner, &mut lines);
    }
    lines
}

/// Flatten a subtree into inline spans. `rows` is never empty; spans go on
/// its last row and a newline in text opens a new one.
fn push_spans(
    node: &ViewNode,
    palette: &ParleyPalette,
    spinner: &Spinner,
    rows: &mut Vec<Vec<Span<'static>>>,
) {
    match node.kind {
        ElementKind::Spinner => {
            let kind = node.props.spinner.unwrap_or_default();
            push_span(rows, spinner.styled_span(kind, node.props.color, palette));
        }
        ElementKind::Text => {
            if let Some(text) = &node.text {
                push_text(rows, text, text_style(&node.props, palette));
            }
        }
        ElementKind::Box | ElementKind::Placeholder => {
            if let Some(text) = &node.text {
                push_text(rows, text, Style::default());
            }
        }
    }
    for child in &node.children {
        push_spans(child, palette, spinner, rows);
    }
}

fn push_text(rows: &mut Vec<Vec<Span<'static>>>, text: &str, style: Style) {
    for (i, part) in text.split('\n').enumerate() {
        if i > 0 {
            rows.push(Vec::new());
        }
        if !part.is_empty() {
            push_span(rows, Span::styled(part.to_string(), style));
        }
    }
}

fn push_span(rows: &mut Vec<Vec<Span<'static>>>, span: Span<'static>) {
    match rows.last_mut() {
        Some(row) => row.push(span),
        None => rows.push(vec![span]),
    }
}

/// Rows needed to draw `node` at `width` columns, margins included.
pub fn view_height(node: &ViewNode, width: u16) -> u16 {
    let palette = ParleyPalette::default();
    let spinner = Spinner::new();
    let props = &node.props;

    let (lines, chrome_w, chrome_h) = if node.kind == ElementKind::Box {
        let border = if node.is_bordered() { 2 } else { 0 };
        let pad_x = props.padding_x.unwrap_or(0) * 2;
        let pad_y = props.padding_y.unwrap_or(0) * 2;
        let margins = props.margin_top.unwrap_or(0) + props.margin_bottom.unwrap_or(0);
        (
            content_lines(node, &palette, &spinner),
            border + pad_x,
            border + pad_y + margins,
        )
    } else {
        (view_lines(node, &palette, &spinner), 0, 0)
    };

    let inner_width = usize::from(width.saturating_sub(chrome_w)).max(1);
    let rows: usize = lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            wrap_lines(&text, inner_width).len().max(1)
        })
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(chrome_h)
}

/// Draw `node` into an off-screen buffer `width` columns wide and return its rows
/// as text (trailing spaces trimmed).
pub fn render_to_strings(
    node: &ViewNode,
    palette: &ParleyPalette,
    spinner: &Spinner,
    width: u16,
) -> Vec<String> {
    let area = Rect::new(0, 0, width, view_height(node, width));
    let mut buf = Buffer::empty(area);
    MessageView::new(node, palette).spinner(spinner).render(area, &mut buf);
    buffer_rows(&buf)
}

fn buffer_rows(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buf.cell((x, y)).map_or(" ", |c| c.symbol()))
                .collect();
            row.trim_end().to_string()
        })
        .collect()
}
