//! View primitives: the building blocks the renderer composes.
//!
//! [TerminalPrimitives] and [TerminalIndicator] build real elements. The
//! placeholder pair keeps text and nesting but drops every style, and is what a
//! renderer uses until real primitives are loaded.

use super::node::{ElementKind, Props, ViewNode};

/// Container and text elements.
pub trait LayoutPrimitives: Send + Sync {
    fn container(&self, props: Props, children: Vec<ViewNode>) -> ViewNode;
    fn text(&self, props: Props, content: &str) -> ViewNode;
}

/// Loading-indicator element.
pub trait IndicatorPrimitive: Send + Sync {
    fn indicator(&self, props: Props) -> ViewNode;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrimitives;

impl LayoutPrimitives for TerminalPrimitives {
    fn container(&self, props: Props, children: Vec<ViewNode>) -> ViewNode {
        ViewNode::new(ElementKind::Box, props).with_children(children)
    }

    fn text(&self, props: Props, content: &str) -> ViewNode {
        ViewNode::new(ElementKind::Text, props).with_text(content)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalIndicator;

impl IndicatorPrimitive for TerminalIndicator {
    /// Only the spinner kind and color apply to an indicator.
    fn indicator(&self, props: Props) -> ViewNode {
        let mut spinner_props = Props::new().spinner(props.spinner.unwrap_or_default());
        spinner_props.color = props.color;
        ViewNode::new(ElementKind::Spinner, spinner_props)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderPrimitives;

impl LayoutPrimitives for PlaceholderPrimitives {
    fn container(&self, _props: Props, children: Vec<ViewNode>) -> ViewNode {
        ViewNode::new(ElementKind::Placeholder, Props::new()).with_children(children)
    }

    fn text(&self, _props: Props, content: &str) -> ViewNode {
        ViewNode::new(ElementKind::Placeholder, Props::new()).with_text(content)
    }
}

impl IndicatorPrimitive for PlaceholderPrimitives {
    fn indicator(&self, _props: Props) -> ViewNode {
        ViewNode::new(ElementKind::Placeholder, Props::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::node::{NamedColor, SpinnerKind};

    #[test]
    fn terminal_container_keeps_props() {
        let node = TerminalPrimitives.container(Props::new().row(), vec![]);
        assert_eq!(node.kind, ElementKind::Box);
        assert!(node.props.flex_direction.is_some());
    }

    #[test]
    fn indicator_keeps_color_and_kind() {
        let node = TerminalIndicator.indicator(
            Props::new().color(NamedColor::Yellow).spinner(SpinnerKind::Line).bold(),
        );
        assert_eq!(node.kind, ElementKind::Spinner);
        assert_eq!(node.props.color, Some(NamedColor::Yellow));
        assert_eq!(node.props.spinner, Some(SpinnerKind::Line));
        assert!(!node.props.bold);
    }

    #[test]
    fn placeholders_drop_styling() {
        let text = PlaceholderPrimitives.text(Props::new().bold().color(NamedColor::Red), "hi");
        assert_eq!(text.kind, ElementKind::Placeholder);
        assert!(text.props.is_empty());
        assert_eq!(text.text.as_deref(), Some("hi"));

        let boxed = PlaceholderPrimitives.container(Props::new().row(), vec![text.clone()]);
        assert_eq!(boxed.children, vec![text]);
        assert!(boxed.props.is_empty());
    }
}
