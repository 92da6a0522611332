//! View nodes: a serializable description of terminal UI elements.

use serde::{Deserialize, Serialize};

/// Element type of a [ViewNode].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Layout container (row or column, optional border).
    Box,
    /// Styled text run.
    Text,
    /// Loading indicator.
    Spinner,
    /// Unstyled stand-in used before primitives are loaded.
    Placeholder,
}

/// Terminal colors a view may reference; resolved against a palette when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    Blue,
    Green,
    Yellow,
    Cyan,
    Red,
    Magenta,
    Gray,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Single,
    Round,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
    #[default]
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinnerKind {
    #[default]
    Dots,
    Line,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Presentation properties. Unset fields mean "inherit / none".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Props {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_style: Option<BorderStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<NamedColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_x: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<NamedColor>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub dim: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spinner: Option<SpinnerKind>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn border(mut self, style: BorderStyle, color: NamedColor) -> Self {
        self.border_style = Some(style);
        self.border_color = Some(color);
        self
    }

    pub fn padding_x(mut self, n: u16) -> Self {
        self.padding_x = Some(n);
        self
    }

    pub fn row(mut self) -> Self {
        self.flex_direction = Some(FlexDirection::Row);
        self
    }

    pub fn column(mut self) -> Self {
        self.flex_direction = Some(FlexDirection::Column);
        self
    }

    pub fn margin_top(mut self, n: u16) -> Self {
        self.margin_top = Some(n);
        self
    }

    pub fn margin_bottom(mut self, n: u16) -> Self {
        self.margin_bottom = Some(n);
        self
    }

    pub fn color(mut self, color: NamedColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn spinner(mut self, kind: SpinnerKind) -> Self {
        self.spinner = Some(kind);
        self
    }
}

/// One element in a view tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewNode {
    pub kind: ElementKind,
    #[serde(default, skip_serializing_if = "Props::is_empty")]
    pub props: Props,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(kind: ElementKind, props: Props) -> Self {
        Self {
            kind,
            props,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_children(mut self, children: Vec<ViewNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_bordered(&self) -> bool {
        self.props.border_style.is_some()
    }

    pub fn direction(&self) -> FlexDirection {
        self.props.flex_direction.unwrap_or_default()
    }

    /// All literal text in the subtree, depth-first, concatenated.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Depth-first search for the first node matching `pred`.
    pub fn find(&self, pred: &dyn Fn(&ViewNode) -> bool) -> Option<&ViewNode> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(pred))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_compactly() {
        let node = ViewNode::new(ElementKind::Text, Props::new().color(NamedColor::Cyan).bold())
            .with_text("hi");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "text", "props": {"color": "cyan", "bold": true}, "text": "hi"})
        );
    }

    #[test]
    fn empty_props_and_children_are_omitted() {
        let node = ViewNode::new(ElementKind::Placeholder, Props::new());
        assert_eq!(serde_json::to_string(&node).unwrap(), r#"{"kind":"placeholder"}"#);
    }

    #[test]
    fn plain_text_walks_depth_first() {
        let node = ViewNode::new(ElementKind::Box, Props::new().row()).with_children(vec![
            ViewNode::new(ElementKind::Text, Props::new()).with_text("a"),
            ViewNode::new(ElementKind::Box, Props::new()).with_children(vec![
                ViewNode::new(ElementKind::Text, Props::new()).with_text("b"),
            ]),
            ViewNode::new(ElementKind::Text, Props::new()).with_text("c"),
        ]);
        assert_eq!(node.plain_text(), "abc");
        assert!(node.find(&|n| n.text.as_deref() == Some("b")).is_some());
    }

    #[test]
    fn default_direction_is_column() {
        let node = ViewNode::new(ElementKind::Box, Props::new());
        assert_eq!(node.direction(), FlexDirection::Column);
    }
}
