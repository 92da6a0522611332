//! Tool call section: a dim label followed by one bullet line per call.

use super::chat::ToolCall;
use crate::utils::{TOOL_BULLET, TOOL_SECTION_LABEL};
use crate::view::{LayoutPrimitives, NamedColor, Props, ViewNode};

/// `• name`, plus ` (n args)` when the call has at least one argument.
pub fn tool_call_label(call: &ToolCall) -> String {
    match call.argument_count() {
        0 => format!("{} {}", TOOL_BULLET, call.tool_name),
        n => format!("{} {} ({} args)", TOOL_BULLET, call.tool_name, n),
    }
}

/// Section for `calls`, in input order. `None` when there are no calls.
pub fn tool_section(primitives: &dyn LayoutPrimitives, calls: &[ToolCall]) -> Option<ViewNode> {
    if calls.is_empty() {
        return None;
    }
    let mut children = Vec::with_capacity(calls.len() + 1);
    children.push(primitives.text(Props::new().dim(), TOOL_SECTION_LABEL));
    children.extend(
        calls
            .iter()
            .map(|call| primitives.text(Props::new().color(NamedColor::Magenta), &tool_call_label(call))),
    );
    Some(primitives.container(Props::new().column().margin_top(1), children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::TerminalPrimitives;

    #[test]
    fn label_without_arguments() {
        assert_eq!(tool_call_label(&ToolCall::new("list_files")), "• list_files");
    }

    #[test]
    fn label_with_arguments() {
        let call = ToolCall::new("search").with_argument("q", "x");
        assert_eq!(tool_call_label(&call), "• search (1 args)");
    }

    #[test]
    fn empty_arguments_map_has_no_suffix() {
        let mut call = ToolCall::new("noop");
        call.arguments = Some(serde_json::Map::new());
        assert_eq!(tool_call_label(&call), "• noop");
    }

    #[test]
    fn section_preserves_order() {
        let calls = vec![ToolCall::new("b"), ToolCall::new("a"), ToolCall::new("c")];
        let section = tool_section(&TerminalPrimitives, &calls).unwrap();
        let labels: Vec<_> = section.children.iter().filter_map(|n| n.text.clone()).collect();
        assert_eq!(labels, vec!["Tools:", "• b", "• a", "• c"]);
    }

    #[test]
    fn no_section_for_empty_list() {
        assert!(tool_section(&TerminalPrimitives, &[]).is_none());
    }
}
