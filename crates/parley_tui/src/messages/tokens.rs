//! Token usage line.

use super::chat::TokenUsage;
use crate::view::{LayoutPrimitives, Props, ViewNode};

/// `Tokens: <total> total (<prompt> prompt, <completion> completion)`, counts as given.
pub fn token_summary(tokens: &TokenUsage) -> String {
    format!(
        "Tokens: {} total ({} prompt, {} completion)",
        tokens.total, tokens.prompt, tokens.completion
    )
}

pub fn token_line(primitives: &dyn LayoutPrimitives, tokens: &TokenUsage) -> ViewNode {
    primitives.text(Props::new().dim(), &token_summary(tokens))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reads_counts_verbatim() {
        assert_eq!(
            token_summary(&TokenUsage::new(3, 2, 5)),
            "Tokens: 5 total (3 prompt, 2 completion)"
        );
        // Inconsistent totals are shown as reported.
        assert_eq!(
            token_summary(&TokenUsage::new(1, 1, 10)),
            "Tokens: 10 total (1 prompt, 1 completion)"
        );
    }
}
