//! # Parsing
//!
//! Text-to-tree reduction in two passes plus a cleanup.
//!
//! ## Phases
//!
//! 1. **Normalize**: trim the input and drop every `\r`
//! 2. **Block pass**: block rules split the document into units. A matched
//!    unit is converted by its rule's `parse` and never re-scanned, so a
//!    container rule cannot match its own output forever
//! 3. **Inline pass**: inline rules run over every text leaf. Matched content
//!    is re-scanned without the rule that fired; text before and after a match
//!    keeps the current rule set
//! 4. **Simplify**: empty text leaves are removed
//!
//! ## Modules
//!
//! - **`reducer`**: `Reducer`, the explicit work stack shared by both passes
//! - **`simplify`**: `simplify()` for empty-leaf removal
//!
//! ## Forward progress
//!
//! A rule whose match is empty would split a span into itself. Such matches
//! are rejected with [`ParseError::EmptyMatch`].

pub mod reducer;
pub mod simplify;

#[cfg(test)]
mod tests;

use crate::{
    model::{Scope, Tree, TreeNode},
    rule::Matcher,
};

pub use reducer::{Recursion, Reducer};
pub use simplify::simplify;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Rule '{rule}' produced an empty match at byte {offset}")]
    EmptyMatch { rule: String, offset: usize },
}

/// Parses `content` into a tree using `rules` in registration order.
pub fn parse<M: Matcher>(content: &str, rules: &[M]) -> Result<Tree, ParseError> {
    let normalized = normalize(content);

    let block_rules = rules_in_scope(rules, Scope::Block);
    let inline_rules = rules_in_scope(rules, Scope::Inline);
    log::debug!(
        "parsing {} bytes with {} block and {} inline rules",
        normalized.len(),
        block_rules.len(),
        inline_rules.len()
    );

    let blocks = Reducer::new(rules, Recursion::Single)
        .run(vec![TreeNode::Text(normalized)], &block_rules)?;
    let inlines = Reducer::new(rules, Recursion::Nested).run(blocks, &inline_rules)?;

    Ok(simplify(inlines))
}

/// Trims surrounding whitespace and removes carriage returns.
pub fn normalize(content: &str) -> String {
    content.trim().replace('\r', "")
}

fn rules_in_scope<M: Matcher>(rules: &[M], scope: Scope) -> Vec<usize> {
    rules
        .iter()
        .enumerate()
        .filter(|(_, rule)| rule.scope() == scope)
        .map(|(i, _)| i)
        .collect()
}
