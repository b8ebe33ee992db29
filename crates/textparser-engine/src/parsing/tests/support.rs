//! Minimal rules for exercising the engine without the standard rule crate.

use crate::{
    descriptor::ElementDescriptor,
    matching::Pattern,
    model::{Scope, TreeNode},
    rule::{Rule, wrap_first_capture},
};

pub fn paragraph() -> Rule {
    Rule::new(
        "Paragraph",
        Scope::Block,
        Pattern::new(r"(?s)(.+?)(?:\n{2,}|$)").unwrap(),
        wrap_first_capture,
        |_, _| ElementDescriptor::tag("p"),
    )
}

pub fn highlight() -> Rule {
    Rule::new(
        "Highlight",
        Scope::Inline,
        Pattern::new(r"\*([^*]+?)\*")
            .unwrap()
            .not_followed_by(r"\*")
            .unwrap(),
        wrap_first_capture,
        |_, _| ElementDescriptor::tag("em"),
    )
}

pub fn bold() -> Rule {
    Rule::new(
        "Bold",
        Scope::Inline,
        Pattern::new(r"_([^_]+?)_")
            .unwrap()
            .not_followed_by("_")
            .unwrap(),
        wrap_first_capture,
        |_, _| ElementDescriptor::tag("b"),
    )
}

pub fn linebreak() -> Rule {
    Rule::new(
        "Linebreak",
        Scope::Inline,
        Pattern::new(r"\n").unwrap(),
        |name, _| TreeNode::composite(name, vec![]),
        |_, _| ElementDescriptor::tag("br"),
    )
}

/// Inline rule whose pattern can match the empty string.
pub fn greedy_nothing() -> Rule {
    Rule::new(
        "Nothing",
        Scope::Inline,
        Pattern::new("x*").unwrap(),
        wrap_first_capture,
        |_, _| ElementDescriptor::tag("span"),
    )
}
