use std::sync::LazyLock;

use textparser_engine::{ElementDescriptor, Pattern, Rule, Scope, rule::wrap_first_capture};

pub const NAME: &str = "Paragraph";

/// Shortest run of text up to two or more newlines, or to the end.
static PATTERN: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(r"(?s)(.+?)(?:\n{2,}|$)").expect("valid paragraph pattern")
});

pub fn paragraph() -> Rule {
    Rule::new(
        NAME,
        Scope::Block,
        PATTERN.clone(),
        wrap_first_capture,
        |_, _| ElementDescriptor::tag("p"),
    )
}
