use std::sync::LazyLock;

use textparser_engine::{ElementDescriptor, Pattern, Rule, Scope, rule::wrap_first_capture};

pub const NAME: &str = "Highlight";

/// `*text*`, unless the closing star is doubled.
static PATTERN: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(r"\*([^*]+?)\*")
        .and_then(|pattern| pattern.not_followed_by(r"\*"))
        .expect("valid highlight pattern")
});

pub fn highlight() -> Rule {
    Rule::new(
        NAME,
        Scope::Inline,
        PATTERN.clone(),
        wrap_first_capture,
        |_, _| ElementDescriptor::tag("em"),
    )
}
