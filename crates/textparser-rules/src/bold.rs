use std::sync::LazyLock;

use textparser_engine::{ElementDescriptor, Pattern, Rule, Scope, rule::wrap_first_capture};

pub const NAME: &str = "Bold";

/// `_text_`, unless the closing underscore is doubled.
static PATTERN: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(r"_([^_]+?)_")
        .and_then(|pattern| pattern.not_followed_by("_"))
        .expect("valid bold pattern")
});

pub fn bold() -> Rule {
    Rule::new(
        NAME,
        Scope::Inline,
        PATTERN.clone(),
        wrap_first_capture,
        |_, _| ElementDescriptor::tag("b"),
    )
}
