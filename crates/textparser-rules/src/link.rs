use std::sync::LazyLock;

use regex::Regex;
use textparser_engine::{
    ElementDescriptor, Pattern, Rule, Scope, node_text, rule::wrap_first_capture,
};

pub const NAME: &str = "Link";

/// A `scheme://` or `www.` address, ending on a word character so trailing
/// punctuation stays outside the link.
static PATTERN: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(r"((?:[\w-]+://?|www(?:-\w+)?\.)[^\s()<>]+\.?\w+)").expect("valid link pattern")
});

static HAS_HTTP_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("valid scheme pattern"));

pub fn link() -> Rule {
    Rule::new(NAME, Scope::Inline, PATTERN.clone(), wrap_first_capture, |node, _| {
        ElementDescriptor::tag("a")
            .with_prop("href", href(&node_text(node)))
            .with_prop("target", "_blank")
            .with_prop("rel", "noopener")
    })
}

/// Bare addresses get `https://`; `http://` and `https://` are kept as-is.
pub fn href(text: &str) -> String {
    if HAS_HTTP_SCHEME.is_match(text) {
        text.to_string()
    } else {
        format!("https://{text}")
    }
}
