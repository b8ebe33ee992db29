use std::sync::LazyLock;

use textparser_engine::{ElementDescriptor, Pattern, Rule, Scope, TreeNode};

pub const NAME: &str = "Linebreak";

/// A newline, or the two characters `\n` written out literally.
static PATTERN: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::new(r"\n|\\n").expect("valid linebreak pattern"));

pub fn linebreak() -> Rule {
    Rule::new(
        NAME,
        Scope::Inline,
        PATTERN.clone(),
        |name, _| TreeNode::composite(name, vec![]),
        |_, _| ElementDescriptor::tag("br"),
    )
}
