use std::sync::LazyLock;

use regex::Regex;
use textparser_engine::{ElementDescriptor, MatchResult, Pattern, Rule, Scope, TreeNode};

pub const NAME: &str = "Bullets";
pub const ELEMENT_NAME: &str = "Bullets__element";

/// One or more `* item` lines, starting at the beginning of the text or
/// after a newline.
static PATTERN: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(r"((?:^|\n)(?:\*\s[^\n]+(?:\n+|$))+)").expect("valid bullets pattern")
});

static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\s+").expect("valid bullet marker pattern"));

pub fn bullets() -> Rule {
    Rule::new(NAME, Scope::Block, PATTERN.clone(), parse, |_, _| {
        ElementDescriptor::tag("ul")
    })
    .with_extra_renderer(ELEMENT_NAME, |_, _| ElementDescriptor::tag("li"))
}

/// Splits the matched lines into `<name>__element` items, markers removed.
fn parse(name: &str, matched: &MatchResult) -> TreeNode {
    let element_name = format!("{name}__element");
    let items = matched
        .capture(1)
        .unwrap_or_default()
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| {
            TreeNode::composite(
                element_name.as_str(),
                vec![TreeNode::text(MARKER.replace(line, ""))],
            )
        })
        .collect();
    TreeNode::composite(name, items)
}
