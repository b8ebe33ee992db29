//! # Standard rules
//!
//! Ready-made rules for a small markup dialect:
//!
//! | rule | scope | syntax | element |
//! |---|---|---|---|
//! | `Paragraph` | block | text separated by blank lines | `p` |
//! | `Bullets` | block | consecutive `* item` lines | `ul` / `li` |
//! | `Highlight` | inline | `*text*` | `em` |
//! | `Bold` | inline | `_text_` | `b` |
//! | `Link` | inline | `https://…`, `www.…` | `a` |
//! | `Linebreak` | inline | newline or a literal `\n` | `br` |
//! | `DynamicHighlight` | inline | words containing a query token | `em` |
//!
//! Every rule is plain data: clone it, rename it with `with_name`, or restyle
//! it with `map_render` without touching the others.

pub mod bold;
pub mod bullets;
pub mod dynamic_highlight;
pub mod highlight;
pub mod linebreak;
pub mod link;
pub mod paragraph;

use textparser_engine::Rule;

pub use bold::bold;
pub use bullets::bullets;
pub use dynamic_highlight::dynamic_highlight;
pub use highlight::highlight;
pub use linebreak::linebreak;
pub use link::link;
pub use paragraph::paragraph;

/// Names accepted by [`rule_by_name`], in default registration order.
pub const STANDARD_RULES: [&str; 6] = [
    highlight::NAME,
    bold::NAME,
    link::NAME,
    linebreak::NAME,
    bullets::NAME,
    paragraph::NAME,
];

/// The standard rule set. Inline rules first, then `Bullets` ahead of
/// `Paragraph` so a list at the start of a unit is not swallowed as text.
pub fn default_rules() -> Vec<Rule> {
    vec![highlight(), bold(), link(), linebreak(), bullets(), paragraph()]
}

/// Looks up one of the [`STANDARD_RULES`] by name.
pub fn rule_by_name(name: &str) -> Option<Rule> {
    match name {
        highlight::NAME => Some(highlight()),
        bold::NAME => Some(bold()),
        link::NAME => Some(link()),
        linebreak::NAME => Some(linebreak()),
        bullets::NAME => Some(bullets()),
        paragraph::NAME => Some(paragraph()),
        _ => None,
    }
}
