use textparser_engine::{ElementDescriptor, Pattern, Rule, Scope, rule::wrap_first_capture};

pub const NAME: &str = "DynamicHighlight";

/// Never matches: a position cannot be both a word boundary and not one.
const NEVER: &str = r"\b\B";

/// Highlights every word containing one of `query`'s tokens, ignoring case.
///
/// Tokens are escaped, so they match literally. Empty tokens are skipped; with
/// no tokens left the rule never matches.
pub fn dynamic_highlight<S: AsRef<str>>(query: &[S]) -> Result<Rule, regex::Error> {
    let alternatives = query
        .iter()
        .map(|token| token.as_ref())
        .filter(|token| !token.is_empty())
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");

    let pattern = if alternatives.is_empty() {
        Pattern::new(NEVER)?
    } else {
        Pattern::new(&format!(r"(?i)(\b\S*(?:{alternatives})\S*\b)"))?
    };

    Ok(Rule::new(
        NAME,
        Scope::Inline,
        pattern,
        wrap_first_capture,
        |_, _| ElementDescriptor::tag("em"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use textparser_engine::{MatchResult, Matcher, Renderer, TreeNode, parse};

    #[test]
    fn basic_config() {
        let rule = dynamic_highlight::<&str>(&[]).unwrap();
        assert_eq!(rule.name(), "DynamicHighlight");
        assert_eq!(rule.scope(), Scope::Inline);

        let matched = MatchResult {
            full_match: String::new(),
            captures: vec![Some("Content here".to_string())],
            index: 0,
            input: String::new(),
        };
        assert_eq!(
            Matcher::parse(&rule, &matched),
            TreeNode::composite("DynamicHighlight", vec!["Content here".into()])
        );
        assert_eq!(
            Renderer::render(&rule, &TreeNode::text(""), &[]),
            ElementDescriptor::tag("em")
        );
    }

    #[test]
    fn escapes_regex_tokens() {
        let rule = dynamic_highlight(&[r"-[]{}()*+?.,^$|#"]).unwrap();
        assert!(
            rule.pattern()
                .as_str()
                .contains(r"\-\[\]\{\}\(\)\*\+\?\.,\^\$\|\#"),
            "unescaped pattern: {}",
            rule.pattern().as_str()
        );
    }

    #[test]
    fn highlights_whole_words() {
        let rule = dynamic_highlight(&["ll"]).unwrap();
        let matched = rule.pattern().find("good hello world").unwrap();
        assert_eq!(matched.full_match, "hello");
        assert_eq!(matched.capture(1), Some("hello"));
    }

    #[test]
    fn ignores_case_and_empty_tokens() {
        let rule = dynamic_highlight(&["", "WORLD"]).unwrap();
        let tree = parse("hello world", &[rule]).unwrap();
        assert_eq!(
            tree,
            vec![
                "hello ".into(),
                TreeNode::composite("DynamicHighlight", vec!["world".into()]),
            ]
        );
    }

    #[test]
    fn word_boundaries_are_unicode_aware() {
        let rule = dynamic_highlight(&["bær"]).unwrap();
        let matched = rule.pattern().find("Jeg liker blåbær og jordbær").unwrap();
        assert_eq!(matched.full_match, "blåbær");
        assert_eq!(matched.index, "Jeg liker ".len());
    }

    #[test]
    fn empty_query_never_matches() {
        let rule = dynamic_highlight(&["", ""]).unwrap();
        assert!(rule.pattern().find("anything at all").is_none());
        assert!(rule.pattern().find("").is_none());
    }
}
