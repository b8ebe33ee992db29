//! Behavioural tests for the parsing passes.

pub mod support;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    model::TreeNode,
    parsing::{ParseError, normalize, parse, simplify},
    rule::Rule,
};

use support::{bold, greedy_nothing, highlight, linebreak, paragraph};

fn node(name: &str, content: Vec<TreeNode>) -> TreeNode {
    TreeNode::composite(name, content)
}

fn all_rules() -> Vec<Rule> {
    vec![highlight(), bold(), linebreak(), paragraph()]
}

#[test]
fn empty_rule_list_returns_trimmed_input() {
    let tree = parse("  \n Hello *world*\n\nbye \n", &[] as &[Rule]).unwrap();
    assert_eq!(tree, vec![TreeNode::text("Hello *world*\n\nbye")]);
}

#[test]
fn empty_input_yields_empty_tree() {
    assert!(parse("   \n", &all_rules()).unwrap().is_empty());
    assert!(parse("", &[] as &[Rule]).unwrap().is_empty());
}

#[test]
fn carriage_returns_are_removed() {
    assert_eq!(normalize("\r\na\r\nb\rc\r\n"), "a\nbc");

    let tree = parse("one\r\n\r\ntwo", &all_rules()).unwrap();
    assert_eq!(
        tree,
        vec![node("Paragraph", vec!["one".into()]), node("Paragraph", vec!["two".into()])]
    );
}

#[test]
fn leftmost_match_wins() {
    let tree = parse("*First *Second**", &[highlight()]).unwrap();
    assert_eq!(
        tree,
        vec![node("Highlight", vec!["First ".into()]), "Second**".into()]
    );
}

#[test]
fn earlier_start_beats_registration_order() {
    let tree = parse("a _b_ *c*", &[highlight(), bold()]).unwrap();
    assert_eq!(
        tree,
        vec![
            "a ".into(),
            node("Bold", vec!["b".into()]),
            " ".into(),
            node("Highlight", vec!["c".into()]),
        ]
    );
}

#[test]
fn first_registered_rule_wins_ties() {
    let rules = [highlight(), highlight().with_name("Other")];
    let tree = parse("*x*", &rules).unwrap();
    assert_eq!(tree, vec![node("Highlight", vec!["x".into()])]);

    let rules = [highlight().with_name("Other"), highlight()];
    let tree = parse("*x*", &rules).unwrap();
    assert_eq!(tree, vec![node("Other", vec!["x".into()])]);
}

#[test]
fn block_rules_do_not_rescan_their_output() {
    let rules = [paragraph(), paragraph().with_name("custom-paragraph")];
    let tree = parse(
        "This is the first paragraph\n\nThis is the second paragraph",
        &rules,
    )
    .unwrap();
    assert_eq!(
        tree,
        vec![
            node("Paragraph", vec!["This is the first paragraph".into()]),
            node("Paragraph", vec!["This is the second paragraph".into()]),
        ]
    );
}

#[test]
fn inline_rules_rescan_matched_content_without_firing_rule() {
    let tree = parse("send _*data*_ now", &[highlight(), bold()]).unwrap();
    assert_eq!(
        tree,
        vec![
            "send ".into(),
            node("Bold", vec![node("Highlight", vec!["data".into()])]),
            " now".into(),
        ]
    );
}

#[test]
fn inline_rule_does_not_match_its_own_content_again() {
    // Bold content is re-scanned without Bold; text after the match keeps it.
    let tree = parse("_a_ _b_", &[bold()]).unwrap();
    assert_eq!(
        tree,
        vec![
            node("Bold", vec!["a".into()]),
            " ".into(),
            node("Bold", vec!["b".into()]),
        ]
    );
}

#[test]
fn inline_rules_apply_inside_block_nodes() {
    let tree = parse(
        "Hey *you*\nthere\n\nBest regards\nYour name",
        &all_rules(),
    )
    .unwrap();
    invariants::check(&tree);
    assert_eq!(
        tree,
        vec![
            node(
                "Paragraph",
                vec![
                    "Hey ".into(),
                    node("Highlight", vec!["you".into()]),
                    node("Linebreak", vec![]),
                    "there".into(),
                ]
            ),
            node(
                "Paragraph",
                vec![
                    "Best regards".into(),
                    node("Linebreak", vec![]),
                    "Your name".into(),
                ]
            ),
        ]
    );
}

#[test]
fn zero_length_match_is_rejected() {
    let err = parse("abc", &[greedy_nothing()]).unwrap_err();
    assert_eq!(
        err,
        ParseError::EmptyMatch {
            rule: "Nothing".to_string(),
            offset: 0,
        }
    );
}

#[test]
fn zero_length_match_after_progress_is_rejected() {
    let err = parse("xxa", &[greedy_nothing()]).unwrap_err();
    assert!(matches!(err, ParseError::EmptyMatch { .. }));
}

#[rstest]
#[case("")]
#[case("plain")]
#[case("*a* _b_\n\n_*c*_\nd")]
#[case("First\n\n\n\nSecond\nline *x*")]
fn output_is_simplified(#[case] input: &str) {
    let tree = parse(input, &all_rules()).unwrap();
    invariants::check(&tree);
    assert_eq!(simplify(tree.clone()), tree);
}
