use std::rc::Rc;

use crate::{
    matching::leftmost,
    model::{MatchResult, Tree, TreeNode},
    rule::Matcher,
};

use super::ParseError;

/// What happens to the node a rule's `parse` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recursion {
    /// Keep it as-is (block pass).
    Single,
    /// Re-scan it without the rule that produced it (inline pass).
    Nested,
}

/// Indices into the rule slice, in registration order.
type RuleSet = Rc<[usize]>;

enum Work {
    Visit(TreeNode, RuleSet),
    Emit(TreeNode),
    Open(String),
    Close,
}

/// Applies one pass of rules to a tree.
///
/// The traversal keeps its own stack instead of recursing, and visits spans
/// depth-first, left to right: before-text, then the matched node, then
/// after-text.
pub struct Reducer<'r, M> {
    rules: &'r [M],
    recursion: Recursion,
    stack: Vec<Work>,
    /// Open composites awaiting their `Close`; the first frame is the root.
    frames: Vec<(Option<String>, Vec<TreeNode>)>,
}

impl<'r, M: Matcher> Reducer<'r, M> {
    pub fn new(rules: &'r [M], recursion: Recursion) -> Self {
        Self {
            rules,
            recursion,
            stack: vec![],
            frames: vec![(None, vec![])],
        }
    }

    /// Runs the pass over `tree` using the rules at `active` indices.
    pub fn run(mut self, tree: Tree, active: &[usize]) -> Result<Tree, ParseError> {
        let active: RuleSet = Rc::from(active);
        for node in tree.into_iter().rev() {
            self.stack.push(Work::Visit(node, Rc::clone(&active)));
        }

        while let Some(work) = self.stack.pop() {
            match work {
                Work::Visit(TreeNode::Text(text), rules) => self.visit_text(text, rules)?,
                Work::Visit(TreeNode::Composite { name, content }, rules) => {
                    self.stack.push(Work::Close);
                    for child in content.into_iter().rev() {
                        self.stack.push(Work::Visit(child, Rc::clone(&rules)));
                    }
                    self.stack.push(Work::Open(name));
                }
                Work::Emit(node) => self.emit(node),
                Work::Open(name) => self.frames.push((Some(name), vec![])),
                Work::Close => {
                    if let Some((Some(name), content)) = self.frames.pop() {
                        self.emit(TreeNode::Composite { name, content });
                    }
                }
            }
        }

        Ok(self.frames.pop().map(|(_, out)| out).unwrap_or_default())
    }

    fn visit_text(&mut self, text: String, rules: RuleSet) -> Result<(), ParseError> {
        let Some((fired, matched)) = self.first_match(&text, &rules) else {
            self.emit(TreeNode::Text(text));
            return Ok(());
        };

        let rule = &self.rules[fired];
        if matched.full_match.is_empty() {
            return Err(ParseError::EmptyMatch {
                rule: rule.name().to_string(),
                offset: matched.index,
            });
        }
        log::trace!(
            "rule '{}' matched {:?} at {}",
            rule.name(),
            matched.full_match,
            matched.index
        );

        let before = text[..matched.index].to_string();
        let after = text[matched.end()..].to_string();
        let node = rule.parse(&matched);

        // Pushed in reverse so `before` is handled first.
        self.stack.push(Work::Visit(TreeNode::Text(after), Rc::clone(&rules)));
        match self.recursion {
            Recursion::Single => self.stack.push(Work::Emit(node)),
            Recursion::Nested => {
                let remaining: RuleSet = rules.iter().copied().filter(|&i| i != fired).collect();
                self.stack.push(Work::Visit(node, remaining));
            }
        }
        self.stack.push(Work::Visit(TreeNode::Text(before), rules));
        Ok(())
    }

    fn first_match(&self, text: &str, rules: &[usize]) -> Option<(usize, MatchResult)> {
        leftmost(
            rules
                .iter()
                .filter_map(|&i| self.rules[i].find(text).map(|matched| (i, matched))),
        )
    }

    fn emit(&mut self, node: TreeNode) {
        if let Some((_, out)) = self.frames.last_mut() {
            out.push(node);
        }
    }
}
