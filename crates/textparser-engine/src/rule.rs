//! # Rules
//!
//! A [`Rule`] pairs a pattern with a tree builder and a renderer. The engine
//! only sees rules through two small capabilities:
//!
//! - [`Matcher`]: used by [`crate::parse`] to find and convert matches
//! - [`Renderer`]: used by [`crate::build`] to turn nodes into descriptors
//!
//! `Rule` is a fixed-shape record with private fields; callers derive
//! variants through its builder methods instead of widening its shape.

use std::{fmt, sync::Arc};

use crate::{
    descriptor::ElementDescriptor,
    matching::Pattern,
    model::{MatchResult, Scope, TreeNode},
};

/// Builds a node from a match. Receives the name of the rule that fired.
pub type ParseFn = Arc<dyn Fn(&str, &MatchResult) -> TreeNode + Send + Sync>;

/// Describes a node. Receives the node and the whole tree it belongs to.
pub type RenderFn = Arc<dyn Fn(&TreeNode, &[TreeNode]) -> ElementDescriptor + Send + Sync>;

pub trait Matcher {
    fn name(&self) -> &str;
    fn scope(&self) -> Scope;
    fn find(&self, input: &str) -> Option<MatchResult>;
    fn parse(&self, matched: &MatchResult) -> TreeNode;
}

pub trait Renderer {
    fn name(&self) -> &str;
    fn render(&self, node: &TreeNode, tree: &[TreeNode]) -> ElementDescriptor;
    /// Renderers for synthetic node names this rule's `parse` emits.
    fn extra_renderers(&self) -> &[(String, RenderFn)];
}

#[derive(Clone)]
pub struct Rule {
    name: String,
    scope: Scope,
    pattern: Pattern,
    parse: ParseFn,
    render: RenderFn,
    extra_renderers: Vec<(String, RenderFn)>,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        scope: Scope,
        pattern: Pattern,
        parse: impl Fn(&str, &MatchResult) -> TreeNode + Send + Sync + 'static,
        render: impl Fn(&TreeNode, &[TreeNode]) -> ElementDescriptor + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            scope,
            pattern,
            parse: Arc::new(parse),
            render: Arc::new(render),
            extra_renderers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Same rule under another name; its nodes carry the new name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_renderer(
        mut self,
        render: impl Fn(&TreeNode, &[TreeNode]) -> ElementDescriptor + Send + Sync + 'static,
    ) -> Self {
        self.render = Arc::new(render);
        self
    }

    /// Post-processes the descriptor of the current renderer, e.g. to add a
    /// `className`. Extra renderers are left alone.
    pub fn map_render(
        self,
        map: impl Fn(ElementDescriptor) -> ElementDescriptor + Send + Sync + 'static,
    ) -> Self {
        let inner = Arc::clone(&self.render);
        self.with_renderer(move |node, tree| map(inner(node, tree)))
    }

    pub fn with_extra_renderer(
        mut self,
        name: impl Into<String>,
        render: impl Fn(&TreeNode, &[TreeNode]) -> ElementDescriptor + Send + Sync + 'static,
    ) -> Self {
        self.extra_renderers.push((name.into(), Arc::new(render)));
        self
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("scope", &self.scope)
            .field("pattern", &self.pattern.as_str())
            .field(
                "extra_renderers",
                &self
                    .extra_renderers
                    .iter()
                    .map(|(name, _)| name.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Matcher for Rule {
    fn name(&self) -> &str {
        &self.name
    }

    fn scope(&self) -> Scope {
        self.scope
    }

    fn find(&self, input: &str) -> Option<MatchResult> {
        self.pattern.find(input)
    }

    fn parse(&self, matched: &MatchResult) -> TreeNode {
        (self.parse)(&self.name, matched)
    }
}

impl Renderer for Rule {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, node: &TreeNode, tree: &[TreeNode]) -> ElementDescriptor {
        (self.render)(node, tree)
    }

    fn extra_renderers(&self) -> &[(String, RenderFn)] {
        &self.extra_renderers
    }
}

/// Parse function wrapping capture group 1 in a node named after the rule.
/// A missing group yields an empty node.
pub fn wrap_first_capture(name: &str, matched: &MatchResult) -> TreeNode {
    let content = matched
        .capture(1)
        .map(|text| vec![TreeNode::text(text)])
        .unwrap_or_default();
    TreeNode::composite(name, content)
}
