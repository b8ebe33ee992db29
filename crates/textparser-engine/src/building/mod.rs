//! # Building
//!
//! Turns a parsed tree into [`Element`]s by dispatching each composite node
//! to the renderer registered under its name.
//!
//! - Text leaves become [`Element::Text`] verbatim
//! - Composite nodes are rendered with the node and the whole tree
//! - Renderer-supplied children replace the node's own content
//! - Otherwise children are built from the node's content, keyed by position
//!
//! Renderers are collected into a [`RendererRegistry`] first. Name collisions
//! are settled there, according to a [`CollisionPolicy`], before any node is
//! rendered.

mod registry;

pub use registry::{CollisionPolicy, RendererRegistry};

use crate::{descriptor::Element, model::TreeNode, rule::Renderer};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("No renderer registered for node '{name}'")]
    UnknownRenderer { name: String },
    #[error("Renderer '{name}' is registered more than once")]
    DuplicateRenderer { name: String },
}

/// Builds `tree` with renderers from `rules`, rejecting name collisions.
pub fn build<R: Renderer>(tree: &[TreeNode], rules: &[R]) -> Result<Vec<Element>, BuildError> {
    RendererRegistry::new(rules, CollisionPolicy::default())?.build(tree)
}
