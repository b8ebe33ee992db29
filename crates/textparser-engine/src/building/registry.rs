use std::collections::HashMap;

use crate::{
    descriptor::{Element, ElementDescriptor},
    model::TreeNode,
    rule::{RenderFn, Renderer},
};

use super::BuildError;

/// How the registry treats two renderers with the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Fail registration with [`BuildError::DuplicateRenderer`].
    #[default]
    Reject,
    /// The renderer registered last replaces earlier ones.
    LastWins,
}

enum Entry<'r, R> {
    Rule(&'r R),
    Extra(&'r RenderFn),
}

/// Name → renderer lookup built from a rule list.
pub struct RendererRegistry<'r, R> {
    renderers: HashMap<&'r str, Entry<'r, R>>,
}

impl<'r, R: Renderer> RendererRegistry<'r, R> {
    pub fn new(rules: &'r [R], policy: CollisionPolicy) -> Result<Self, BuildError> {
        let mut registry = Self {
            renderers: HashMap::new(),
        };
        for rule in rules {
            registry.register(rule.name(), Entry::Rule(rule), policy)?;
            for (name, render) in rule.extra_renderers() {
                registry.register(name, Entry::Extra(render), policy)?;
            }
        }
        Ok(registry)
    }

    fn register(
        &mut self,
        name: &'r str,
        entry: Entry<'r, R>,
        policy: CollisionPolicy,
    ) -> Result<(), BuildError> {
        if self.renderers.insert(name, entry).is_some() {
            match policy {
                CollisionPolicy::Reject => {
                    return Err(BuildError::DuplicateRenderer {
                        name: name.to_string(),
                    });
                }
                CollisionPolicy::LastWins => {
                    log::debug!("renderer '{name}' overrides an earlier registration");
                }
            }
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    /// Describes a single composite node.
    pub fn render(
        &self,
        name: &str,
        node: &TreeNode,
        tree: &[TreeNode],
    ) -> Result<ElementDescriptor, BuildError> {
        match self.renderers.get(name) {
            Some(Entry::Rule(rule)) => Ok(rule.render(node, tree)),
            Some(Entry::Extra(render)) => Ok(render(node, tree)),
            None => Err(BuildError::UnknownRenderer {
                name: name.to_string(),
            }),
        }
    }

    /// Builds every top-level node of `tree`.
    pub fn build(&self, tree: &[TreeNode]) -> Result<Vec<Element>, BuildError> {
        tree.iter()
            .enumerate()
            .map(|(key, node)| self.build_node(tree, node, key))
            .collect()
    }

    fn build_node(
        &self,
        tree: &[TreeNode],
        node: &TreeNode,
        key: usize,
    ) -> Result<Element, BuildError> {
        let (name, content) = match node {
            TreeNode::Text(text) => return Ok(Element::Text(text.clone())),
            TreeNode::Composite { name, content } => (name, content),
        };

        let descriptor = self.render(name, node, tree)?;
        let children = match descriptor.children {
            Some(children) => children,
            None => content
                .iter()
                .enumerate()
                .map(|(i, child)| self.build_node(tree, child, i))
                .collect::<Result<_, _>>()?,
        };

        Ok(Element::Node {
            element_type: descriptor.element_type,
            props: descriptor.props,
            key,
            children,
        })
    }
}
