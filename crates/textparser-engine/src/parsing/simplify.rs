use crate::model::{Tree, TreeNode};

/// Removes empty text leaves at every depth, keeping document order.
pub fn simplify(tree: Tree) -> Tree {
    tree.into_iter().filter_map(simplify_node).collect()
}

fn simplify_node(node: TreeNode) -> Option<TreeNode> {
    match node {
        TreeNode::Text(text) if text.is_empty() => None,
        TreeNode::Text(text) => Some(TreeNode::Text(text)),
        TreeNode::Composite { name, content } => Some(TreeNode::Composite {
            name,
            content: simplify(content),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw() -> Tree {
        vec![
            "".into(),
            TreeNode::composite(
                "Paragraph",
                vec![
                    "a".into(),
                    "".into(),
                    TreeNode::composite("Bold", vec!["".into()]),
                ],
            ),
            "".into(),
        ]
    }

    #[test]
    fn drops_empty_leaves_at_every_depth() {
        assert_eq!(
            simplify(raw()),
            vec![TreeNode::composite(
                "Paragraph",
                vec!["a".into(), TreeNode::composite("Bold", vec![])],
            )]
        );
    }

    #[test]
    fn is_idempotent() {
        let once = simplify(raw());
        assert_eq!(simplify(once.clone()), once);
    }

    #[test]
    fn keeps_whitespace_only_text() {
        assert_eq!(simplify(vec![" ".into()]), vec![TreeNode::text(" ")]);
    }
}
