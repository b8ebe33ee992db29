use crate::model::TreeNode;

/// Concatenated text of a node and all of its descendants.
pub fn node_text(node: &TreeNode) -> String {
    let mut out = String::new();
    push_text(node, &mut out);
    out
}

/// Concatenated text of every node in `tree`, in document order.
pub fn tree_text(tree: &[TreeNode]) -> String {
    let mut out = String::new();
    for node in tree {
        push_text(node, &mut out);
    }
    out
}

fn push_text(node: &TreeNode, out: &mut String) {
    match node {
        TreeNode::Text(text) => out.push_str(text),
        TreeNode::Composite { content, .. } => {
            for child in content {
                push_text(child, out);
            }
        }
    }
}
