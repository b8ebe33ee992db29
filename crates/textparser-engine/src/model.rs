use serde::Serialize;

/// Whether a rule partitions the document or formats text within a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Applied once over the whole document; output is never re-scanned.
    Block,
    /// Applied recursively, including inside its own matched content.
    Inline,
}

/// A node of the parsed tree.
///
/// Serializes as a bare string for text and `{ "name", "content" }` for
/// composites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// A raw text span. Empty spans carry no meaning and are dropped by
    /// simplification.
    Text(String),
    /// A node produced by the rule called `name`.
    Composite {
        name: String,
        content: Vec<TreeNode>,
    },
}

/// Document-ordered sequence of nodes.
pub type Tree = Vec<TreeNode>;

impl TreeNode {
    pub fn text(text: impl Into<String>) -> Self {
        TreeNode::Text(text.into())
    }

    pub fn composite(name: impl Into<String>, content: Vec<TreeNode>) -> Self {
        TreeNode::Composite {
            name: name.into(),
            content,
        }
    }

    /// Name of the producing rule, `None` for text.
    pub fn name(&self) -> Option<&str> {
        match self {
            TreeNode::Text(_) => None,
            TreeNode::Composite { name, .. } => Some(name),
        }
    }

    /// Children of a composite; text nodes have none.
    pub fn content(&self) -> &[TreeNode] {
        match self {
            TreeNode::Text(_) => &[],
            TreeNode::Composite { content, .. } => content,
        }
    }

    pub fn is_empty_text(&self) -> bool {
        matches!(self, TreeNode::Text(text) if text.is_empty())
    }
}

impl From<&str> for TreeNode {
    fn from(text: &str) -> Self {
        TreeNode::Text(text.to_string())
    }
}

impl From<String> for TreeNode {
    fn from(text: String) -> Self {
        TreeNode::Text(text)
    }
}

/// A single pattern match, normalized away from the regex engine's types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The whole matched text.
    pub full_match: String,
    /// Capture groups after the whole match. `None` for optional groups that
    /// did not participate.
    pub captures: Vec<Option<String>>,
    /// Byte offset of `full_match` within `input`.
    pub index: usize,
    /// The text the pattern was applied to.
    pub input: String,
}

impl MatchResult {
    /// Capture group `n`, counting from 1 like the regex syntax does.
    pub fn capture(&self, n: usize) -> Option<&str> {
        n.checked_sub(1)
            .and_then(|i| self.captures.get(i))
            .and_then(|group| group.as_deref())
    }

    /// Byte offset just past the match.
    pub fn end(&self) -> usize {
        self.index + self.full_match.len()
    }
}
