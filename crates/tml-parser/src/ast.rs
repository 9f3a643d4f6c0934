//! Tree model for TML documents.
//!
//! A parsed tree is owned top-down: every list exclusively owns its
//! children, and nothing points back to a parent.

/// A node in a TML tree.
///
/// With the `serde` feature a node (de)serializes untagged, so a tree maps
/// onto nested arrays of strings: `["a", ["b", "c"]]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Node {
    /// Terminal text, with escapes already resolved. May be empty when
    /// built by hand; the parser never produces an empty leaf.
    Leaf(String),

    /// Ordered child nodes.
    List(Vec<Node>),
}

impl Node {
    pub fn leaf(text: impl Into<String>) -> Self {
        Node::Leaf(text.into())
    }

    pub fn list(children: impl IntoIterator<Item = Node>) -> Self {
        Node::List(children.into_iter().collect())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    /// The text of a leaf, or `None` for a list.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Node::Leaf(text) => Some(text),
            Node::List(_) => None,
        }
    }

    /// The children of a list. A leaf has none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::List(children) => children,
        }
    }

    /// Number of children (zero for a leaf).
    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    /// Whether this is a list with at least one child.
    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.children().get(index)
    }

    pub fn first_child(&self) -> Option<&Node> {
        self.children().first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.children().iter()
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Leaf(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Leaf(text)
    }
}

impl From<Vec<Node>> for Node {
    fn from(children: Vec<Node>) -> Self {
        Node::List(children)
    }
}

impl FromIterator<Node> for Node {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Node::List(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
