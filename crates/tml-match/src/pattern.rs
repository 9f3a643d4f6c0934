//! Reusable patterns.
//!
//! A [`Pattern`] owns its tree, so it can be parsed once from TML source and
//! matched against many candidates.

use crate::{compare, find_all, find_first, find_iter};
use tml_parser::{Node, ParseError, Parser};

/// A tree to match candidates against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    root: Node,
}

impl Pattern {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Parse a pattern from TML source; its root list is the pattern.
    ///
    /// ```text
    /// Pattern::parse("[key \\?]")  matches  [key 1], [key [a b]]
    /// ```
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        Parser::parse(source).map(Self::new)
    }

    /// A single-leaf pattern.
    pub fn leaf(text: impl Into<String>) -> Self {
        Self::new(Node::leaf(text))
    }

    pub fn as_node(&self) -> &Node {
        &self.root
    }

    pub fn into_node(self) -> Node {
        self.root
    }

    pub fn matches(&self, candidate: &Node) -> bool {
        compare(candidate, &self.root)
    }

    pub fn find_first<'a>(&self, node: &'a Node) -> Option<&'a Node> {
        find_first(node, &self.root)
    }

    pub fn find_all<'a>(&self, node: &'a Node) -> Vec<&'a Node> {
        find_all(node, &self.root)
    }

    pub fn find_iter<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Node> + 'a {
        find_iter(node, &self.root)
    }
}

impl From<Node> for Pattern {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tml_parser::FormatError;

    fn doc() -> Node {
        Parser::parse("[[name tml] [version 1] [tag parser] [tag format]]").unwrap()
    }

    #[test]
    fn test_parse_pattern() {
        let pattern = Pattern::parse("[\\? \\*]").unwrap();
        assert_eq!(
            pattern.as_node(),
            &Node::list([Node::leaf("\\?"), Node::leaf("\\*")])
        );
    }

    #[test]
    fn test_parse_pattern_error() {
        let err = Pattern::parse("tag").unwrap_err();
        assert_eq!(err.reason, FormatError::ExpectedOpenBracket);
    }

    #[test]
    fn test_matches() {
        let pattern = Pattern::parse("[version \\?]").unwrap();
        assert!(pattern.matches(&Parser::parse("[version 2]").unwrap()));
        assert!(!pattern.matches(&Parser::parse("[version]").unwrap()));
    }

    #[test]
    fn test_find_first_by_key() {
        let pattern = Pattern::parse("[version \\?]").unwrap();
        let doc = doc();
        let found = pattern.find_first(&doc).unwrap();
        assert_eq!(found.get(1), Some(&Node::leaf("1")));
    }

    #[test]
    fn test_find_all_by_key() {
        let pattern = Pattern::parse("[tag \\*]").unwrap();
        let doc = doc();
        let tags: Vec<_> = pattern
            .find_all(&doc)
            .into_iter()
            .filter_map(|tag| tag.get(1).and_then(Node::as_leaf))
            .collect();
        assert_eq!(tags, vec!["parser", "format"]);
    }

    #[test]
    fn test_find_iter_count() {
        let pattern = Pattern::parse("[\\? \\?]").unwrap();
        let doc = doc();
        assert_eq!(pattern.find_iter(&doc).count(), 4);
    }

    #[test]
    fn test_leaf_pattern() {
        let node = Node::list([Node::leaf("a"), Node::leaf("b"), Node::leaf("a")]);
        assert_eq!(Pattern::leaf("a").find_all(&node).len(), 2);
        assert_eq!(Pattern::from(Node::leaf("b")).into_node(), Node::leaf("b"));
    }
}
