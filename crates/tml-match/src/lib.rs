//! TML Matcher
//!
//! Compares trees against patterns and searches a node's children.
//!
//! A pattern is an ordinary tree in which two leaf values are special:
//!
//! - `\?` matches any single node, leaf or list.
//! - `\*` matches whatever children remain in the enclosing list,
//!   including none.
//!
//! ```text
//! compare([x y z], [\? \*])  → true
//! compare([x],     [\? \?])  → false
//! ```
//!
//! Search only looks at immediate children; it never descends further.

pub mod pattern;

use tml_parser::Node;

pub use pattern::Pattern;

/// Pattern leaf matching any one node.
pub const ANY_WILDCARD: &str = "\\?";

/// Pattern leaf matching the rest of a list.
pub const REST_WILDCARD: &str = "\\*";

fn is_leaf_text(node: &Node, text: &str) -> bool {
    node.as_leaf() == Some(text)
}

/// Whether `candidate` matches `pattern`.
pub fn compare(candidate: &Node, pattern: &Node) -> bool {
    if is_leaf_text(pattern, ANY_WILDCARD) {
        return true;
    }

    match (candidate, pattern) {
        (Node::Leaf(text), Node::Leaf(expected)) => text == expected,
        (Node::Leaf(_), Node::List(_)) | (Node::List(_), Node::Leaf(_)) => false,
        (Node::List(children), Node::List(expected)) => compare_children(children, expected),
    }
}

fn compare_children(children: &[Node], expected: &[Node]) -> bool {
    for (i, child) in children.iter().enumerate() {
        let Some(slot) = expected.get(i) else {
            return false;
        };
        if is_leaf_text(slot, REST_WILDCARD) {
            return true;
        }
        if !compare(child, slot) {
            return false;
        }
    }

    match expected.get(children.len()) {
        None => true,
        Some(slot) => is_leaf_text(slot, REST_WILDCARD),
    }
}

/// Children of `node` matching `pattern`, in order.
pub fn find_iter<'a>(node: &'a Node, pattern: &'a Node) -> impl Iterator<Item = &'a Node> + 'a {
    node.iter().filter(move |child| compare(child, pattern))
}

/// The first child of `node` matching `pattern`.
pub fn find_first<'a>(node: &'a Node, pattern: &Node) -> Option<&'a Node> {
    node.iter().find(|child| compare(child, pattern))
}

/// Every child of `node` matching `pattern`, in order.
pub fn find_all<'a>(node: &'a Node, pattern: &Node) -> Vec<&'a Node> {
    node.iter().filter(|child| compare(child, pattern)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn leaf(text: &str) -> Node {
        Node::leaf(text)
    }

    fn list<const N: usize>(children: [Node; N]) -> Node {
        Node::list(children)
    }

    fn any() -> Node {
        leaf(ANY_WILDCARD)
    }

    fn rest() -> Node {
        leaf(REST_WILDCARD)
    }

    // =========================================================================
    // Exact comparison
    // =========================================================================

    #[test]
    fn test_equal_leaves() {
        assert!(compare(&leaf("a"), &leaf("a")));
        assert!(!compare(&leaf("a"), &leaf("b")));
    }

    #[test]
    fn test_equal_trees() {
        let tree = list([leaf("a"), list([leaf("b")])]);
        assert!(compare(&tree, &tree.clone()));
    }

    #[test]
    fn test_leaf_against_list() {
        assert!(!compare(&leaf("a"), &list([leaf("a")])));
        assert!(!compare(&list([leaf("a")]), &leaf("a")));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(!compare(&list([leaf("a")]), &list([leaf("a"), leaf("b")])));
        assert!(!compare(&list([leaf("a"), leaf("b")]), &list([leaf("a")])));
    }

    #[test]
    fn test_empty_lists() {
        assert!(compare(&list([]), &list([])));
        assert!(!compare(&list([leaf("a")]), &list([])));
    }

    #[test]
    fn test_nested_mismatch() {
        let tree = list([leaf("a"), list([leaf("b")])]);
        assert!(!compare(&tree, &list([leaf("a"), list([leaf("c")])])));
    }

    // =========================================================================
    // Wildcards
    // =========================================================================

    #[test]
    fn test_any_matches_each_element() {
        assert!(compare(&list([leaf("x"), leaf("y")]), &list([any(), any()])));
    }

    #[test]
    fn test_any_matches_list() {
        assert!(compare(&list([leaf("x")]), &any()));
        assert!(compare(&list([list([leaf("x")]), leaf("y")]), &list([any(), leaf("y")])));
    }

    #[test]
    fn test_any_needs_an_element() {
        assert!(!compare(&list([leaf("x")]), &list([any(), any()])));
    }

    #[test]
    fn test_rest_matches_remaining() {
        assert!(compare(
            &list([leaf("x"), leaf("y"), leaf("z")]),
            &list([any(), rest()])
        ));
    }

    #[test]
    fn test_rest_matches_nothing() {
        assert!(compare(&list([leaf("x")]), &list([leaf("x"), rest()])));
        assert!(compare(&list([]), &list([rest()])));
    }

    #[test]
    fn test_rest_stops_comparison() {
        // anything after `\*` is never looked at
        assert!(compare(
            &list([leaf("a"), leaf("b")]),
            &list([leaf("a"), rest(), leaf("never")])
        ));
    }

    #[test]
    fn test_rest_only_checked_at_next_slot() {
        assert!(!compare(&list([leaf("a")]), &list([leaf("a"), any(), rest()])));
    }

    #[test]
    fn test_rest_as_whole_pattern_is_literal() {
        assert!(compare(&leaf(REST_WILDCARD), &rest()));
        assert!(!compare(&leaf("a"), &rest()));
        assert!(!compare(&list([leaf("a")]), &rest()));
    }

    #[test]
    fn test_wildcards_nested() {
        let tree = list([leaf("div"), list([leaf("class"), leaf("main")]), leaf("text")]);
        let pattern = list([leaf("div"), list([leaf("class"), any()]), rest()]);
        assert!(compare(&tree, &pattern));
    }

    // =========================================================================
    // Search
    // =========================================================================

    #[test]
    fn test_find_all_in_order() {
        let node = list([leaf("a"), leaf("b"), leaf("a")]);
        assert_eq!(find_all(&node, &leaf("a")), vec![&leaf("a"), &leaf("a")]);
    }

    #[test]
    fn test_find_all_none() {
        let node = list([leaf("a")]);
        assert!(find_all(&node, &leaf("z")).is_empty());
    }

    #[test]
    fn test_find_first() {
        let node = list([
            leaf("a"),
            list([leaf("key"), leaf("1")]),
            list([leaf("key"), leaf("2")]),
        ]);
        let pattern = list([leaf("key"), any()]);
        assert_eq!(
            find_first(&node, &pattern),
            Some(&list([leaf("key"), leaf("1")]))
        );
    }

    #[test]
    fn test_find_first_missing() {
        let node = list([leaf("a"), leaf("b")]);
        assert_eq!(find_first(&node, &leaf("c")), None);
    }

    #[test]
    fn test_search_is_shallow() {
        let node = list([list([leaf("a")])]);
        assert_eq!(find_first(&node, &leaf("a")), None);
    }

    #[test]
    fn test_search_in_leaf() {
        assert_eq!(find_first(&leaf("a"), &leaf("a")), None);
        assert!(find_all(&leaf("a"), &any()).is_empty());
    }

    #[test]
    fn test_find_iter_is_lazy_and_ordered() {
        let node = list([leaf("a"), leaf("b"), leaf("a"), leaf("c")]);
        let any = any();
        let mut matches = find_iter(&node, &any);
        assert_eq!(matches.next(), Some(&leaf("a")));
        assert_eq!(matches.next(), Some(&leaf("b")));
        assert_eq!(matches.count(), 2);
    }
}
