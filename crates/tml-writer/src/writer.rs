//! Recursive tree writer.
//!
//! Walks the tree depth-first, appending to one output buffer.

use crate::Style;
use tml_lexer::escape_text;
use tml_parser::Node;

/// Accumulates rendered text for one or more nodes.
pub struct Writer {
    style: Style,
    out: String,
}

impl Writer {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            out: String::new(),
        }
    }

    /// Append the rendering of `node`, treating it as the outermost list.
    pub fn write_node(&mut self, node: &Node) {
        self.write_at(node, 0);
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn write_at(&mut self, node: &Node, depth: usize) {
        match node {
            Node::Leaf(text) => self.write_leaf(text),
            Node::List(children) => {
                let bracketed = self.style.brackets(depth);
                if bracketed {
                    self.out.push('[');
                }
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        self.out.push(' ');
                    }
                    self.write_at(child, depth + 1);
                }
                if bracketed {
                    self.out.push(']');
                }
            }
        }
    }

    fn write_leaf(&mut self, text: &str) {
        if self.style.escapes() {
            self.out.push_str(&escape_text(text));
        } else {
            self.out.push_str(text);
        }
    }
}
