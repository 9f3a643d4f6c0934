//! TML Writer
//!
//! Renders a [`Node`] tree back into text. All styles join siblings with a
//! single space and differ only in where brackets go and whether leaf text
//! is re-escaped.
//!
//! ```text
//! [a [b c] d]  → to_string()         → a [b c] d
//!              → to_markup_string()  → [a [b c] d]
//!              → to_flat_string()    → a b c d
//! ```
//!
//! Only [`Style::Escaped`] re-escapes leaf text. The other styles write leaf
//! text as-is, so a leaf holding whitespace, a bracket, or a bar does not
//! survive a parse of their output.

pub mod writer;

use tml_parser::Node;

pub use writer::Writer;

/// Output style for rendering a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Nested lists bracketed, the outermost list bare.
    #[default]
    Plain,
    /// Every list bracketed.
    Markup,
    /// No brackets at all.
    Flat,
    /// Every list bracketed and leaf text escaped: parseable TML.
    Escaped,
}

impl Style {
    /// Whether a list at `depth` (the rendered node is depth 0) is bracketed.
    pub fn brackets(self, depth: usize) -> bool {
        match self {
            Style::Plain => depth > 0,
            Style::Markup | Style::Escaped => true,
            Style::Flat => false,
        }
    }

    pub fn escapes(self) -> bool {
        matches!(self, Style::Escaped)
    }
}

/// Render a tree in the given style.
pub fn render(node: &Node, style: Style) -> String {
    let mut writer = Writer::new(style);
    writer.write_node(node);
    writer.finish()
}

/// Render with the outermost list unbracketed.
pub fn to_string(node: &Node) -> String {
    render(node, Style::Plain)
}

/// Render with every list bracketed.
pub fn to_markup_string(node: &Node) -> String {
    render(node, Style::Markup)
}

/// Render all leaves space-separated, without any brackets.
pub fn to_flat_string(node: &Node) -> String {
    render(node, Style::Flat)
}

/// Render as TML source that parses back to the same tree.
///
/// Exact unless a leaf is empty or holds text [`escape_text`] cannot
/// represent: a backslash before `s`, `t`, `n` or `r`, a form feed, a
/// vertical tab, or one of U+E000 to U+E002.
///
/// [`escape_text`]: tml_lexer::escape_text
pub fn to_escaped_string(node: &Node) -> String {
    render(node, Style::Escaped)
}
