//! TML: a minimal bracketed tree markup.
//!
//! One entry point for the whole pipeline:
//!
//! ```text
//! text → parse() → Node → to_string() / to_markup_string() → text
//!                       → compare() / find_first() / find_all()
//! ```
//!
//! # Example
//!
//! ```
//! let tree = tml::parse("[a [b c] d]").unwrap();
//! assert_eq!(tml::to_markup_string(&tree), "[a [b c] d]");
//!
//! let pattern = tml::parse("[b \\*]").unwrap();
//! assert!(tml::find_first(&tree, &pattern).is_some());
//! ```

pub use tml_lexer::{escape_text, ScanOptions};
pub use tml_match::{compare, find_all, find_first, find_iter, Pattern, ANY_WILDCARD, REST_WILDCARD};
pub use tml_parser::{FormatError, Node, ParseError, ParseOptions};
pub use tml_writer::{
    render, to_escaped_string, to_flat_string, to_markup_string, to_string, Style,
};

/// Parse TML source into its root list.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    tml_parser::Parser::parse(source)
}

/// Parse TML source with the given options.
pub fn parse_with(source: &str, options: &ParseOptions) -> Result<Node, ParseError> {
    tml_parser::Parser::parse_with(source, options)
}

/// Get the library version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
