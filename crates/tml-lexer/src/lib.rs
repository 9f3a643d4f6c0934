//! TML Lexer
//!
//! Splits `.tml` source text into a flat stream of tokens: open bracket,
//! close bracket, divider, and text runs. Escape sequences are resolved
//! here, so text tokens carry their final leaf text.
//!
//! # Example
//!
//! ```
//! use tml_lexer::{Scanner, TokenKind};
//!
//! let tokens = Scanner::tokenize("[a]");
//! assert_eq!(tokens.len(), 4); // [ a ] EOF
//! assert_eq!(tokens[1].kind, TokenKind::Text("a".into()));
//! ```

pub mod escape;
pub mod scanner;
pub mod token;

pub use escape::{escape_text, resolve_escapes};
pub use scanner::{is_separator, ScanOptions, Scanner};
pub use token::{Span, Token, TokenKind};
