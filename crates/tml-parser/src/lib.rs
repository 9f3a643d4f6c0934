//! TML Parser
//!
//! Parses a token stream into a tree of [`Node`]s. A document is exactly one
//! bracketed root list; every node below it is either a leaf string or a
//! nested list. A divider (`|`) splits a list body into sibling segments.
//!
//! ```text
//! "[a [b c] | d]"  →  List[List[a, List[b, c]], List[d]]
//! ```

pub mod ast;
pub mod parser;

pub use ast::Node;
pub use parser::{ParseOptions, Parser};
pub use tml_lexer::ScanOptions;

/// Why a source text is not a well-formed TML document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("expected open bracket (empty TML text)")]
    EmptyInput,

    #[error("expected open bracket")]
    ExpectedOpenBracket,

    #[error("expected end of file after root node")]
    TrailingContent,

    #[error("expected close bracket before end of file")]
    UnclosedList,

    #[error("lists nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Parser error with position information.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Format error at line {line}, column {column}: {reason}")]
pub struct ParseError {
    pub reason: FormatError,
    pub line: usize,
    pub column: usize,
}
