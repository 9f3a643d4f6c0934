//! Document parser for TML.
//!
//! Parses the token stream from `tml-lexer` into a [`Node`] tree using
//! recursive descent over a single forward cursor.
//!
//! A divider splits the list it appears in: everything before the first `|`
//! becomes the first segment, and each following run up to the next `|` or
//! the closing `]` becomes another segment.
//!
//! ```text
//! [a b | c d | e]  →  [[a b] [c d] [e]]
//! ```

use crate::ast::Node;
use crate::{FormatError, ParseError};
use tml_lexer::{ScanOptions, Scanner, Span, Token, TokenKind};

/// Default bound on list nesting.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Options controlling parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub scan: ScanOptions,
    /// Deepest list nesting accepted, counting the root as 1.
    /// `None` disables the check, and deeply nested input can then overflow
    /// the stack.
    pub max_depth: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            scan: ScanOptions::default(),
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl ParseOptions {
    pub fn with_line_comments(mut self, enabled: bool) -> Self {
        self.scan.line_comments = enabled;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// How a list body ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListEnd {
    Close,
    Divider,
}

/// TML document parser.
///
/// Converts a flat token stream into a tree. The cursor only moves forward.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    max_depth: Option<usize>,
}

impl Parser {
    /// Create a new parser for the given tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }

    /// Parse source text into its root list.
    pub fn parse(source: &str) -> Result<Node, ParseError> {
        Self::parse_with(source, &ParseOptions::default())
    }

    /// Parse source text with the given options.
    pub fn parse_with(source: &str, options: &ParseOptions) -> Result<Node, ParseError> {
        let tokens = Scanner::tokenize_with(source, options.scan);
        tracing::trace!(tokens = tokens.len(), "scanned TML source");

        let mut parser = Parser::new(tokens);
        parser.max_depth = options.max_depth;
        parser.parse_root().inspect_err(|e| {
            tracing::debug!(
                reason = %e.reason,
                line = e.line,
                column = e.column,
                "rejected TML source"
            );
        })
    }

    /// Parse `[ ... ]` followed by end of input.
    pub fn parse_root(&mut self) -> Result<Node, ParseError> {
        match self.peek().kind {
            TokenKind::Open => self.advance(),
            TokenKind::Eof => return Err(self.error(FormatError::EmptyInput)),
            _ => return Err(self.error(FormatError::ExpectedOpenBracket)),
        }

        let root = self.parse_nested()?;

        if !self.is_at_end() {
            return Err(self.error(FormatError::TrailingContent));
        }

        Ok(root)
    }

    /// Parse a list whose `[` has just been consumed, through its `]`.
    fn parse_nested(&mut self) -> Result<Node, ParseError> {
        self.depth += 1;
        if let Some(limit) = self.max_depth {
            if self.depth > limit {
                return Err(self.error(FormatError::TooDeep { limit }));
            }
        }

        let (children, _) = self.parse_list(false)?;
        self.depth -= 1;
        Ok(Node::List(children))
    }

    /// Parse a list body up to its `]`, or up to a `|` when `end_at_divider`
    /// is set. The terminating token is consumed either way.
    fn parse_list(&mut self, end_at_divider: bool) -> Result<(Vec<Node>, ListEnd), ParseError> {
        let mut children = Vec::new();

        loop {
            let token = self.peek().clone();

            match token.kind {
                TokenKind::Open => {
                    self.advance();
                    children.push(self.parse_nested()?);
                }

                TokenKind::Divider if end_at_divider => {
                    self.advance();
                    return Ok((children, ListEnd::Divider));
                }

                TokenKind::Divider => {
                    self.advance();
                    let mut segments = vec![Node::List(children)];
                    loop {
                        let (segment, end) = self.parse_list(true)?;
                        segments.push(Node::List(segment));
                        if end == ListEnd::Close {
                            return Ok((segments, ListEnd::Close));
                        }
                    }
                }

                TokenKind::Close => {
                    self.advance();
                    return Ok((children, ListEnd::Close));
                }

                TokenKind::Text(text) => {
                    self.advance();
                    children.push(Node::Leaf(text));
                }

                TokenKind::Eof => {
                    return Err(Self::error_at(FormatError::UnclosedList, token.span));
                }
            }
        }
    }

    // =========================================================================
    // Token navigation helpers
    // =========================================================================

    fn peek(&self) -> &Token {
        static EOF: std::sync::LazyLock<Token> =
            std::sync::LazyLock::new(|| Token::new(TokenKind::Eof, Span::default()));
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    fn error(&self, reason: FormatError) -> ParseError {
        Self::error_at(reason, self.peek().span)
    }

    fn error_at(reason: FormatError, span: Span) -> ParseError {
        ParseError {
            reason,
            line: span.line,
            column: span.column,
        }
    }
}
