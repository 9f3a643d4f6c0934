/// A position in source text, tracking line and column for error reporting.
///
/// Both are 1-based and counted in characters of the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Token classification for TML source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `[`
    Open,
    /// `]`
    Close,
    /// `|`
    Divider,

    /// A text run with every escape sequence already resolved.
    Text(String),

    // End of input
    Eof,
}

/// A token produced by the TML lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
