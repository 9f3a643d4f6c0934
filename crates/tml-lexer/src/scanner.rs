use crate::escape::{self, ESCAPE_CHAR};
use crate::token::{Span, Token, TokenKind};

/// Options controlling how source text is split into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanOptions {
    /// Treat an unescaped `||` as the start of a comment running to the end
    /// of the line. Off by default, where `||` is two dividers.
    pub line_comments: bool,
}

impl ScanOptions {
    pub fn with_line_comments(mut self, enabled: bool) -> Self {
        self.line_comments = enabled;
        self
    }
}

/// ASCII whitespace separates tokens: space, `\t`, `\n`, `\r`, form feed and
/// vertical tab. Other Unicode spaces are ordinary text.
pub fn is_separator(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0B'
}

/// TML source scanner.
///
/// Tokenizes TML source into a stream of tokens terminated by a single
/// `Eof`. Whitespace separates tokens, and `[`, `]`, `|` are tokens of
/// their own unless escaped with a backslash.
///
/// - `Vec<char>` source for index-based navigation
/// - Position tracking on every token
/// - Escapes resolved once per text run
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
    options: ScanOptions,
}

impl Scanner {
    /// Create a new scanner for the given source.
    pub fn new(source: &str) -> Self {
        Self::with_options(source, ScanOptions::default())
    }

    /// Create a scanner with specific options.
    pub fn with_options(source: &str, options: ScanOptions) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
            options,
        }
    }

    /// Tokenize the entire source into a vector of tokens.
    pub fn tokenize(source: &str) -> Vec<Token> {
        Self::tokenize_with(source, ScanOptions::default())
    }

    /// Tokenize the entire source with the given options.
    pub fn tokenize_with(source: &str, options: ScanOptions) -> Vec<Token> {
        let mut scanner = Scanner::with_options(source, options);
        scanner.scan_tokens();
        scanner.tokens
    }

    /// Scan all tokens from the source.
    fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.scan_token();
        }
        self.emit(TokenKind::Eof, self.span());
    }

    /// Scan the next token.
    fn scan_token(&mut self) {
        let ch = self.peek();

        match ch {
            '[' => self.single(TokenKind::Open),
            ']' => self.single(TokenKind::Close),

            // Comments
            '|' if self.options.line_comments && self.peek_next() == '|' => self.skip_comment(),

            '|' => self.single(TokenKind::Divider),

            c if is_separator(c) => self.advance(),

            _ => self.scan_text(),
        }
    }

    fn single(&mut self, kind: TokenKind) {
        let span = self.span();
        self.advance();
        self.emit(kind, span);
    }

    /// Scan a text run up to the next whitespace or structural character.
    fn scan_text(&mut self) {
        let span = self.span();
        let mut raw = String::new();

        while !self.is_at_end() {
            let ch = self.peek();

            if ch == ESCAPE_CHAR {
                if let Some(placeholder) = escape::placeholder_for(self.peek_next()) {
                    raw.push(placeholder);
                    self.advance();
                    self.advance();
                    continue;
                }
            }

            if is_separator(ch) || matches!(ch, '[' | ']' | '|') {
                break;
            }

            raw.push(ch);
            self.advance();
        }

        self.emit(TokenKind::Text(escape::resolve_escapes(&raw)), span);
    }

    /// Skip a `||` comment, leaving the line break for the whitespace rule.
    fn skip_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    // --- Helpers ---

    fn emit(&mut self, kind: TokenKind, span: Span) {
        self.tokens.push(Token::new(kind, span));
    }

    fn span(&self) -> Span {
        Span::new(self.line, self.column)
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.pos]
        }
    }

    fn peek_next(&self) -> char {
        self.chars.get(self.pos + 1).copied().unwrap_or('\0')
    }

    fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }
        if self.chars[self.pos] == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos += 1;
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}
