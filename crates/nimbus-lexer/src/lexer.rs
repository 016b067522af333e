//! Core Nimbus lexer — converts source text to a token stream.
//!
//! The grammar is deliberately small:
//! - `(` and `)` delimit lists
//! - double-quoted strings with `\"`, `\\`, `\n`, `\t`, `\r` escapes
//! - `;` starts a comment that runs to end of line
//! - every other contiguous run of non-whitespace, non-paren bytes is a
//!   bare word, classified as boolean, number, or symbol
//!
//! Whitespace (including newlines) separates tokens and is never
//! emitted. The lexer fails fast on the first error: configuration
//! loading has no use for recovery.

use nimbus_types::{Span, SyntaxError, SyntaxResult};

use crate::token::{Token, TokenKind};

/// Whether a byte continues a multibyte UTF-8 sequence.
fn is_utf8_continuation(ch: u8) -> bool {
    ch & 0xC0 == 0x80
}

/// The Nimbus lexer.
///
/// Converts UTF-8 source text into a vector of [`Token`]s ending with
/// [`TokenKind::Eof`].
pub struct Lexer<'src> {
    /// The full source text as bytes.
    source: &'src [u8],
    /// Current byte offset into `source`.
    pos: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    col: u32,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Lex the entire source into a token stream.
    pub fn lex(mut self) -> SyntaxResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }

    // ── Character-level helpers ──────────────────────────────────────

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let ch = self.source.get(self.pos).copied()?;
        self.pos += 1;
        if ch == b'\n' {
            self.line += 1;
            self.col = 1;
        } else if !is_utf8_continuation(ch) {
            // Columns count characters: continuation bytes of a
            // multibyte sequence stay in the same column.
            self.col += 1;
        }
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn span_from(&self, start_line: u32, start_col: u32) -> Span {
        Span::new(
            start_line,
            start_col,
            self.line,
            self.col.saturating_sub(1).max(1),
        )
    }

    /// Whether a byte ends a bare word.
    fn is_delimiter(ch: u8) -> bool {
        ch.is_ascii_whitespace() || matches!(ch, b'(' | b')' | b'"' | b';')
    }

    // ── Whitespace & comments ────────────────────────────────────────

    /// Skip whitespace and `;` comments until the next token byte.
    fn skip_trivia(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_whitespace() {
                self.advance();
            } else if ch == b';' {
                // Comment: consume to end of line (the newline is trivia too)
                while let Some(c) = self.peek() {
                    if c == b'\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    // ── Scanning ─────────────────────────────────────────────────────

    /// Scan one token.
    fn scan(&mut self) -> SyntaxResult<Token> {
        self.skip_trivia();

        let start_line = self.line;
        let start_col = self.col;

        if self.at_end() {
            return Ok(Token::new(TokenKind::Eof, Span::point(start_line, start_col)));
        }

        match self.advance() {
            Some(b'(') => Ok(Token::new(
                TokenKind::LParen,
                self.span_from(start_line, start_col),
            )),
            Some(b')') => Ok(Token::new(
                TokenKind::RParen,
                self.span_from(start_line, start_col),
            )),
            Some(b'"') => self.scan_string(start_line, start_col),
            Some(_) => Ok(self.scan_word(start_line, start_col)),
            None => Ok(Token::new(TokenKind::Eof, Span::point(start_line, start_col))),
        }
    }

    /// Scan a string literal after the opening `"`.
    fn scan_string(&mut self, start_line: u32, start_col: u32) -> SyntaxResult<Token> {
        let mut buf: Vec<u8> = Vec::new();

        loop {
            match self.advance() {
                None => {
                    return Err(SyntaxError::UnterminatedString {
                        span: Span::point(start_line, start_col),
                    });
                }
                Some(b'"') => {
                    let payload = String::from_utf8_lossy(&buf).into_owned();
                    return Ok(Token::new(
                        TokenKind::Str(payload),
                        self.span_from(start_line, start_col),
                    ));
                }
                Some(b'\\') => {
                    let esc_line = self.line;
                    let esc_col = self.col.saturating_sub(1);
                    match self.advance() {
                        Some(b'"') => buf.push(b'"'),
                        Some(b'\\') => buf.push(b'\\'),
                        Some(b'n') => buf.push(b'\n'),
                        Some(b't') => buf.push(b'\t'),
                        Some(b'r') => buf.push(b'\r'),
                        Some(other) => {
                            return Err(SyntaxError::InvalidEscape {
                                span: Span::point(esc_line, esc_col),
                                found: other as char,
                            });
                        }
                        None => {
                            return Err(SyntaxError::UnterminatedString {
                                span: Span::point(start_line, start_col),
                            });
                        }
                    }
                }
                Some(ch) => buf.push(ch),
            }
        }
    }

    /// Scan a bare word (the first byte is already consumed) and
    /// classify it as boolean, number, or symbol.
    fn scan_word(&mut self, start_line: u32, start_col: u32) -> Token {
        let start = self.pos - 1;
        while let Some(ch) = self.peek() {
            if Self::is_delimiter(ch) {
                break;
            }
            self.advance();
        }
        let word = String::from_utf8_lossy(&self.source[start..self.pos]);
        Token::new(
            TokenKind::classify(&word),
            self.span_from(start_line, start_col),
        )
    }
}
