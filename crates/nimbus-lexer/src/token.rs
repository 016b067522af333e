//! Token types for the Nimbus lexer.
//!
//! Defines [`TokenKind`] covering every lexeme in the configuration
//! language and [`Token`], which pairs a kind with a source [`Span`].

use nimbus_types::Span;
use std::fmt;

/// A single token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Source location.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Every token kind in the configuration language.
///
/// There are no reserved words: `if`, `let`, `env` and friends reach the
/// parser as plain [`TokenKind::Symbol`]s and gain meaning only during
/// evaluation. `true` and `false` are the sole bare words the lexer
/// classifies specially.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Double-quoted string literal; carries the unescaped payload.
    Str(String),
    /// Integer or decimal literal, optional leading `-`; carries the
    /// lexeme text verbatim.
    Number(String),
    /// Bare `true` / `false`.
    Bool(bool),
    /// Any other contiguous non-whitespace, non-paren run: identifiers
    /// and operator names like `+`, `>=`, `env?`.
    Symbol(String),
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Classify a bare word: boolean literal, number literal, or symbol.
    pub fn classify(word: &str) -> TokenKind {
        match word {
            "true" => TokenKind::Bool(true),
            "false" => TokenKind::Bool(false),
            _ if is_number_lexeme(word) => TokenKind::Number(word.to_string()),
            _ => TokenKind::Symbol(word.to_string()),
        }
    }
}

/// Whether a word is a numeric literal: optional leading `-`, one or
/// more digits, optionally one `.` followed by one or more digits.
fn is_number_lexeme(word: &str) -> bool {
    let digits = word.strip_prefix('-').unwrap_or(word);
    if digits.is_empty() {
        return false;
    }
    let mut parts = digits.splitn(2, '.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next();
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match frac_part {
        None => true,
        Some(frac) => !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()),
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::Str(s) => write!(f, "\"{s}\""),
            TokenKind::Number(n) => f.write_str(n),
            TokenKind::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            TokenKind::Symbol(s) => f.write_str(s),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}
