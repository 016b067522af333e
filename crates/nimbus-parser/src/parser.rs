//! Recursive-descent parser for the Nimbus configuration language.
//!
//! Grammar:
//!
//! ```text
//! expr := atom | list
//! list := '(' expr* ')'
//! atom := STRING | NUMBER | BOOLEAN | SYMBOL
//! ```
//!
//! The parser is purely syntactic: it performs no evaluation and no
//! variable resolution. String, number, and boolean tokens become
//! self-evaluating [`Expr::Atom`]s; bare words become [`Expr::Symbol`]s
//! and the evaluator gives them their meaning.

use nimbus_lexer::{Lexer, Token, TokenKind};
use nimbus_types::{Expr, Span, SyntaxError, SyntaxResult};

/// Maximum list nesting depth.
///
/// The grammar itself is unbounded; this guard turns adversarially deep
/// input into a syntax error instead of a stack overflow.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parse a single top-level expression from source text.
///
/// Fails if the source is empty or if tokens remain after the first
/// expression.
pub fn parse(source: &str) -> SyntaxResult<Expr> {
    let tokens = Lexer::new(source).lex()?;
    let mut parser = Parser::new(tokens);
    if parser.peek().kind == TokenKind::Eof {
        return Err(SyntaxError::EmptyInput);
    }
    let expr = parser.parse_expr(0)?;
    let next = parser.peek();
    if next.kind != TokenKind::Eof {
        return Err(SyntaxError::TrailingContent { span: next.span });
    }
    Ok(expr)
}

/// Parse every top-level expression from source text, in order.
///
/// An empty (or comment-only) source yields an empty vector.
pub fn parse_all(source: &str) -> SyntaxResult<Vec<Expr>> {
    let tokens = Lexer::new(source).lex()?;
    let mut parser = Parser::new(tokens);
    let mut exprs = Vec::new();
    while parser.peek().kind != TokenKind::Eof {
        exprs.push(parser.parse_expr(0)?);
    }
    Ok(exprs)
}

/// The Nimbus parser.
///
/// Consumes a token stream produced by the lexer and builds one
/// [`Expr`] per top-level form.
pub struct Parser {
    /// The token stream (ends with [`TokenKind::Eof`]).
    tokens: Vec<Token>,
    /// Current index into `tokens`.
    pos: usize,
}

impl Parser {
    /// Create a new parser from a token stream.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        // The cursor relies on a trailing Eof sentinel.
        if !matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)) {
            tokens.push(Token::new(TokenKind::Eof, Span::point(1, 1)));
        }
        Self { tokens, pos: 0 }
    }

    // ── Token cursor ─────────────────────────────────────────────────

    /// Returns the current token without advancing.
    pub(crate) fn peek(&self) -> &Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .expect("token stream always ends with Eof")
    }

    /// Advance the cursor by one and return the consumed token.
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    // ── Grammar productions ──────────────────────────────────────────

    /// Parse one expression starting at the current token.
    pub(crate) fn parse_expr(&mut self, depth: usize) -> SyntaxResult<Expr> {
        let token = self.advance();
        match token.kind {
            TokenKind::LParen => {
                if depth >= MAX_NESTING_DEPTH {
                    return Err(SyntaxError::NestingTooDeep {
                        span: token.span,
                        limit: MAX_NESTING_DEPTH,
                    });
                }
                self.parse_list(token, depth)
            }
            TokenKind::RParen => Err(SyntaxError::UnmatchedClose { span: token.span }),
            TokenKind::Str(s) => Ok(Expr::atom(s)),
            TokenKind::Number(n) => Ok(Expr::atom(n)),
            TokenKind::Bool(b) => Ok(Expr::boolean(b)),
            TokenKind::Symbol(s) => Ok(Expr::symbol(s)),
            TokenKind::Eof => Err(SyntaxError::EmptyInput),
        }
    }

    /// Parse the remainder of a list whose `(` was just consumed.
    fn parse_list(&mut self, open: Token, depth: usize) -> SyntaxResult<Expr> {
        let mut items = Vec::new();
        loop {
            match &self.peek().kind {
                TokenKind::RParen => {
                    self.advance();
                    return Ok(Expr::List(items));
                }
                TokenKind::Eof => {
                    return Err(SyntaxError::UnexpectedEof { open: open.span });
                }
                _ => items.push(self.parse_expr(depth + 1)?),
            }
        }
    }
}
