//! Syntax errors shared by the lexer and parser.

use crate::Span;
use thiserror::Error;

/// Errors raised while tokenizing or parsing configuration source.
///
/// Every variant carries the 1-based source position of the offending
/// text so CLI output can point operators at the right line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A string literal ran to end of input without a closing quote.
    #[error("{span}: unterminated string literal")]
    UnterminatedString { span: Span },

    /// A `\x` escape the language does not define.
    #[error("{span}: invalid escape sequence '\\{found}'")]
    InvalidEscape { span: Span, found: char },

    /// A `)` with no matching `(`.
    #[error("{span}: unexpected ')' with no open list")]
    UnmatchedClose { span: Span },

    /// Input ended while a list was still open.
    #[error("unexpected end of input: '(' opened at {open} is never closed")]
    UnexpectedEof { open: Span },

    /// Expression nesting exceeded the parser's depth limit.
    #[error("{span}: expressions nested deeper than {limit} levels")]
    NestingTooDeep { span: Span, limit: usize },

    /// Source text continued after the single expression `parse` expects.
    #[error("{span}: trailing content after expression")]
    TrailingContent { span: Span },

    /// The source contained no expression at all.
    #[error("empty input: expected an expression")]
    EmptyInput,
}

/// Result alias for tokenizing and parsing.
pub type SyntaxResult<T> = Result<T, SyntaxError>;
