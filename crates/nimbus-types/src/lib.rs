//! Shared types for the Nimbus configuration language.
//!
//! This crate defines the expression tree ([`Expr`]/[`Atom`]), source
//! spans, and the syntax-error type used by the lexer and parser. The
//! language is homoiconic: `Expr` is both the AST node type and the
//! runtime value type.

mod error;
mod expr;
mod span;

pub use error::{SyntaxError, SyntaxResult};
pub use expr::{Atom, Expr};
pub use span::Span;
