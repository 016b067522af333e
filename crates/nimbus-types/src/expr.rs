//! The Nimbus expression tree.
//!
//! The configuration language is homoiconic: [`Expr`] is both the AST
//! the parser produces and the runtime value the evaluator returns. An
//! [`Atom`] is a scalar holding one immutable textual payload with
//! coercion views; a list is an ordered sequence of expressions and
//! doubles as the runtime list value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar expression node: one immutable textual payload.
///
/// Every scalar in the language — strings, numbers, booleans, symbols —
/// is stored as text. The coercion accessors are total: callers that
/// need a parse failure to be an error use the checked helpers in the
/// evaluator instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Atom(String);

impl Atom {
    /// Create an atom from its textual payload.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The textual payload (identity coercion).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Integer view. Payloads that do not parse as an integer coerce
    /// to `0`.
    pub fn as_int(&self) -> i64 {
        self.0.parse().unwrap_or(0)
    }

    /// Floating-point view. Payloads that do not parse coerce to `0.0`.
    pub fn as_float(&self) -> f64 {
        self.0.parse().unwrap_or(0.0)
    }

    /// Boolean view. Only the literal `"true"` is truthy; `"false"` and
    /// every other payload are falsey.
    pub fn as_bool(&self) -> bool {
        self.0 == "true"
    }

    /// Whether the payload is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An expression: a scalar [`Atom`], a bare-word symbol, or an ordered
/// list of sub-expressions.
///
/// `Atom` and `Symbol` carry the same payload type but evaluate
/// differently: an atom (quoted string, number, boolean) is always
/// self-evaluating, while a symbol resolves to a bound value when its
/// text names a variable. Quoting is how a configuration writes the
/// literal text `region` next to a variable named `region`.
///
/// Serializes untagged: scalars become JSON strings, lists become JSON
/// arrays, so a fully evaluated tree is directly consumable by the
/// configuration loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expr {
    Atom(Atom),
    Symbol(Atom),
    List(Vec<Expr>),
}

impl Expr {
    /// Atom from arbitrary text.
    pub fn atom(text: impl Into<String>) -> Self {
        Expr::Atom(Atom::new(text))
    }

    /// Symbol from a bare word.
    pub fn symbol(text: impl Into<String>) -> Self {
        Expr::Symbol(Atom::new(text))
    }

    /// Atom rendering an integer.
    pub fn int(n: i64) -> Self {
        Expr::atom(n.to_string())
    }

    /// Atom rendering a boolean (`"true"` / `"false"`).
    pub fn boolean(b: bool) -> Self {
        Expr::atom(if b { "true" } else { "false" })
    }

    /// List from already-built items.
    pub fn list(items: Vec<Expr>) -> Self {
        Expr::List(items)
    }

    /// The empty atom — the unit-like value returned by forms with
    /// nothing to say (e.g. `if` without an else branch).
    pub fn empty() -> Self {
        Expr::atom("")
    }

    /// Borrow the scalar payload — atoms and symbols both carry one.
    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Expr::Atom(a) | Expr::Symbol(a) => Some(a),
            Expr::List(_) => None,
        }
    }

    /// Borrow the list items, if this is a list.
    pub fn as_list(&self) -> Option<&[Expr]> {
        match self {
            Expr::List(items) => Some(items),
            _ => None,
        }
    }

    /// Whether this expression is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Expr::List(_))
    }

    /// The string form used by `concat`, `join`, `format` and friends:
    /// an atom's payload, or a parenthesized space-separated rendering
    /// for lists.
    pub fn display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Atom(a) | Expr::Symbol(a) => a.fmt(f),
            Expr::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    item.fmt(f)?;
                }
                f.write_str(")")
            }
        }
    }
}
