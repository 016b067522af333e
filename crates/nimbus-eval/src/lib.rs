//! Nimbus configuration evaluator.
//!
//! Walks the expression tree produced by `nimbus-parser`, dispatching
//! special forms (`if`, `and`, `or`, `let`) and builtin function calls,
//! threading lexically scoped variable bindings through `let`.
//!
//! Each [`EvalContext`] is independently constructed with the full
//! builtin registry and empty variables; contexts never share mutable
//! state, so concurrent host applications use one context per
//! evaluation.

mod builtins;
mod context;
mod error;
mod evaluator;

pub use context::{BuiltinFn, EvalContext};
pub use error::{EvalError, EvalResult};
