//! Runtime error types for the Nimbus evaluator.

use thiserror::Error;

/// Evaluation error — unknown operators, arity and argument-type
/// failures, out-of-range indices, unbound variables.
///
/// Syntax problems never reach this type; they are reported by the
/// lexer and parser as `nimbus_types::SyntaxError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The operator of a list form is not a registered function.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    /// A builtin was called with the wrong number of arguments.
    #[error("{function}: expected {expected} argument(s), got {got}")]
    WrongArity {
        function: &'static str,
        expected: &'static str,
        got: usize,
    },

    /// An argument could not be coerced to the required type, an index
    /// was out of range, or a pattern failed to compile.
    #[error("{function}: {message}")]
    InvalidArgument {
        function: &'static str,
        message: String,
    },

    /// `var` read a name that was never set.
    #[error("undefined variable '{0}'")]
    UndefinedVariable(String),

    /// A special form's shape is wrong (e.g. `let` without bindings).
    #[error("malformed form: {0}")]
    MalformedForm(String),
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
