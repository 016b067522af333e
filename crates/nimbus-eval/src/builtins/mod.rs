//! The builtin function library.
//!
//! Each builtin is a pure function of its already-evaluated arguments
//! (plus ambient context: environment variables, clock, hostname,
//! filesystem) registered under its operator name. Modules mirror the
//! language's categories; `register_all` is called once per
//! [`EvalContext`](crate::EvalContext) construction so no global
//! registry exists.

mod collections;
mod compare;
mod encoding;
mod env;
mod logic;
mod math;
mod paths;
mod pattern;
mod predicates;
mod store;
mod strings;
mod system;

use crate::context::BuiltinFn;
use crate::error::{EvalError, EvalResult};
use nimbus_types::Expr;
use std::collections::BTreeMap;

/// Register every builtin into a fresh registry.
pub(crate) fn register_all(funcs: &mut BTreeMap<String, BuiltinFn>) {
    env::register(funcs);
    strings::register(funcs);
    math::register(funcs);
    compare::register(funcs);
    logic::register(funcs);
    predicates::register(funcs);
    collections::register(funcs);
    encoding::register(funcs);
    system::register(funcs);
    paths::register(funcs);
    store::register(funcs);
    pattern::register(funcs);
}

// ── Argument helpers ─────────────────────────────────────────────────
//
// Builtins fail with errors naming the function and the offending
// argument; these helpers keep those messages uniform.

/// Require exactly `n` arguments.
pub(crate) fn exact(function: &'static str, args: &[Expr], n: usize) -> EvalResult<()> {
    if args.len() == n {
        Ok(())
    } else {
        Err(EvalError::WrongArity {
            function,
            expected: match n {
                0 => "0",
                1 => "1",
                2 => "2",
                3 => "3",
                _ => "several",
            },
            got: args.len(),
        })
    }
}

/// Require an inclusive argument-count range.
pub(crate) fn between(
    function: &'static str,
    args: &[Expr],
    expected: &'static str,
    min: usize,
    max: usize,
) -> EvalResult<()> {
    if (min..=max).contains(&args.len()) {
        Ok(())
    } else {
        Err(EvalError::WrongArity {
            function,
            expected,
            got: args.len(),
        })
    }
}

/// Require at least `min` arguments.
pub(crate) fn at_least(
    function: &'static str,
    args: &[Expr],
    expected: &'static str,
    min: usize,
) -> EvalResult<()> {
    if args.len() >= min {
        Ok(())
    } else {
        Err(EvalError::WrongArity {
            function,
            expected,
            got: args.len(),
        })
    }
}

/// The string form of an argument (atom payload, or the parenthesized
/// rendering for lists).
pub(crate) fn string_form(expr: &Expr) -> String {
    expr.display_string()
}

/// Checked integer coercion: errors on lists and non-integer payloads.
pub(crate) fn int_arg(function: &'static str, expr: &Expr) -> EvalResult<i64> {
    let atom = expr.as_atom().ok_or_else(|| EvalError::InvalidArgument {
        function,
        message: format!("expected an integer, got the list '{expr}'"),
    })?;
    atom.as_str()
        .parse()
        .map_err(|_| EvalError::InvalidArgument {
            function,
            message: format!("'{}' is not an integer", atom.as_str()),
        })
}

/// Checked float coercion: errors on lists and non-numeric payloads.
pub(crate) fn float_arg(function: &'static str, expr: &Expr) -> EvalResult<f64> {
    let atom = expr.as_atom().ok_or_else(|| EvalError::InvalidArgument {
        function,
        message: format!("expected a number, got the list '{expr}'"),
    })?;
    atom.as_str()
        .parse()
        .map_err(|_| EvalError::InvalidArgument {
            function,
            message: format!("'{}' is not a number", atom.as_str()),
        })
}

/// Require a list argument.
pub(crate) fn list_arg<'a>(function: &'static str, expr: &'a Expr) -> EvalResult<&'a [Expr]> {
    expr.as_list().ok_or_else(|| EvalError::InvalidArgument {
        function,
        message: format!("expected a list, got '{expr}'"),
    })
}
