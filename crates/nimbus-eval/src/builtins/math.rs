//! Arithmetic builtins: `+`, `-`, `*`, `/`, `mod`.
//!
//! All five are variadic-or-binary left folds over numeric arguments.
//! When every argument parses as an integer the fold stays in `i64`
//! (the semantics cluster configurations rely on for node counts and
//! ports); otherwise every argument must parse as a float and the
//! result is rendered without a trailing `.0` when integral.

use super::{at_least, exact, int_arg};
use crate::context::{BuiltinFn, EvalContext};
use crate::error::{EvalError, EvalResult};
use nimbus_types::Expr;
use std::collections::BTreeMap;

pub(super) fn register(funcs: &mut BTreeMap<String, BuiltinFn>) {
    funcs.insert("+".into(), add);
    funcs.insert("-".into(), sub);
    funcs.insert("*".into(), mul);
    funcs.insert("/".into(), div);
    funcs.insert("mod".into(), modulo);
}

/// Parsed numeric arguments: all integers, or all floats.
enum Numbers {
    Ints(Vec<i64>),
    Floats(Vec<f64>),
}

fn numeric_args(function: &'static str, args: &[Expr]) -> EvalResult<Numbers> {
    let mut ints = Vec::with_capacity(args.len());
    let mut all_ints = true;
    for arg in args {
        let atom = arg.as_atom().ok_or_else(|| EvalError::InvalidArgument {
            function,
            message: format!("expected a number, got the list '{arg}'"),
        })?;
        match atom.as_str().parse::<i64>() {
            Ok(n) => ints.push(n),
            Err(_) => {
                all_ints = false;
                break;
            }
        }
    }
    if all_ints {
        return Ok(Numbers::Ints(ints));
    }

    let mut floats = Vec::with_capacity(args.len());
    for arg in args {
        floats.push(super::float_arg(function, arg)?);
    }
    Ok(Numbers::Floats(floats))
}

/// Render a float, dropping the fraction when it is integral.
fn float_atom(x: f64) -> Expr {
    if x.is_finite() && x.fract() == 0.0 {
        Expr::int(x as i64)
    } else {
        Expr::atom(x.to_string())
    }
}

fn fold(
    function: &'static str,
    args: &[Expr],
    int_op: fn(i64, i64) -> EvalResult<i64>,
    float_op: fn(f64, f64) -> f64,
) -> EvalResult<Expr> {
    at_least(function, args, "at least 1", 1)?;
    match numeric_args(function, args)? {
        Numbers::Ints(ns) => {
            let mut acc = ns[0];
            for n in &ns[1..] {
                acc = int_op(acc, *n)?;
            }
            Ok(Expr::int(acc))
        }
        Numbers::Floats(ns) => {
            let mut acc = ns[0];
            for n in &ns[1..] {
                acc = float_op(acc, *n);
            }
            if !acc.is_finite() {
                return Err(EvalError::InvalidArgument {
                    function,
                    message: "result is not a finite number".into(),
                });
            }
            Ok(float_atom(acc))
        }
    }
}

fn add(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    fold("+", args, |a, b| Ok(a.wrapping_add(b)), |a, b| a + b)
}

fn sub(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    fold("-", args, |a, b| Ok(a.wrapping_sub(b)), |a, b| a - b)
}

fn mul(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    fold("*", args, |a, b| Ok(a.wrapping_mul(b)), |a, b| a * b)
}

fn div(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    fold(
        "/",
        args,
        |a, b| {
            if b == 0 {
                Err(EvalError::InvalidArgument {
                    function: "/",
                    message: "division by zero".into(),
                })
            } else {
                Ok(a / b)
            }
        },
        |a, b| a / b,
    )
}

/// `(mod a b)` — integer remainder.
fn modulo(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("mod", args, 2)?;
    let a = int_arg("mod", &args[0])?;
    let b = int_arg("mod", &args[1])?;
    if b == 0 {
        return Err(EvalError::InvalidArgument {
            function: "mod",
            message: "modulo by zero".into(),
        });
    }
    Ok(Expr::int(a % b))
}
