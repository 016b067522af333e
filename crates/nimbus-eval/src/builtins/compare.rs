//! Comparison builtins: `eq` (string equality), `<`, `>`, `<=`, `>=`
//! (numeric).

use super::{exact, float_arg, string_form};
use crate::context::{BuiltinFn, EvalContext};
use crate::error::EvalResult;
use nimbus_types::Expr;
use std::collections::BTreeMap;

pub(super) fn register(funcs: &mut BTreeMap<String, BuiltinFn>) {
    funcs.insert("eq".into(), eq);
    funcs.insert("<".into(), lt);
    funcs.insert(">".into(), gt);
    funcs.insert("<=".into(), le);
    funcs.insert(">=".into(), ge);
}

/// `(eq a b)` — equality of string forms.
fn eq(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("eq", args, 2)?;
    Ok(Expr::boolean(string_form(&args[0]) == string_form(&args[1])))
}

fn compare(
    function: &'static str,
    args: &[Expr],
    op: fn(f64, f64) -> bool,
) -> EvalResult<Expr> {
    exact(function, args, 2)?;
    let a = float_arg(function, &args[0])?;
    let b = float_arg(function, &args[1])?;
    Ok(Expr::boolean(op(a, b)))
}

fn lt(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    compare("<", args, |a, b| a < b)
}

fn gt(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    compare(">", args, |a, b| a > b)
}

fn le(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    compare("<=", args, |a, b| a <= b)
}

fn ge(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    compare(">=", args, |a, b| a >= b)
}
