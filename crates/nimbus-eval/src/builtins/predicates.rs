//! Type predicates: `string?`, `number?`, `bool?`, `list?`, `empty?`.
//!
//! Scalars carry no type tag — these classify the textual payload.
//! Every atom is a string; an atom that parses numerically is also a
//! number; only the literals `true`/`false` are booleans.

use super::exact;
use crate::context::{BuiltinFn, EvalContext};
use crate::error::EvalResult;
use nimbus_types::{Atom, Expr};
use std::collections::BTreeMap;

pub(super) fn register(funcs: &mut BTreeMap<String, BuiltinFn>) {
    funcs.insert("string?".into(), is_string);
    funcs.insert("number?".into(), is_number);
    funcs.insert("bool?".into(), is_bool);
    funcs.insert("list?".into(), is_list);
    funcs.insert("empty?".into(), is_empty);
}

/// `(string? x)` — true for any atom.
fn is_string(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("string?", args, 1)?;
    Ok(Expr::boolean(args[0].as_atom().is_some()))
}

/// `(number? x)` — true when the payload parses as a number.
fn is_number(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("number?", args, 1)?;
    let numeric = args[0]
        .as_atom()
        .map(|a| a.as_str().parse::<f64>().is_ok())
        .unwrap_or(false);
    Ok(Expr::boolean(numeric))
}

/// `(bool? x)` — true only for the literals `true` and `false`.
fn is_bool(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("bool?", args, 1)?;
    let boolish = args[0]
        .as_atom()
        .map(|a| matches!(a.as_str(), "true" | "false"))
        .unwrap_or(false);
    Ok(Expr::boolean(boolish))
}

/// `(list? x)`
fn is_list(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("list?", args, 1)?;
    Ok(Expr::boolean(args[0].is_list()))
}

/// `(empty? x)` — true only for a zero-length scalar; a list is never
/// empty in this sense (use `(eq (len x) 0)` for element counts).
fn is_empty(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("empty?", args, 1)?;
    let empty = args[0].as_atom().map(Atom::is_empty).unwrap_or(false);
    Ok(Expr::boolean(empty))
}
