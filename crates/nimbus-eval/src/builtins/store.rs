//! Variable-store builtins: `set`, `var`, `default`.

use super::{exact, string_form};
use crate::context::{BuiltinFn, EvalContext};
use crate::error::{EvalError, EvalResult};
use nimbus_types::Expr;
use std::collections::BTreeMap;

pub(super) fn register(funcs: &mut BTreeMap<String, BuiltinFn>) {
    funcs.insert("set".into(), set);
    funcs.insert("var".into(), var);
    funcs.insert("default".into(), default);
}

/// `(set "name" value)` — binds the name in the current frame and
/// returns the value. Top-level `set`s persist for the rest of the
/// evaluation, across subsequent forms.
fn set(args: &[Expr], ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("set", args, 2)?;
    let name = string_form(&args[0]);
    let value = args[1].clone();
    ctx.define(&name, value.clone());
    Ok(value)
}

/// `(var "name")` — reads a previously `set` (or `let`-bound) name;
/// unknown names are an error, never a silent empty value.
fn var(args: &[Expr], ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("var", args, 1)?;
    let name = string_form(&args[0]);
    ctx.lookup(&name)
        .cloned()
        .ok_or(EvalError::UndefinedVariable(name))
}

/// `(default value fallback)` — the value unless its string form is
/// empty, else the fallback. Both arguments are already evaluated.
fn default(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("default", args, 2)?;
    if string_form(&args[0]).is_empty() {
        Ok(args[1].clone())
    } else {
        Ok(args[0].clone())
    }
}
