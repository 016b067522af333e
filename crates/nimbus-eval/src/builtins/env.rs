//! Environment-variable builtins: `env`, `env?`.

use super::{between, exact, string_form};
use crate::context::{BuiltinFn, EvalContext};
use crate::error::EvalResult;
use nimbus_types::Expr;
use std::collections::BTreeMap;

pub(super) fn register(funcs: &mut BTreeMap<String, BuiltinFn>) {
    funcs.insert("env".into(), env);
    funcs.insert("env?".into(), env_set);
}

/// `(env "NAME")` / `(env "NAME" "default")` — the variable's value,
/// or the default (empty string without one) when it is not set.
///
/// Reads through `var_os` so a set variable is always reported present,
/// matching `env?`; non-UTF-8 values convert lossily rather than
/// falling through to the default.
fn env(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    between("env", args, "1 or 2", 1, 2)?;
    let name = string_form(&args[0]);
    match std::env::var_os(&name) {
        Some(value) => Ok(Expr::atom(value.to_string_lossy().into_owned())),
        None => Ok(args
            .get(1)
            .map(|fallback| Expr::atom(string_form(fallback)))
            .unwrap_or_else(Expr::empty)),
    }
}

/// `(env? "NAME")` — whether the variable exists at all, set-but-empty
/// included.
fn env_set(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("env?", args, 1)?;
    let name = string_form(&args[0]);
    Ok(Expr::boolean(std::env::var_os(&name).is_some()))
}
