//! Collection builtins: `list`, `first`, `len`, `range`.

use super::{between, exact, int_arg, list_arg};
use crate::context::{BuiltinFn, EvalContext};
use crate::error::{EvalError, EvalResult};
use nimbus_types::Expr;
use std::collections::BTreeMap;

pub(super) fn register(funcs: &mut BTreeMap<String, BuiltinFn>) {
    funcs.insert("list".into(), list);
    funcs.insert("first".into(), first);
    funcs.insert("len".into(), len);
    funcs.insert("range".into(), range);
}

/// `(list ...)` — a list of the evaluated arguments.
fn list(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    Ok(Expr::list(args.to_vec()))
}

/// `(first list)` — the first element; an empty list is an error.
fn first(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("first", args, 1)?;
    let items = list_arg("first", &args[0])?;
    items.first().cloned().ok_or(EvalError::InvalidArgument {
        function: "first",
        message: "the list is empty".into(),
    })
}

/// `(len x)` — element count for a list, character count for an atom.
fn len(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("len", args, 1)?;
    let n = match &args[0] {
        Expr::List(items) => items.len(),
        Expr::Atom(a) | Expr::Symbol(a) => a.as_str().chars().count(),
    };
    Ok(Expr::int(n as i64))
}

/// `(range n)` / `(range start end)` — consecutive integers,
/// end-exclusive. An empty range yields an empty list.
fn range(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    between("range", args, "1 or 2", 1, 2)?;
    let (start, end) = match args {
        [n] => (0, int_arg("range", n)?),
        [start, end] => (int_arg("range", start)?, int_arg("range", end)?),
        _ => unreachable!("arity checked above"),
    };
    Ok(Expr::list((start..end).map(Expr::int).collect()))
}
