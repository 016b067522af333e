//! Path builtins: `dirname`, `basename`.

use super::{exact, string_form};
use crate::context::{BuiltinFn, EvalContext};
use crate::error::EvalResult;
use nimbus_types::Expr;
use std::collections::BTreeMap;
use std::path::Path;

pub(super) fn register(funcs: &mut BTreeMap<String, BuiltinFn>) {
    funcs.insert("dirname".into(), dirname);
    funcs.insert("basename".into(), basename);
}

/// `(dirname p)` — everything before the final component; `.` when the
/// path has no directory part.
fn dirname(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("dirname", args, 1)?;
    let path = string_form(&args[0]);
    let dir = Path::new(&path)
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| ".".to_string());
    Ok(Expr::atom(dir))
}

/// `(basename p)` — the final component; the input itself when there is
/// none (e.g. `/`).
fn basename(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("basename", args, 1)?;
    let path = string_form(&args[0]);
    let base = Path::new(&path)
        .file_name()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.clone());
    Ok(Expr::atom(base))
}
