//! Boolean negation. `and` and `or` are special forms handled by the
//! evaluator (they short-circuit), so `not` is the only registered
//! logical builtin.

use super::exact;
use crate::context::{BuiltinFn, EvalContext};
use crate::error::EvalResult;
use crate::evaluator::is_truthy;
use nimbus_types::Expr;
use std::collections::BTreeMap;

pub(super) fn register(funcs: &mut BTreeMap<String, BuiltinFn>) {
    funcs.insert("not".into(), not);
}

/// `(not x)`
fn not(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("not", args, 1)?;
    Ok(Expr::boolean(!is_truthy(&args[0])))
}
