//! Pattern matching: `match?`.

use super::{exact, string_form};
use crate::context::{BuiltinFn, EvalContext};
use crate::error::{EvalError, EvalResult};
use nimbus_types::Expr;
use regex::Regex;
use std::collections::BTreeMap;

pub(super) fn register(funcs: &mut BTreeMap<String, BuiltinFn>) {
    funcs.insert("match?".into(), match_pattern);
}

/// `(match? pattern s)` — regular-expression search (not anchored
/// full-match) over the string form of `s`.
fn match_pattern(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("match?", args, 2)?;
    let pattern = string_form(&args[0]);
    let regex = Regex::new(&pattern).map_err(|e| EvalError::InvalidArgument {
        function: "match?",
        message: format!("invalid pattern '{pattern}': {e}"),
    })?;
    Ok(Expr::boolean(regex.is_match(&string_form(&args[1]))))
}
