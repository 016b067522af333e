//! String builtins: `concat`, `format`, `upper`, `lower`, `trim`,
//! `replace`, `substring`, `split`, `join`.

use super::{at_least, exact, int_arg, list_arg, string_form};
use crate::context::{BuiltinFn, EvalContext};
use crate::error::{EvalError, EvalResult};
use nimbus_types::Expr;
use std::collections::BTreeMap;

pub(super) fn register(funcs: &mut BTreeMap<String, BuiltinFn>) {
    funcs.insert("concat".into(), concat);
    funcs.insert("format".into(), format_str);
    funcs.insert("upper".into(), upper);
    funcs.insert("lower".into(), lower);
    funcs.insert("trim".into(), trim);
    funcs.insert("replace".into(), replace);
    funcs.insert("substring".into(), substring);
    funcs.insert("split".into(), split);
    funcs.insert("join".into(), join);
}

/// `(concat ...)` — string forms of all arguments, concatenated.
fn concat(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    let mut out = String::new();
    for arg in args {
        out.push_str(&string_form(arg));
    }
    Ok(Expr::atom(out))
}

/// `(format fmt ...)` — printf-style substitution: each `%s` in the
/// format string consumes the next argument's string form. Too few
/// arguments is an error; extras are ignored.
fn format_str(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    at_least("format", args, "at least 1", 1)?;
    let fmt = string_form(&args[0]);
    let mut values = args[1..].iter();
    let mut out = String::with_capacity(fmt.len());
    let mut rest = fmt.as_str();
    while let Some(idx) = rest.find("%s") {
        out.push_str(&rest[..idx]);
        let value = values.next().ok_or_else(|| EvalError::InvalidArgument {
            function: "format",
            message: format!("not enough arguments for format string '{fmt}'"),
        })?;
        out.push_str(&string_form(value));
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
    Ok(Expr::atom(out))
}

/// `(upper s)`
fn upper(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("upper", args, 1)?;
    Ok(Expr::atom(string_form(&args[0]).to_uppercase()))
}

/// `(lower s)`
fn lower(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("lower", args, 1)?;
    Ok(Expr::atom(string_form(&args[0]).to_lowercase()))
}

/// `(trim s)` — strips leading and trailing whitespace.
fn trim(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("trim", args, 1)?;
    Ok(Expr::atom(string_form(&args[0]).trim().to_string()))
}

/// `(replace s old new)` — all occurrences.
fn replace(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("replace", args, 3)?;
    let s = string_form(&args[0]);
    let old = string_form(&args[1]);
    if old.is_empty() {
        return Err(EvalError::InvalidArgument {
            function: "replace",
            message: "the search string is empty".into(),
        });
    }
    Ok(Expr::atom(s.replace(&old, &string_form(&args[2]))))
}

/// `(substring s start end)` — character-based, end-exclusive. Indices
/// outside `0..=len` or a start past the end are errors.
fn substring(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("substring", args, 3)?;
    let s = string_form(&args[0]);
    let start = int_arg("substring", &args[1])?;
    let end = int_arg("substring", &args[2])?;
    let len = s.chars().count() as i64;
    if start < 0 || end > len || start > end {
        return Err(EvalError::InvalidArgument {
            function: "substring",
            message: format!("range {start}..{end} is out of bounds for length {len}"),
        });
    }
    let out: String = s
        .chars()
        .skip(start as usize)
        .take((end - start) as usize)
        .collect();
    Ok(Expr::atom(out))
}

/// `(split s sep)` — a list of the separated pieces.
fn split(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("split", args, 2)?;
    let s = string_form(&args[0]);
    let sep = string_form(&args[1]);
    if sep.is_empty() {
        return Err(EvalError::InvalidArgument {
            function: "split",
            message: "the separator is empty".into(),
        });
    }
    Ok(Expr::list(s.split(&sep).map(Expr::atom).collect()))
}

/// `(join list sep)` — string forms of the items, separated.
fn join(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("join", args, 2)?;
    let items = list_arg("join", &args[0])?;
    let sep = string_form(&args[1]);
    let joined = items
        .iter()
        .map(string_form)
        .collect::<Vec<_>>()
        .join(&sep);
    Ok(Expr::atom(joined))
}
