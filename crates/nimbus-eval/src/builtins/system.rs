//! System and time builtins: `now`, `timestamp`, `hostname`, `home`,
//! `cwd`. All are fast local reads — no network, no blocking I/O.

use super::exact;
use crate::context::{BuiltinFn, EvalContext};
use crate::error::{EvalError, EvalResult};
use chrono::{SecondsFormat, Utc};
use directories::UserDirs;
use nimbus_types::Expr;
use std::collections::BTreeMap;

pub(super) fn register(funcs: &mut BTreeMap<String, BuiltinFn>) {
    funcs.insert("now".into(), now);
    funcs.insert("timestamp".into(), timestamp);
    funcs.insert("hostname".into(), host_name);
    funcs.insert("home".into(), home);
    funcs.insert("cwd".into(), cwd);
}

/// `(now)` — the current UTC time in RFC 3339 form.
fn now(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("now", args, 0)?;
    Ok(Expr::atom(
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    ))
}

/// `(timestamp)` — Unix epoch seconds.
fn timestamp(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("timestamp", args, 0)?;
    Ok(Expr::int(Utc::now().timestamp()))
}

/// `(hostname)`
fn host_name(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("hostname", args, 0)?;
    let name = hostname::get().map_err(|e| EvalError::InvalidArgument {
        function: "hostname",
        message: format!("cannot read the system hostname: {e}"),
    })?;
    Ok(Expr::atom(name.to_string_lossy().into_owned()))
}

/// `(home)` — the user's home directory as an absolute path.
fn home(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("home", args, 0)?;
    let dirs = UserDirs::new().ok_or(EvalError::InvalidArgument {
        function: "home",
        message: "no home directory for the current user".into(),
    })?;
    Ok(Expr::atom(dirs.home_dir().to_string_lossy().into_owned()))
}

/// `(cwd)` — the process working directory.
fn cwd(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("cwd", args, 0)?;
    let dir = std::env::current_dir().map_err(|e| EvalError::InvalidArgument {
        function: "cwd",
        message: format!("cannot read the working directory: {e}"),
    })?;
    Ok(Expr::atom(dir.to_string_lossy().into_owned()))
}
