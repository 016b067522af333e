//! Encoding and hashing builtins: `base64-encode`, `base64-decode`,
//! `sha256`, `uuid`.

use super::{exact, string_form};
use crate::context::{BuiltinFn, EvalContext};
use crate::error::{EvalError, EvalResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use nimbus_types::Expr;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt::Write;

pub(super) fn register(funcs: &mut BTreeMap<String, BuiltinFn>) {
    funcs.insert("base64-encode".into(), base64_encode);
    funcs.insert("base64-decode".into(), base64_decode);
    funcs.insert("sha256".into(), sha256);
    funcs.insert("uuid".into(), uuid);
}

/// `(base64-encode s)`
fn base64_encode(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("base64-encode", args, 1)?;
    Ok(Expr::atom(STANDARD.encode(string_form(&args[0]))))
}

/// `(base64-decode s)` — fails on malformed base64 or non-UTF-8
/// decoded bytes.
fn base64_decode(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("base64-decode", args, 1)?;
    let encoded = string_form(&args[0]);
    let bytes = STANDARD
        .decode(&encoded)
        .map_err(|e| EvalError::InvalidArgument {
            function: "base64-decode",
            message: format!("'{encoded}' is not valid base64: {e}"),
        })?;
    let text = String::from_utf8(bytes).map_err(|_| EvalError::InvalidArgument {
        function: "base64-decode",
        message: format!("'{encoded}' does not decode to UTF-8 text"),
    })?;
    Ok(Expr::atom(text))
}

/// `(sha256 s)` — lowercase hex digest.
fn sha256(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("sha256", args, 1)?;
    let digest = Sha256::digest(string_form(&args[0]).as_bytes());
    let mut hex = String::with_capacity(64);
    for byte in digest {
        // Infallible for String
        let _ = write!(hex, "{byte:02x}");
    }
    Ok(Expr::atom(hex))
}

/// `(uuid)` — a fresh random v4 UUID in canonical hyphenated form.
fn uuid(args: &[Expr], _ctx: &mut EvalContext) -> EvalResult<Expr> {
    exact("uuid", args, 0)?;
    Ok(Expr::atom(uuid::Uuid::new_v4().to_string()))
}
