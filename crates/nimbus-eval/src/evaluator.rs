//! Tree-walking evaluation: special forms and function dispatch.

use crate::context::EvalContext;
use crate::error::{EvalError, EvalResult};
use nimbus_types::{Atom, Expr};
use tracing::trace;

/// Truthiness used by `if`, `and`, `or`, and `not`: only an atom whose
/// payload is the literal `"true"` is truthy. Lists are always falsey.
pub(crate) fn is_truthy(expr: &Expr) -> bool {
    expr.as_atom().map(Atom::as_bool).unwrap_or(false)
}

impl EvalContext {
    /// Evaluate a sequence of top-level forms left to right, returning
    /// the value of the last (or the empty atom for no forms).
    ///
    /// Variables written by `set` persist across forms; an error aborts
    /// the failing form but leaves state from earlier forms intact.
    pub fn eval_all(&mut self, forms: &[Expr]) -> EvalResult<Expr> {
        let mut last = Expr::empty();
        for form in forms {
            last = self.eval(form)?;
        }
        Ok(last)
    }

    /// Evaluate one expression.
    ///
    /// Atoms (quoted strings, numbers, booleans) are self-evaluating
    /// literals. A symbol evaluates to the value bound to its text when
    /// such a binding exists (the symbol-to-value path used inside
    /// `let` bodies), otherwise to itself. A non-empty list dispatches
    /// on its first element.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Expr> {
        match expr {
            Expr::Atom(_) => Ok(expr.clone()),
            Expr::Symbol(sym) => Ok(self
                .lookup(sym.as_str())
                .cloned()
                .unwrap_or_else(|| expr.clone())),
            Expr::List(items) => self.eval_list(items),
        }
    }

    fn eval_list(&mut self, items: &[Expr]) -> EvalResult<Expr> {
        let Some((head, rest)) = items.split_first() else {
            // The empty list is self-evaluating.
            return Ok(Expr::List(Vec::new()));
        };
        let op = head
            .as_atom()
            .ok_or_else(|| {
                EvalError::MalformedForm("operator position holds a list, not a name".into())
            })?
            .as_str()
            .to_string();

        match op.as_str() {
            "if" => self.eval_if(rest),
            "and" => self.eval_and(rest),
            "or" => self.eval_or(rest),
            "let" => self.eval_let(rest),
            _ => {
                let func = self
                    .function(&op)
                    .ok_or_else(|| EvalError::UnknownFunction(op.clone()))?;
                let args = self.eval_args(rest)?;
                trace!(function = %op, argc = args.len(), "calling builtin");
                func(&args, self)
            }
        }
    }

    /// Evaluate call arguments left to right, failing fast.
    fn eval_args(&mut self, exprs: &[Expr]) -> EvalResult<Vec<Expr>> {
        let mut out = Vec::with_capacity(exprs.len());
        for expr in exprs {
            out.push(self.eval(expr)?);
        }
        Ok(out)
    }

    // ── Special forms ────────────────────────────────────────────────

    /// `(if cond then)` / `(if cond then else)` — the condition is
    /// evaluated first, then exactly one branch.
    fn eval_if(&mut self, args: &[Expr]) -> EvalResult<Expr> {
        if args.len() < 2 || args.len() > 3 {
            return Err(EvalError::MalformedForm(format!(
                "if expects condition, then, and optional else, got {} argument(s)",
                args.len()
            )));
        }
        let cond = self.eval(&args[0])?;
        if is_truthy(&cond) {
            self.eval(&args[1])
        } else if let Some(else_branch) = args.get(2) {
            self.eval(else_branch)
        } else {
            Ok(Expr::empty())
        }
    }

    /// `(and ...)` — left to right, stops at the first falsey operand.
    fn eval_and(&mut self, args: &[Expr]) -> EvalResult<Expr> {
        for arg in args {
            let value = self.eval(arg)?;
            if !is_truthy(&value) {
                return Ok(Expr::boolean(false));
            }
        }
        Ok(Expr::boolean(true))
    }

    /// `(or ...)` — left to right, stops at the first truthy operand.
    fn eval_or(&mut self, args: &[Expr]) -> EvalResult<Expr> {
        for arg in args {
            let value = self.eval(arg)?;
            if is_truthy(&value) {
                return Ok(Expr::boolean(true));
            }
        }
        Ok(Expr::boolean(false))
    }

    /// `(let ((name value) ...) body ...)` — every binding's value
    /// expression is evaluated in the outer scope, then all bindings
    /// are installed into one child frame, the body forms run in that
    /// frame, and the frame is discarded on exit (success or error).
    fn eval_let(&mut self, args: &[Expr]) -> EvalResult<Expr> {
        let Some((bindings, body)) = args.split_first() else {
            return Err(EvalError::MalformedForm(
                "let expects a binding list and a body".into(),
            ));
        };
        if body.is_empty() {
            return Err(EvalError::MalformedForm("let has no body".into()));
        }
        let bindings = bindings
            .as_list()
            .ok_or_else(|| EvalError::MalformedForm("let bindings must be a list".into()))?;

        // Outer-scope evaluation of every bound value before the frame
        // exists, so bindings cannot see each other.
        let mut frame = Vec::with_capacity(bindings.len());
        for binding in bindings {
            let pair = binding.as_list().filter(|p| p.len() == 2).ok_or_else(|| {
                EvalError::MalformedForm(format!(
                    "let binding must be a (name value) pair, got '{binding}'"
                ))
            })?;
            let name = pair[0]
                .as_atom()
                .ok_or_else(|| {
                    EvalError::MalformedForm("let binding name must be an atom".into())
                })?
                .as_str()
                .to_string();
            let value = self.eval(&pair[1])?;
            frame.push((name, value));
        }

        self.push_scope();
        for (name, value) in frame {
            self.define(&name, value);
        }
        let mut result = Ok(Expr::empty());
        for form in body {
            result = self.eval(form);
            if result.is_err() {
                break;
            }
        }
        self.pop_scope();
        result
    }
}
