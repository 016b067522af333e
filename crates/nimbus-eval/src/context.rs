//! Per-evaluation state: scoped variables and the builtin registry.

use crate::builtins;
use crate::error::EvalResult;
use nimbus_types::Expr;
use std::collections::BTreeMap;

/// A builtin function implementation.
///
/// Receives its already-evaluated arguments in call order plus the
/// current context (for `set`/`var`), and returns the result expression
/// or a descriptive error.
pub type BuiltinFn = fn(&[Expr], &mut EvalContext) -> EvalResult<Expr>;

/// State for one parse-and-evaluate cycle.
///
/// Owns two independent mappings: variables (a scope stack — `let`
/// pushes a frame, bindings shadow outward, popping restores the outer
/// frames untouched) and the builtin function registry. Every context
/// is constructed fresh with all builtins pre-registered; contexts are
/// not reused across unrelated parses and never share mutable state.
pub struct EvalContext {
    /// Variable scope stack, innermost last. Always at least one frame.
    scopes: Vec<BTreeMap<String, Expr>>,
    /// Builtin functions by operator name.
    functions: BTreeMap<String, BuiltinFn>,
}

impl EvalContext {
    /// Create a context with all builtins registered and no variables.
    pub fn new() -> Self {
        let mut functions = BTreeMap::new();
        builtins::register_all(&mut functions);
        Self {
            scopes: vec![BTreeMap::new()],
            functions,
        }
    }

    // ── Variables ────────────────────────────────────────────────────

    /// Push a fresh scope frame (entering a `let` body).
    pub(crate) fn push_scope(&mut self) {
        self.scopes.push(BTreeMap::new());
    }

    /// Pop the innermost frame, restoring the outer bindings exactly.
    pub(crate) fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Bind a name in the innermost frame.
    pub fn define(&mut self, name: &str, value: Expr) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), value);
        }
    }

    /// Look a name up, innermost frame outward.
    pub fn lookup(&self, name: &str) -> Option<&Expr> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    // ── Functions ────────────────────────────────────────────────────

    /// Resolve a builtin by operator name.
    pub fn function(&self, name: &str) -> Option<BuiltinFn> {
        self.functions.get(name).copied()
    }

    /// Names of all registered builtins, sorted.
    pub fn function_names(&self) -> Vec<&str> {
        self.functions.keys().map(String::as_str).collect()
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}
