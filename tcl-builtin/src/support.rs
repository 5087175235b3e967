// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! Shared helpers for turning `tcl-env`/`tcl-semantics` error values into the
//! [`Signal`]s a [`NativeFn`](tcl_env::NativeFn) returns.
//!
//! Native commands police their own arity and must produce the same
//! canonical message text a user-procedure arity failure would;
//! [`wrong_num_args`] centralizes that formatting so every built-in renders
//! it identically.

use tcl_env::{LookupError, Signal};
use tcl_semantics::EvalError;

/// The canonical `wrong # args: should be "<name> <spec>"` message.
pub fn wrong_num_args(name: &str, param_spec: &str) -> Signal {
    Signal::Error(format!("wrong # args: should be \"{name} {param_spec}\""))
}

/// The canonical "expected integer but got ..." message for an argument that
/// fails to parse where an integer is required (e.g. `uplevel`'s level,
/// `incr`'s increment).
pub fn not_an_integer(text: &str) -> Signal {
    Signal::Error(EvalError::NotAnInteger { text: text.to_string() }.to_string())
}

/// Renders a [`LookupError`] from a scalar lookup/write into the
/// interpreter's canonical message text for `name`.
pub fn lookup_signal(name: &str, err: LookupError) -> Signal {
    Signal::Error(EvalError::from_lookup(name, err).to_string())
}

/// Renders a [`LookupError`] from an array-element lookup/write.
pub fn element_signal(name: &str, key: &str, err: LookupError) -> Signal {
    Signal::Error(EvalError::from_element_lookup(name, key, err).to_string())
}

/// Converts the result of a nested `tcl-semantics` evaluation (`eval_str`,
/// `eval_script`) into a [`Signal`], preserving `return`'s control-transfer
/// meaning instead of flattening it into an ordinary error.
pub fn signal_from_eval(result: tcl_semantics::Result<String>) -> Result<String, Signal> {
    result.map_err(|err| match err {
        EvalError::Return(value) => Signal::Return(value),
        other => Signal::Error(other.to_string()),
    })
}
