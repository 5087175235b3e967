// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! `append` built-in
//!
//! `append varName value ...`: concatenates each `value` onto the named
//! scalar, creating it (as the concatenation of just the given values) if
//! it didn't already exist, and returns the result.

use crate::support::{lookup_signal, wrong_num_args};
use tcl_env::{Interp, NativeResult, Signal};

pub fn main(interp: &mut Interp, args: &[String]) -> NativeResult {
    if args.len() < 2 {
        return Err(wrong_num_args("append", "varName ?value ...?"));
    }
    let name = &args[1];
    let level = interp.stack.current_level();

    let mut updated = match interp.stack.variables().get(level, name) {
        Ok(value) => value,
        Err(tcl_env::LookupError::NoSuchVariable) => String::new(),
        Err(err) => return Err(lookup_signal(name, err)),
    };
    for value in &args[2..] {
        updated.push_str(value);
    }

    interp
        .stack
        .variables()
        .set(level, name, updated.clone())
        .map_err(|err| Signal::Error(err.to_string()))?;
    Ok(updated)
}
