// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! `incr` built-in
//!
//! `incr varName ?increment?`: adds `increment` (default `1`, parsed as an
//! `i64`) to the named scalar and returns the new value. Unlike `set`,
//! `incr` never auto-vivifies: a missing variable fails with the same
//! "no such variable" message `set varName` would give, a documented,
//! deliberate divergence from stock Tcl.

use crate::support::{lookup_signal, not_an_integer, wrong_num_args};
use tcl_env::{Interp, NativeResult};

pub fn main(interp: &mut Interp, args: &[String]) -> NativeResult {
    if args.len() < 2 || args.len() > 3 {
        return Err(wrong_num_args("incr", "varName ?increment?"));
    }
    let name = &args[1];
    let increment: i64 = match args.get(2) {
        Some(text) => text.parse().map_err(|_| not_an_integer(text))?,
        None => 1,
    };

    let level = interp.stack.current_level();
    let current: i64 = interp
        .stack
        .variables()
        .get(level, name)
        .map_err(|err| lookup_signal(name, err))?
        .parse()
        .map_err(|_| not_an_integer(name))?;

    let updated = (current + increment).to_string();
    interp
        .stack
        .variables()
        .set(level, name, updated.clone())
        .map_err(|err| lookup_signal(name, err))?;
    Ok(updated)
}
