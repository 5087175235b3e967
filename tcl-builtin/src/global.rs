// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! `global` built-in
//!
//! `global name ...`: aliases each `name` in the current frame to the
//! same name in the global frame (level 0). A shorthand for
//! `upvar #0 name name` repeated over each argument.

use crate::support::wrong_num_args;
use tcl_env::{Interp, NativeResult, Signal};

pub fn main(interp: &mut Interp, args: &[String]) -> NativeResult {
    if args.len() < 2 {
        return Err(wrong_num_args("global", "name ?name ...?"));
    }
    let level = interp.stack.current_level();
    let mut vars = interp.stack.variables();
    for name in &args[1..] {
        if level == 0 {
            // Already in the global frame: aliasing a name to itself would
            // make `resolve` chase a self-referential alias and fail. A
            // no-op here, matching `global`'s behavior at the top level.
            continue;
        }
        vars.alias(level, name, 0, name)
            .map_err(|err| Signal::Error(err.to_string()))?;
    }
    Ok(String::new())
}
