// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! `pwd` built-in
//!
//! `pwd`: returns the interpreter's tracked working
//! directory (see `cd`), not the process's OS-level one.

use crate::support::wrong_num_args;
use tcl_env::{Interp, NativeResult};

pub fn main(interp: &mut Interp, args: &[String]) -> NativeResult {
    if args.len() != 1 {
        return Err(wrong_num_args("pwd", ""));
    }
    Ok(interp.cwd.display().to_string())
}
