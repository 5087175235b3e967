// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! `cd` built-in
//!
//! `cd directory`: changes [`Interp::cwd`](tcl_env::Interp::cwd), the
//! interpreter's own tracked working directory, not the process's OS-level
//! one, so that multiple interpreters in one process don't race each
//! other's `cd` calls.

use crate::support::wrong_num_args;
use std::path::Path;
use std::rc::Rc;
use tcl_env::{Interp, NativeResult, Signal};

pub fn main(interp: &mut Interp, args: &[String]) -> NativeResult {
    if args.len() != 2 {
        return Err(wrong_num_args("cd", "directory"));
    }
    let target = Path::new(&args[1]);
    let resolved = if target.is_absolute() {
        target.to_path_buf()
    } else {
        interp.cwd.join(target)
    };
    let metadata = std::fs::metadata(&resolved)
        .map_err(|err| Signal::Error(format!("couldn't change working directory to \"{}\": {err}", args[1])))?;
    if !metadata.is_dir() {
        return Err(Signal::Error(format!(
            "couldn't change working directory to \"{}\": not a directory",
            args[1]
        )));
    }
    interp.cwd = Rc::from(resolved);
    Ok(String::new())
}
