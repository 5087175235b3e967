// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! Tiny native command registrations shared by this crate's own unit tests.
//!
//! Real built-ins live in `tcl-builtin`, which depends on this crate and so
//! cannot be depended on back from here; these stand-ins let
//! `tcl-semantics`'s tests exercise command dispatch and command
//! substitution without that crate.

#![cfg(test)]

use tcl_env::command::Body;
use tcl_env::{Interp, NativeResult, Signal};

fn echo(_interp: &mut Interp, args: &[String]) -> NativeResult {
    Ok(args[1..].join(" "))
}

fn fail(_interp: &mut Interp, args: &[String]) -> NativeResult {
    Err(Signal::Error(args.get(1).cloned().unwrap_or_default()))
}

pub fn register_echo(interp: &mut Interp) {
    interp.commands.register("echo", Body::Native(echo));
}

pub fn register_fail(interp: &mut Interp) {
    interp.commands.register("fail", Body::Native(fail));
}
