// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
// tcl-env: variable storage, call stack, and command table for the
// Tcl-dialect interpreter core.

#![forbid(unsafe_code)]

//! Runtime state of a single interpreter instance.
//!
//! An [`Interp`] owns three things exclusively: the
//! [command table](command::CommandTable), the call stack of
//! [frames](variable::Frame), and (via the frame at level 0) the global
//! namespace. Frames exclusively own their own variable bindings; an
//! `upvar`/`global` alias is a weak `(level, name)` pair that re-resolves on
//! every access rather than extending the target frame's lifetime.
//!
//! This crate has no notion of substitution or evaluation; those live in
//! `tcl-semantics`, which drives an `Interp` without needing to know how
//! variables or commands are stored.

pub mod command;
pub mod interp;
pub mod stack;
pub mod variable;

pub use command::{Command, CommandTable, NativeFn, NativeResult, Param, Signal};
pub use interp::{Interp, InterpFrameGuard, InterpLevelGuard};
pub use stack::CallStack;
pub use variable::{split_name, Frame, LookupError, Value};
