// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! The interpreter: the single owner of the command table and call stack
//! for one interpreter instance.
//!
//! `Interp` is deliberately not `Sync`: a single instance is never accessed
//! concurrently. Independent instances may live on independent threads.

use crate::command::CommandTable;
use crate::stack::CallStack;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

/// Runtime state threaded through every native command and through the
/// evaluator in `tcl-semantics`.
#[derive(Debug)]
pub struct Interp {
    pub commands: CommandTable,
    pub stack: CallStack,
    /// Working directory for the `cd`/`pwd` built-ins, tracked in-process
    /// rather than trusted to the OS's ambient cwd so that an embedding can
    /// run many interpreters without their `cd` calls racing each other.
    pub cwd: Rc<std::path::Path>,
}

impl Default for Interp {
    fn default() -> Self {
        Self::new()
    }
}

impl Interp {
    pub fn new() -> Self {
        Interp {
            commands: CommandTable::new(),
            stack: CallStack::new(),
            cwd: Rc::from(std::path::Path::new(".")),
        }
    }

    /// Pushes a new call frame for entry into a user-defined procedure and
    /// returns a guard that pops it on drop. Unlike [`CallStack::push_frame`],
    /// the guard derefs to the whole `Interp`, not just its stack, so a
    /// caller can keep dispatching nested commands (which need the command
    /// table too) for the frame's entire lifetime.
    #[must_use = "the frame is popped when the guard is dropped"]
    pub fn push_frame(&mut self) -> InterpFrameGuard<'_> {
        self.stack.push_frame_raw();
        InterpFrameGuard { interp: self }
    }

    /// Borrows `level` as the current frame for variable resolution, for the
    /// duration of an `uplevel` call. Returns a guard that
    /// restores the previous current level on drop, the same RAII shape as
    /// [`push_frame`](Self::push_frame).
    #[must_use = "the borrowed level is released when the guard is dropped"]
    pub fn enter_uplevel(&mut self, level: usize) -> InterpLevelGuard<'_> {
        self.stack.push_active_level(level);
        InterpLevelGuard { interp: self }
    }
}

/// RAII guard returned by [`Interp::push_frame`]; pops the frame when
/// dropped, even if the body evaluation returns early via `?`.
#[derive(Debug)]
#[must_use = "the frame is popped when the guard is dropped"]
pub struct InterpFrameGuard<'a> {
    interp: &'a mut Interp,
}

impl Deref for InterpFrameGuard<'_> {
    type Target = Interp;
    fn deref(&self) -> &Interp {
        self.interp
    }
}

impl DerefMut for InterpFrameGuard<'_> {
    fn deref_mut(&mut self) -> &mut Interp {
        self.interp
    }
}

impl Drop for InterpFrameGuard<'_> {
    fn drop(&mut self) {
        self.interp.stack.pop_frame_raw();
    }
}

/// RAII guard returned by [`Interp::enter_uplevel`]; releases the borrowed
/// level when dropped.
#[derive(Debug)]
#[must_use = "the borrowed level is released when the guard is dropped"]
pub struct InterpLevelGuard<'a> {
    interp: &'a mut Interp,
}

impl Deref for InterpLevelGuard<'_> {
    type Target = Interp;
    fn deref(&self) -> &Interp {
        self.interp
    }
}

impl DerefMut for InterpLevelGuard<'_> {
    fn deref_mut(&mut self) -> &mut Interp {
        self.interp
    }
}

impl Drop for InterpLevelGuard<'_> {
    fn drop(&mut self) {
        self.interp.stack.pop_active_level();
    }
}
