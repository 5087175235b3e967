// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! The call stack: a sequence of [`Frame`]s, appended on procedure entry
//! and removed on return.
//!
//! Mirrors the push-returns-a-guard idiom used for runtime context stacks
//! elsewhere in this lineage: [`CallStack::push_frame`] returns a
//! [`FrameGuard`] that pops the frame when dropped, so a frame can never be
//! forgotten on an early return or a propagated error.

use crate::variable::{Frame, Frames, LookupError};
use std::ops::{Deref, DerefMut};

/// The interpreter's stack of call frames. Frame 0 (level 0) is the global
/// frame and is always present.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallStack {
    frames: Vec<Frame>,
    /// Levels temporarily borrowed by nested `uplevel` evaluations, most
    /// recent last. While non-empty, [`current_level`](Self::current_level)
    /// reports the top of this stack instead of the physical top frame, so
    /// variable lookups resolve in the caller-selected frame; new frames are
    /// still numbered from the physical stack so a command invoked from
    /// inside an `uplevel`'d script can't collide with an existing frame's
    /// level.
    active_levels: Vec<usize>,
}

impl Default for CallStack {
    fn default() -> Self {
        CallStack {
            frames: vec![Frame::new(0)],
            active_levels: Vec::new(),
        }
    }
}

impl CallStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The level that variable lookups resolve against by default: the
    /// innermost `uplevel`-borrowed level if one is active, otherwise the
    /// physical top-of-stack frame.
    pub fn current_level(&self) -> usize {
        self.active_levels.last().copied().unwrap_or_else(|| self.physical_level())
    }

    /// The level of the physically topmost frame, ignoring any `uplevel`
    /// override. New frames are always numbered relative to this.
    fn physical_level(&self) -> usize {
        self.frames.last().expect("global frame never popped").level()
    }

    /// Pushes a new frame one level above the current one, for entry into a
    /// user-defined procedure. Returns a guard that pops it on drop.
    #[must_use = "the frame is popped when the guard is dropped"]
    pub fn push_frame(&mut self) -> FrameGuard<'_> {
        self.push_frame_raw();
        FrameGuard { stack: self }
    }

    /// Pushes a new frame without a guard, for callers (namely
    /// [`crate::Interp::push_frame`]) that need to keep other fields of the
    /// owning struct reachable for the frame's lifetime and so pair this
    /// with their own guard over the whole struct instead of just the stack.
    pub(crate) fn push_frame_raw(&mut self) -> usize {
        let level = self.physical_level() + 1;
        log::trace!("pushing frame at level {level}");
        self.frames.push(Frame::new(level));
        level
    }

    /// Borrows `level` as the current level for variable resolution, for the
    /// duration of an `uplevel` call. Paired with
    /// [`pop_active_level`](Self::pop_active_level).
    pub(crate) fn push_active_level(&mut self, level: usize) {
        self.active_levels.push(level);
    }

    pub(crate) fn pop_active_level(&mut self) {
        self.active_levels.pop();
    }

    pub(crate) fn pop_frame_raw(&mut self) {
        self.frames.pop();
    }

    /// Resolves `level` as an `uplevel`-style argument: `#N` selects the
    /// absolute level `N`; a bare non-negative integer `N` selects
    /// `current_level - N`.
    pub fn resolve_uplevel_arg(&self, arg: &str) -> Option<usize> {
        if let Some(rest) = arg.strip_prefix('#') {
            return rest.parse().ok();
        }
        let relative: usize = arg.parse().ok()?;
        self.current_level().checked_sub(relative)
    }

    pub fn frame_exists(&self, level: usize) -> bool {
        self.frames.iter().any(|f| f.level() == level)
    }

    pub fn variables(&mut self) -> Frames<'_> {
        Frames::new(&mut self.frames)
    }

    pub fn get(&mut self, level: usize, name: &str) -> Result<String, LookupError> {
        self.variables().get(level, name)
    }

    pub fn set(&mut self, level: usize, name: &str, value: String) -> Result<(), LookupError> {
        self.variables().set(level, name, value)
    }
}

/// RAII guard returned by [`CallStack::push_frame`]; pops the frame when
/// dropped.
#[derive(Debug)]
#[must_use = "the frame is popped when the guard is dropped"]
pub struct FrameGuard<'a> {
    stack: &'a mut CallStack,
}

impl Deref for FrameGuard<'_> {
    type Target = CallStack;
    fn deref(&self) -> &CallStack {
        self.stack
    }
}

impl DerefMut for FrameGuard<'_> {
    fn deref_mut(&mut self) -> &mut CallStack {
        self.stack
    }
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        self.stack.frames.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stack_has_only_the_global_frame() {
        let stack = CallStack::new();
        assert_eq!(stack.current_level(), 0);
        assert!(stack.frame_exists(0));
        assert!(!stack.frame_exists(1));
    }

    #[test]
    fn push_frame_increments_level_and_pop_restores_it() {
        let mut stack = CallStack::new();
        {
            let mut guard = stack.push_frame();
            assert_eq!(guard.current_level(), 1);
            guard.set(1, "x", "y".to_string()).unwrap();
        }
        assert_eq!(stack.current_level(), 0);
        assert!(!stack.frame_exists(1));
    }

    #[test]
    fn active_level_override_affects_current_level_but_not_new_frame_numbering() {
        let mut stack = CallStack::new();
        let _g1 = stack.push_frame();
        assert_eq!(stack.current_level(), 1);
        stack.push_active_level(0);
        assert_eq!(stack.current_level(), 0);
        // A frame pushed while borrowing level 0 is still numbered from the
        // physical stack (2), not from the borrowed level (which would
        // collide with the existing level-1 frame).
        let level = stack.push_frame_raw();
        assert_eq!(level, 2);
        stack.pop_frame_raw();
        stack.pop_active_level();
        assert_eq!(stack.current_level(), 1);
    }

    #[test]
    fn uplevel_arg_parses_absolute_and_relative_forms() {
        let mut stack = CallStack::new();
        let _g1 = stack.push_frame();
        assert_eq!(stack.current_level(), 1);
        assert_eq!(stack.resolve_uplevel_arg("#0"), Some(0));
        assert_eq!(stack.resolve_uplevel_arg("1"), Some(0));
        assert_eq!(stack.resolve_uplevel_arg("0"), Some(1));
    }

    #[test]
    fn uplevel_arg_relative_past_global_is_none() {
        let stack = CallStack::new();
        assert_eq!(stack.resolve_uplevel_arg("1"), None);
    }
}
