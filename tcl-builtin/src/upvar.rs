// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! `upvar` built-in
//!
//! `upvar level otherVar myVar`: aliases `myVar` in the current frame to
//! `otherVar` in the frame selected by `level`, using the same absolute
//! (`#N`)/relative level syntax as `uplevel`. The target need not already
//! exist; it is created on first write through the alias.

use crate::support::{not_an_integer, wrong_num_args};
use tcl_env::{Interp, NativeResult, Signal};

pub fn main(interp: &mut Interp, args: &[String]) -> NativeResult {
    if args.len() != 4 {
        return Err(wrong_num_args("upvar", "level otherVar myVar"));
    }
    let target_level = interp
        .stack
        .resolve_uplevel_arg(&args[1])
        .ok_or_else(|| not_an_integer(&args[1]))?;
    let target_name = &args[2];
    let local_name = &args[3];
    let local_level = interp.stack.current_level();

    interp
        .stack
        .variables()
        .alias(local_level, local_name, target_level, target_name)
        .map_err(|err| Signal::Error(err.to_string()))?;
    Ok(String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upvar_aliases_the_local_name_to_the_target_frame() {
        let mut interp = Interp::new();
        interp.stack.set(0, "g", "top".to_string()).unwrap();
        let mut guard = interp.push_frame();
        let args = vec![
            "upvar".to_string(),
            "1".to_string(),
            "g".to_string(),
            "local".to_string(),
        ];
        main(&mut guard, &args).unwrap();
        let level = guard.stack.current_level();
        assert_eq!(guard.stack.get(level, "local").unwrap(), "top");
        guard.stack.set(level, "local", "changed".to_string()).unwrap();
        assert_eq!(guard.stack.get(0, "g").unwrap(), "changed");
    }

    #[test]
    fn upvar_to_missing_frame_fails() {
        let mut interp = Interp::new();
        let args = vec![
            "upvar".to_string(),
            "#5".to_string(),
            "g".to_string(),
            "local".to_string(),
        ];
        assert!(main(&mut interp, &args).is_err());
    }
}
