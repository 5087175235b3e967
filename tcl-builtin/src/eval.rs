// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! `eval` built-in
//!
//! `eval script`: evaluates `script` in the current frame and returns its
//! result. Does not push a frame of its own.

use crate::support::{signal_from_eval, wrong_num_args};
use tcl_env::{Interp, NativeResult};

pub fn main(interp: &mut Interp, args: &[String]) -> NativeResult {
    if args.len() != 2 {
        return Err(wrong_num_args("eval", "script"));
    }
    signal_from_eval(tcl_semantics::eval_str(interp, &args[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_runs_in_the_current_frame() {
        let mut interp = Interp::new();
        let args = vec!["eval".to_string(), "set x 5".to_string()];
        assert_eq!(main(&mut interp, &args).unwrap(), "5");
        assert_eq!(interp.stack.get(0, "x").unwrap(), "5");
    }

    #[test]
    fn eval_propagates_errors_unchanged() {
        let mut interp = Interp::new();
        let args = vec!["eval".to_string(), "nope".to_string()];
        let err = main(&mut interp, &args).unwrap_err();
        assert!(matches!(err, tcl_env::Signal::Error(ref m) if m.contains("invalid command name")));
    }
}
