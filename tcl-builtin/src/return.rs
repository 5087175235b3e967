// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! `return` built-in
//!
//! `return ?value?`: raises the `Signal::Return` control-transfer signal
//! with `value` (default empty), caught by the procedure-call boundary in
//! `tcl-semantics` or, for a `return` outside any procedure, by the
//! top-level driver.

use crate::support::wrong_num_args;
use tcl_env::{Interp, NativeResult, Signal};

pub fn main(_interp: &mut Interp, args: &[String]) -> NativeResult {
    if args.len() > 2 {
        return Err(wrong_num_args("return", "?value?"));
    }
    let value = args.get(1).cloned().unwrap_or_default();
    Err(Signal::Return(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_with_no_value_signals_empty_return() {
        let mut interp = Interp::new();
        let args = vec!["return".to_string()];
        let err = main(&mut interp, &args).unwrap_err();
        assert!(matches!(err, Signal::Return(ref v) if v.is_empty()));
    }

    #[test]
    fn return_with_a_value_carries_it_in_the_signal() {
        let mut interp = Interp::new();
        let args = vec!["return".to_string(), "42".to_string()];
        let err = main(&mut interp, &args).unwrap_err();
        assert!(matches!(err, Signal::Return(ref v) if v == "42"));
    }

    #[test]
    fn return_is_caught_at_a_proc_call_boundary() {
        let mut interp = Interp::new();
        crate::register_all(&mut interp);
        tcl_semantics::eval_str(
            &mut interp,
            "proc f {} { return 1; return 2 }",
        )
        .unwrap();
        assert_eq!(tcl_semantics::eval_str(&mut interp, "f").unwrap(), "1");
    }
}
