// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! `uplevel` built-in
//!
//! `uplevel level script`: evaluates `script` with the
//! frame selected by `level` as the current frame for variable resolution.
//! `level` follows the `#N` absolute / bare-integer relative convention
//! shared with `upvar`.

use crate::support::{not_an_integer, signal_from_eval, wrong_num_args};
use tcl_env::{Interp, NativeResult, Signal};

pub fn main(interp: &mut Interp, args: &[String]) -> NativeResult {
    if args.len() != 3 {
        return Err(wrong_num_args("uplevel", "level script"));
    }
    let level = interp
        .stack
        .resolve_uplevel_arg(&args[1])
        .ok_or_else(|| not_an_integer(&args[1]))?;
    if !interp.stack.frame_exists(level) {
        return Err(Signal::Error(format!("no frame at level {level}")));
    }
    let mut guard = interp.enter_uplevel(level);
    let result = tcl_semantics::eval_str(&mut guard, &args[2]);
    signal_from_eval(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uplevel_evaluates_in_the_selected_frame() {
        let mut interp = Interp::new();
        interp.stack.set(0, "x", "outer".to_string()).unwrap();
        let mut guard = interp.push_frame();
        let args = vec![
            "uplevel".to_string(),
            "1".to_string(),
            "set x inner".to_string(),
        ];
        main(&mut guard, &args).unwrap();
        assert_eq!(guard.stack.get(0, "x").unwrap(), "inner");
    }

    #[test]
    fn missing_frame_is_an_error() {
        let mut interp = Interp::new();
        let args = vec!["uplevel".to_string(), "5".to_string(), "set x 1".to_string()];
        let err = main(&mut interp, &args).unwrap_err();
        assert!(matches!(err, Signal::Error(ref m) if m.contains("no frame at level")));
    }

    #[test]
    fn non_integer_level_is_a_type_error() {
        let mut interp = Interp::new();
        let args = vec![
            "uplevel".to_string(),
            "not-a-number".to_string(),
            "set x 1".to_string(),
        ];
        assert!(main(&mut interp, &args).is_err());
    }
}
