// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! `if` built-in
//!
//! `if condition body ?elseif condition body? ... ?else body?`. There is no
//! bundled expression language, so a condition is not a sub-language of its
//! own: it is whatever value word substitution already produced for that
//! argument (a literal `0`/`1`, a substituted variable, or a
//! command-substitution result), and it is false exactly when that value
//! is the empty string or `"0"`, true otherwise. Branch bodies are ordinary
//! scripts, evaluated with [`tcl_semantics::eval_str`] in the current
//! frame, same as `eval`.

use crate::support::{signal_from_eval, wrong_num_args};
use tcl_env::{Interp, NativeResult, Signal};

fn is_true(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

pub fn main(interp: &mut Interp, args: &[String]) -> NativeResult {
    if args.len() < 3 {
        return Err(wrong_num_args(
            "if",
            "condition ?then? body elseif condition ?then? body ... ?else? ?body?",
        ));
    }

    let mut rest = &args[1..];
    loop {
        let condition = rest
            .first()
            .ok_or_else(|| wrong_num_args("if", "condition body"))?;
        let body = rest
            .get(1)
            .ok_or_else(|| wrong_num_args("if", "condition body"))?;

        if is_true(condition) {
            return signal_from_eval(tcl_semantics::eval_str(interp, body));
        }

        rest = &rest[2..];
        match rest.first().map(String::as_str) {
            Some("elseif") => {
                rest = &rest[1..];
            }
            Some("else") => {
                let body = rest
                    .get(1)
                    .ok_or_else(|| wrong_num_args("if", "else body"))?;
                return signal_from_eval(tcl_semantics::eval_str(interp, body));
            }
            Some(other) => {
                return Err(Signal::Error(format!(
                    "invalid if syntax near \"{other}\""
                )))
            }
            None => return Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn true_condition_runs_the_first_branch() {
        let mut interp = Interp::new();
        let args = vec![
            "if".to_string(),
            "1".to_string(),
            "set x yes".to_string(),
        ];
        main(&mut interp, &args).unwrap();
        assert_eq!(interp.stack.get(0, "x").unwrap(), "yes");
    }

    #[test]
    fn false_condition_falls_through_to_else() {
        let mut interp = Interp::new();
        let args = vec![
            "if".to_string(),
            "0".to_string(),
            "set x yes".to_string(),
            "else".to_string(),
            "set x no".to_string(),
        ];
        main(&mut interp, &args).unwrap();
        assert_eq!(interp.stack.get(0, "x").unwrap(), "no");
    }

    #[test]
    fn elseif_chain_picks_the_first_true_branch() {
        let mut interp = Interp::new();
        let args = vec![
            "if".to_string(),
            "0".to_string(),
            "set x a".to_string(),
            "elseif".to_string(),
            "1".to_string(),
            "set x b".to_string(),
            "elseif".to_string(),
            "1".to_string(),
            "set x c".to_string(),
        ];
        main(&mut interp, &args).unwrap();
        assert_eq!(interp.stack.get(0, "x").unwrap(), "b");
    }

    #[test]
    fn no_branch_taken_returns_empty_string() {
        let mut interp = Interp::new();
        let args = vec!["if".to_string(), "0".to_string(), "set x a".to_string()];
        assert_eq!(main(&mut interp, &args).unwrap(), "");
    }

    #[test]
    fn empty_string_condition_is_false() {
        let mut interp = Interp::new();
        let args = vec![
            "if".to_string(),
            String::new(),
            "set x a".to_string(),
            "else".to_string(),
            "set x b".to_string(),
        ];
        main(&mut interp, &args).unwrap();
        assert_eq!(interp.stack.get(0, "x").unwrap(), "b");
    }
}
