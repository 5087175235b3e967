// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! The evaluator loop.
//!
//! Turns an already-parsed [`Script`] (or raw source text) into its result
//! string by substituting and dispatching each command in turn, in the
//! interpreter's current frame. Neither function here pushes a frame of its
//! own: evaluating a literal script does not introduce a procedure frame,
//! only a procedure *call* does (handled in
//! [`crate::command::invoke_user_command`]). A `return` signal is not
//! special-cased here; it propagates like any other error up to whichever
//! layer is supposed to catch it (a procedure call, or the driver for a
//! truly top-level script).

use crate::error::Result;
use std::rc::Rc;
use tcl_env::Interp;
use tcl_syntax::source::{unknown_code, Code};
use tcl_syntax::syntax::{Script, Word};

/// Evaluates an already-parsed script in the interpreter's current frame,
/// returning the last command's result (or the empty string if the script
/// had no commands).
pub fn eval_script(interp: &mut Interp, script: &Script) -> Result<String> {
    let mut last = String::new();
    for command in &script.commands {
        let mut actuals = Vec::with_capacity(command.words.len());
        for word in &command.words {
            let value = crate::expansion::substitute_word(interp, word)?;
            if matches!(word, Word::Expansion(_)) {
                actuals.extend(tcl_quote::split(&value));
            } else {
                actuals.push(value);
            }
        }
        if actuals.is_empty() {
            continue;
        }
        last = crate::command::dispatch(interp, &actuals).inspect_err(|err| {
            log::debug!("command failed: {err}");
        })?;
    }
    Ok(last)
}

/// Parses `source` as a whole script and evaluates it in the interpreter's
/// current frame. Used for the top-level driver and for the `eval`/
/// `uplevel` built-ins, neither of which has a more specific provenance to
/// attach than "this text, from nowhere in particular".
pub fn eval_str(interp: &mut Interp, source: &str) -> Result<String> {
    eval_code(interp, &unknown_code(source))
}

/// Parses and evaluates the text behind `code`, whatever its
/// [`Source`](tcl_syntax::source::Source). Used directly by `[...]` command
/// substitution ([`crate::expansion::substitute_token`]) so that a parse or
/// evaluation error deep inside a substituted script still carries the
/// `Source::CommandSubst` breadcrumb back to the `[` that triggered it.
pub fn eval_code(interp: &mut Interp, code: &Rc<Code>) -> Result<String> {
    let (script, _consumed) = tcl_syntax::parser::parse(code, false)?;
    eval_script(interp, &script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;

    #[test]
    fn empty_script_returns_empty_string() {
        let mut interp = Interp::new();
        assert_eq!(eval_str(&mut interp, "").unwrap(), "");
    }

    #[test]
    fn result_is_the_last_command_in_the_script() {
        let mut interp = Interp::new();
        crate::builtin_test_support::register_echo(&mut interp);
        assert_eq!(
            eval_str(&mut interp, "echo first\necho second").unwrap(),
            "second"
        );
    }

    #[test]
    fn unknown_command_name_is_a_dispatch_error() {
        let mut interp = Interp::new();
        let err = eval_str(&mut interp, "nope").unwrap_err();
        assert_eq!(
            err,
            EvalError::InvalidCommandName {
                name: "nope".to_string()
            }
        );
    }

    #[test]
    fn propagated_native_error_stops_the_script() {
        let mut interp = Interp::new();
        crate::builtin_test_support::register_echo(&mut interp);
        crate::builtin_test_support::register_fail(&mut interp);
        let err = eval_str(&mut interp, "fail boom\necho never").unwrap_err();
        assert_eq!(err, EvalError::Propagated("boom".to_string()));
    }

    #[test]
    fn unterminated_brace_is_a_syntax_error() {
        let mut interp = Interp::new();
        assert!(matches!(
            eval_str(&mut interp, "echo {unterminated"),
            Err(EvalError::SyntaxError(_))
        ));
    }

    #[test]
    fn blank_and_comment_lines_produce_no_commands() {
        let mut interp = Interp::new();
        crate::builtin_test_support::register_echo(&mut interp);
        assert_eq!(
            eval_str(&mut interp, "# a comment\n\necho hi").unwrap(),
            "hi"
        );
    }
}
