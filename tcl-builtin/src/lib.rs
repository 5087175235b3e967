// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
// tcl-builtin: the bootstrap set of native commands for the Tcl-dialect
// interpreter core.

#![forbid(unsafe_code)]

//! The bootstrap command set: `set`, `puts`, `proc`, `eval`, `uplevel`,
//! `upvar`, `global`, `if`, `list`, `cd`, `pwd`, plus the supplemental
//! commands `incr`, `append`, `rename`, `return`. Each command lives in its
//! own module, named after
//! the command itself; [`register_all`] wires every one of them into a
//! fresh [`Interp`]'s command table.
//!
//! None of these modules know about each other; `tcl-semantics` dispatches
//! to each `main` by function pointer, never by name lookup within this
//! crate.

mod support;

pub mod append;
pub mod cd;
pub mod eval;
pub mod global;
pub mod r#if;
pub mod incr;
pub mod list;
pub mod proc;
pub mod puts;
pub mod pwd;
pub mod rename;
pub mod r#return;
pub mod set;
pub mod uplevel;
pub mod upvar;

use tcl_env::command::Body;
use tcl_env::Interp;

/// Registers every bootstrap command in `interp`'s command table,
/// overwriting any existing binding with the same name.
pub fn register_all(interp: &mut Interp) {
    let natives: &[(&str, tcl_env::NativeFn)] = &[
        ("set", set::main),
        ("puts", puts::main),
        ("proc", proc::main),
        ("eval", eval::main),
        ("uplevel", uplevel::main),
        ("upvar", upvar::main),
        ("global", global::main),
        ("if", r#if::main),
        ("list", list::main),
        ("cd", cd::main),
        ("pwd", pwd::main),
        ("incr", incr::main),
        ("append", append::main),
        ("rename", rename::main),
        ("return", r#return::main),
    ];
    for (name, native) in natives {
        interp.commands.register(*name, Body::Native(*native));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_all_installs_every_bootstrap_command() {
        let mut interp = Interp::new();
        register_all(&mut interp);
        for name in [
            "set", "puts", "proc", "eval", "uplevel", "upvar", "global", "if", "list", "cd",
            "pwd", "incr", "append", "rename", "return",
        ] {
            assert!(interp.commands.get(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn a_user_proc_can_call_bootstrap_commands() {
        let mut interp = Interp::new();
        register_all(&mut interp);
        tcl_semantics::eval_str(&mut interp, "proc add {a b} { return [list $a $b] }").unwrap();
        assert_eq!(
            tcl_semantics::eval_str(&mut interp, "add 1 2").unwrap(),
            "1 2"
        );
    }

    #[test]
    fn array_element_lookup_with_a_substituted_index() {
        let mut interp = Interp::new();
        register_all(&mut interp);
        tcl_semantics::eval_str(&mut interp, "set a(1) foo; set i 1").unwrap();
        assert_eq!(
            tcl_semantics::eval_str(&mut interp, "list $a($i)").unwrap(),
            "foo"
        );
    }

    #[test]
    fn a_proc_with_a_default_parameter_can_be_called_with_or_without_it() {
        let mut interp = Interp::new();
        register_all(&mut interp);
        tcl_semantics::eval_str(&mut interp, "proc f {a {b 10}} { list $a $b }").unwrap();
        assert_eq!(
            tcl_semantics::eval_str(&mut interp, "list [f 1] [f 1 2]").unwrap(),
            "{1 10} {1 2}"
        );
    }

    #[test]
    fn braced_text_suppresses_backslash_substitution_but_double_quotes_perform_it() {
        let mut interp = Interp::new();
        register_all(&mut interp);
        tcl_semantics::eval_str(&mut interp, "set s {a\\nb}").unwrap();
        assert_eq!(
            tcl_semantics::eval_str(&mut interp, "set s2 $s").unwrap(),
            "a\\nb"
        );
        tcl_semantics::eval_str(&mut interp, "set s \"a\\nb\"").unwrap();
        assert_eq!(
            tcl_semantics::eval_str(&mut interp, "set s2 $s").unwrap(),
            "a\nb"
        );
    }

    #[test]
    fn upvar_lets_an_inner_proc_update_an_outer_frames_variable() {
        let mut interp = Interp::new();
        register_all(&mut interp);
        tcl_semantics::eval_str(
            &mut interp,
            "proc inner {} { upvar 1 x y; set y 2 }\n\
             proc outer {} { set x 1; inner; return $x }",
        )
        .unwrap();
        assert_eq!(
            tcl_semantics::eval_str(&mut interp, "outer").unwrap(),
            "2"
        );
        let err = tcl_semantics::eval_str(&mut interp, "set x").unwrap_err();
        assert!(matches!(err, tcl_semantics::EvalError::Propagated(ref m) if m.contains("no such variable")));
    }

    #[test]
    fn an_unterminated_double_quote_is_a_syntax_error_with_no_side_effects() {
        let mut interp = Interp::new();
        register_all(&mut interp);
        let err = tcl_semantics::eval_str(&mut interp, "puts \"unterminated").unwrap_err();
        let message = err.to_string();
        assert!(
            message.contains("double-quote") || message.contains("double quote"),
            "unexpected message: {message}"
        );
        let err = tcl_semantics::eval_str(&mut interp, "set x").unwrap_err();
        assert!(matches!(err, tcl_semantics::EvalError::Propagated(ref m) if m.contains("no such variable")));
    }
}
