// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! `proc` built-in
//!
//! `proc name args body`: parses `args` as a Tcl list of formal parameters,
//! each either a bare name or a two-element sublist `{name default}`, parses
//! `body` as a script, and registers `name` as a user-defined command. The
//! last parameter may be named `args`, in which case it becomes the
//! open-ended catch-all tail.

use crate::support::wrong_num_args;
use std::rc::Rc;
use tcl_env::command::Body;
use tcl_env::{Interp, NativeResult, Param};
use tcl_syntax::source::unknown_code;

pub fn main(interp: &mut Interp, args: &[String]) -> NativeResult {
    if args.len() != 4 {
        return Err(wrong_num_args("proc", "name args body"));
    }
    let name = args[1].clone();
    let params = parse_params(&args[2])?;
    let has_args_tail = params.last().is_some_and(|p| p.name == "args");

    let code = unknown_code(&args[3]);
    let (body, _consumed) = tcl_syntax::parser::parse(&code, false)
        .map_err(|err| tcl_env::Signal::Error(err.to_string()))?;

    interp.commands.register(
        name,
        Body::User {
            params,
            has_args_tail,
            body: Rc::new(body),
        },
    );
    Ok(String::new())
}

fn parse_params(list: &str) -> Result<Vec<Param>, tcl_env::Signal> {
    tcl_quote::split(list)
        .iter()
        .map(|element| {
            let fields = tcl_quote::split(element);
            match fields.len() {
                1 => Ok(Param {
                    name: fields[0].clone(),
                    default: None,
                }),
                2 => Ok(Param {
                    name: fields[0].clone(),
                    default: Some(fields[1].clone()),
                }),
                _ => Err(tcl_env::Signal::Error(format!(
                    "too many fields in argument specifier \"{element}\""
                ))),
            }
        })
        .collect()
}
