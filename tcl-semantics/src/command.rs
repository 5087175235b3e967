// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! The command dispatcher: name resolution, arity checking, argument
//! binding, and body invocation.

use crate::error::{EvalError, Result};
use tcl_env::command::{Body, Command};
use tcl_env::Interp;

/// Dispatches `args` (`args[0]` is the command name) against the
/// interpreter's command table: resolves the name, checks arity, binds
/// parameters, and invokes the body. The caller (the evaluator loop) is
/// responsible for producing `args` via substitution and `{*}` splicing
/// first.
pub fn dispatch(interp: &mut Interp, args: &[String]) -> Result<String> {
    let name = &args[0];
    let actuals = &args[1..];
    log::debug!("dispatching \"{name}\" with {} actual(s)", actuals.len());

    let command = interp.commands.get(name).cloned().ok_or_else(|| {
        log::debug!("invalid command name \"{name}\"");
        EvalError::InvalidCommandName { name: name.clone() }
    })?;

    match &command.body {
        Body::Native(native) => native(interp, args).map_err(EvalError::from),
        Body::User { .. } => invoke_user_command(interp, &command, actuals),
    }
}

fn invoke_user_command(interp: &mut Interp, command: &Command, actuals: &[String]) -> Result<String> {
    let Body::User {
        params,
        has_args_tail,
        body,
    } = &command.body
    else {
        unreachable!("invoke_user_command is only called for Body::User");
    };

    let (min, max) = command.arity();
    let within_max = max.is_none_or(|max| actuals.len() <= max);
    if actuals.len() < min || !within_max {
        return Err(EvalError::WrongNumArgs {
            name: command.name.clone(),
            param_spec: command.param_spec(),
        });
    }

    let fixed_count = if *has_args_tail {
        params.len() - 1
    } else {
        params.len()
    };
    let bound: Vec<(String, String)> = params
        .iter()
        .take(fixed_count)
        .enumerate()
        .map(|(i, param)| {
            let value = actuals
                .get(i)
                .cloned()
                .or_else(|| param.default.clone())
                .expect("arity check guarantees a value or default for every fixed parameter");
            (param.name.clone(), value)
        })
        .collect();
    let tail = (*has_args_tail).then(|| {
        let tail_name = params.last().expect("has_args_tail implies one parameter").name.clone();
        let tail_value = actuals.get(fixed_count..).unwrap_or(&[]).join(" ");
        (tail_name, tail_value)
    });
    let body = body.clone();

    let mut guard = interp.push_frame();
    let level = guard.stack.current_level();
    {
        let mut vars = guard.stack.variables();
        for (name, value) in &bound {
            vars.set(level, name, value.clone())
                .expect("the just-pushed frame always exists");
        }
        if let Some((name, value)) = &tail {
            vars.set(level, name, value.clone())
                .expect("the just-pushed frame always exists");
        }
    }

    let result = crate::eval::eval_script(&mut guard, &body);
    match result {
        Err(EvalError::Return(value)) => Ok(value),
        other => other,
    }
}
