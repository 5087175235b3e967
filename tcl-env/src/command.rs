// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! The command table: registered native and user-defined commands.
//!
//! Commands are process-wide, owned by the [`Interp`](crate::Interp)
//! alongside the call stack. Redefining a name replaces the previous
//! binding; there is no versioning or shadowing.

use std::collections::HashMap;
use std::rc::Rc;
use tcl_syntax::syntax::Script;

/// Outcome of a native command beyond a plain successful result string.
///
/// `Return` is not an error: it is the control-transfer signal the
/// supplemental `return` built-in raises to unwind out of the script
/// currently being evaluated (proc body or top-level `eval`/`uplevel`
/// script), carrying the value to return. `tcl-semantics` is responsible for
/// catching it at the right layer; if it escapes the outermost evaluation,
/// the CLI driver treats it like a normal successful result.
#[derive(Clone, Debug)]
pub enum Signal {
    Error(String),
    Return(String),
}

pub type NativeResult = Result<String, Signal>;

/// A native command implementation: takes the interpreter and the already
/// word-substituted actual arguments (including argument 0, the command
/// name), returns the command's result string or a [`Signal`].
pub type NativeFn = fn(&mut crate::Interp, &[String]) -> NativeResult;

/// One formal parameter of a user-defined procedure.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Param {
    pub name: String,
    pub default: Option<String>,
}

/// The body of a registered command.
#[derive(Clone)]
pub enum Body {
    Native(NativeFn),
    User {
        params: Vec<Param>,
        /// Whether the last parameter is the `args` catch-all.
        has_args_tail: bool,
        body: Rc<Script>,
    },
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Native(_) => write!(f, "Body::Native(..)"),
            Body::User {
                params,
                has_args_tail,
                ..
            } => f
                .debug_struct("Body::User")
                .field("params", params)
                .field("has_args_tail", has_args_tail)
                .finish_non_exhaustive(),
        }
    }
}

/// A registered command: its name and [`Body`].
#[derive(Clone, Debug)]
pub struct Command {
    pub name: String,
    pub body: Body,
}

impl Command {
    /// Required and maximum actual-argument counts, not counting the
    /// command name itself. `max` is `None` when the command has an `args`
    /// catch-all or is native (native commands police their own arity).
    pub fn arity(&self) -> (usize, Option<usize>) {
        match &self.body {
            Body::Native(_) => (0, None),
            Body::User {
                params,
                has_args_tail,
                ..
            } => {
                let fixed_count = if *has_args_tail {
                    params.len() - 1
                } else {
                    params.len()
                };
                // Binding is positional: a parameter with no default still
                // forces every parameter before it to be supplied, since an
                // actual is matched to a parameter by index, not by name.
                let required = params[..fixed_count]
                    .iter()
                    .rposition(|p| p.default.is_none())
                    .map_or(0, |idx| idx + 1);
                let max = if *has_args_tail {
                    None
                } else {
                    Some(params.len())
                };
                (required, max)
            }
        }
    }

    /// Renders the canonical `wrong # args` parameter spec, e.g.
    /// `x ?y? args`.
    pub fn param_spec(&self) -> String {
        match &self.body {
            Body::Native(_) => String::new(),
            Body::User {
                params,
                has_args_tail,
                ..
            } => {
                let mut parts = Vec::new();
                for (i, param) in params.iter().enumerate() {
                    let is_tail = *has_args_tail && i + 1 == params.len();
                    if is_tail {
                        parts.push(param.name.clone());
                    } else if param.default.is_some() {
                        parts.push(format!("?{}?", param.name));
                    } else {
                        parts.push(param.name.clone());
                    }
                }
                parts.join(" ")
            }
        }
    }
}

/// Process-wide table of registered commands.
#[derive(Clone, Debug, Default)]
pub struct CommandTable {
    commands: HashMap<String, Command>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, body: Body) {
        let name = name.into();
        self.commands.insert(
            name.clone(),
            Command {
                name,
                body,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Option<()> {
        let mut command = self.commands.remove(old_name)?;
        if new_name.is_empty() {
            return Some(());
        }
        command.name = new_name.to_string();
        self.commands.insert(new_name.to_string(), command);
        Some(())
    }
}
