// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! The interpreter's error state.
//!
//! Every error kind the evaluator can surface collapses to an [`EvalError`],
//! whose `Display` renders exactly the canonical message text (`can't read
//! "...": no such variable`, `invalid command name "..."`, `wrong # args:
//! ...`). The evaluator never hides an error from its
//! caller and never retries: an error unwinds straight to the nearest
//! catching layer, which in the core is the top-level `eval`.

use tcl_env::LookupError;
use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum EvalError {
    #[error("can't read \"{name}\": no such variable")]
    NoSuchVariable { name: String },
    #[error("can't read \"{name}({key})\": no such element in array")]
    NoSuchElement { name: String, key: String },
    #[error("can't read \"{name}\": variable is array")]
    IsArray { name: String },
    #[error("can't read \"{name}\": variable is scalar")]
    IsScalar { name: String },
    #[error("invalid command name \"{name}\"")]
    InvalidCommandName { name: String },
    #[error("wrong # args: should be \"{name} {param_spec}\"")]
    WrongNumArgs { name: String, param_spec: String },
    #[error("no frame at level {level}")]
    NoSuchFrame { level: usize },
    #[error("expected integer but got \"{text}\"")]
    NotAnInteger { text: String },
    #[error("{0}")]
    SyntaxError(#[from] tcl_syntax::parser::Error),
    /// A native command or nested evaluation failed; the message is
    /// surfaced unchanged.
    #[error("{0}")]
    Propagated(String),
    /// Not really an error: the `return` built-in's control-transfer
    /// signal, caught by the evaluator loop at the frame it's meant to
    /// unwind out of. If it escapes the outermost evaluation, the caller
    /// should treat it as a normal successful result.
    #[error("return outside of any evaluation")]
    Return(String),
}

impl EvalError {
    pub fn from_lookup(name: &str, err: LookupError) -> EvalError {
        match err {
            LookupError::NoSuchVariable => EvalError::NoSuchVariable {
                name: name.to_string(),
            },
            LookupError::IsArray => EvalError::IsArray {
                name: name.to_string(),
            },
            LookupError::IsScalar => EvalError::IsScalar {
                name: name.to_string(),
            },
            LookupError::NoSuchFrame(level) => EvalError::NoSuchFrame { level },
            LookupError::NoSuchElement => EvalError::NoSuchElement {
                name: name.to_string(),
                key: String::new(),
            },
        }
    }

    pub fn from_element_lookup(name: &str, key: &str, err: LookupError) -> EvalError {
        match err {
            LookupError::NoSuchElement => EvalError::NoSuchElement {
                name: name.to_string(),
                key: key.to_string(),
            },
            other => EvalError::from_lookup(name, other),
        }
    }
}

impl From<tcl_env::Signal> for EvalError {
    fn from(signal: tcl_env::Signal) -> Self {
        match signal {
            tcl_env::Signal::Error(message) => EvalError::Propagated(message),
            tcl_env::Signal::Return(value) => EvalError::Return(value),
        }
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;
