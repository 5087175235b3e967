// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! The substitution engine.
//!
//! Walks a [`Word`]'s sub-token tree and produces the substituted string,
//! invoking [`crate::eval::eval_code`] recursively for `[...]` command
//! sub-tokens and resolving variable sub-tokens against the interpreter's
//! current frame. Substitution is a pure function of the tree and the
//! interpreter's current observations: nothing here is memoized, so a
//! command sub-token used twice in one word is evaluated twice.

use crate::error::{EvalError, Result};
use std::rc::Rc;
use tcl_env::Interp;
use tcl_syntax::source::{Code, Source};
use tcl_syntax::syntax::{SubToken, VariableIndex, Word};

/// Substitutes one already-parsed [`Word`] in the interpreter's current
/// frame, returning its value as a plain string. An expansion word's inner
/// word is substituted the same as any other composite word; splicing its
/// value as multiple arguments is the caller's job, since that happens at
/// the command's argument-list level, not here.
pub fn substitute_word(interp: &mut Interp, word: &Word) -> Result<String> {
    match word {
        Word::Simple(text) => Ok(text.clone()),
        Word::Composite(tokens) => substitute_tokens(interp, tokens),
        Word::Expansion(inner) => substitute_word(interp, inner),
    }
}

fn substitute_tokens(interp: &mut Interp, tokens: &[SubToken]) -> Result<String> {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&substitute_token(interp, token)?);
    }
    Ok(out)
}

fn substitute_token(interp: &mut Interp, token: &SubToken) -> Result<String> {
    match token {
        SubToken::Text(text) => Ok(text.clone()),
        SubToken::Backslash { decoded, .. } => Ok(decoded.to_string()),
        SubToken::Command { script, location } => {
            let code = Rc::new(Code {
                value: script.chars().collect(),
                source: Rc::new(Source::CommandSubst {
                    original: Box::new(location.clone()),
                }),
            });
            crate::eval::eval_code(interp, &code)
        }
        SubToken::Variable { name, index, .. } => substitute_variable(interp, name, index),
    }
}

fn substitute_variable(
    interp: &mut Interp,
    name: &str,
    index: &Option<VariableIndex>,
) -> Result<String> {
    let level = interp.stack.current_level();
    match index {
        None => interp
            .stack
            .variables()
            .get(level, name)
            .map_err(|err| EvalError::from_lookup(name, err)),
        Some(VariableIndex::Literal(key)) => interp
            .stack
            .variables()
            .get_element(level, name, key)
            .map_err(|err| EvalError::from_element_lookup(name, key, err)),
        Some(VariableIndex::Tokens(key_tokens)) => {
            let key = substitute_tokens(interp, key_tokens)?;
            interp
                .stack
                .variables()
                .get_element(level, name, &key)
                .map_err(|err| EvalError::from_element_lookup(name, &key, err))
        }
    }
}
