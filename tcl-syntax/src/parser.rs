// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! The command parser
//!
//! This module turns a rune sequence into a [`Script`](crate::syntax::Script)
//! without performing any substitution. [`lex`] provides the
//! low-level rune cursor and escape decoder; [`command`] implements the
//! command-boundary rule and owns the [`Parser`] type; [`word`] implements
//! word-start dispatch, in-word tokenization, and variable-name recognition.

pub mod command;
pub mod error;
pub mod lex;
#[cfg(test)]
mod tests;
pub mod word;

pub use command::Parser;
pub use error::{Error, Result, SyntaxError};

use crate::source::Code;
use crate::syntax::Script;
use std::rc::Rc;

/// Parses `code` as a whole script (`nested = false`) or as one nested
/// command-substitution body up to the first unescaped `]` (`nested =
/// true`).
///
/// Returns the parsed script and the number of runes consumed. For
/// `nested = true`, the consumed count includes the closing `]`.
pub fn parse(code: &Rc<Code>, nested: bool) -> Result<(Script, usize)> {
    let mut parser = Parser::new(&code.value, Rc::clone(code));
    let opening = if nested {
        Some(parser.lexer().here())
    } else {
        None
    };
    let script = parser.parse_script_body(opening)?;
    Ok((script, parser.lexer().pos()))
}
