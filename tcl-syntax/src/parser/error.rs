// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! Parse errors

use crate::source::Location;
use thiserror::Error;

/// Cause of a parse [`Error`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum SyntaxError {
    /// A `"..."` word lacks its closing quote.
    #[error("unterminated double-quote")]
    UnterminatedDoubleQuote { opening_location: Location },
    /// A `{...}` word lacks its closing brace.
    #[error("unterminated brace")]
    UnterminatedBrace { opening_location: Location },
    /// A `[...]` command substitution lacks its closing bracket.
    #[error("unterminated command substitution (missing `]`)")]
    UnterminatedBracket { opening_location: Location },
    /// A `$name(...)` array index lacks its closing parenthesis.
    #[error("missing `)` in array index")]
    MissingCloseParen { opening_location: Location },
    /// A `${...}` braced variable name lacks its closing brace.
    #[error("missing `}}` in braced variable name")]
    MissingCloseBraceInVariableName { opening_location: Location },
    /// Non-whitespace, non-terminator text follows a close-quote or
    /// close-brace where a word boundary was expected.
    #[error("extra characters after close-quote or close-brace")]
    ExtraCharactersAfterClose,
    /// A backslash is the very last rune of the input, with nothing to escape.
    #[error("backslash at end of input")]
    IncompleteEscape,
}

/// A parse error: a [`SyntaxError`] plus the location it occurred at.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{cause} (at {location})")]
pub struct Error {
    pub cause: SyntaxError,
    pub location: Location,
}

/// Result type used throughout the parser.
pub type Result<T> = std::result::Result<T, Error>;
