// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! The token tree produced by the command parser
//!
//! A [`Script`] is an ordered sequence of [`Command`]s. A `Command` is an
//! ordered sequence of [`Word`]s. A `Word` is a [simple word](Word::Simple),
//! a [composite word](Word::Composite) made of [`SubToken`]s, or an
//! [expansion word](Word::Expansion) (`{*}word`).
//!
//! No substitution happens in this module: a [`SubToken::Command`] carries
//! the raw, unparsed source text between the brackets, and a
//! [`SubToken::Variable`] carries the name and index text/tokens as parsed,
//! not looked up. Walking this tree into a string is the job of the
//! substitution engine in `tcl-semantics`.

use crate::source::Location;

/// One constituent of a [`Word`].
///
/// Which variants can appear in a given word is constrained by where the
/// word came from: a braced word's interior is tokenized so that only
/// [`SubToken::Text`] and line-continuation [`SubToken::Backslash`] tokens
/// ever occur in it; the parser enforces this by construction rather than by
/// a runtime flag.
#[derive(Clone, Debug, PartialEq)]
pub enum SubToken {
    /// Literal text, copied verbatim during substitution.
    Text(String),
    /// A decoded backslash escape. The line-continuation form
    /// (`\<newline><whitespace>*`) always decodes to a single U+0020 and is
    /// the only backslash form recognized inside a braced word.
    Backslash { decoded: char, location: Location },
    /// The raw source text between a matched `[` and `]`, exclusive of the
    /// brackets. Substituted by parsing and evaluating it as a script.
    Command { script: String, location: Location },
    /// A `$name`, `${name}`, `$name(index)` or `${name(index)}` reference.
    Variable {
        name: String,
        index: Option<VariableIndex>,
        location: Location,
    },
}

impl SubToken {
    pub fn location(&self) -> &Location {
        match self {
            SubToken::Text(_) => unreachable!("Text sub-tokens carry no location"),
            SubToken::Backslash { location, .. }
            | SubToken::Command { location, .. }
            | SubToken::Variable { location, .. } => location,
        }
    }
}

/// The index part of an array-valued [`SubToken::Variable`] reference.
#[derive(Clone, Debug, PartialEq)]
pub enum VariableIndex {
    /// `${name(index)}` form: the braced spelling performs no substitution
    /// on the index text; it is used literally.
    Literal(String),
    /// `$name(...)` form: the index is itself a sub-token sequence and is
    /// substituted like any composite word.
    Tokens(Vec<SubToken>),
}

/// One argument-forming constituent of a [`Command`].
#[derive(Clone, Debug, PartialEq)]
pub enum Word {
    /// A single literal text sub-token; the fast path for bare identifiers
    /// and braced words whose interior needed no line-continuation folding.
    Simple(String),
    /// An ordered sequence of sub-tokens whose substituted
    /// string-concatenation yields the word's value.
    Composite(Vec<SubToken>),
    /// A `{*}word` expansion. After the inner word is substituted, its
    /// value is re-parsed as a Tcl list and the elements are spliced into
    /// the enclosing command's argument list in place of this one word.
    Expansion(Box<Word>),
}

impl Word {
    /// Returns the word's literal text if it is a [`Word::Simple`],
    /// regardless of what's inside an `Expansion`.
    pub fn as_simple(&self) -> Option<&str> {
        match self {
            Word::Simple(s) => Some(s),
            _ => None,
        }
    }
}

/// One unit of execution: a sequence of (not yet substituted) words.
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    pub words: Vec<Word>,
    /// Location of the first rune of the command (its first word, or the
    /// position where an empty command would have started).
    pub location: Location,
}

/// The result of parsing a whole script, or one `nested` command
/// substitution body, into a sequence of commands.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Script {
    pub commands: Vec<Command>,
}

impl Script {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
