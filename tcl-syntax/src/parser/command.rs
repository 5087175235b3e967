// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! The command-boundary rule and the [`Parser`] type
//!
//! A command is terminated by an unescaped newline or semicolon, or, in
//! nested mode, by an unescaped `]`. Leading whitespace (including
//! backslash-newline) and full-line `#` comments are skipped between
//! commands; a `#` only introduces a comment when it appears where the
//! first word of a command would begin.

use super::error::{Error, Result, SyntaxError};
use super::lex::{decode_escape, is_blank, Lexer};
use crate::source::{Code, Location};
use crate::syntax::{Command, Script};
use std::rc::Rc;

/// A recursive-descent parser over a borrowed rune slice.
///
/// `Parser` owns a [`Lexer`] cursor; word-level parsing methods (word-start
/// dispatch, in-word tokenization, variable-name recognition) are
/// implemented in [`super::word`] as a second `impl` block on this type.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(runes: &'a [char], code: Rc<Code>) -> Self {
        Parser {
            lexer: Lexer::new(runes, code),
        }
    }

    pub fn lexer(&self) -> &Lexer<'a> {
        &self.lexer
    }

    pub(super) fn lexer_mut(&mut self) -> &mut Lexer<'a> {
        &mut self.lexer
    }

    /// Parses a sequence of commands.
    ///
    /// If `nested_opening` is `Some`, this is a nested parse for a `[...]`
    /// command substitution: parsing stops at (and consumes) the first
    /// unescaped `]`, and reaching end of input first is an
    /// [`UnterminatedBracket`](SyntaxError::UnterminatedBracket) error
    /// blamed on the given opening location. If `None`, this is a top-level
    /// parse that simply runs to end of input.
    pub fn parse_script_body(&mut self, nested_opening: Option<Location>) -> Result<Script> {
        let nested = nested_opening.is_some();
        let mut commands = Vec::new();
        loop {
            self.skip_separators_and_comments();
            if nested && self.lexer.peek() == Some(']') {
                self.lexer.advance();
                return Ok(Script { commands });
            }
            if self.lexer.at_end() {
                if let Some(opening_location) = nested_opening {
                    return Err(Error {
                        cause: SyntaxError::UnterminatedBracket { opening_location },
                        location: self.lexer.here(),
                    });
                }
                return Ok(Script { commands });
            }
            commands.push(self.parse_command(nested)?);
        }
    }

    /// Parses one command: a run of words up to (but not including) the
    /// next command terminator.
    fn parse_command(&mut self, nested: bool) -> Result<Command> {
        let start = self.lexer.pos();
        log::trace!("parsing command at rune {start}");
        let mut words = Vec::new();
        loop {
            self.skip_blanks_and_continuations();
            match self.lexer.peek() {
                None => break,
                Some('\n') | Some(';') => break,
                Some(']') if nested => break,
                _ => words.push(self.parse_word(nested)?),
            }
        }
        log::trace!("parsed command with {} word(s)", words.len());
        Ok(Command {
            words,
            location: self.lexer.location(start..self.lexer.pos()),
        })
    }

    /// Skips whitespace, backslash-newline continuations, full-line `#`
    /// comments, and command terminators (`;`, newline). Called once before
    /// each command, at a genuine command-start position, which is exactly
    /// where `#` is allowed to introduce a comment.
    fn skip_separators_and_comments(&mut self) {
        loop {
            match self.lexer.peek() {
                Some(c) if is_blank(c) => {
                    self.lexer.advance();
                }
                Some('\n') | Some(';') => {
                    self.lexer.advance();
                }
                Some('\\') if self.lexer.peek_at(1) == Some('\n') => {
                    let (_, len) =
                        decode_escape(self.lexer.remaining()).expect("checked pattern above");
                    self.lexer.skip(len);
                }
                Some('#') => {
                    while let Some(c) = self.lexer.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.lexer.advance();
                    }
                }
                _ => break,
            }
        }
    }

    /// Skips whitespace and backslash-newline continuations between the
    /// words of one command. Unlike
    /// [`skip_separators_and_comments`](Self::skip_separators_and_comments),
    /// this never treats `#` as a comment: that only happens before the
    /// first word of a command.
    pub(super) fn skip_blanks_and_continuations(&mut self) {
        loop {
            match self.lexer.peek() {
                Some(c) if is_blank(c) => {
                    self.lexer.advance();
                }
                Some('\\') if self.lexer.peek_at(1) == Some('\n') => {
                    let (_, len) =
                        decode_escape(self.lexer.remaining()).expect("checked pattern above");
                    self.lexer.skip(len);
                }
                _ => break,
            }
        }
    }
}
