// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! Word-start dispatch, in-word tokenization, and variable-name recognition
//!
//! This module adds a second `impl Parser` block to the type defined in
//! [`super::command`].

use super::command::Parser;
use super::error::{Error, Result, SyntaxError};
use super::lex::{decode_escape, is_blank, Terminator, TerminatorMask};
use crate::syntax::{SubToken, VariableIndex, Word};
use enumset::EnumSet;

impl<'a> Parser<'a> {
    /// Word-start dispatch: `{*}`-expansion, then quoted, braced, or bare.
    pub(crate) fn parse_word(&mut self, nested: bool) -> Result<Word> {
        if self.at_expansion_prefix(nested) {
            self.lexer_mut().skip(3);
            let inner = self.parse_word(nested)?;
            return Ok(Word::Expansion(Box::new(inner)));
        }

        match self.lexer().peek() {
            Some('"') => {
                let tokens = self.parse_quoted_word()?;
                self.check_word_boundary(nested)?;
                Ok(finish_word(tokens))
            }
            Some('{') => {
                let tokens = self.parse_braced_word()?;
                self.check_word_boundary(nested)?;
                Ok(finish_word(tokens))
            }
            _ => {
                let mut mask = Terminator::Whitespace | Terminator::CommandEnd;
                if nested {
                    mask |= Terminator::CloseBracket;
                }
                let tokens = self.tokenize_until(mask)?;
                Ok(finish_word(tokens))
            }
        }
    }

    /// True iff the next four runes are `{*}` followed by a non-blank,
    /// non-terminator rune.
    fn at_expansion_prefix(&self, nested: bool) -> bool {
        if !self.lexer().starts_with("{*}") {
            return false;
        }
        match self.lexer().peek_at(3) {
            Some(c) if is_blank(c) || c == '\n' || c == ';' => false,
            Some(']') if nested => false,
            Some(_) => true,
            None => false,
        }
    }

    /// The rune immediately after a close-quote or close-brace must be
    /// whitespace, a command terminator, or (in nested mode) `]`.
    fn check_word_boundary(&mut self, nested: bool) -> Result<()> {
        match self.lexer().peek() {
            None => Ok(()),
            Some(c) if is_blank(c) || c == '\n' || c == ';' => Ok(()),
            Some(']') if nested => Ok(()),
            _ => Err(Error {
                cause: SyntaxError::ExtraCharactersAfterClose,
                location: self.lexer().here(),
            }),
        }
    }

    fn parse_quoted_word(&mut self) -> Result<Vec<SubToken>> {
        let open_pos = self.lexer().pos();
        self.lexer_mut().advance();
        let tokens = self.tokenize_until(EnumSet::only(Terminator::Quote))?;
        match self.lexer().peek() {
            Some('"') => {
                self.lexer_mut().advance();
                Ok(tokens)
            }
            _ => Err(Error {
                cause: SyntaxError::UnterminatedDoubleQuote {
                    opening_location: self.lexer().location(open_pos..open_pos + 1),
                },
                location: self.lexer().here(),
            }),
        }
    }

    /// Scans a `{...}` word. Braces nest; `\{` and `\}` don't count toward
    /// the nesting depth (they're emitted as two literal text runes). The
    /// only substitution recognized in the interior is line continuation.
    fn parse_braced_word(&mut self) -> Result<Vec<SubToken>> {
        let open_pos = self.lexer().pos();
        self.lexer_mut().advance();
        let mut depth = 1i32;
        let mut tokens = Vec::new();
        let mut text_start = self.lexer().pos();
        loop {
            match self.lexer().peek() {
                None => {
                    return Err(Error {
                        cause: SyntaxError::UnterminatedBrace {
                            opening_location: self.lexer().location(open_pos..open_pos + 1),
                        },
                        location: self.lexer().here(),
                    });
                }
                Some('\\') if self.lexer().peek_at(1) == Some('\n') => {
                    self.flush_text(&mut tokens, text_start);
                    let start = self.lexer().pos();
                    let (decoded, len) = decode_escape(self.lexer().remaining())
                        .expect("peeked pattern guarantees a line continuation");
                    self.lexer_mut().skip(len);
                    tokens.push(SubToken::Backslash {
                        decoded,
                        location: self.lexer().location(start..self.lexer().pos()),
                    });
                    text_start = self.lexer().pos();
                }
                Some('\\') => {
                    // Any other backslash, including `\{` and `\}`: two
                    // literal runes, not counted toward the nesting depth.
                    self.lexer_mut().advance();
                    if self.lexer().peek().is_some() {
                        self.lexer_mut().advance();
                    }
                }
                Some('{') => {
                    depth += 1;
                    self.lexer_mut().advance();
                }
                Some('}') => {
                    depth -= 1;
                    if depth == 0 {
                        self.flush_text(&mut tokens, text_start);
                        self.lexer_mut().advance();
                        return Ok(tokens);
                    }
                    self.lexer_mut().advance();
                }
                Some(_) => {
                    self.lexer_mut().advance();
                }
            }
        }
    }

    /// Tokenizes the interior of a bare or quoted word (or an array index)
    /// until a rune in `mask` (or end of input) is reached, recognizing all
    /// four sub-token variants.
    pub(super) fn tokenize_until(&mut self, mask: TerminatorMask) -> Result<Vec<SubToken>> {
        let mut tokens = Vec::new();
        let mut text_start = self.lexer().pos();
        loop {
            match self.lexer().peek() {
                None => break,
                Some(c) if super::lex::is_terminator(c, mask) => break,
                Some('\\') => {
                    self.flush_text(&mut tokens, text_start);
                    let start = self.lexer().pos();
                    let (decoded, len) =
                        decode_escape(self.lexer().remaining()).map_err(|cause| Error {
                            cause,
                            location: self.lexer().location(start..start + 1),
                        })?;
                    self.lexer_mut().skip(len);
                    tokens.push(SubToken::Backslash {
                        decoded,
                        location: self.lexer().location(start..self.lexer().pos()),
                    });
                    text_start = self.lexer().pos();
                }
                Some('[') => {
                    self.flush_text(&mut tokens, text_start);
                    tokens.push(self.parse_command_subtoken()?);
                    text_start = self.lexer().pos();
                }
                Some('$') => {
                    self.flush_text(&mut tokens, text_start);
                    match self.parse_variable_subtoken()? {
                        Some(tok) => tokens.push(tok),
                        None => tokens.push(SubToken::Text("$".to_string())),
                    }
                    text_start = self.lexer().pos();
                }
                Some(_) => {
                    self.lexer_mut().advance();
                }
            }
        }
        self.flush_text(&mut tokens, text_start);
        Ok(tokens)
    }

    fn flush_text(&mut self, tokens: &mut Vec<SubToken>, start: usize) {
        let end = self.lexer().pos();
        if end <= start {
            return;
        }
        let text = self.lexer().text_range(start..end);
        if let Some(SubToken::Text(prev)) = tokens.last_mut() {
            prev.push_str(&text);
        } else {
            tokens.push(SubToken::Text(text));
        }
    }

    /// Parses the `[...]` command substitution starting at the current `[`,
    /// consuming through the matching unescaped `]`.
    fn parse_command_subtoken(&mut self) -> Result<SubToken> {
        let open_pos = self.lexer().pos();
        self.lexer_mut().advance();
        let body_start = self.lexer().pos();
        let opening_location = self.lexer().location(open_pos..open_pos + 1);
        self.parse_script_body(Some(opening_location))?;
        // `parse_script_body` consumed the matching `]`; the script text is
        // everything between it and the body start.
        let body_end = self.lexer().pos() - 1;
        let script = self.lexer().text_range(body_start..body_end);
        Ok(SubToken::Command {
            script,
            location: self.lexer().location(open_pos..self.lexer().pos()),
        })
    }

    /// Parses a `$name`, `${name}`, `$name(index)` or `${name(index)}`
    /// reference starting at the current `$`. Returns `None` if `$` is not
    /// followed by a name-forming rune, in which case the caller should
    /// treat the lone `$` as literal text; the cursor is left unmoved in
    /// that case.
    fn parse_variable_subtoken(&mut self) -> Result<Option<SubToken>> {
        let dollar_pos = self.lexer().pos();
        self.lexer_mut().advance();

        if self.lexer().peek() == Some('{') {
            return self.parse_braced_variable(dollar_pos).map(Some);
        }

        let starts_name = matches!(self.lexer().peek(), Some(c) if is_name_char(c))
            || (self.lexer().peek() == Some(':') && self.lexer().peek_at(1) == Some(':'));
        if !starts_name {
            self.lexer_mut().set_pos(dollar_pos);
            return Ok(None);
        }

        let name_start = self.lexer().pos();
        self.scan_name();
        let name = self.lexer().text_range(name_start..self.lexer().pos());

        let index = if self.lexer().peek() == Some('(') {
            let paren_open = self.lexer().pos();
            self.lexer_mut().advance();
            let index_tokens = self.tokenize_until(EnumSet::only(Terminator::CloseParen))?;
            match self.lexer().peek() {
                Some(')') => {
                    self.lexer_mut().advance();
                }
                _ => {
                    return Err(Error {
                        cause: SyntaxError::MissingCloseParen {
                            opening_location: self.lexer().location(paren_open..paren_open + 1),
                        },
                        location: self.lexer().here(),
                    });
                }
            }
            Some(VariableIndex::Tokens(index_tokens))
        } else {
            None
        };

        Ok(Some(SubToken::Variable {
            name,
            index,
            location: self.lexer().location(dollar_pos..self.lexer().pos()),
        }))
    }

    /// Parses the `${...}` braced form: `{` has already been seen but not
    /// consumed. Scans literally to the first `}` with no substitution, then
    /// splits `arrayName(index)` shapes if present.
    fn parse_braced_variable(&mut self, dollar_pos: usize) -> Result<SubToken> {
        let brace_open = self.lexer().pos();
        self.lexer_mut().advance();
        let inner_start = self.lexer().pos();
        loop {
            match self.lexer().peek() {
                Some('}') => break,
                Some(_) => {
                    self.lexer_mut().advance();
                }
                None => {
                    return Err(Error {
                        cause: SyntaxError::MissingCloseBraceInVariableName {
                            opening_location: self.lexer().location(brace_open..brace_open + 1),
                        },
                        location: self.lexer().here(),
                    });
                }
            }
        }
        let inner_end = self.lexer().pos();
        self.lexer_mut().advance();
        let inner = self.lexer().text_range(inner_start..inner_end);
        let (name, index) = split_braced_name(&inner);
        Ok(SubToken::Variable {
            name,
            index,
            location: self.lexer().location(dollar_pos..self.lexer().pos()),
        })
    }

    /// Scans a name of letters, digits, underscore, and runs of two or more
    /// colons, starting at the current position.
    fn scan_name(&mut self) {
        loop {
            match self.lexer().peek() {
                Some(c) if is_name_char(c) => {
                    self.lexer_mut().advance();
                }
                Some(':') if self.lexer().peek_at(1) == Some(':') => {
                    self.lexer_mut().advance();
                    self.lexer_mut().advance();
                    while self.lexer().peek() == Some(':') {
                        self.lexer_mut().advance();
                    }
                }
                _ => break,
            }
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Splits a `${...}` braced name's interior into `(name, index)` if it has
/// the literal shape `arrayName(index)`, i.e. it contains a `(` whose
/// matching `)` is the very last rune.
fn split_braced_name(inner: &str) -> (String, Option<VariableIndex>) {
    if let Some(paren) = inner.find('(') {
        if inner.ends_with(')') && paren + 1 < inner.len() {
            let name = inner[..paren].to_string();
            let index = inner[paren + 1..inner.len() - 1].to_string();
            return (name, Some(VariableIndex::Literal(index)));
        }
    }
    (inner.to_string(), None)
}

/// A word composed of exactly one text sub-token is represented as a
/// [`Word::Simple`]; an empty token list is the empty simple word.
fn finish_word(tokens: Vec<SubToken>) -> Word {
    match tokens.len() {
        0 => Word::Simple(String::new()),
        1 => match tokens.into_iter().next().unwrap() {
            SubToken::Text(s) => Word::Simple(s),
            other => Word::Composite(vec![other]),
        },
        _ => Word::Composite(tokens),
    }
}
