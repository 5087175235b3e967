// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! Source code provenance
//!
//! Every [`SubToken`](crate::syntax::SubToken), [`Word`](crate::syntax::Word)
//! and [`Command`](crate::syntax::Command) produced by the parser carries a
//! [`Location`] so that parse errors and, later, evaluation errors can point
//! back at the offending span of the original script text.

use std::fmt;
use std::ops::Range;
use std::rc::Rc;

/// Where a piece of script text came from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Source {
    /// No further provenance is tracked, e.g. text built from a `&str` in a
    /// unit test.
    Unknown,
    /// A script read from a file by the command-line driver.
    File {
        /// Path as given on the command line.
        path: Rc<str>,
    },
    /// The interior of a `[...]` command substitution, nested inside the
    /// command that contained it.
    CommandSubst {
        /// Location of the `[...]` sub-token in the enclosing script.
        original: Box<Location>,
    },
}

/// The full rune sequence a [`Location`] indexes into.
///
/// Offsets are counted in Unicode code points, not bytes, per the rune
/// sequence requirement of the parser contract.
#[derive(Debug, Eq, PartialEq)]
pub struct Code {
    /// The script text, one entry per code point.
    pub value: Vec<char>,
    /// Where this text came from.
    pub source: Rc<Source>,
}

/// A half-open range of rune indices into a [`Code`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Location {
    /// The code this location indexes into.
    pub code: Rc<Code>,
    /// Rune index range, `start..end`, both counted in code points.
    pub range: Range<usize>,
}

impl Location {
    /// Creates a location spanning the given rune range of `code`.
    pub fn new(code: Rc<Code>, range: Range<usize>) -> Self {
        Location { code, range }
    }

    /// Returns the 1-based line and column (in code points) of the first
    /// rune in this location.
    pub fn line_column(&self) -> (usize, usize) {
        let end = self.range.start.min(self.code.value.len());
        let mut line = 1usize;
        let mut column = 1usize;
        for &c in &self.code.value[..end] {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }

    /// Returns the runes covered by this location.
    pub fn slice(&self) -> &[char] {
        let end = self.range.end.min(self.code.value.len());
        let start = self.range.start.min(end);
        &self.code.value[start..end]
    }

    /// Collects the runes covered by this location into a `String`.
    pub fn text(&self) -> String {
        self.slice().iter().collect()
    }

    /// Returns the full line of source text containing this location's
    /// first rune, for single-line caret-style diagnostics.
    pub fn line_text(&self) -> String {
        let runes = &self.code.value;
        let start = self.range.start.min(runes.len());
        let mut line_start = start;
        while line_start > 0 && runes[line_start - 1] != '\n' {
            line_start -= 1;
        }
        let mut line_end = start;
        while line_end < runes.len() && runes[line_end] != '\n' {
            line_end += 1;
        }
        runes[line_start..line_end].iter().collect()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, column) = self.line_column();
        match &*self.code.source {
            Source::Unknown => write!(f, "{line}:{column}"),
            Source::File { path } => write!(f, "{path}:{line}:{column}"),
            Source::CommandSubst { original } => {
                write!(f, "{line}:{column} (command substitution at {original})")
            }
        }
    }
}

/// Builds a [`Code`] (and the [`Location`] covering the whole of it) from a
/// plain string, with [`Source::Unknown`] provenance. Convenient for tests
/// and for the `FromStr` conveniences exposed by the `syntax` types.
pub fn unknown_code(s: &str) -> Rc<Code> {
    Rc::new(Code {
        value: s.chars().collect(),
        source: Rc::new(Source::Unknown),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_text_returns_the_enclosing_line_only() {
        let code = unknown_code("first\nsecond line\nthird");
        let location = Location::new(Rc::clone(&code), 9..9); // inside "second line"
        assert_eq!(location.line_text(), "second line");
    }

    #[test]
    fn line_column_counts_from_one() {
        let code = unknown_code("ab\ncd");
        let location = Location::new(Rc::clone(&code), 4..5); // the 'd'
        assert_eq!(location.line_column(), (2, 2));
    }
}
