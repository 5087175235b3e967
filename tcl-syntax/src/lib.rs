// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
// tcl-syntax: rune scanner, escape decoder, token tree, and command parser
// for the core Tcl-dialect interpreter.

#![forbid(unsafe_code)]

//! Lexical analysis and parsing of Tcl-dialect scripts.
//!
//! This crate turns raw script text into a [token tree](syntax) without
//! performing any substitution. Substitution (backslash decoding, variable
//! lookup, command substitution) and evaluation are the responsibility of
//! the `tcl-semantics` crate, which walks the tree this crate produces.
//!
//! The three pieces of the crate are:
//! - [`source`]: where a span of script text came from, for diagnostics.
//! - [`syntax`]: the token tree data model (script → command → word → sub-token).
//! - [`parser`]: the recursive-descent parser that builds a [`syntax::Script`]
//!   from a rune sequence.

pub mod parser;
pub mod source;
pub mod syntax;
