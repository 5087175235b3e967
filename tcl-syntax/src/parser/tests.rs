// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
use super::lex::decode_escape;
use super::{parse, SyntaxError};
use crate::source::unknown_code;
use crate::syntax::{SubToken, VariableIndex, Word};

fn parse_script(s: &str) -> crate::syntax::Script {
    let code = unknown_code(s);
    super::parse(&code, false).unwrap().0
}

#[test]
fn simple_word_is_fast_path() {
    let script = parse_script("set x 5");
    assert_eq!(script.commands.len(), 1);
    let words = &script.commands[0].words;
    assert_eq!(words[0], Word::Simple("set".to_string()));
    assert_eq!(words[1], Word::Simple("x".to_string()));
    assert_eq!(words[2], Word::Simple("5".to_string()));
}

#[test]
fn command_boundary_splits_on_semicolon_and_newline() {
    let script = parse_script("set x 5; set y 6\nset z 7");
    assert_eq!(script.commands.len(), 3);
}

#[test]
fn comment_after_separator_is_skipped() {
    let script = parse_script("set x 1\n# a comment\nset y 2");
    assert_eq!(script.commands.len(), 2);
}

#[test]
fn hash_in_word_continuation_is_literal() {
    // A `#` is only a comment starter where the first word of a command
    // would begin; mid-command it's ordinary text.
    let script = parse_script("set x a#b");
    let Word::Simple(s) = &script.commands[0].words[2] else {
        panic!("expected simple word");
    };
    assert_eq!(s, "a#b");
}

#[test]
fn line_continuation_folds_to_single_space_even_in_braces() {
    let script = parse_script("set x {a\\\n \tX}");
    let Word::Composite(tokens) = &script.commands[0].words[2] else {
        panic!("expected composite word");
    };
    // text "a", backslash-newline -> ' ', text "X"
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0], SubToken::Text("a".to_string()));
    assert_matches::assert_matches!(&tokens[1], SubToken::Backslash { decoded: ' ', .. });
    assert_eq!(tokens[2], SubToken::Text("X".to_string()));
}

#[test]
fn escape_decoder_hex_octal_and_unicode_agree_on_u00ff() {
    let variants: &[&[char]] = &[
        &['\\', 'x', 'F', 'F'],
        &['\\', 'u', '0', '0', 'F', 'F'],
        &['\\', 'U', '0', '0', '0', '0', '0', '0', 'F', 'F'],
        &['\\', '3', '7', '7'],
    ];
    for runes in variants {
        let (decoded, _) = decode_escape(runes).unwrap();
        assert_eq!(decoded, '\u{FF}', "{runes:?} should decode to U+00FF");
    }
}

#[test]
fn escape_decoder_u_truncates_before_overflowing_unicode_range() {
    let runes: Vec<char> = "\\U110000".chars().collect();
    let (decoded, len) = decode_escape(&runes).unwrap();
    assert_eq!(decoded, '\u{11000}');
    assert_eq!(len, 7); // backslash + U + 5 digits ("11000"), the 6th digit is left unconsumed
}

#[test]
fn braced_array_index_performs_no_substitution() {
    let script = parse_script("puts ${a(b)}");
    let Word::Composite(tokens) = &script.commands[0].words[1] else {
        panic!("expected composite word");
    };
    assert_eq!(tokens.len(), 1);
    match &tokens[0] {
        SubToken::Variable { name, index, .. } => {
            assert_eq!(name, "a");
            assert_eq!(index, &Some(VariableIndex::Literal("b".to_string())));
        }
        other => panic!("expected variable sub-token, got {other:?}"),
    }
}

#[test]
fn unbraced_array_index_is_fully_substituted() {
    let script = parse_script("puts $a(b$c)");
    let Word::Composite(tokens) = &script.commands[0].words[1] else {
        panic!("expected composite word");
    };
    match &tokens[0] {
        SubToken::Variable { name, index, .. } => {
            assert_eq!(name, "a");
            let Some(VariableIndex::Tokens(index_tokens)) = index else {
                panic!("expected a tokenized index");
            };
            assert_eq!(index_tokens.len(), 2);
            assert_eq!(index_tokens[0], SubToken::Text("b".to_string()));
            assert_matches::assert_matches!(&index_tokens[1], SubToken::Variable { name, .. } if name == "c");
        }
        other => panic!("expected variable sub-token, got {other:?}"),
    }
}

#[test]
fn command_substitution_captures_raw_interior_text() {
    let script = parse_script("set r [list $a $b]");
    let Word::Composite(tokens) = &script.commands[0].words[2] else {
        panic!("expected composite word");
    };
    match &tokens[0] {
        SubToken::Command { script, .. } => assert_eq!(script, "list $a $b"),
        other => panic!("expected command sub-token, got {other:?}"),
    }
}

#[test]
fn expansion_word_wraps_inner_word() {
    let script = parse_script("f {*}$args");
    match &script.commands[0].words[1] {
        Word::Expansion(inner) => {
            assert_matches::assert_matches!(**inner, Word::Composite(_));
        }
        other => panic!("expected expansion word, got {other:?}"),
    }
}

#[test]
fn unterminated_double_quote_is_a_parse_error() {
    let code = unknown_code("puts \"unterminated");
    let err = super::parse(&code, false).unwrap_err();
    assert_matches::assert_matches!(err.cause, SyntaxError::UnterminatedDoubleQuote { .. });
}

#[test]
fn unterminated_brace_is_a_parse_error() {
    let code = unknown_code("set x {abc");
    let err = super::parse(&code, false).unwrap_err();
    assert_matches::assert_matches!(err.cause, SyntaxError::UnterminatedBrace { .. });
}

#[test]
fn nested_parse_stops_at_matching_bracket() {
    let code = unknown_code("list $a $b] tail");
    let (script, consumed) = super::parse(&code, true).unwrap();
    assert_eq!(script.commands.len(), 1);
    // consumed runes stop right after the `]`, leaving " tail" unconsumed.
    assert_eq!(code.value[..consumed].iter().collect::<String>(), "list $a $b]");
}
