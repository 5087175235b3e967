// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! `list` built-in
//!
//! `list ?element ...?`: quotes each argument per Tcl list rules and joins
//! them with single spaces, producing a string that
//! `tcl_quote::split` parses back into exactly these elements.

use itertools::Itertools;
use tcl_env::{Interp, NativeResult};

pub fn main(_interp: &mut Interp, args: &[String]) -> NativeResult {
    Ok(args[1..].iter().map(|s| tcl_quote::quote(s)).join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_the_empty_string() {
        let mut interp = Interp::new();
        let args = vec!["list".to_string()];
        assert_eq!(main(&mut interp, &args).unwrap(), "");
    }

    #[test]
    fn bare_elements_are_joined_with_single_spaces() {
        let mut interp = Interp::new();
        let args = vec!["list".to_string(), "a".to_string(), "b".to_string()];
        assert_eq!(main(&mut interp, &args).unwrap(), "a b");
    }

    #[test]
    fn elements_with_specials_round_trip_through_split() {
        let mut interp = Interp::new();
        let args = vec![
            "list".to_string(),
            "a b".to_string(),
            "".to_string(),
            "c{d".to_string(),
        ];
        let rendered = main(&mut interp, &args).unwrap();
        assert_eq!(
            tcl_quote::split(&rendered),
            vec!["a b".to_string(), String::new(), "c{d".to_string()]
        );
    }
}
