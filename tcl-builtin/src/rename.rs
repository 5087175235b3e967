// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! `rename` built-in
//!
//! `rename oldName newName`: renames a registered
//! command, or deletes it if `newName` is the empty string.

use crate::support::wrong_num_args;
use tcl_env::{Interp, NativeResult, Signal};

pub fn main(interp: &mut Interp, args: &[String]) -> NativeResult {
    if args.len() != 3 {
        return Err(wrong_num_args("rename", "oldName newName"));
    }
    let old_name = &args[1];
    let new_name = &args[2];
    interp
        .commands
        .rename(old_name, new_name)
        .ok_or_else(|| Signal::Error(format!("can't rename \"{old_name}\": command doesn't exist")))?;
    Ok(String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_moves_a_command_to_the_new_name() {
        let mut interp = Interp::new();
        crate::register_all(&mut interp);
        let args = vec![
            "rename".to_string(),
            "puts".to_string(),
            "puts.orig".to_string(),
        ];
        main(&mut interp, &args).unwrap();
        assert!(interp.commands.get("puts").is_none());
        assert!(interp.commands.get("puts.orig").is_some());
    }

    #[test]
    fn rename_to_empty_string_deletes_the_command() {
        let mut interp = Interp::new();
        crate::register_all(&mut interp);
        let args = vec!["rename".to_string(), "puts".to_string(), "".to_string()];
        main(&mut interp, &args).unwrap();
        assert!(interp.commands.get("puts").is_none());
    }

    #[test]
    fn renaming_an_unknown_command_fails() {
        let mut interp = Interp::new();
        let args = vec![
            "rename".to_string(),
            "nope".to_string(),
            "elsewhere".to_string(),
        ];
        assert!(main(&mut interp, &args).is_err());
    }
}
