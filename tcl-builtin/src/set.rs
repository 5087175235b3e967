// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! `set` built-in
//!
//! `set varName ?value?`. With a value, binds `varName` in
//! the current frame and returns that value; without one, reads the current
//! value or fails with `can't read "<name>": no such variable`. `varName`
//! may carry a literal `arrayName(index)` suffix (`set a(1) foo`), the same
//! shape `${name(index)}` recognizes, since a bare word like `a(1)` never
//! passes through the parser's `$`-triggered variable-sub-token path.

use crate::support::{element_signal, lookup_signal, wrong_num_args};
use tcl_env::{split_name, Interp, NativeResult};

pub fn main(interp: &mut Interp, args: &[String]) -> NativeResult {
    if args.len() < 2 || args.len() > 3 {
        return Err(wrong_num_args("set", "varName ?newValue?"));
    }
    let (name, index) = split_name(&args[1]);
    let level = interp.stack.current_level();
    match (args.get(2), index) {
        (Some(value), Some(key)) => {
            interp
                .stack
                .variables()
                .set_element(level, name, key, value.clone())
                .map_err(|err| element_signal(name, key, err))?;
            Ok(value.clone())
        }
        (Some(value), None) => {
            interp
                .stack
                .variables()
                .set(level, name, value.clone())
                .map_err(|err| lookup_signal(name, err))?;
            Ok(value.clone())
        }
        (None, Some(key)) => interp
            .stack
            .variables()
            .get_element(level, name, key)
            .map_err(|err| element_signal(name, key, err)),
        (None, None) => interp
            .stack
            .variables()
            .get(level, name)
            .map_err(|err| lookup_signal(name, err)),
    }
}
