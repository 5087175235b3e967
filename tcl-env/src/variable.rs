// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
//! Scalar and array variable storage, organized into [`Frame`]s.
//!
//! A name is bound to either a [`Value`] directly or to an alias that routes
//! every read and write to a named variable in another frame. Aliases are
//! installed by the `global` and `upvar` built-ins and are
//! resolved fresh on each access rather than cached, so redefining the
//! target after the alias is created is visible through it.

use std::collections::HashMap;
use thiserror::Error;

/// The value bound to a name: a single string, or an array of strings
/// indexed by string keys. A name is either scalar or array, never both at
/// once.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Scalar(String),
    Array(HashMap<String, String>),
}

/// Failure to read or write a variable. Carries only the data the caller
/// needs to format the canonical message; the message text itself is
/// assembled by `tcl-semantics`, which knows the policy for wrapping these
/// into the interpreter's error state.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum LookupError {
    #[error("no such variable")]
    NoSuchVariable,
    #[error("no such element")]
    NoSuchElement,
    #[error("variable is an array, not a scalar")]
    IsArray,
    #[error("variable is a scalar, not an array")]
    IsScalar,
    #[error("no frame at level {0}")]
    NoSuchFrame(usize),
}

type Result<T> = std::result::Result<T, LookupError>;

/// Splits a variable-reference name of the literal shape `arrayName(index)`
/// into its parts, the same split the parser performs for `${name(index)}`
/// (see `tcl_syntax::parser::word::split_braced_name`). Built-ins that take a
/// variable name as a plain command argument (`set a(1) foo`, `incr a(1)`)
/// never go through the parser's `$`-triggered variable-sub-token path, so
/// they need to recognize this shape themselves before touching the store.
pub fn split_name(raw: &str) -> (&str, Option<&str>) {
    if let Some(paren) = raw.find('(') {
        if raw.ends_with(')') && paren + 1 < raw.len() {
            return (&raw[..paren], Some(&raw[paren + 1..raw.len() - 1]));
        }
    }
    (raw, None)
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Slot {
    Direct(Value),
    /// A weak alias: resolved by walking to `level` and looking up `name`
    /// there, every time, rather than being eagerly dereferenced.
    Alias { level: usize, name: String },
}

/// One call frame: a flat name-to-binding map plus the frame's numeric
/// level. Level 0 is the global frame, always present, and doubles as the
/// global namespace.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Frame {
    level: usize,
    bindings: HashMap<String, Slot>,
}

impl Frame {
    pub fn new(level: usize) -> Self {
        Frame {
            level,
            bindings: HashMap::new(),
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    fn slot(&self, name: &str) -> Option<&Slot> {
        self.bindings.get(name)
    }
}

/// A stack of frames, viewed for the purpose of resolving variable
/// references. [`crate::stack::CallStack`] implements this by giving direct
/// access to its `Vec<Frame>`; `get`/`set`/`alias` all need to be able to
/// hop to an arbitrary level, which a single `Frame` cannot do on its own.
pub struct Frames<'a> {
    frames: &'a mut Vec<Frame>,
}

impl<'a> Frames<'a> {
    pub fn new(frames: &'a mut Vec<Frame>) -> Self {
        Frames { frames }
    }

    fn index_of_level(&self, level: usize) -> Result<usize> {
        self.frames
            .iter()
            .position(|f| f.level == level)
            .ok_or(LookupError::NoSuchFrame(level))
    }

    /// Follows an alias chain starting from `(level, name)` to the frame
    /// index and name that actually stores the value. Bounded by the frame
    /// count so a user-constructed alias cycle fails cleanly instead of
    /// looping forever.
    fn resolve(&self, level: usize, name: &str) -> Result<(usize, String)> {
        let mut level = level;
        let mut name = name.to_string();
        for _ in 0..=self.frames.len() {
            let index = self.index_of_level(level)?;
            match self.frames[index].slot(&name) {
                Some(Slot::Alias {
                    level: next_level,
                    name: next_name,
                }) => {
                    level = *next_level;
                    name = next_name.clone();
                }
                _ => return Ok((index, name)),
            }
        }
        Err(LookupError::NoSuchFrame(level))
    }

    pub fn get(&self, level: usize, name: &str) -> Result<String> {
        let (index, name) = self.resolve(level, name)?;
        match self.frames[index].slot(&name) {
            Some(Slot::Direct(Value::Scalar(value))) => Ok(value.clone()),
            Some(Slot::Direct(Value::Array(_))) => Err(LookupError::IsArray),
            _ => Err(LookupError::NoSuchVariable),
        }
    }

    pub fn get_element(&self, level: usize, name: &str, key: &str) -> Result<String> {
        let (index, name) = self.resolve(level, name)?;
        match self.frames[index].slot(&name) {
            Some(Slot::Direct(Value::Array(map))) => {
                map.get(key).cloned().ok_or(LookupError::NoSuchElement)
            }
            Some(Slot::Direct(Value::Scalar(_))) => Err(LookupError::IsScalar),
            _ => Err(LookupError::NoSuchElement),
        }
    }

    pub fn set(&mut self, level: usize, name: &str, value: String) -> Result<()> {
        let (index, name) = self.resolve(level, name)?;
        match self.frames[index].bindings.get(&name) {
            Some(Slot::Direct(Value::Array(_))) => return Err(LookupError::IsArray),
            _ => {}
        }
        self.frames[index]
            .bindings
            .insert(name, Slot::Direct(Value::Scalar(value)));
        Ok(())
    }

    pub fn set_element(&mut self, level: usize, name: &str, key: &str, value: String) -> Result<()> {
        let (index, name) = self.resolve(level, name)?;
        match self.frames[index].bindings.entry(name) {
            std::collections::hash_map::Entry::Occupied(mut occupied) => match occupied.get_mut()
            {
                Slot::Direct(Value::Array(map)) => {
                    map.insert(key.to_string(), value);
                }
                Slot::Direct(Value::Scalar(_)) => return Err(LookupError::IsScalar),
                Slot::Alias { .. } => unreachable!("resolve() never returns an alias slot"),
            },
            std::collections::hash_map::Entry::Vacant(vacant) => {
                let mut map = HashMap::new();
                map.insert(key.to_string(), value);
                vacant.insert(Slot::Direct(Value::Array(map)));
            }
        }
        Ok(())
    }

    /// Installs an alias: reads and writes to `name` in the frame at
    /// `local_level` are routed to `target_name` in the frame at
    /// `target_level`. This succeeds even if the target doesn't exist yet;
    /// the target is created on first write through the alias.
    pub fn alias(
        &mut self,
        local_level: usize,
        name: &str,
        target_level: usize,
        target_name: &str,
    ) -> Result<()> {
        // Validate the target frame exists now; its lifetime is the caller's
        // concern.
        self.index_of_level(target_level)?;
        let local_index = self.index_of_level(local_level)?;
        self.frames[local_index].bindings.insert(
            name.to_string(),
            Slot::Alias {
                level: target_level,
                name: target_name.to_string(),
            },
        );
        Ok(())
    }

    pub fn unset(&mut self, level: usize, name: &str) -> Result<()> {
        let index = self.index_of_level(level)?;
        self.frames[index]
            .bindings
            .remove(name)
            .map(|_| ())
            .ok_or(LookupError::NoSuchVariable)
    }
}
