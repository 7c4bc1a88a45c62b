//! Input coercion for builtins.
//!
//! Every builtin declares which shape it wants to receive.  The executor
//! never inspects the current [`Value`] itself; it hands it to the builtin's
//! [`Adapter`], which normalizes the shape once and then calls the
//! implementation.

use std::fmt;

use rand::RngCore;

use crate::builtins::Args;
use crate::value::Value;

/// Builtin that operates on the whole input as one string.
pub type TextFn = fn(String, &Args<'_>, &mut dyn RngCore) -> Value;
/// Builtin that operates element-wise on a sequence.
pub type SequenceFn = fn(Vec<String>, &Args<'_>, &mut dyn RngCore) -> Value;
/// Builtin that needs to see which shape it was given.
pub type RawFn = fn(Value, &Args<'_>, &mut dyn RngCore) -> Value;

/// The input shape a builtin requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionKind {
    AsText,
    AsSequence,
    Raw,
}

impl fmt::Display for CoercionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CoercionKind::AsText => "text",
            CoercionKind::AsSequence => "sequence",
            CoercionKind::Raw => "raw",
        })
    }
}

/// A builtin implementation wrapped in its coercion adapter.
#[derive(Clone, Copy)]
pub enum Adapter {
    AsText(TextFn),
    AsSequence(SequenceFn),
    Raw(RawFn),
}

impl fmt::Debug for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Adapter::{:?}", self.kind())
    }
}

impl Adapter {
    pub fn kind(&self) -> CoercionKind {
        match self {
            Adapter::AsText(_) => CoercionKind::AsText,
            Adapter::AsSequence(_) => CoercionKind::AsSequence,
            Adapter::Raw(_) => CoercionKind::Raw,
        }
    }

    /// Coerce `input` to the wrapped function's shape and invoke it.
    pub fn apply(&self, input: Value, args: &Args<'_>, rng: &mut dyn RngCore) -> Value {
        match self {
            Adapter::AsText(f) => f(as_text(input), args, rng),
            Adapter::AsSequence(f) => f(as_sequence(input), args, rng),
            Adapter::Raw(f) => f(input, args, rng),
        }
    }
}

/// Text view of a value: sequences are concatenated, text passes through.
pub fn as_text(input: Value) -> String {
    input.into_text()
}

/// Sequence view of a value: text is split per character, sequences pass
/// through.  The caller owns the result and may mutate it freely.
pub fn as_sequence(input: Value) -> Vec<String> {
    input.into_sequence()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
