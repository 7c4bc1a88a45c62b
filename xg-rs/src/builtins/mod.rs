//! Builtin transformations.
//!
//! Each builtin is a plain function taking its coerced input, the call's
//! literal arguments, and the interpreter's random source.  All arguments
//! are optional: a missing one takes the builtin's default and extras are
//! ignored.  Builtins never fail; malformed arguments fall back to a
//! documented value instead.
//!
//! The name → function table lives in [`crate::registry`].

pub mod novelty;
pub mod rewrite;
pub mod sequence;
pub mod text;

// ── Argument accessors ────────────────────────────────────────────────────────

/// Positional literal arguments of one call.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a>(&'a [String]);

impl<'a> Args<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Args(args)
    }

    /// The argument at `idx`, if supplied.
    pub fn get(&self, idx: usize) -> Option<&'a str> {
        self.0.get(idx).map(String::as_str)
    }

    /// The argument at `idx`, or `default` if not supplied.
    pub fn get_or(&self, idx: usize, default: &'a str) -> &'a str {
        self.get(idx).unwrap_or(default)
    }
}

/// Read a string argument as an integer.
///
/// - empty → `None`
/// - parses as an integer (surrounding whitespace ignored) → that integer
/// - anything else → the sum of the Unicode code points of its characters
pub fn coerce_int(s: &str) -> Option<i64> {
    if s.is_empty() {
        return None;
    }
    Some(
        s.trim()
            .parse::<i64>()
            .unwrap_or_else(|_| s.chars().map(|c| i64::from(u32::from(c))).sum()),
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
