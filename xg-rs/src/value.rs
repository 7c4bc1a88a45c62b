//! Runtime value type for the pipeline.
//!
//! Every value is text at heart; builtins that work element-wise see it as
//! an ordered sequence of text instead.  The two views convert losslessly in
//! one direction (text → sequence → text) and by concatenation in the other.

use std::fmt;

/// A pipeline value: a single text or an ordered sequence of texts.
///
/// A `Sequence` never nests; its elements are always plain strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Sequence(Vec<String>),
}

impl Default for Value {
    fn default() -> Self {
        Value::Text(String::new())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Sequence(items) => items.iter().try_for_each(|s| f.write_str(s)),
        }
    }
}

impl Value {
    /// Flatten to text: a sequence is concatenated with no separator.
    pub fn into_text(self) -> String {
        match self {
            Value::Text(s) => s,
            Value::Sequence(items) => items.concat(),
        }
    }

    /// Split to a sequence: text becomes one element per `char`.
    pub fn into_sequence(self) -> Vec<String> {
        match self {
            Value::Text(s) => s.chars().map(String::from).collect(),
            Value::Sequence(items) => items,
        }
    }

    /// Shape name used in diagnostics and `--list` output.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Sequence(_) => "sequence",
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::Sequence(items)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
