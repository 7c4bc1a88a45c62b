//! Error types surfaced by the interpreter.
//!
//! Only two things can go wrong in a run: the program text does not parse,
//! or it calls a name the registry does not know.  Builtins themselves are
//! total.

use thiserror::Error;

/// Program text does not conform to the grammar.
///
/// `offset` is a character index into the program text; `line` and `column`
/// are 1-based.  `snippet` is the text at the failure point, for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (at char {offset}), (line:{line}, col:{column})")]
pub struct ParseError {
    pub message: String,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub snippet: String,
}

/// A call names a function absent from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name}")]
pub struct NameError {
    pub name: String,
}

/// Any failure of [`run`](crate::run).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XgError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Name(#[from] NameError),
}

impl XgError {
    /// Process exit status the `xg` binary reports for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            XgError::Parse(_) => 64,
            XgError::Name(_) => 65,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
