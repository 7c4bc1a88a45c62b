//! Xenoglossia: a tiny string-pipeline language.
//!
//! A program is a sequence of named builtin calls, each with zero or more
//! quoted literal arguments, applied left to right to one input string:
//!
//! ```text
//! burst ',' reject 'b' collapse '-'
//! ```
//!
//! The value flowing between calls is either text or a sequence of texts
//! ([`Value`]); each builtin declares which it wants and the interpreter
//! converts automatically.  The final value is always flattened to text.
//!
//! # Quick start
//!
//! ```rust
//! let out = xenoglossia::run("a,b,c", "burst ',' reject 'b' collapse '-'").unwrap();
//! assert_eq!(out, "a-c");
//! ```
//!
//! Random builtins can be made reproducible with a seeded interpreter:
//!
//! ```rust
//! use xenoglossia::Interpreter;
//!
//! let a = Interpreter::with_seed(7).run("abcdef", "shuffle").unwrap();
//! let b = Interpreter::with_seed(7).run("abcdef", "shuffle").unwrap();
//! assert_eq!(a, b);
//! ```

pub mod builtins;
pub mod cli;
pub mod coerce;
pub mod config;
pub mod error;
pub mod interp;
pub mod pattern;
pub mod registry;
pub mod tokenizer;
pub mod value;

// Re-exports for convenience.
pub use error::{NameError, ParseError, XgError};
pub use interp::Interpreter;
pub use tokenizer::{tokenize, Call, Program};
pub use value::Value;

/// Tokenize `program` and run it over `input` with the default random source.
pub fn run(input: &str, program: &str) -> Result<String, XgError> {
    Interpreter::new().run(input, program)
}
