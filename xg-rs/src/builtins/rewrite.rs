//! Regex builtins.
//!
//! A pattern or replacement that fails to compile leaves the input
//! unchanged; the failure is only visible in the debug log.

use rand::RngCore;
use tracing::debug;

use super::Args;
use crate::pattern::{self, PatternError, Substitution};
use crate::value::Value;

/// `transubstantiate [pattern] [replacement]`: replace the first match.
pub fn transubstantiate(input: String, args: &Args<'_>, _rng: &mut dyn RngCore) -> Value {
    substitute(input, args, false)
}

/// `transubstantiate_all [pattern] [replacement]`: replace every match.
pub fn transubstantiate_all(input: String, args: &Args<'_>, _rng: &mut dyn RngCore) -> Value {
    substitute(input, args, true)
}

/// `query [pattern]`: if `pattern` matches a non-empty prefix of the input,
/// the result is the first character of that match.
pub fn query(input: String, args: &Args<'_>, _rng: &mut dyn RngCore) -> Value {
    let pat = args.get_or(0, "");
    let first = match pattern::match_at_start(pat, &input) {
        Ok(found) => found.and_then(|m| m.chars().next()),
        Err(e) => {
            fail_soft("query", pat, &e);
            None
        }
    };
    match first {
        Some(c) => Value::Text(c.to_string()),
        None => Value::Text(input),
    }
}

/// `buttify`: every "but" or "butt", in any case, becomes 🍑.
pub fn buttify(input: String, _args: &Args<'_>, _rng: &mut dyn RngCore) -> Value {
    match Substitution::new("(?i)butt?", "\u{1F351}") {
        Ok(s) => Value::Text(s.replace_all(&input)),
        Err(e) => {
            fail_soft("buttify", "(?i)butt?", &e);
            Value::Text(input)
        }
    }
}

fn substitute(input: String, args: &Args<'_>, all: bool) -> Value {
    let pat = args.get_or(0, "");
    let replacement = args.get_or(1, "");
    match Substitution::new(pat, replacement) {
        Ok(s) if all => Value::Text(s.replace_all(&input)),
        Ok(s) => Value::Text(s.replace_first(&input)),
        Err(e) => {
            fail_soft(
                if all { "transubstantiate_all" } else { "transubstantiate" },
                pat,
                &e,
            );
            Value::Text(input)
        }
    }
}

fn fail_soft(builtin: &str, pattern: &str, err: &PatternError) {
    debug!(builtin, pattern, error = %err, "pattern rejected; input left unchanged");
}

// ── Tests ─────────────────────────────────────────────────────────────────────
