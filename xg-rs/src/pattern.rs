//! Regular-expression support for the regex builtins.
//!
//! Patterns are compiled with the [`regex`] crate using its defaults
//! (Unicode-aware, case-sensitive).  Replacement templates use backslash
//! syntax rather than the crate's native `$` syntax:
//!
//! | Template | Meaning |
//! |----------|---------|
//! | `\1` … `\99` | numbered capture group |
//! | `\g<name>`, `\g<1>` | named or numbered capture group |
//! | `\\` `\n` `\t` `\r` `\f` `\v` `\a` | escaped character |
//! | `\` + other ASCII letter | invalid template |
//! | `\` + anything else | kept literally, backslash included |
//! | `$` | literal dollar sign |
//!
//! Callers treat every [`PatternError`] as "leave the input alone".

use regex::Regex;
use thiserror::Error;

// ── Public types ─────────────────────────────────────────────────────────────

/// Why a pattern or replacement template could not be used.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("regex error: {0}")]
    InvalidRegex(#[from] regex::Error),
    #[error("template error: {0}")]
    InvalidTemplate(String),
}

/// A compiled pattern paired with a translated replacement template.
#[derive(Debug, Clone)]
pub struct Substitution {
    regex: Regex,
    template: String,
}

impl Substitution {
    /// Compile `pattern` and translate `replacement`.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern)?;
        let template = translate_template(replacement, &regex)?;
        Ok(Self { regex, template })
    }

    /// Replace the first match.
    pub fn replace_first(&self, text: &str) -> String {
        self.regex.replacen(text, 1, self.template.as_str()).into_owned()
    }

    /// Replace every non-overlapping match.
    pub fn replace_all(&self, text: &str) -> String {
        self.regex.replace_all(text, self.template.as_str()).into_owned()
    }
}

/// Match `pattern` at the very start of `text`.
///
/// Returns the matched substring, which may be empty.
pub fn match_at_start<'t>(pattern: &str, text: &'t str) -> Result<Option<&'t str>, PatternError> {
    let regex = Regex::new(pattern)?;
    // Leftmost-first: a match starting at 0 is found before any later one.
    Ok(regex
        .find(text)
        .filter(|m| m.start() == 0)
        .map(|m| m.as_str()))
}

// ── Template translation ─────────────────────────────────────────────────────

/// Rewrite a backslash template into the `regex` crate's `${group}` syntax.
fn translate_template(src: &str, regex: &Regex) -> Result<String, PatternError> {
    let mut out = String::with_capacity(src.len() + 8);
    let mut chars = src.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '$' => out.push_str("$$"),
            '\\' => match chars.next() {
                None => {
                    return Err(PatternError::InvalidTemplate(
                        "dangling backslash at end of template".into(),
                    ))
                }
                Some(d @ '0'..='9') => {
                    let mut group = String::from(d);
                    if let Some(&d2) = chars.peek().filter(|c| c.is_ascii_digit()) {
                        group.push(d2);
                        chars.next();
                    }
                    let n: usize = group.parse().unwrap_or(0);
                    if n == 0 || n >= regex.captures_len() {
                        return Err(PatternError::InvalidTemplate(format!(
                            "invalid group reference {group}"
                        )));
                    }
                    push_group(&mut out, &group);
                }
                Some('g') => {
                    if chars.next() != Some('<') {
                        return Err(PatternError::InvalidTemplate("missing < after \\g".into()));
                    }
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('>') => break,
                            Some(ch) => name.push(ch),
                            None => {
                                return Err(PatternError::InvalidTemplate(
                                    "missing > in group name".into(),
                                ))
                            }
                        }
                    }
                    check_group(regex, &name)?;
                    push_group(&mut out, &name);
                }
                Some('\\') => out.push('\\'),
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some('f') => out.push('\u{0C}'),
                Some('v') => out.push('\u{0B}'),
                Some('a') => out.push('\u{07}'),
                Some(other) if other.is_ascii_alphabetic() => {
                    return Err(PatternError::InvalidTemplate(format!(
                        "bad escape \\{other}"
                    )))
                }
                Some('$') => out.push_str("\\$$"),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
            },
            other => out.push(other),
        }
    }
    Ok(out)
}

fn check_group(regex: &Regex, name: &str) -> Result<(), PatternError> {
    let known = match name.parse::<usize>() {
        Ok(n) => n < regex.captures_len(),
        Err(_) => regex.capture_names().flatten().any(|n| n == name),
    };
    if known {
        Ok(())
    } else {
        Err(PatternError::InvalidTemplate(format!("unknown group name '{name}'")))
    }
}

fn push_group(out: &mut String, group: &str) {
    out.push_str("${");
    out.push_str(group);
    out.push('}');
}

// ── Tests ─────────────────────────────────────────────────────────────────────
