//! Program text lexer.
//!
//! Grammar:
//!
//! ```text
//! program    := call+
//! call       := identifier string*
//! identifier := [A-Za-z_] [A-Za-z0-9_]*
//! string     := "'" [^']* "'"  |  '"' [^"]* '"'
//! ```
//!
//! Whitespace (space, tab, CR, LF) may separate any two tokens and is only
//! needed where two identifiers would otherwise run together.  The whole
//! input must be consumed.
//!
//! The lexer works on bytes so that program text which is not valid UTF-8
//! can still be accepted: every structural token is ASCII, and string
//! literal bodies are decoded with invalid sequences dropped.

use tracing::trace;

use crate::error::ParseError;

/// Maximum number of characters kept in [`ParseError::snippet`].
const SNIPPET_CHARS: usize = 20;

// ── Call ──────────────────────────────────────────────────────────────────────

/// One parsed function invocation with its literal arguments, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub name: String,
    pub arguments: Vec<String>,
}

impl Call {
    pub fn new(name: impl Into<String>, arguments: Vec<String>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// An ordered list of calls produced from one program text.
pub type Program = Vec<Call>;

// ── Public API ────────────────────────────────────────────────────────────────

/// Tokenize program text into its ordered calls.
pub fn tokenize(src: &str) -> Result<Program, ParseError> {
    tokenize_bytes(src.as_bytes())
}

/// Tokenize program text given as raw bytes.
///
/// Bytes inside string literals that do not form valid UTF-8 are dropped.
pub fn tokenize_bytes(src: &[u8]) -> Result<Program, ParseError> {
    let mut lexer = Lexer::new(src);
    let mut calls = Vec::new();

    lexer.skip_ws();
    loop {
        let name = match lexer.read_ident() {
            Some(name) => name,
            None if calls.is_empty() => return Err(lexer.error("expected function name")),
            None => return Err(lexer.error("expected function name or end of text")),
        };

        let mut arguments = Vec::new();
        lexer.skip_ws();
        while let Some(quote @ (b'\'' | b'"')) = lexer.peek() {
            arguments.push(lexer.read_string(quote)?);
            lexer.skip_ws();
        }

        trace!(name = %name, args = ?arguments, "tokenized call");
        calls.push(Call { name, arguments });

        if lexer.at_end() {
            return Ok(calls);
        }
    }
}

/// Decode bytes as UTF-8, silently dropping any invalid sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

// ── Lexer ─────────────────────────────────────────────────────────────────────

struct Lexer<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a [u8]) -> Self {
        Lexer { src, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.pos += 1;
        }
    }

    fn read_ident(&mut self) -> Option<String> {
        let start = self.pos;
        if !matches!(self.peek(), Some(c) if c.is_ascii_alphabetic() || c == b'_') {
            return None;
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == b'_') {
            self.pos += 1;
        }
        // Identifier bytes are ASCII.
        Some(decode_lossy(&self.src[start..self.pos]))
    }

    /// Read a literal whose opening quote is at the current position.
    fn read_string(&mut self, quote: u8) -> Result<String, ParseError> {
        let open = self.pos;
        let body_start = open + 1;
        match self.src[body_start..].iter().position(|&c| c == quote) {
            Some(len) => {
                let body = &self.src[body_start..body_start + len];
                self.pos = body_start + len + 1;
                Ok(decode_lossy(body))
            }
            None => Err(self.error("unterminated string literal")),
        }
    }

    fn error(&self, message: &str) -> ParseError {
        let before = String::from_utf8_lossy(&self.src[..self.pos]);
        let offset = before.chars().count();
        let line = before.matches('\n').count() + 1;
        let column = before
            .rsplit('\n')
            .next()
            .map_or(0, |tail| tail.chars().count())
            + 1;
        let snippet = String::from_utf8_lossy(&self.src[self.pos..])
            .chars()
            .take(SNIPPET_CHARS)
            .collect();
        ParseError {
            message: message.to_owned(),
            offset,
            line,
            column,
            snippet,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
