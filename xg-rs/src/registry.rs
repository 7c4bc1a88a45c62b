//! The builtin registry: a static table from call name to implementation.
//!
//! The table is authored by hand and never changes at runtime.  Lookups are
//! exact, case-sensitive matches against the identifier in the program.

use crate::builtins::{novelty, rewrite, sequence, text};
use crate::coerce::{Adapter, CoercionKind};

/// One registered builtin.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinSpec {
    pub name: &'static str,
    pub adapter: Adapter,
    /// One-line description, shown by `xg --list`.
    pub summary: &'static str,
}

impl BuiltinSpec {
    pub fn coercion_kind(&self) -> CoercionKind {
        self.adapter.kind()
    }
}

/// All builtins available to programs.
#[rustfmt::skip]
pub static BUILTINS: &[BuiltinSpec] = &[
    // ── Splitting and joining ────────────────────────────────────
    BuiltinSpec {
        name: "burst", adapter: Adapter::AsText(text::burst),
        summary: "split into characters, or on [separator]",
    },
    BuiltinSpec {
        name: "collapse", adapter: Adapter::Raw(sequence::collapse),
        summary: "join elements with [joiner]",
    },
    // ── Substitution ─────────────────────────────────────────────
    BuiltinSpec {
        name: "sub", adapter: Adapter::AsText(text::sub),
        summary: "replace the first [original] with [replacement]",
    },
    BuiltinSpec {
        name: "gsub", adapter: Adapter::AsText(text::gsub),
        summary: "replace every [original] with [replacement]",
    },
    BuiltinSpec {
        name: "transubstantiate", adapter: Adapter::AsText(rewrite::transubstantiate),
        summary: "replace the first match of regex [pattern] with [replacement]",
    },
    BuiltinSpec {
        name: "transubstantiate_all", adapter: Adapter::AsText(rewrite::transubstantiate_all),
        summary: "replace every match of regex [pattern] with [replacement]",
    },
    BuiltinSpec {
        name: "query", adapter: Adapter::AsText(rewrite::query),
        summary: "first character of a regex [pattern] match at the start, else the input",
    },
    // ── Case ─────────────────────────────────────────────────────
    BuiltinSpec {
        name: "shout", adapter: Adapter::AsText(text::shout),
        summary: "uppercase everything",
    },
    BuiltinSpec {
        name: "whisper", adapter: Adapter::AsText(text::whisper),
        summary: "lowercase everything",
    },
    BuiltinSpec {
        name: "title", adapter: Adapter::AsText(text::title),
        summary: "capitalize every word",
    },
    BuiltinSpec {
        name: "part_title", adapter: Adapter::AsText(text::part_title),
        summary: "capitalize the first character only",
    },
    BuiltinSpec {
        name: "illuminate", adapter: Adapter::AsText(text::illuminate),
        summary: "Fraktur initial, rest lowercase",
    },
    // ── Elements ─────────────────────────────────────────────────
    BuiltinSpec {
        name: "reject", adapter: Adapter::AsSequence(sequence::reject),
        summary: "drop elements equal to [value]",
    },
    BuiltinSpec {
        name: "accept", adapter: Adapter::AsSequence(sequence::accept),
        summary: "keep only elements equal to [value]",
    },
    BuiltinSpec {
        name: "shuffle", adapter: Adapter::AsSequence(sequence::shuffle),
        summary: "random permutation",
    },
    BuiltinSpec {
        name: "juggle", adapter: Adapter::AsSequence(sequence::juggle),
        summary: "rotate right 1-9 places at random",
    },
    BuiltinSpec {
        name: "interject", adapter: Adapter::AsSequence(sequence::interject),
        summary: "insert [value] at [index], random if absent",
    },
    BuiltinSpec {
        name: "arrange", adapter: Adapter::Raw(sequence::arrange),
        summary: "sort elements by code point; text is left alone",
    },
    // ── Novelty ──────────────────────────────────────────────────
    BuiltinSpec {
        name: "flip", adapter: Adapter::AsText(novelty::flip),
        summary: "turn upside down",
    },
    BuiltinSpec {
        name: "flirt", adapter: Adapter::AsText(novelty::flirt),
        summary: "fullwidth characters",
    },
    BuiltinSpec {
        name: "dotmatrix", adapter: Adapter::AsText(novelty::dotmatrix),
        summary: "braille dot-matrix letters",
    },
    BuiltinSpec {
        name: "ransomize", adapter: Adapter::AsText(novelty::ransomize),
        summary: "every letter from a random math alphabet",
    },
    BuiltinSpec {
        name: "buttify", adapter: Adapter::AsText(rewrite::buttify),
        summary: "but/butt to \u{1F351}",
    },
];

/// Look up a builtin by exact name.
pub fn lookup(name: &str) -> Option<&'static BuiltinSpec> {
    BUILTINS.iter().find(|spec| spec.name == name)
}

/// Names of all builtins, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|spec| spec.name)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
