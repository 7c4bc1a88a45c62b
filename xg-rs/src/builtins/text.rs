//! Text builtins: splitting, literal substitution, and case changes.
//!
//! All of these take their input as one string.

use rand::RngCore;

use super::Args;
use crate::value::Value;

/// Mathematical Fraktur capitals A–Z.  C, H, I, R and Z live in the
/// Letterlike Symbols block rather than the mathematical alphabet.
const FRAKTUR_CAPITALS: [char; 26] = [
    '\u{1D504}', '\u{1D505}', '\u{212D}', '\u{1D507}', '\u{1D508}', '\u{1D509}',
    '\u{1D50A}', '\u{210C}', '\u{2111}', '\u{1D50D}', '\u{1D50E}', '\u{1D50F}',
    '\u{1D510}', '\u{1D511}', '\u{1D512}', '\u{1D513}', '\u{1D514}', '\u{211C}',
    '\u{1D516}', '\u{1D517}', '\u{1D518}', '\u{1D519}', '\u{1D51A}', '\u{1D51B}',
    '\u{1D51C}', '\u{2128}',
];

/// `burst [separator]`: split into a sequence, per character or on
/// `separator`.  An empty separator splits per character.
pub fn burst(input: String, args: &Args<'_>, _rng: &mut dyn RngCore) -> Value {
    match args.get(0) {
        Some(sep) if !sep.is_empty() => {
            Value::Sequence(input.split(sep).map(str::to_owned).collect())
        }
        _ => Value::Text(input).into_sequence().into(),
    }
}

/// `sub [original] [replacement]`: replace the first literal occurrence.
pub fn sub(input: String, args: &Args<'_>, _rng: &mut dyn RngCore) -> Value {
    let original = args.get_or(0, "");
    let replacement = args.get_or(1, "");
    Value::Text(input.replacen(original, replacement, 1))
}

/// `gsub [original] [replacement]`: replace every literal occurrence.
pub fn gsub(input: String, args: &Args<'_>, _rng: &mut dyn RngCore) -> Value {
    let original = args.get_or(0, "");
    let replacement = args.get_or(1, "");
    Value::Text(input.replace(original, replacement))
}

pub fn shout(input: String, _args: &Args<'_>, _rng: &mut dyn RngCore) -> Value {
    Value::Text(input.to_uppercase())
}

pub fn whisper(input: String, _args: &Args<'_>, _rng: &mut dyn RngCore) -> Value {
    Value::Text(input.to_lowercase())
}

/// `title`: uppercase a cased character that follows an uncased one,
/// lowercase every other cased character.
pub fn title(input: String, _args: &Args<'_>, _rng: &mut dyn RngCore) -> Value {
    let mut out = String::with_capacity(input.len());
    let mut prev_cased = false;
    for c in input.chars() {
        let cased = is_cased(c);
        if !cased {
            out.push(c);
        } else if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = cased;
    }
    Value::Text(out)
}

/// `part_title`: first character uppercased, the rest lowercased.
pub fn part_title(input: String, _args: &Args<'_>, _rng: &mut dyn RngCore) -> Value {
    let mut chars = input.chars();
    let out = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    };
    Value::Text(out)
}

/// `illuminate`: a leading Latin letter becomes a Fraktur capital, the rest
/// of the text is lowercased.  Any other first character is left as is.
pub fn illuminate(input: String, _args: &Args<'_>, _rng: &mut dyn RngCore) -> Value {
    let mut chars = input.chars();
    let Some(first) = chars.next() else {
        return Value::Text(input);
    };
    let rest = chars.as_str().to_lowercase();

    let mut lowered = first.to_lowercase();
    let initial = match (lowered.next(), lowered.next()) {
        (Some(c @ 'a'..='z'), None) => FRAKTUR_CAPITALS[(c as u8 - b'a') as usize],
        _ => first,
    };

    let mut out = String::with_capacity(rest.len() + 4);
    out.push(initial);
    out.push_str(&rest);
    Value::Text(out)
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
