//! Cosmetic character-map builtins.

use rand::{Rng, RngCore};

use super::Args;
use crate::value::Value;

const FLIP_PREFIX: &str = "\u{FF08}\u{256F}\u{00B0}\u{25A1}\u{00B0}\u{FF09}\u{256F}\u{FE35} ";

// Parallel tables: the n-th char of FLIP_FROM turns into the n-th of FLIP_TO.
const FLIP_FROM: &str = " abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ?\u{203D}";
const FLIP_TO: &str = " \u{0250}q\u{0254}p\u{01DD}\u{025F}\u{0183}\u{0265}\u{1D09}\u{027E}\u{029E}l\u{026F}uodb\u{0279}s\u{0287}n\u{028C}\u{028D}x\u{028E}z\
\u{2200}\u{15FA}\u{0186}p\u{018E}\u{2132}\u{05E4}HI\u{017F}\u{029E}\u{02E5}WNO\u{0500}Q\u{0279}S\u{2534}\u{2229}\u{039B}MX\u{2144}Z\
\u{00BF}\u{2E18}";

/// Two-cell braille renderings of A–Z.
const DOTMATRIX: [&str; 26] = [
    "\u{286E}\u{28B5}", "\u{28DF}\u{28F3}", "\u{288E}\u{28C9}", "\u{28CF}\u{2871}",
    "\u{28DF}\u{28CB}", "\u{286F}\u{280D}", "\u{288E}\u{28E5}", "\u{2857}\u{28BA}",
    "\u{2847}", "\u{28C9}\u{280F}", "\u{2867}\u{288E}", "\u{28C7}\u{28C0}",
    "\u{2857}\u{28BA}", "\u{2857}\u{28BC}", "\u{288E}\u{2871}", "\u{286F}\u{2815}",
    "\u{288E}\u{28F5}", "\u{286F}\u{2895}", "\u{28DA}\u{286B}", "\u{28B9}\u{284F}",
    "\u{2887}\u{2878}", "\u{28A3}\u{285C}", "\u{2867}\u{28BC}", "\u{2871}\u{288E}",
    "\u{28B1}\u{284E}", "\u{28E9}\u{28CB}",
];

/// First code point of each alphabet `ransomize` draws from.  Every one is a
/// gap-free 26-letter run in Mathematical Alphanumeric Symbols.
const RANSOM_ALPHABETS: [u32; 15] = [
    0x1D434, // italic capital
    0x1D4D0, // bold script capital
    0x1D4EA, // bold script small
    0x1D51E, // fraktur small
    0x1D552, // double-struck small
    0x1D56C, // bold fraktur capital
    0x1D586, // bold fraktur small
    0x1D5A0, // sans-serif capital
    0x1D5BA, // sans-serif small
    0x1D5D4, // sans-serif bold capital
    0x1D5EE, // sans-serif bold small
    0x1D608, // sans-serif italic capital
    0x1D622, // sans-serif italic small
    0x1D63C, // sans-serif bold italic capital
    0x1D68A, // monospace small
];

/// `flip`: the input upside down, behind a table-flipper.
pub fn flip(input: String, _args: &Args<'_>, _rng: &mut dyn RngCore) -> Value {
    let mut out = String::from(FLIP_PREFIX);
    out.extend(input.chars().rev().map(flip_char));
    Value::Text(out)
}

/// `flirt`: printable ASCII to fullwidth forms.
pub fn flirt(input: String, _args: &Args<'_>, _rng: &mut dyn RngCore) -> Value {
    Value::Text(input.chars().map(fullwidth).collect())
}

/// `dotmatrix`: letters as braille dot-matrix glyphs.
pub fn dotmatrix(input: String, _args: &Args<'_>, _rng: &mut dyn RngCore) -> Value {
    let mut out = String::with_capacity(input.len() * 6);
    for c in input.to_uppercase().chars() {
        match letter_index(c) {
            Some(i) => out.push_str(DOTMATRIX[i]),
            None => out.push(c),
        }
    }
    Value::Text(out)
}

/// `ransomize`: each letter in a randomly chosen mathematical alphabet.
pub fn ransomize(input: String, _args: &Args<'_>, rng: &mut dyn RngCore) -> Value {
    let out = input
        .to_uppercase()
        .chars()
        .map(|c| match letter_index(c) {
            Some(i) => {
                let base = RANSOM_ALPHABETS[rng.random_range(0..RANSOM_ALPHABETS.len())];
                char::from_u32(base + i as u32).unwrap_or(c)
            }
            None => c,
        })
        .collect();
    Value::Text(out)
}

fn flip_char(c: char) -> char {
    FLIP_FROM
        .chars()
        .zip(FLIP_TO.chars())
        .find_map(|(from, to)| (from == c).then_some(to))
        .unwrap_or(c)
}

fn fullwidth(c: char) -> char {
    match c {
        ' ' => '\u{3000}',
        '!'..='~' => char::from_u32(c as u32 - 0x21 + 0xFF01).unwrap_or(c),
        _ => c,
    }
}

fn letter_index(c: char) -> Option<usize> {
    c.is_ascii_uppercase().then(|| (c as u8 - b'A') as usize)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
