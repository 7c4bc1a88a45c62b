//! Sequence builtins: element filtering, reordering, and joining.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use super::{coerce_int, Args};
use crate::value::Value;

/// Upper bound (inclusive) of the rotation count drawn by `juggle`.
const JUGGLE_MAX_TURNS: usize = 9;

/// `collapse [joiner]`: join a sequence into text.  Text is returned as is.
pub fn collapse(input: Value, args: &Args<'_>, _rng: &mut dyn RngCore) -> Value {
    match input {
        Value::Text(s) => Value::Text(s),
        Value::Sequence(items) => Value::Text(items.join(args.get_or(0, ""))),
    }
}

/// `reject [value]`: drop every element equal to `value`.
pub fn reject(mut items: Vec<String>, args: &Args<'_>, _rng: &mut dyn RngCore) -> Value {
    let value = args.get_or(0, "");
    items.retain(|el| el != value);
    Value::Sequence(items)
}

/// `accept [value]`: keep only elements equal to `value`.
pub fn accept(mut items: Vec<String>, args: &Args<'_>, _rng: &mut dyn RngCore) -> Value {
    let value = args.get_or(0, "");
    items.retain(|el| el == value);
    Value::Sequence(items)
}

/// `shuffle`: uniformly random permutation.
pub fn shuffle(mut items: Vec<String>, _args: &Args<'_>, rng: &mut dyn RngCore) -> Value {
    items.shuffle(rng);
    Value::Sequence(items)
}

/// `juggle`: rotate right by a random count in `1..=9`.
pub fn juggle(mut items: Vec<String>, _args: &Args<'_>, rng: &mut dyn RngCore) -> Value {
    let turns = rng.random_range(1..=JUGGLE_MAX_TURNS);
    if !items.is_empty() {
        let len = items.len();
        items.rotate_right(turns % len);
    }
    Value::Sequence(items)
}

/// `interject [value] [index]`: insert `value` at `index`.
///
/// An absent or empty index picks a uniformly random position in
/// `0..=len`.  A non-numeric index is replaced by the sum of its code
/// points.  See [`insertion_index`] for out-of-range handling.
pub fn interject(mut items: Vec<String>, args: &Args<'_>, rng: &mut dyn RngCore) -> Value {
    let value = args.get_or(0, "");
    let len = items.len();
    let index = match coerce_int(args.get_or(1, "")) {
        Some(requested) => insertion_index(requested, len),
        None => rng.random_range(0..=len),
    };
    items.insert(index, value.to_owned());
    Value::Sequence(items)
}

/// `arrange`: sort a sequence by code point.  Text is returned as is.
pub fn arrange(input: Value, _args: &Args<'_>, _rng: &mut dyn RngCore) -> Value {
    match input {
        Value::Text(s) => Value::Text(s),
        Value::Sequence(mut items) => {
            items.sort_unstable();
            Value::Sequence(items)
        }
    }
}

/// Map a requested index onto a valid insertion point in `0..=len`.
///
/// Negative indices count back from the end (`-1` is before the last
/// element); the result is then clamped, so anything past the end appends
/// and anything before the start prepends.
pub fn insertion_index(requested: i64, len: usize) -> usize {
    if requested < 0 {
        let from_end = requested.saturating_add(i64::try_from(len).unwrap_or(i64::MAX));
        usize::try_from(from_end).unwrap_or(0)
    } else {
        usize::try_from(requested).map_or(len, |i| i.min(len))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|&s| s.to_owned()).collect()
    }

    fn seq(items: &[&str]) -> Value {
        Value::Sequence(strings(items))
    }

    fn call(f: crate::coerce::SequenceFn, items: &[&str], args: &[&str]) -> Value {
        call_seeded(f, items, args, 7)
    }

    fn call_seeded(f: crate::coerce::SequenceFn, items: &[&str], args: &[&str], seed: u64) -> Value {
        let args = strings(args);
        f(strings(items), &Args::new(&args), &mut StdRng::seed_from_u64(seed))
    }

    fn call_raw(f: crate::coerce::RawFn, input: Value, args: &[&str]) -> Value {
        let args = strings(args);
        f(input, &Args::new(&args), &mut StdRng::seed_from_u64(7))
    }

    fn sorted(v: Value) -> Vec<String> {
        let mut items = v.into_sequence();
        items.sort();
        items
    }

    #[test]
    fn collapse_joins() {
        assert_eq!(call_raw(collapse, seq(&["a", "b", "c"]), &["-"]), "a-b-c".into());
        assert_eq!(call_raw(collapse, seq(&["a", "b"]), &[]), "ab".into());
        assert_eq!(call_raw(collapse, seq(&[]), &["-"]), "".into());
    }

    #[test]
    fn collapse_text_unchanged() {
        assert_eq!(call_raw(collapse, "abc".into(), &["-"]), "abc".into());
    }

    #[test]
    fn reject_removes_matches() {
        assert_eq!(call(reject, &["a", "b", "a", "c"], &["a"]), seq(&["b", "c"]));
        assert_eq!(call(reject, &["a", "", "b"], &[]), seq(&["a", "b"]));
    }

    #[test]
    fn accept_keeps_matches() {
        assert_eq!(call(accept, &["a", "b", "a", "c"], &["a"]), seq(&["a", "a"]));
        assert_eq!(call(accept, &["a", "b"], &["z"]), seq(&[]));
    }

    #[test]
    fn accept_and_reject_partition() {
        let input = ["x", "y", "x", "z"];
        let mut both = call(accept, &input, &["x"]).into_sequence();
        both.extend(call(reject, &input, &["x"]).into_sequence());
        both.sort();
        assert_eq!(both, strings(&["x", "x", "y", "z"]));
    }

    #[test]
    fn shuffle_is_permutation() {
        let input = ["a", "b", "c", "d", "e", "f"];
        let out = call(shuffle, &input, &[]);
        assert_eq!(sorted(out), strings(&input));
    }

    #[test]
    fn shuffle_is_deterministic_for_a_seed() {
        let input = ["a", "b", "c", "d", "e", "f"];
        assert_eq!(
            call_seeded(shuffle, &input, &[], 42),
            call_seeded(shuffle, &input, &[], 42)
        );
    }

    #[test]
    fn juggle_is_rotation() {
        let input = ["1", "2", "3", "4", "5"];
        let out = call(juggle, &input, &[]).into_sequence();
        let rotations: Vec<Vec<String>> = (0..input.len())
            .map(|k| {
                let mut r = strings(&input);
                r.rotate_right(k);
                r
            })
            .collect();
        assert!(rotations.contains(&out), "{out:?} is not a rotation");
    }

    #[test]
    fn juggle_turns_in_range() {
        // With more elements than the maximum turn count, the rotation amount
        // is visible directly: it must be between 1 and 9.
        let input: Vec<String> = (0..20).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = input.iter().map(String::as_str).collect();
        for seed in 0..50 {
            let out = call_seeded(juggle, &refs, &[], seed).into_sequence();
            let shift = out.iter().position(|s| s == "0").unwrap();
            assert!((1..=9).contains(&shift), "seed {seed}: shift {shift}");
        }
    }

    #[test]
    fn juggle_empty() {
        assert_eq!(call(juggle, &[], &[]), seq(&[]));
    }

    #[test]
    fn interject_at_index() {
        assert_eq!(call(interject, &["a", "b", "c"], &["X", "1"]), seq(&["a", "X", "b", "c"]));
        assert_eq!(call(interject, &["a", "b"], &["X", "0"]), seq(&["X", "a", "b"]));
        assert_eq!(call(interject, &["a", "b"], &["X", "2"]), seq(&["a", "b", "X"]));
    }

    #[test]
    fn interject_negative_counts_from_end() {
        assert_eq!(call(interject, &["a", "b", "c"], &["X", "-1"]), seq(&["a", "b", "X", "c"]));
        assert_eq!(call(interject, &["a", "b"], &["X", "-10"]), seq(&["X", "a", "b"]));
    }

    #[test]
    fn interject_past_end_appends() {
        assert_eq!(call(interject, &["a", "b"], &["X", "99"]), seq(&["a", "b", "X"]));
    }

    #[test]
    fn interject_non_numeric_index_uses_code_point_sum() {
        // "A" is 65: past the end of a short sequence, so it appends.
        assert_eq!(call(interject, &["a", "b", "c"], &["X", "A"]), seq(&["a", "b", "c", "X"]));
        // "\u{2}" is 2.
        assert_eq!(call(interject, &["a", "b", "c"], &["X", "\u{2}"]), seq(&["a", "b", "X", "c"]));
        // 66 elements: "A" lands exactly at 65.
        let long: Vec<String> = (0..66).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = long.iter().map(String::as_str).collect();
        let out = call(interject, &refs, &["X", "A"]).into_sequence();
        assert_eq!(out[65], "X");
        assert_eq!(out.len(), 67);
    }

    #[test]
    fn interject_random_index_in_bounds() {
        for seed in 0..50 {
            let out = call_seeded(interject, &["a", "b", "c"], &["X"], seed).into_sequence();
            assert_eq!(out.len(), 4);
            assert_eq!(out.iter().filter(|s| *s == "X").count(), 1);
            let rest: Vec<&String> = out.iter().filter(|s| *s != "X").collect();
            assert_eq!(rest, ["a", "b", "c"]);
        }
    }

    #[test]
    fn interject_into_empty() {
        assert_eq!(call(interject, &[], &["X"]), seq(&["X"]));
        assert_eq!(call(interject, &[], &[]), seq(&[""]));
    }

    #[test]
    fn arrange_sorts_sequences() {
        assert_eq!(
            call_raw(arrange, seq(&["d", "c", "b", "a"]), &[]),
            seq(&["a", "b", "c", "d"])
        );
        assert_eq!(call_raw(arrange, seq(&["b", "B", "é", "a"]), &[]), seq(&["B", "a", "b", "é"]));
    }

    #[test]
    fn arrange_text_unchanged() {
        assert_eq!(call_raw(arrange, "dcba".into(), &[]), "dcba".into());
    }

    #[test]
    fn insertion_index_policy() {
        assert_eq!(insertion_index(0, 3), 0);
        assert_eq!(insertion_index(3, 3), 3);
        assert_eq!(insertion_index(4, 3), 3);
        assert_eq!(insertion_index(-1, 3), 2);
        assert_eq!(insertion_index(-3, 3), 0);
        assert_eq!(insertion_index(-4, 3), 0);
        assert_eq!(insertion_index(i64::MIN, 3), 0);
        assert_eq!(insertion_index(i64::MAX, 3), 3);
    }
}
