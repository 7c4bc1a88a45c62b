use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use xenoglossia::builtins::sequence::insertion_index;
use xenoglossia::interp::{Execution, State};
use xenoglossia::tokenizer::{tokenize, tokenize_bytes};
use xenoglossia::{Interpreter, Value};

fn run(input: &str, program: &str) -> String {
    Interpreter::with_seed(0)
        .run(input, program)
        .unwrap_or_else(|e| panic!("{program:?} failed: {e}"))
}

proptest! {
    /// The tokenizer returns Ok or Err on any byte string; it never panics.
    #[test]
    fn tokenizer_does_not_panic(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let _ = tokenize_bytes(&bytes);
    }

    /// Parse error positions always fall inside the program text.
    #[test]
    fn parse_error_offset_in_bounds(s in "[a-z '\"\\n!]{0,24}") {
        if let Err(e) = tokenize(&s) {
            prop_assert!(e.offset <= s.chars().count());
            prop_assert!(e.line >= 1);
            prop_assert!(e.column >= 1);
        }
    }
}

proptest! {
    /// Splitting into characters and joining with nothing restores the input.
    #[test]
    fn burst_then_collapse_is_identity(s in "\\PC*") {
        prop_assert_eq!(run(&s, "burst collapse"), s);
    }

    /// Splitting and joining on the same separator restores the input.
    #[test]
    fn burst_then_collapse_same_separator(s in "[a-c,;]*", sep in "[,;]") {
        let program = format!("burst '{sep}' collapse '{sep}'");
        prop_assert_eq!(run(&s, &program), s);
    }

    /// Flattening a burst text gives the text back.
    #[test]
    fn burst_alone_flattens_back(s in "\\PC*") {
        prop_assert_eq!(run(&s, "burst"), s);
    }
}

proptest! {
    #[test]
    fn shout_is_idempotent(s in "[a-zA-Z0-9 àéîõüßÀÉÎÕÜ,.!?-]*") {
        let once = run(&s, "shout");
        prop_assert_eq!(run(&once, "shout"), once);
    }

    #[test]
    fn whisper_is_idempotent(s in "[a-zA-Z0-9 àéîõüßÀÉÎÕÜ,.!?-]*") {
        let once = run(&s, "whisper");
        prop_assert_eq!(run(&once, "whisper"), once);
    }

    /// `arrange` leaves text alone; it only sorts sequences.
    #[test]
    fn arrange_on_text_is_identity(s in "\\PC*") {
        prop_assert_eq!(run(&s, "arrange"), s);
    }

    /// A sorted burst comes out with its characters in code point order.
    #[test]
    fn burst_arrange_sorts_characters(s in "[a-zA-Z0-9]*") {
        let mut expected: Vec<char> = s.chars().collect();
        expected.sort_unstable();
        let expected: String = expected.into_iter().collect();
        prop_assert_eq!(run(&s, "burst arrange"), expected);
    }

}

/// Text-in, text-out calls: none of these ever yields a sequence.
const TEXT_CALLS: &[&str] = &[
    "shout",
    "whisper",
    "title",
    "part_title",
    "gsub 'A' 'x'",
    "sub 'e' ''",
    "transubstantiate_all '[aeiou]' '_'",
    "query 'h.'",
    "flirt",
];

proptest! {
    /// For a text-only program the output is exactly the last call's return
    /// value; flattening at the end changes nothing.
    #[test]
    fn text_only_output_is_last_return(
        s in "[a-zA-Z ]*",
        picks in proptest::collection::vec(0..TEXT_CALLS.len(), 1..6),
    ) {
        let program: Vec<&str> = picks.iter().map(|&i| TEXT_CALLS[i]).collect();
        let calls = tokenize(&program.join(" ")).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let mut exec = Execution::new(s.as_str(), &calls);

        let mut last = exec.state().clone();
        while !exec.state().is_finished() {
            last = exec.state().clone();
            exec.step(&mut rng);
        }

        let State::Running { value: Value::Text(returned), next } = last else {
            panic!("state before completion was {last:?}");
        };
        prop_assert_eq!(next, calls.len());
        prop_assert_eq!(exec.state(), &State::Done(returned));
    }
}

proptest! {
    /// The same seed yields the same output for random builtins.
    #[test]
    fn seeded_runs_are_deterministic(s in "[a-z]{0,16}", seed in any::<u64>()) {
        let program = "shuffle juggle interject '-' ransomize";
        let a = Interpreter::with_seed(seed).run(&s, program).unwrap();
        let b = Interpreter::with_seed(seed).run(&s, program).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Random reorderings keep every element.
    #[test]
    fn shuffle_and_juggle_are_permutations(s in "[a-z]{0,16}", seed in any::<u64>()) {
        let out = Interpreter::with_seed(seed).run(&s, "shuffle juggle").unwrap();
        let mut before: Vec<char> = s.chars().collect();
        let mut after: Vec<char> = out.chars().collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    /// Insertion positions are always valid for the sequence.
    #[test]
    fn insertion_index_in_range(requested in any::<i64>(), len in 0usize..64) {
        prop_assert!(insertion_index(requested, len) <= len);
    }

    /// `interject` grows the sequence by exactly one element.
    #[test]
    fn interject_adds_one_element(s in "[a-z]{0,12}", idx in -20i64..20) {
        let program = format!("burst interject '!' '{idx}'");
        let out = run(&s, &program);
        prop_assert_eq!(out.chars().count(), s.chars().count() + 1);
        prop_assert_eq!(out.replacen('!', "", 1), s);
    }
}

#[test]
fn non_numeric_index_uses_code_point_sum() {
    // "A" is 65, past the end of a 3-element sequence.
    assert_eq!(run("abc", "interject '!' 'A'"), "abc!");
}

#[test]
fn value_shapes_flatten_alike() {
    let seq = Value::Sequence(vec!["ab".into(), "c".into()]);
    assert_eq!(seq.into_text(), "abc");
    assert_eq!(Value::from("abc").into_sequence(), vec!["a", "b", "c"]);
}
