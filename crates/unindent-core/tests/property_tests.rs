use proptest::prelude::*;
use unindent_core::{LineBoundary, split_lines, unindent};

/// A line of code that starts at column 0 and may carry its own nesting.
fn code_line() -> impl Strategy<Value = String> {
    ("[ ]{0,8}", "[a-z][a-z0-9 =()+]{0,12}").prop_map(|(indent, body)| format!("{indent}{body}"))
}

/// One terminator from the recognized set.
fn terminator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(LineBoundary::ALL.to_vec()).prop_map(|b| b.as_str())
}

/// Lines joined with random terminators; the first line is anchored at
/// column 0 so the block's margin is zero.
fn anchored_block() -> impl Strategy<Value = Vec<(String, &'static str)>> {
    (
        "[a-z][a-z0-9 =]{0,12}",
        terminator(),
        prop::collection::vec((code_line(), terminator()), 0..12),
    )
        .prop_map(|(first, term, mut rest)| {
            rest.insert(0, (first, term));
            rest
        })
}

fn join(lines: &[(String, &str)], indent: &str) -> String {
    lines
        .iter()
        .map(|(content, term)| format!("{indent}{content}{term}"))
        .collect()
}

proptest! {
    #[test]
    fn test_zero_margin_is_identity(lines in anchored_block()) {
        let text = join(&lines, "");
        prop_assert_eq!(unindent(&text, false).unwrap(), text.clone());
        prop_assert_eq!(unindent(&text, true).unwrap(), text);
    }

    #[test]
    fn test_uniform_indent_roundtrip(lines in anchored_block(), k in 1usize..10) {
        let original = join(&lines, "");
        let indented = join(&lines, &" ".repeat(k));
        prop_assert_eq!(unindent(&indented, false).unwrap(), original);
    }

    #[test]
    fn test_terminators_are_preserved(lines in anchored_block(), k in 0usize..6) {
        let indented = join(&lines, &" ".repeat(k));
        let out = unindent(&indented, false).unwrap();

        let before: Vec<&str> = split_lines(&indented).iter().map(|l| l.terminator).collect();
        let after: Vec<&str> = split_lines(&out).iter().map(|l| l.terminator).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn test_relative_nesting_is_preserved(
        k in 1usize..8,
        extra in prop::collection::vec(0usize..8, 1..10),
    ) {
        let mut source = format!("{}anchor\n", " ".repeat(k));
        let mut expected = String::from("anchor\n");
        for (i, e) in extra.iter().enumerate() {
            source.push_str(&format!("{}x{i}\n", " ".repeat(k + e)));
            expected.push_str(&format!("{}x{i}\n", " ".repeat(*e)));
        }
        prop_assert_eq!(unindent(&source, false).unwrap(), expected);
    }

    #[test]
    fn test_short_blank_lines_never_fail(k in 1usize..10, blank in 0usize..10) {
        let source = format!("{0}a\n{1}\n{0}b\n", " ".repeat(k), " ".repeat(blank));
        let expected_blank = " ".repeat(blank.saturating_sub(k));
        prop_assert_eq!(
            unindent(&source, false).unwrap(),
            format!("a\n{expected_blank}\nb\n")
        );
    }

    #[test]
    fn test_split_then_join_is_identity(text in "\\PC*") {
        let joined: String = split_lines(&text)
            .iter()
            .map(|l| format!("{}{}", l.content, l.terminator))
            .collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn test_unindent_is_deterministic(text in "[ a#\\n\\r\\t]{0,40}", reflow in any::<bool>()) {
        prop_assert_eq!(unindent(&text, reflow), unindent(&text, reflow));
    }
}
