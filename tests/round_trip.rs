//! Round-trip tests: rendering a parsed poem reproduces the source.
//!
//! Exact reproduction holds for tab-free input with no leading/trailing
//! blank lines and single blank-line stanza breaks. Tabs normalize to
//! spaces of the same column width, for which rendering is idempotent.

use proptest::prelude::*;

use strophe::poem::testing::parse_fixture;

fn render(text: &str) -> String {
    parse_fixture(text).to_string()
}

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn line() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(word(), 1..5),
        prop::sample::select(vec!["", ".", ",", "!", "?", ";"]),
        0usize..3,
    )
        .prop_map(|(words, tail, indent)| {
            format!("{}{}{}", " ".repeat(indent * 2), words.join(" "), tail)
        })
}

fn stanza() -> impl Strategy<Value = String> {
    prop::collection::vec(line(), 1..4).prop_map(|lines| lines.join("\n"))
}

fn poem_text() -> impl Strategy<Value = String> {
    prop::collection::vec(stanza(), 1..4).prop_map(|stanzas| stanzas.join("\n\n"))
}

proptest! {
    #[test]
    fn round_trip_is_exact_for_canonical_text(text in poem_text()) {
        prop_assert_eq!(render(&text), text);
    }

    #[test]
    fn rendering_is_idempotent(text in poem_text()) {
        let once = render(&text);
        prop_assert_eq!(render(&once), once);
    }
}

#[test]
fn test_round_trip_preserves_interior_space_runs() {
    let text = "a  gap   here";
    assert_eq!(render(text), text);
}

#[test]
fn test_round_trip_preserves_trailing_spaces() {
    let text = "a line  \nanother";
    assert_eq!(render(text), text);
}

#[test]
fn test_round_trip_preserves_stanza_breaks() {
    let text = "one\ntwo\n\nthree";
    assert_eq!(render(text), text);
}

#[test]
fn test_tabs_normalize_to_columns() {
    assert_eq!(render("\tword"), "    word");
    assert_eq!(render("a\tb"), "a    b");
}

#[test]
fn test_tab_normalization_is_idempotent() {
    let text = "\tthe cat\tsat\n  on the mat.";
    let once = render(text);
    assert_eq!(render(&once), once);
}

#[test]
fn test_blank_line_runs_collapse_to_one() {
    assert_eq!(render("one\n\n\n\ntwo"), "one\n\ntwo");
}

#[test]
fn test_unicode_punctuation_round_trips() {
    let text = "the cat—asleep…\n“so” it goes";
    assert_eq!(render(text), text);
}
