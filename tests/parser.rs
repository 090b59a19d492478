//! Integration tests for the parsing pipeline: stanza splitting, line
//! assembly, indentation, and enjambment.

use strophe::poem::ast::{Enjambment, LineElement};
use strophe::poem::parsing::parse_poem;
use strophe::poem::testing::{parse_fixture, test_lookup};

#[test]
fn test_blank_line_separates_stanzas() {
    let poem = parse_fixture("line1\n\nline2");
    assert_eq!(poem.stanzas.len(), 2);
    assert_eq!(poem.stanzas[0].lines.len(), 1);
    assert_eq!(poem.stanzas[1].lines.len(), 1);
}

#[test]
fn test_adjacent_lines_share_a_stanza() {
    let poem = parse_fixture("line1\nline2");
    assert_eq!(poem.stanzas.len(), 1);
    assert_eq!(poem.stanzas[0].lines.len(), 2);
}

#[test]
fn test_multiple_blank_lines_make_one_boundary() {
    let poem = parse_fixture("one\n\n\n\ntwo");
    assert_eq!(poem.stanzas.len(), 2);
}

#[test]
fn test_whitespace_only_line_is_a_boundary() {
    let poem = parse_fixture("one\n  \t \ntwo");
    assert_eq!(poem.stanzas.len(), 2);
}

#[test]
fn test_empty_input_yields_zero_stanzas() {
    let poem = parse_fixture("");
    assert!(poem.stanzas.is_empty());
    assert_eq!(poem.total_lines(), 0);
}

#[test]
fn test_whitespace_only_input_yields_zero_stanzas() {
    let poem = parse_fixture(" \n\t\n   \n");
    assert!(poem.stanzas.is_empty());
}

#[test]
fn test_tab_indentation_counts_four_columns() {
    let poem = parse_fixture("\tword");
    assert_eq!(poem.stanzas[0].lines[0].indentation, 4);
}

#[test]
fn test_space_indentation_counts_columns() {
    let poem = parse_fixture("  word");
    assert_eq!(poem.stanzas[0].lines[0].indentation, 2);
}

#[test]
fn test_leading_blank_lines_preserve_first_line_indentation() {
    let poem = parse_fixture("\n\n\tword\n");
    assert_eq!(poem.stanzas.len(), 1);
    assert_eq!(poem.stanzas[0].lines[0].indentation, 4);
}

#[test]
fn test_enjambment_spec_example() {
    let poem = parse_fixture("The cat sat\non the red mat.");
    let stanza = &poem.stanzas[0];
    assert!(stanza.lines[0].enjambed);
    assert!(!stanza.lines[1].enjambed);

    let sat = stanza.lines[0].words().last().unwrap();
    assert_eq!(sat.text, "sat");
    assert_eq!(sat.enjambment, Enjambment::EndOfLine);

    let on = stanza.lines[1].words().next().unwrap();
    assert_eq!(on.text, "on");
    assert_eq!(on.enjambment, Enjambment::StartOfLine);
}

#[test]
fn test_enjambment_does_not_cross_stanzas() {
    // "sat" ends its stanza, so nothing is enjambed despite the missing period
    let poem = parse_fixture("The cat sat\n\non the red mat.");
    let sat = poem.stanzas[0].lines[0].words().last().unwrap();
    assert!(!poem.stanzas[0].lines[0].enjambed);
    assert_eq!(sat.enjambment, Enjambment::None);
}

#[test]
fn test_question_and_exclamation_end_clauses() {
    let poem = parse_fixture("was that a cat?\nthe dog was slow!\nand on");
    assert!(!poem.stanzas[0].lines[0].enjambed);
    assert!(!poem.stanzas[0].lines[1].enjambed);
}

#[test]
fn test_every_character_is_preserved() {
    // digits and symbols survive as one-character punctuation
    let poem = parse_fixture("room 101 & more");
    let line = &poem.stanzas[0].lines[0];
    let rendered = line.to_string();
    assert_eq!(rendered, "room 101 & more");

    let punctuation: Vec<&str> = line
        .elements
        .iter()
        .filter_map(|element| match element {
            LineElement::Punctuation(mark) => Some(mark.mark.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(punctuation, vec!["1", "0", "1", "&"]);
}

#[test]
fn test_hyphenated_words_are_single_words() {
    let poem = parse_fixture("my mother-in-law don't sing");
    let words: Vec<&str> = poem.stanzas[0].lines[0]
        .words()
        .map(|w| w.text.as_str())
        .collect();
    assert_eq!(words, vec!["my", "mother-in-law", "don't", "sing"]);
}

#[test]
fn test_title_and_author_are_stored() {
    let poem = parse_poem("the cat", Some("Ode"), Some("Anon"), test_lookup());
    assert_eq!(poem.title.as_deref(), Some("Ode"));
    assert_eq!(poem.author.as_deref(), Some("Anon"));
}

#[test]
fn test_word_positions_span_stanzas() {
    let poem = parse_fixture("the cat\nthe hat\n\nthe mat");
    let mat = poem.stanzas[1].lines[0].words().last().unwrap();
    let pos = mat.position().unwrap();
    assert_eq!(pos.line_index, 2);
    assert_eq!(pos.stanza_line_index, 0);
    assert_eq!(pos.stanza_number, 2);
    assert_eq!(pos.word_index, 1);
    assert!(pos.is_line_end);
}

#[test]
fn test_word_context_is_owning_line() {
    let poem = parse_fixture("  the cat sat\non the mat.");
    let cat = poem.stanzas[0].lines[0].words().nth(1).unwrap();
    assert_eq!(cat.context(&poem), "  the cat sat");
}

#[test]
fn test_line_context_is_owning_stanza() {
    let poem = parse_fixture("the cat\nthe hat\n\nthe mat");
    let line = &poem.stanzas[0].lines[1];
    assert_eq!(line.context(&poem), "the cat\nthe hat");
}
