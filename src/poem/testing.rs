//! Test support
//!
//! Shared fixtures for unit and integration tests. The test dictionary is a
//! small, fixed vocabulary with CMU-style pronunciations, chosen so tests
//! can exercise every key-derivation branch (1, 2, 3, and 4+ phonemes) and
//! both matching and near-miss rhyme pairs.
//!
//! This module is compiled into the library so integration tests under
//! `tests/` can use the same fixtures as unit tests.

use std::sync::Arc;

use crate::poem::ast::elements::Poem;
use crate::poem::parsing::parse_poem;
use crate::poem::pronunciation::PhonemeDictionary;

/// The fixed test vocabulary.
pub fn test_lookup() -> Arc<PhonemeDictionary> {
    Arc::new(PhonemeDictionary::from_entries([
        // function words
        ("a", "AH0"),
        ("the", "DH AH0"),
        ("on", "AA1 N"),
        ("in", "IH0 N"),
        ("and", "AH0 N D"),
        ("was", "W AA1 Z"),
        // -at family, all keyed "AE1 T"
        ("cat", "K AE1 T"),
        ("hat", "HH AE1 T"),
        ("sat", "S AE1 T"),
        ("mat", "M AE1 T"),
        ("bat", "B AE1 T"),
        ("that", "DH AE1 T"),
        // -og family, keyed "AO1 G"
        ("dog", "D AO1 G"),
        ("fog", "F AO1 G"),
        ("log", "L AO1 G"),
        // -oon family, keyed "UW1 N"
        ("moon", "M UW1 N"),
        ("june", "JH UW1 N"),
        ("noon", "N UW1 N"),
        ("soon", "S UW1 N"),
        // -ee family, keyed "R IY1"
        ("tree", "T R IY1"),
        ("free", "F R IY1"),
        ("three", "TH R IY1"),
        // night/light share "AY1 T"; bright has 4 phonemes and keys to
        // "R AY1 T", a deliberate near miss
        ("night", "N AY1 T"),
        ("light", "L AY1 T"),
        ("bright", "B R AY1 T"),
        // longer words for the 4+ phoneme branch
        ("window", "W IH1 N D OW0"),
        ("shadow", "SH AE1 D OW0"),
        // assorted
        ("red", "R EH1 D"),
        ("go", "G OW1"),
        ("know", "N OW1"),
        ("slow", "S L OW1"),
    ]))
}

/// An empty dictionary: every word is out of vocabulary.
pub fn empty_lookup() -> Arc<PhonemeDictionary> {
    Arc::new(PhonemeDictionary::new())
}

/// Parse text against the fixed test vocabulary, no title or author.
pub fn parse_fixture(text: &str) -> Poem {
    parse_poem(text, None, None, test_lookup())
}
