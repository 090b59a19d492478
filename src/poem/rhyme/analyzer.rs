//! Rhyme analyzer
//!
//!     The analyzer keys every word by a trailing slice of its phoneme
//!     sequence and maintains two indexes over those keys: a global one for
//!     the whole poem and a per-stanza one. Both are append-only during a
//!     single analysis pass and are rebuilt from scratch when analysis runs
//!     again.
//!
//! Phonetic Keys
//!
//!     Rhyme depends on trailing sound, not full pronunciation, so the key
//!     is a suffix of the phoneme sequence: a 1-phoneme pronunciation is its
//!     own key, 2-3 phonemes keep the last 2, anything longer keeps the
//!     last 3. Words missing from the dictionary have no key and simply
//!     never match.
//!
//! Dedup Policy
//!
//!     Within a phonetic group, only the first occurrence of a given word
//!     text is indexed. The global index keeps the first occurrence in the
//!     poem; the per-stanza index keeps the first occurrence within each
//!     stanza. Reported frequencies are therefore distinct-word counts, and
//!     each word's position set points at where it first appears.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::poem::ast::elements::Word;
use crate::poem::pronunciation::PronunciationLookup;
use crate::poem::rhyme::position::{WordMap, WordPosition};

/// Derive the phonetic rhyme key for a word, if its pronunciation is known.
///
/// Lookup is case-insensitive. Phoneme symbols are kept verbatim, stress
/// digits included, and joined by single spaces.
pub fn phoneme_key(lookup: &dyn PronunciationLookup, word: &str) -> Option<String> {
    let clean = word.to_lowercase();
    let pronunciation = match lookup.pronunciation(&clean) {
        Some(pronunciation) => pronunciation,
        None => {
            tracing::debug!(word = %word, "no pronunciation found");
            return None;
        }
    };

    let phonemes: Vec<&str> = pronunciation.split_whitespace().collect();
    match phonemes.len() {
        0 => None,
        1 => Some(phonemes[0].to_string()),
        2 | 3 => Some(phonemes[phonemes.len() - 2..].join(" ")),
        _ => Some(phonemes[phonemes.len() - 3..].join(" ")),
    }
}

/// Which index a grouped rhyme report reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RhymeScope {
    /// One group per phonetic key across the whole poem
    Global,
    /// Groups computed independently within each stanza
    ByStanza,
}

/// A set of distinct words sharing a phonetic key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RhymeGroup {
    /// The phonetic pattern these words share
    pub phoneme_key: String,
    /// Each distinct word mapped to its indexed positions
    pub words: WordMap,
    /// Number of distinct words in the group
    pub frequency: usize,
    /// Set for stanza-scoped groups only
    pub stanza_number: Option<usize>,
}

/// Computes phonetic similarity groups and answers rhyme queries.
#[derive(Clone)]
pub struct RhymeAnalyzer {
    lookup: Arc<dyn PronunciationLookup>,
    global: BTreeMap<String, WordMap>,
    by_stanza: BTreeMap<usize, BTreeMap<String, WordMap>>,
}

impl RhymeAnalyzer {
    pub fn new(lookup: Arc<dyn PronunciationLookup>) -> Self {
        Self {
            lookup,
            global: BTreeMap::new(),
            by_stanza: BTreeMap::new(),
        }
    }

    /// Derive the phonetic key for a word through this analyzer's dictionary.
    pub fn phoneme_key(&self, word: &str) -> Option<String> {
        phoneme_key(self.lookup.as_ref(), word)
    }

    /// Drop all indexed state, ready for a fresh analysis pass.
    pub(crate) fn clear(&mut self) {
        self.global.clear();
        self.by_stanza.clear();
    }

    /// Register one word occurrence.
    ///
    /// Computes and stores the word's phonetic key; keyless words are not
    /// indexed. Only the first occurrence of a word text enters each index.
    pub(crate) fn add_word(&mut self, word: &mut Word, position: WordPosition) {
        let key = self.phoneme_key(&word.text);
        word.phoneme_key = key.clone();
        let key = match key {
            Some(key) => key,
            None => return,
        };

        let clean = word.text.to_lowercase();

        let positions = self
            .global
            .entry(key.clone())
            .or_default()
            .entry(clean.clone())
            .or_default();
        if positions.is_empty() {
            positions.insert(position.clone());
        }

        let positions = self
            .by_stanza
            .entry(position.stanza_number)
            .or_default()
            .entry(key)
            .or_default()
            .entry(clean)
            .or_default();
        if positions.is_empty() {
            positions.insert(position);
        }
    }

    /// Find all words rhyming with the given word.
    ///
    /// With a stanza number, only words indexed in that stanza are
    /// considered. The queried word itself is excluded case-insensitively.
    /// Returns `None` when the word has no phonetic key or no other word
    /// shares it.
    pub fn find_rhymes(&self, word: &str, stanza_number: Option<usize>) -> Option<WordMap> {
        let key = self.phoneme_key(word)?;
        let clean = word.to_lowercase();

        let word_map = match stanza_number {
            Some(number) => self.by_stanza.get(&number)?.get(&key)?,
            None => self.global.get(&key)?,
        };

        let rhymes: WordMap = word_map
            .iter()
            .filter(|(text, _)| text.as_str() != clean)
            .map(|(text, positions)| (text.clone(), positions.clone()))
            .collect();

        if rhymes.is_empty() {
            None
        } else {
            Some(rhymes)
        }
    }

    /// Every phonetic group with at least two distinct words.
    ///
    /// Global groups are ordered by descending distinct-word count.
    /// Stanza-scoped groups are ordered by ascending stanza number, then
    /// descending count within each stanza.
    pub fn rhyme_groups(&self, scope: RhymeScope) -> Vec<RhymeGroup> {
        let mut groups = Vec::new();
        match scope {
            RhymeScope::Global => {
                for (key, word_map) in &self.global {
                    if word_map.len() > 1 {
                        groups.push(RhymeGroup {
                            phoneme_key: key.clone(),
                            words: word_map.clone(),
                            frequency: word_map.len(),
                            stanza_number: None,
                        });
                    }
                }
                groups.sort_by(|a, b| b.frequency.cmp(&a.frequency));
            }
            RhymeScope::ByStanza => {
                for (stanza_number, stanza_map) in &self.by_stanza {
                    for (key, word_map) in stanza_map {
                        if word_map.len() > 1 {
                            groups.push(RhymeGroup {
                                phoneme_key: key.clone(),
                                words: word_map.clone(),
                                frequency: word_map.len(),
                                stanza_number: Some(*stanza_number),
                            });
                        }
                    }
                }
                groups.sort_by(|a, b| {
                    a.stanza_number
                        .cmp(&b.stanza_number)
                        .then(b.frequency.cmp(&a.frequency))
                });
            }
        }
        groups
    }
}

impl fmt::Debug for RhymeAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RhymeAnalyzer")
            .field("indexed_keys", &self.global.len())
            .field("indexed_stanzas", &self.by_stanza.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poem::testing::test_lookup;

    fn position(line: usize, stanza: usize, word: &str) -> WordPosition {
        WordPosition {
            line_index: line,
            stanza_line_index: line,
            stanza_number: stanza,
            word_index: 0,
            is_line_end: true,
            word: word.to_string(),
        }
    }

    fn analyzer_with(words: &[(&str, usize)]) -> RhymeAnalyzer {
        let mut analyzer = RhymeAnalyzer::new(test_lookup());
        for (line, (text, stanza)) in words.iter().enumerate() {
            let mut word = Word::new(*text);
            analyzer.add_word(&mut word, position(line, *stanza, text));
        }
        analyzer
    }

    #[test]
    fn test_key_uses_last_two_of_three_phonemes() {
        let analyzer = RhymeAnalyzer::new(test_lookup());
        assert_eq!(analyzer.phoneme_key("cat").as_deref(), Some("AE1 T"));
        assert_eq!(analyzer.phoneme_key("dog").as_deref(), Some("AO1 G"));
    }

    #[test]
    fn test_key_is_case_insensitive() {
        let analyzer = RhymeAnalyzer::new(test_lookup());
        assert_eq!(analyzer.phoneme_key("CAT"), analyzer.phoneme_key("cat"));
    }

    #[test]
    fn test_unknown_word_has_no_key() {
        let analyzer = RhymeAnalyzer::new(test_lookup());
        assert_eq!(analyzer.phoneme_key("zyzzyva"), None);
    }

    #[test]
    fn test_add_word_stores_key_on_word() {
        let mut analyzer = RhymeAnalyzer::new(test_lookup());
        let mut word = Word::new("cat");
        analyzer.add_word(&mut word, position(0, 1, "cat"));
        assert_eq!(word.phoneme_key.as_deref(), Some("AE1 T"));
    }

    #[test]
    fn test_find_rhymes_excludes_query_word() {
        let analyzer = analyzer_with(&[("cat", 1), ("hat", 1), ("mat", 2)]);
        let rhymes = analyzer.find_rhymes("cat", None).unwrap();
        assert!(!rhymes.contains_key("cat"));
        assert!(rhymes.contains_key("hat"));
        assert!(rhymes.contains_key("mat"));
    }

    #[test]
    fn test_find_rhymes_excludes_query_word_case_insensitively() {
        let analyzer = analyzer_with(&[("Cat", 1), ("hat", 1)]);
        let rhymes = analyzer.find_rhymes("CAT", None).unwrap();
        assert_eq!(rhymes.keys().collect::<Vec<_>>(), vec!["hat"]);
    }

    #[test]
    fn test_find_rhymes_scoped_to_stanza() {
        let analyzer = analyzer_with(&[("cat", 1), ("hat", 1), ("mat", 2)]);
        let rhymes = analyzer.find_rhymes("cat", Some(1)).unwrap();
        assert!(rhymes.contains_key("hat"));
        assert!(!rhymes.contains_key("mat"));
    }

    #[test]
    fn test_find_rhymes_none_for_lonely_word() {
        let analyzer = analyzer_with(&[("cat", 1), ("moon", 1)]);
        assert!(analyzer.find_rhymes("moon", None).is_none());
    }

    #[test]
    fn test_find_rhymes_none_for_unknown_word() {
        let analyzer = analyzer_with(&[("cat", 1), ("hat", 1)]);
        assert!(analyzer.find_rhymes("zyzzyva", None).is_none());
    }

    #[test]
    fn test_first_occurrence_dedup() {
        // "cat" appears twice; only the first position is indexed
        let analyzer = analyzer_with(&[("cat", 1), ("cat", 2), ("hat", 2)]);
        let rhymes = analyzer.find_rhymes("hat", None).unwrap();
        let positions = &rhymes["cat"];
        assert_eq!(positions.len(), 1);
        assert_eq!(positions.iter().next().unwrap().line_index, 0);
    }

    #[test]
    fn test_per_stanza_dedup_is_independent() {
        // the global index keeps line 0, the stanza-2 index keeps line 1
        let analyzer = analyzer_with(&[("cat", 1), ("cat", 2), ("hat", 2)]);
        let rhymes = analyzer.find_rhymes("hat", Some(2)).unwrap();
        assert_eq!(rhymes["cat"].iter().next().unwrap().line_index, 1);
    }

    #[test]
    fn test_groups_require_two_distinct_words() {
        let analyzer = analyzer_with(&[("cat", 1), ("cat", 1), ("moon", 1), ("june", 1)]);
        let groups = analyzer.rhyme_groups(RhymeScope::Global);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].phoneme_key, "UW1 N");
        assert_eq!(groups[0].frequency, 2);
    }

    #[test]
    fn test_global_groups_sorted_by_frequency() {
        let analyzer = analyzer_with(&[
            ("cat", 1),
            ("hat", 1),
            ("mat", 1),
            ("moon", 1),
            ("june", 1),
        ]);
        let groups = analyzer.rhyme_groups(RhymeScope::Global);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].phoneme_key, "AE1 T");
        assert_eq!(groups[0].frequency, 3);
        assert_eq!(groups[1].frequency, 2);
    }

    #[test]
    fn test_stanza_groups_sorted_by_stanza_then_frequency() {
        let analyzer = analyzer_with(&[
            ("moon", 2),
            ("june", 2),
            ("cat", 2),
            ("hat", 2),
            ("mat", 2),
            ("dog", 1),
            ("fog", 1),
        ]);
        let groups = analyzer.rhyme_groups(RhymeScope::ByStanza);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].stanza_number, Some(1));
        assert_eq!(groups[0].phoneme_key, "AO1 G");
        assert_eq!(groups[1].stanza_number, Some(2));
        assert_eq!(groups[1].frequency, 3);
        assert_eq!(groups[2].stanza_number, Some(2));
        assert_eq!(groups[2].frequency, 2);
    }
}
