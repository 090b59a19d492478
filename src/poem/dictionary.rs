//! Poem word dictionary
//!
//! An aggregated per-word view over an analyzed poem: every distinct word
//! with its pronunciation, every place it occurs (with the owning line's
//! text for context), the words it rhymes with, and an occurrence count.
//! This is the view a word-dictionary panel or report renders; function
//! words can be filtered out through the closed stop-word classes.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::poem::ast::elements::Poem;
use crate::poem::pronunciation::PronunciationLookup;
use crate::poem::rhyme::{phoneme_key, WordPosition};

static ARTICLES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["a", "an", "the"]));

static PREPOSITIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "in", "on", "at", "to", "for", "with", "by", "about", "from", "of", "over", "under",
        "between", "through", "after", "before", "during",
    ])
});

static CONJUNCTIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "and", "but", "or", "nor", "for", "yet", "so", "because", "although", "unless", "since",
        "while",
    ])
});

static AUXILIARY_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "am", "is", "are", "was", "were", "be", "being", "been", "have", "has", "had", "do",
        "does", "did", "will", "would", "shall", "should", "may", "might", "must", "can", "could",
    ])
});

/// Stop-word classes an entry listing can exclude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordFilter {
    Articles,
    Prepositions,
    Conjunctions,
    AuxiliaryVerbs,
    /// Exclude every class above
    All,
}

impl WordFilter {
    fn excludes(self, word: &str) -> bool {
        match self {
            WordFilter::Articles => ARTICLES.contains(word),
            WordFilter::Prepositions => PREPOSITIONS.contains(word),
            WordFilter::Conjunctions => CONJUNCTIONS.contains(word),
            WordFilter::AuxiliaryVerbs => AUXILIARY_VERBS.contains(word),
            WordFilter::All => {
                ARTICLES.contains(word)
                    || PREPOSITIONS.contains(word)
                    || CONJUNCTIONS.contains(word)
                    || AUXILIARY_VERBS.contains(word)
            }
        }
    }
}

/// One occurrence of a word, with its owning line's text for context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordInstance {
    pub position: WordPosition,
    pub line_text: String,
}

/// Everything the dictionary knows about one distinct word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordEntry {
    /// The lowercased word text
    pub word: String,
    /// The trailing-phoneme rhyme key, if the word is in the dictionary
    pub phoneme_key: Option<String>,
    /// The full phoneme sequence (empty for unknown words)
    pub phonemes: Vec<String>,
    /// Every occurrence, in document order
    pub instances: Vec<WordInstance>,
    /// Lowercased words that rhyme with this one
    pub rhymes: BTreeSet<String>,
    /// Occurrence count
    pub frequency: usize,
}

/// The per-word dictionary view of a poem.
#[derive(Clone)]
pub struct PoemDictionary {
    entries: BTreeMap<String, WordEntry>,
    lookup: Arc<dyn PronunciationLookup>,
}

impl PoemDictionary {
    pub fn new(lookup: Arc<dyn PronunciationLookup>) -> Self {
        Self {
            entries: BTreeMap::new(),
            lookup,
        }
    }

    /// Build the complete dictionary view of an analyzed poem.
    pub fn from_poem(poem: &Poem, lookup: Arc<dyn PronunciationLookup>) -> Self {
        let mut dictionary = Self::new(lookup);

        for stanza in &poem.stanzas {
            for line in &stanza.lines {
                let line_text = line.to_string();
                for word in line.words() {
                    if let Some(position) = word.position() {
                        dictionary.add_word(&word.text, position.clone(), line_text.clone());
                    }
                }
            }
        }

        for stanza in &poem.stanzas {
            for line in &stanza.lines {
                for word in line.words() {
                    if let Some(rhymes) = &word.rhymes {
                        for other in rhymes.keys() {
                            dictionary.add_rhyme(&word.text, other);
                        }
                    }
                }
            }
        }

        dictionary
    }

    /// Record one occurrence of a word.
    pub fn add_word(&mut self, word: &str, position: WordPosition, line_text: impl Into<String>) {
        let clean = word.to_lowercase();
        let instance = WordInstance {
            position,
            line_text: line_text.into(),
        };

        match self.entries.get_mut(&clean) {
            Some(entry) => {
                entry.instances.push(instance);
                entry.frequency += 1;
            }
            None => {
                let phonemes = self
                    .lookup
                    .pronunciation(&clean)
                    .map(|pronunciation| {
                        pronunciation
                            .split_whitespace()
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                let entry = WordEntry {
                    phoneme_key: phoneme_key(self.lookup.as_ref(), &clean),
                    phonemes,
                    word: clean.clone(),
                    instances: vec![instance],
                    rhymes: BTreeSet::new(),
                    frequency: 1,
                };
                self.entries.insert(clean, entry);
            }
        }
    }

    /// Record that two words rhyme. Symmetric; self-rhymes are ignored, and
    /// words without entries are left untouched.
    pub fn add_rhyme(&mut self, first: &str, second: &str) {
        let first = first.to_lowercase();
        let second = second.to_lowercase();
        if first == second {
            return;
        }
        if let Some(entry) = self.entries.get_mut(&first) {
            entry.rhymes.insert(second.clone());
        }
        if let Some(entry) = self.entries.get_mut(&second) {
            entry.rhymes.insert(first);
        }
    }

    /// Look up a word's entry, case-insensitively.
    pub fn entry(&self, word: &str) -> Option<&WordEntry> {
        self.entries.get(&word.to_lowercase())
    }

    /// All entries, most frequent first, optionally excluding stop words.
    pub fn entries(&self, filter: Option<WordFilter>) -> Vec<&WordEntry> {
        let mut entries: Vec<&WordEntry> = self
            .entries
            .values()
            .filter(|entry| match filter {
                Some(filter) => !filter.excludes(&entry.word),
                None => true,
            })
            .collect();
        entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for PoemDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoemDictionary")
            .field("entries", &self.entries.len())
            .finish()
    }
}
