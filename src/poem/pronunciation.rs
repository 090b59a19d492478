//! Pronunciation lookup
//!
//! The analyzer consumes pronunciations through the [`PronunciationLookup`]
//! trait: a read-only mapping from lowercase word to a space-delimited
//! phoneme string ("cat" -> "K AE1 T"). Absence means the word is unknown,
//! which is never an error. Implementations are shared across any number of
//! parses, so the trait requires `Send + Sync`.
//!
//! [`PhonemeDictionary`] is the bundled implementation, loadable from plain
//! entries, CMU-dictionary-format text, or a JSON map.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A read-only word-to-phonemes mapping.
///
/// Callers pass lowercase words; implementations store lowercase keys.
pub trait PronunciationLookup: Send + Sync {
    /// The space-delimited phoneme string for a word, or `None` if unknown.
    fn pronunciation(&self, word: &str) -> Option<&str>;
}

/// Errors from loading a pronunciation dictionary.
#[derive(Debug, Clone)]
pub enum DictionaryError {
    /// The input could not be parsed as a dictionary
    Parse(String),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryError::Parse(msg) => write!(f, "Dictionary parse error: {}", msg),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Matches CMU dictionary variant entries such as `READ(1)`.
static VARIANT_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*)\((\d+)\)$").expect("variant pattern is valid"));

/// A static in-memory pronunciation dictionary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhonemeDictionary {
    entries: HashMap<String, String>,
}

impl PhonemeDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from (word, phonemes) pairs. Words are lowercased.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut dictionary = Self::new();
        for (word, phonemes) in entries {
            dictionary.insert(word, phonemes);
        }
        dictionary
    }

    /// Parse CMU-dictionary-format text.
    ///
    /// Each entry line is `WORD  PH ON EMES`. Comment lines (leading `;`)
    /// and lines without a pronunciation are skipped. Variant entries like
    /// `READ(1)` fold onto the base word; the first pronunciation seen for
    /// a word wins.
    pub fn parse_cmudict(text: &str) -> Self {
        let mut dictionary = Self::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }
            let mut parts = line.split_whitespace();
            let word = match parts.next() {
                Some(word) => word,
                None => continue,
            };
            let phonemes = parts.collect::<Vec<_>>().join(" ");
            if phonemes.is_empty() {
                continue;
            }
            let word = match VARIANT_SUFFIX.captures(word) {
                Some(captures) => captures.get(1).map_or(word, |m| m.as_str()),
                None => word,
            };
            let word = word.to_lowercase();
            dictionary.entries.entry(word).or_insert(phonemes);
        }
        dictionary
    }

    /// Parse a JSON object mapping words to phoneme strings.
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let entries: HashMap<String, String> = serde_json::from_str(json)
            .map_err(|e| DictionaryError::Parse(e.to_string()))?;
        Ok(Self::from_entries(entries))
    }

    /// Insert one entry, lowercasing the word.
    pub fn insert(&mut self, word: impl Into<String>, phonemes: impl Into<String>) {
        self.entries
            .insert(word.into().to_lowercase(), phonemes.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PronunciationLookup for PhonemeDictionary {
    fn pronunciation(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entries_lowercases_words() {
        let dict = PhonemeDictionary::from_entries([("Cat", "K AE1 T")]);
        assert_eq!(dict.pronunciation("cat"), Some("K AE1 T"));
        assert_eq!(dict.pronunciation("Cat"), None);
    }

    #[test]
    fn test_parse_cmudict_basic() {
        let text = ";;; comment line\nCAT  K AE1 T\nDOG  D AO1 G\n";
        let dict = PhonemeDictionary::parse_cmudict(text);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.pronunciation("cat"), Some("K AE1 T"));
    }

    #[test]
    fn test_parse_cmudict_folds_variants() {
        let text = "READ  R IY1 D\nREAD(1)  R EH1 D\n";
        let dict = PhonemeDictionary::parse_cmudict(text);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.pronunciation("read"), Some("R IY1 D"));
    }

    #[test]
    fn test_parse_cmudict_variant_before_base() {
        let text = "READ(1)  R EH1 D\nREAD  R IY1 D\n";
        let dict = PhonemeDictionary::parse_cmudict(text);
        assert_eq!(dict.pronunciation("read"), Some("R EH1 D"));
    }

    #[test]
    fn test_parse_cmudict_skips_bare_words() {
        let dict = PhonemeDictionary::parse_cmudict("CAT\n");
        assert!(dict.is_empty());
    }

    #[test]
    fn test_from_json_str() {
        let dict = PhonemeDictionary::from_json_str(r#"{"cat": "K AE1 T"}"#).unwrap();
        assert_eq!(dict.pronunciation("cat"), Some("K AE1 T"));
    }

    #[test]
    fn test_from_json_str_rejects_malformed_input() {
        assert!(PhonemeDictionary::from_json_str("not json").is_err());
    }
}
