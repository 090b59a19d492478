//! Word element
//!
//!     A Word is the only line element that participates in rhyme analysis.
//!     It is mutated in two passes: the tokenizer creates it with its text,
//!     and the analysis pass fills in its position, phoneme key, enjambment
//!     status, and rhyme matches. Parsed poems are always returned fully
//!     analyzed, so callers only ever observe the second state.
//!
//! Back-references
//!
//!     A word does not hold a handle to its owning line; its position triple
//!     doubles as the back-reference. Context lookups resolve the position
//!     against the poem tree, which keeps ownership strictly one-directional
//!     (Poem -> Stanza -> Line -> Word) with no reference cycles.

use std::fmt;

use crate::poem::ast::elements::Poem;
use crate::poem::formats::metadata;
use crate::poem::rhyme::{WordMap, WordPosition};

/// How a word relates to a line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Enjambment {
    /// The word is not adjacent to an enjambed line break
    #[default]
    None,
    /// The word closes a line whose clause runs on into the next
    EndOfLine,
    /// The word opens a line continuing the previous line's clause
    StartOfLine,
}

impl fmt::Display for Enjambment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Enjambment::None => "None",
            Enjambment::EndOfLine => "End of enjambed line",
            Enjambment::StartOfLine => "Start of enjambed line",
        };
        write!(f, "{}", label)
    }
}

/// A single word in a poem, tracking its position and rhyme relationships.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    /// The word text exactly as it appeared in the source
    pub text: String,
    /// Enjambment status, assigned while assembling each stanza
    pub enjambment: Enjambment,
    /// The trailing-phoneme rhyme key, or None for out-of-dictionary words
    pub phoneme_key: Option<String>,
    /// Rhyming words and their positions, resolved in the analysis pass
    pub rhymes: Option<WordMap>,
    position: Option<WordPosition>,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            enjambment: Enjambment::None,
            phoneme_key: None,
            rhymes: None,
            position: None,
        }
    }

    /// Where this word sits in the poem, if analysis has run.
    pub fn position(&self) -> Option<&WordPosition> {
        self.position.as_ref()
    }

    pub(crate) fn set_position(&mut self, position: WordPosition) {
        self.position = Some(position);
    }

    /// The rendered text of the line this word belongs to.
    ///
    /// Returns an empty string if the word has not been placed yet.
    pub fn context(&self, poem: &Poem) -> String {
        match &self.position {
            Some(pos) => poem
                .line(pos.line_index)
                .map(|line| line.to_string())
                .unwrap_or_default(),
            None => String::new(),
        }
    }

    /// A human-readable report of this word's descriptive fields.
    ///
    /// The exact field order and labels are a stable interface; see
    /// [`metadata`](crate::poem::formats::metadata).
    pub fn metadata(&self, poem: &Poem) -> String {
        metadata::word_metadata(self, poem)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
