//! Word positions
//!
//! A `WordPosition` records where one word occurrence sits in the poem. The
//! rhyme indexes store positions, and words carry their own position as the
//! back-reference to their owning line.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Where a word occurrence sits in the poem.
///
/// Derived orderings sort by global line first, which makes every ordered
/// collection of positions read in document order.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct WordPosition {
    /// Global 0-based line index in the poem
    pub line_index: usize,
    /// 0-based line index within the owning stanza
    pub stanza_line_index: usize,
    /// 1-based stanza number
    pub stanza_number: usize,
    /// 0-based position among the words of the line
    pub word_index: usize,
    /// Whether this is the last word of its line
    pub is_line_end: bool,
    /// The word text as it appeared in the source
    pub word: String,
}

/// Lowercased word text mapped to the ordered positions where it occurs.
pub type WordMap = BTreeMap<String, BTreeSet<WordPosition>>;
