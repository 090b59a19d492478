//! Rhyme analysis
//!
//! Computes phonetic similarity groups over a poem's words and answers rhyme
//! queries. See [`analyzer`] for the indexing and key-derivation rules,
//! [`scheme`] for the per-line rhyme scheme labeling.

pub mod analyzer;
pub mod position;
pub mod scheme;

pub use analyzer::{phoneme_key, RhymeAnalyzer, RhymeGroup, RhymeScope};
pub use position::{WordMap, WordPosition};
