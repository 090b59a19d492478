//! # strophe
//!
//! A poem parser and phonetic rhyme analyzer.
//!
//! strophe turns raw poem text into a structured document model (stanzas,
//! lines, words, punctuation, whitespace) and computes rhyme relationships
//! between words using a pronunciation dictionary. The whole pipeline is a
//! synchronous, pure transformation over in-memory text: parse once, get back
//! a fully analyzed [`Poem`](poem::ast::Poem).
//!
//! Pipeline Overview
//!
//!     raw text -> stanza blocks -> per-line tokenization -> document model
//!              -> rhyme analysis (two passes over the whole model)
//!              -> annotated Poem
//!
//!     Tokenization is handled by a logos lexer over line content. The
//!     document model preserves enough structure that rendering a parsed
//!     poem reproduces the source (modulo whitespace-run normalization).
//!     Rhyme analysis keys words by a trailing slice of their phoneme
//!     sequence, looked up through a pluggable pronunciation dictionary.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use strophe::poem::parsing::parse_poem;
//! use strophe::poem::pronunciation::PhonemeDictionary;
//!
//! let dict = Arc::new(PhonemeDictionary::from_entries([
//!     ("cat", "K AE1 T"),
//!     ("hat", "HH AE1 T"),
//! ]));
//! let poem = parse_poem("the cat\nthe hat", None, None, dict);
//! assert_eq!(poem.stanzas.len(), 1);
//! assert_eq!(poem.total_lines(), 2);
//! ```

pub mod poem;
