//! Parsing module for poem text
//!
//!     This module provides the complete processing pipeline from source
//!     text to an analyzed poem:
//!
//!         1. Stanza splitting: the source is cut into stanza blocks on
//!            blank-line boundaries, dropping leading/trailing blank lines.
//!         2. Lexing: each line is tokenized into an indentation width plus
//!            word/punctuation/whitespace elements. See
//!            [lexing](crate::poem::lexing).
//!         3. Assembly: lines become [`Line`](crate::poem::ast::Line)s with
//!            enjambment flags, grouped into stanzas, appended to the poem.
//!         4. Analysis: one two-pass walk positions every word, builds the
//!            rhyme indexes, and resolves every word's rhyme matches. See
//!            [rhyme](crate::poem::rhyme).
//!
//!     The pipeline is synchronous and infallible: malformed input degrades
//!     to ordinary values (empty poems, keyless words), never errors.

pub mod builder;

pub use builder::{parse_poem, PoemBuilder};
