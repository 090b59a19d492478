//! Lexer
//!
//!     This module handles tokenization of poem lines. Lexing is strictly
//!     per-line: the builder splits the source into stanza blocks and lines
//!     first, and each line is tokenized independently into an indentation
//!     width plus an ordered sequence of elements.
//!
//! Token Classification
//!
//!     Classification happens in priority order, per maximal match:
//!         1. Word: letter runs, optionally joined by a single hyphen or
//!            apostrophe (straight or curly), so "mother-in-law" and "don't"
//!            are single tokens.
//!         2. Whitespace: consecutive spaces/tabs collapse into one run
//!            carrying the total column width (tab = 4 columns) and a flag
//!            for tab origin.
//!         3. Punctuation: any single remaining character. This is the
//!            catch-all; the lexer can never drop input or fail to
//!            terminate on unusual characters.
//!
//! Indentation Handling
//!
//!     Leading whitespace is measured and stripped before the logos lexer
//!     runs, so indentation is a property of the line rather than a token.
//!     This keeps the token set small and means rendering can reproduce the
//!     indentation as plain spaces regardless of whether tabs produced it.

pub mod base_tokenization;
pub mod line_tokenizer;
pub mod tokens;

pub use base_tokenization::tokenize;
pub use line_tokenizer::{tokenize_line, TokenizedLine};
pub use tokens::{RawToken, SpaceRun};
