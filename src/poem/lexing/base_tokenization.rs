//! Base tokenization implementation for poem line content
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where stripped line content becomes a token stream.
//! Indentation handling is NOT done here; see
//! [`line_tokenizer`](super::line_tokenizer) for the per-line wrapper.

use logos::Logos;

use crate::poem::lexing::tokens::RawToken;

/// Tokenize one line of content with location information.
///
/// Returns tokens paired with their byte spans in the input. Because the
/// token set has a single-character catch-all, the spans tile the input with
/// no gaps and no overlaps.
pub fn tokenize(content: &str) -> Vec<(RawToken, logos::Span)> {
    let mut lexer = RawToken::lexer(content);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
