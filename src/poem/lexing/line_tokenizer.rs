//! Per-line tokenization
//!
//! Turns one raw line of poem text into its indentation width plus an ordered
//! sequence of line elements. This is the bridge between the logos token
//! stream and the document model: every raw token maps 1:1 onto a
//! [`LineElement`].

use crate::poem::ast::elements::{LineElement, Punctuation, Whitespace, Word};
use crate::poem::lexing::base_tokenization::tokenize;
use crate::poem::lexing::tokens::RawToken;

/// The result of tokenizing one raw line.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizedLine {
    /// Leading indentation in columns (tab = 4, space = 1)
    pub indentation: usize,
    /// The elements covering the stripped line content, in order
    pub elements: Vec<LineElement>,
}

/// Tokenize one raw line of poem text.
///
/// Strips leading indentation (counting columns), then lexes the remaining
/// content into words, punctuation marks, and whitespace runs. The element
/// sequence covers every character of the stripped content: characters that
/// match no other category become one-character punctuation.
pub fn tokenize_line(raw: &str) -> TokenizedLine {
    let (indentation, content) = split_indentation(raw);

    let elements = tokenize(content)
        .into_iter()
        .map(|(token, _span)| match token {
            RawToken::Word(text) => LineElement::Word(Word::new(text)),
            RawToken::Mark(mark) => LineElement::Punctuation(Punctuation::new(mark)),
            RawToken::Space(run) => {
                LineElement::Whitespace(Whitespace::new(run.columns, run.from_tab))
            }
        })
        .collect();

    TokenizedLine {
        indentation,
        elements,
    }
}

/// Split a raw line into its indentation width and remaining content.
fn split_indentation(raw: &str) -> (usize, &str) {
    let mut columns = 0;
    let mut offset = 0;
    for ch in raw.chars() {
        match ch {
            '\t' => columns += 4,
            ' ' => columns += 1,
            _ => break,
        }
        offset += ch.len_utf8();
    }
    (columns, &raw[offset..])
}
