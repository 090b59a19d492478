//! Token definitions for poem line content
//!
//! This module defines the raw tokens produced when lexing one line of poem
//! text. The tokens are defined using the logos derive macro. Tokenization is
//! greedy, left to right, and covers every character of the input: anything
//! that is not a word or a whitespace run falls through to the single-character
//! `Mark` token, so no input is ever dropped.

use logos::Logos;

/// A run of horizontal whitespace, measured in columns.
///
/// Tabs expand to 4 columns, spaces to 1. The flag records whether any tab
/// contributed to the run, since rendering always emits plain spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceRun {
    pub columns: usize,
    pub from_tab: bool,
}

fn space_run(lex: &mut logos::Lexer<RawToken>) -> SpaceRun {
    let mut columns = 0;
    let mut from_tab = false;
    for ch in lex.slice().chars() {
        if ch == '\t' {
            columns += 4;
            from_tab = true;
        } else {
            columns += 1;
        }
    }
    SpaceRun { columns, from_tab }
}

/// All possible tokens in one line of poem content.
///
/// Lines are tokenized after their leading indentation has been stripped, so
/// no token here represents indentation. Newlines never reach the lexer; the
/// builder splits the source into lines first.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum RawToken {
    /// A word: letter runs optionally joined by a single hyphen or a straight
    /// or curly apostrophe ("mother-in-law", "don't", "o’er").
    #[regex(r"[A-Za-z]+(?:[-'’][A-Za-z]+)*", |lex| lex.slice().to_owned())]
    Word(String),

    /// One or more consecutive spaces/tabs, collapsed into a single run.
    #[regex(r"[ \t]+", space_run)]
    Space(SpaceRun),

    /// Any other single character. Digits and underscores land here too:
    /// they are neither letters nor whitespace, and treating them as
    /// one-character marks keeps tokenization total.
    #[regex(r"[^A-Za-z \t]", |lex| lex.slice().to_owned())]
    Mark(String),
}

impl RawToken {
    /// Check if this token is a word
    pub fn is_word(&self) -> bool {
        matches!(self, RawToken::Word(_))
    }

    /// Check if this token is a whitespace run
    pub fn is_space(&self) -> bool {
        matches!(self, RawToken::Space(_))
    }
}
