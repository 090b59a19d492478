//! Line element
//!
//! A line owns its elements in source order and knows its indentation,
//! trailing spacing, and whether its clause runs on into the next line
//! (enjambment). The owning stanza's number is recorded once when the poem
//! takes ownership of the stanza; it is a plain identifier, not a handle.

use std::fmt;

use crate::poem::ast::elements::{LineElement, Poem, Word};
use crate::poem::formats::metadata;

/// A single line in the poem.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Elements in source order, covering the stripped line content
    pub elements: Vec<LineElement>,
    /// Leading indentation in columns
    pub indentation: usize,
    /// Trailing spaces appended when rendering
    pub trailing_spaces: usize,
    /// Whether this line's clause continues into the next line
    pub enjambed: bool,
    stanza_number: Option<usize>,
}

impl Line {
    pub fn new(elements: Vec<LineElement>, indentation: usize) -> Self {
        Self {
            elements,
            indentation,
            trailing_spaces: 0,
            enjambed: false,
            stanza_number: None,
        }
    }

    /// Builder-style setter for the enjambed flag.
    pub fn enjambed(mut self, enjambed: bool) -> Self {
        self.enjambed = enjambed;
        self
    }

    /// The 1-based number of the owning stanza, once attached.
    pub fn stanza_number(&self) -> Option<usize> {
        self.stanza_number
    }

    pub(crate) fn set_stanza_number(&mut self, number: usize) {
        debug_assert!(
            self.stanza_number.is_none(),
            "a line is attached to exactly one stanza"
        );
        self.stanza_number = Some(number);
    }

    /// Iterate over just the words of this line, in order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.elements.iter().filter_map(LineElement::as_word)
    }

    pub(crate) fn words_mut(&mut self) -> impl Iterator<Item = &mut Word> {
        self.elements.iter_mut().filter_map(|element| match element {
            LineElement::Word(word) => Some(word),
            _ => None,
        })
    }

    /// The rendered text of the stanza this line belongs to.
    ///
    /// Returns an empty string if the line has not been attached yet.
    pub fn context(&self, poem: &Poem) -> String {
        match self.stanza_number {
            Some(number) => poem
                .stanza(number)
                .map(|stanza| stanza.to_string())
                .unwrap_or_default(),
            None => String::new(),
        }
    }

    /// A human-readable report of this line's descriptive fields.
    pub fn metadata(&self, poem: &Poem) -> String {
        metadata::line_metadata(self, poem)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", " ".repeat(self.indentation))?;
        for element in &self.elements {
            write!(f, "{}", element)?;
        }
        write!(f, "{}", " ".repeat(self.trailing_spaces))
    }
}
