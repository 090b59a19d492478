//! Stanza element
//!
//! A stanza is a contiguous group of lines separated from its neighbors by
//! blank lines. It owns its lines exclusively; the poem assigns the stanza
//! its 1-based number (and propagates it to each line) exactly once, when
//! the stanza is appended.

use std::fmt;

use crate::poem::ast::elements::Line;

/// A group of lines in the poem.
#[derive(Debug, Clone, PartialEq)]
pub struct Stanza {
    pub lines: Vec<Line>,
    /// Blank lines rendered after this stanza (default 1)
    pub spacing_after: usize,
    number: Option<usize>,
}

impl Stanza {
    pub fn new(lines: Vec<Line>) -> Self {
        Self {
            lines,
            spacing_after: 1,
            number: None,
        }
    }

    /// The 1-based position of this stanza in its poem, once attached.
    pub fn number(&self) -> Option<usize> {
        self.number
    }

    pub(crate) fn attach(&mut self, number: usize) {
        debug_assert!(
            self.number.is_none(),
            "a stanza is attached to exactly one poem"
        );
        self.number = Some(number);
        for line in &mut self.lines {
            line.set_stanza_number(number);
        }
    }
}

impl fmt::Display for Stanza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for line in &self.lines {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
            first = false;
        }
        Ok(())
    }
}
