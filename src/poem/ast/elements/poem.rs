//! Poem element
//!
//!     The poem is the root of the document model. It owns its stanzas and
//!     one rhyme analyzer scoped to itself; a fresh parse always produces a
//!     fresh poem with a fresh analyzer, so no state crosses parse calls.
//!
//! Analysis Lifecycle
//!
//!     The tree is built structurally first, then annotated by a single
//!     two-pass walk:
//!
//!         Pass 1 visits every word in document order, assigns its position
//!         triple, and registers it with the analyzer. Rhyme resolution for
//!         any word needs the complete index, which only exists after this
//!         pass has seen the whole poem.
//!
//!         Pass 2 visits every word again and resolves its rhyme matches
//!         from the now-complete index.
//!
//!     Re-running the analysis rebuilds both indexes from scratch; there is
//!     no incremental update.

use std::fmt;

use crate::poem::ast::elements::{Line, Stanza};
use crate::poem::rhyme::{scheme, RhymeAnalyzer, WordPosition};

/// The entire poem and its analysis.
#[derive(Debug, Clone)]
pub struct Poem {
    pub stanzas: Vec<Stanza>,
    pub title: Option<String>,
    pub author: Option<String>,
    analyzer: RhymeAnalyzer,
    total_lines: usize,
}

impl Poem {
    pub fn new(
        title: Option<String>,
        author: Option<String>,
        analyzer: RhymeAnalyzer,
    ) -> Self {
        Self {
            stanzas: Vec::new(),
            title,
            author,
            analyzer,
            total_lines: 0,
        }
    }

    /// Append a stanza, assigning its 1-based number and wiring the
    /// back-references of its lines.
    pub fn add_stanza(&mut self, mut stanza: Stanza) {
        stanza.attach(self.stanzas.len() + 1);
        self.stanzas.push(stanza);
    }

    /// The rhyme analyzer scoped to this poem.
    pub fn analyzer(&self) -> &RhymeAnalyzer {
        &self.analyzer
    }

    /// Number of lines across all stanzas, counted by the last analysis.
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Look up a line by its global 0-based index.
    pub fn line(&self, global_index: usize) -> Option<&Line> {
        self.stanzas
            .iter()
            .flat_map(|stanza| stanza.lines.iter())
            .nth(global_index)
    }

    /// Look up a stanza by its 1-based number.
    pub fn stanza(&self, number: usize) -> Option<&Stanza> {
        number.checked_sub(1).and_then(|idx| self.stanzas.get(idx))
    }

    /// Analyze rhyming patterns throughout the poem.
    ///
    /// Positions every word, builds the analyzer's phonetic indexes, then
    /// resolves each word's rhyme matches. Called by the builder; calling it
    /// again rebuilds the indexes from scratch.
    pub fn analyze_rhymes(&mut self) {
        self.analyzer.clear();

        // pass 1: position every word and build the rhyme indexes
        let mut global_line = 0;
        for (stanza_idx, stanza) in self.stanzas.iter_mut().enumerate() {
            for (stanza_line_idx, line) in stanza.lines.iter_mut().enumerate() {
                let word_count = line.words().count();
                let mut word_index = 0;
                for word in line.words_mut() {
                    let position = WordPosition {
                        line_index: global_line,
                        stanza_line_index: stanza_line_idx,
                        stanza_number: stanza_idx + 1,
                        word_index,
                        is_line_end: word_index + 1 == word_count,
                        word: word.text.clone(),
                    };
                    word.set_position(position.clone());
                    self.analyzer.add_word(word, position);
                    word_index += 1;
                }
                global_line += 1;
            }
        }

        // pass 2: resolve rhyme matches against the complete index
        for stanza in self.stanzas.iter_mut() {
            for line in stanza.lines.iter_mut() {
                for word in line.words_mut() {
                    word.rhymes = self.analyzer.find_rhymes(&word.text, None);
                }
            }
        }

        self.total_lines = global_line;
    }

    /// The per-line rhyme scheme labeling (e.g. A B A B).
    ///
    /// Lines ending in an out-of-dictionary word are labeled `X`; lines with
    /// no words get an empty label.
    pub fn rhyme_scheme(&self) -> Vec<String> {
        scheme::scheme_for(self)
    }
}

impl fmt::Display for Poem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote_header = false;
        if let Some(title) = &self.title {
            writeln!(f, "{}", title)?;
            wrote_header = true;
        }
        if let Some(author) = &self.author {
            writeln!(f, "{}", author)?;
            wrote_header = true;
        }
        if wrote_header && !self.stanzas.is_empty() {
            writeln!(f)?;
        }
        for (idx, stanza) in self.stanzas.iter().enumerate() {
            write!(f, "{}", stanza)?;
            if idx + 1 < self.stanzas.len() {
                writeln!(f)?;
                for _ in 0..stanza.spacing_after {
                    writeln!(f)?;
                }
            }
        }
        Ok(())
    }
}
