//! Poem builder
//!
//! Drives the full pipeline from raw text to an analyzed poem: stanza block
//! splitting, per-line tokenization, enjambment marking, stanza assembly,
//! and the final rhyme analysis pass.

use std::sync::Arc;

use crate::poem::ast::elements::{Enjambment, Line, Poem, Stanza};
use crate::poem::lexing::tokenize_line;
use crate::poem::pronunciation::PronunciationLookup;
use crate::poem::rhyme::RhymeAnalyzer;

/// Builds analyzed poems from raw text.
///
/// The builder never returns a partially analyzed poem: `build` runs the
/// whole pipeline to completion, including both rhyme analysis passes.
#[derive(Clone)]
pub struct PoemBuilder {
    title: Option<String>,
    author: Option<String>,
    lookup: Arc<dyn PronunciationLookup>,
}

impl PoemBuilder {
    pub fn new(lookup: Arc<dyn PronunciationLookup>) -> Self {
        Self {
            title: None,
            author: None,
            lookup,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Parse and analyze the given text.
    ///
    /// An empty or whitespace-only document yields a poem with zero stanzas;
    /// this is a valid result, not a failure.
    pub fn build(self, text: &str) -> Poem {
        let mut poem = Poem::new(self.title, self.author, RhymeAnalyzer::new(self.lookup));

        for block in stanza_blocks(text) {
            poem.add_stanza(build_stanza(&block));
        }

        poem.analyze_rhymes();
        tracing::debug!(
            stanzas = poem.stanzas.len(),
            lines = poem.total_lines(),
            "parsed and analyzed poem"
        );
        poem
    }
}

/// Parse a text string into a fully analyzed poem.
pub fn parse_poem(
    text: &str,
    title: Option<&str>,
    author: Option<&str>,
    lookup: Arc<dyn PronunciationLookup>,
) -> Poem {
    let mut builder = PoemBuilder::new(lookup);
    if let Some(title) = title {
        builder = builder.title(title);
    }
    if let Some(author) = author {
        builder = builder.author(author);
    }
    builder.build(text)
}

/// Split source text into stanza blocks on blank-line boundaries.
///
/// A blank line is empty or whitespace-only; one or more of them separate
/// stanzas. Leading and trailing blank lines are dropped, but the first
/// line's horizontal indentation is preserved.
fn stanza_blocks(text: &str) -> Vec<Vec<&str>> {
    let lines: Vec<&str> = text.lines().collect();
    let not_blank = |line: &&str| !line.trim().is_empty();

    let (start, end) = match (
        lines.iter().position(not_blank),
        lines.iter().rposition(not_blank),
    ) {
        (Some(start), Some(end)) => (start, end),
        _ => return Vec::new(),
    };

    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in &lines[start..=end] {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(*line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// Assemble one stanza from its raw lines.
fn build_stanza(line_texts: &[&str]) -> Stanza {
    let mut lines: Vec<Line> = Vec::with_capacity(line_texts.len());

    for (idx, raw) in line_texts.iter().enumerate() {
        let tokenized = tokenize_line(raw);
        // a line is enjambed when its clause is unterminated and another
        // line of the same stanza follows
        let terminated = ends_with_terminal(raw.trim());
        let enjambed = !terminated && idx + 1 < line_texts.len();
        lines.push(Line::new(tokenized.elements, tokenized.indentation).enjambed(enjambed));
    }

    mark_enjambment(&mut lines);
    Stanza::new(lines)
}

fn ends_with_terminal(trimmed: &str) -> bool {
    matches!(trimmed.chars().last(), Some('.' | '!' | '?'))
}

/// Mark the word pair around each enjambed line break.
///
/// The last word of an enjambed line ends the run-on, and the first word of
/// the following line starts it. Lines with no words are skipped.
fn mark_enjambment(lines: &mut [Line]) {
    for idx in 0..lines.len() {
        if !lines[idx].enjambed || idx + 1 >= lines.len() {
            continue;
        }
        if let Some(word) = lines[idx].words_mut().last() {
            word.enjambment = Enjambment::EndOfLine;
        }
        if let Some(word) = lines[idx + 1].words_mut().next() {
            word.enjambment = Enjambment::StartOfLine;
        }
    }
}
