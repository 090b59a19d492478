//! Metadata reports
//!
//! Deterministic, human-readable reports of word and line fields. Callers
//! embed these strings verbatim (prompt construction, inspection output), so
//! the field order and labels here are a stable interface; changing them
//! breaks downstream consumers silently.

use crate::poem::ast::elements::{Line, Poem, Word};

/// The metadata report for one word.
///
/// Displayed line numbers are 1-based.
pub fn word_metadata(word: &Word, poem: &Poem) -> String {
    let (line_no, stanza_line_no, stanza_no) = match word.position() {
        Some(pos) => (
            pos.line_index + 1,
            pos.stanza_line_index + 1,
            pos.stanza_number,
        ),
        None => (0, 0, 0),
    };

    let rhymes = match &word.rhymes {
        Some(rhymes) => {
            let entries: Vec<String> = rhymes
                .iter()
                .filter(|(_, positions)| !positions.is_empty())
                .map(|(text, positions)| {
                    let places: Vec<String> = positions
                        .iter()
                        .map(|pos| {
                            format!("line {}, stanza {}", pos.line_index + 1, pos.stanza_number)
                        })
                        .collect();
                    format!("\"{}\" ({})", text, places.join("; "))
                })
                .collect();
            entries.join(", ")
        }
        None => "No rhymes found".to_string(),
    };

    let parts = [
        format!("Word: \"{}\"", word.text),
        format!(
            "Position: Line {} overall, Line {} in Stanza {}",
            line_no, stanza_line_no, stanza_no
        ),
        format!("Line Context: \"{}\"", word.context(poem)),
        format!("Enjambment Status: {}", word.enjambment),
        format!(
            "Phoneme Key: {}",
            word.phoneme_key.as_deref().unwrap_or("None")
        ),
        format!("Rhymes with: {}", rhymes),
    ];
    parts.join("\n")
}

/// The metadata report for one line.
pub fn line_metadata(line: &Line, poem: &Poem) -> String {
    let mut parts = vec![
        format!("Line: \"{}\"", line),
        format!("Indentation: {} spaces", line.indentation),
        format!("Enjambed: {}", if line.enjambed { "Yes" } else { "No" }),
        "Words:".to_string(),
    ];
    for word in line.words() {
        parts.push(format!("  - \"{}\" ({})", word.text, word.enjambment));
    }
    parts.push("\nStanza Context:".to_string());
    parts.push(line.context(poem));
    parts.join("\n")
}
