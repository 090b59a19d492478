//! Rhyme scheme labeling
//!
//! Classic rhyme-scheme notation over line end words: the first time a
//! phonetic key is seen it gets the next sequential label (A, B, C, ...),
//! and every later line ending in the same key reuses that label. End words
//! without a pronunciation are labeled `X`; lines without words get an empty
//! label.

use std::collections::BTreeMap;

use crate::poem::ast::elements::Poem;

/// The sequential label for the nth distinct rhyme key (A..Z, then AA, AB, ...).
pub fn label_for(index: usize) -> String {
    let mut index = index;
    let mut letters = Vec::new();
    loop {
        letters.push((b'A' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.iter().rev().collect()
}

pub(crate) fn scheme_for(poem: &Poem) -> Vec<String> {
    let mut scheme = Vec::new();
    let mut labels: BTreeMap<String, String> = BTreeMap::new();

    for stanza in &poem.stanzas {
        for line in &stanza.lines {
            let last_word = match line.words().last() {
                Some(word) => word,
                None => {
                    scheme.push(String::new());
                    continue;
                }
            };
            let key = match &last_word.phoneme_key {
                Some(key) => key.clone(),
                None => {
                    scheme.push("X".to_string());
                    continue;
                }
            };
            let next = label_for(labels.len());
            let label = labels.entry(key).or_insert(next);
            scheme.push(label.clone());
        }
    }

    scheme
}
