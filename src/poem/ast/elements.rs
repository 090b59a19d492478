//! Document model elements
//!
//! The ownership direction is strictly Poem -> Stanza -> Line -> element.
//! Back-references go the other way as plain identifiers (stanza numbers,
//! word positions), never as handles, so the tree has no reference cycles.

pub mod line;
pub mod line_element;
pub mod poem;
pub mod stanza;
pub mod word;

pub use line::Line;
pub use line_element::{LineElement, Punctuation, Whitespace};
pub use poem::Poem;
pub use stanza::Stanza;
pub use word::{Enjambment, Word};
