//! Document model for parsed poems
//!
//! Pure data containers with three behaviors beyond storage:
//!
//! - Rendering: every element implements `Display`, and rendering a parsed
//!   poem reproduces the source text column for column. The only
//!   normalization is that whitespace runs render as plain spaces of the
//!   recorded width (tabs and multi-space runs come back as spaces).
//! - Context: words resolve their owning line's text, lines their owning
//!   stanza's text, through the poem tree.
//! - Metadata: words and lines produce the stable human-readable reports
//!   defined in [`formats::metadata`](crate::poem::formats::metadata).

pub mod elements;

pub use elements::{
    Enjambment, Line, LineElement, Poem, Punctuation, Stanza, Whitespace, Word,
};
