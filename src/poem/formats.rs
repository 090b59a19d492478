//! Output formats
//!
//! Rendering a poem back to source text lives on the model itself (every
//! element implements `Display`). This module holds the other textual
//! surfaces, currently the stable metadata reports consumed verbatim by
//! external callers.

pub mod metadata;

pub use metadata::{line_metadata, word_metadata};
