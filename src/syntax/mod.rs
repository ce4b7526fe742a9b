//! Tree data model
//!
//! - [`Node`], [`Category`], [`PartOfSpeech`] - the in-memory tree
//! - [`Sentence`] - a root node plus its span index
//! - [`TagRange`] - a constituent tag over a span, the unit of category scoring
//! - [`formatter`] - multi-line pretty printing

pub mod formatter;
mod node;
mod sentence;

pub use formatter::{FormatOptions, pretty_sentence, pretty_string};
pub use node::{Category, Node, PartOfSpeech};
pub use sentence::{Sentence, TagRange};

// Re-export Span from base for convenience
pub use crate::base::Span;
