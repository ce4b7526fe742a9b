//! # porser-base
//!
//! Core library for bracketed treebank corpora: parsing bracket-notation
//! trees, indexing them by word span, rewriting their tags and words, and
//! scoring parser output against gold trees with confusion matrices.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! corpus       → Gold/parseable line formats, corpus file loading
//!   ↓
//! performance  → Confusion matrices, span-aligned scoring, batch reports
//!   ↓
//! filters      → Token rewrite rules, text pipeline, tree filters
//!   ↓
//! parser       → Logos lexer, stack-based tree parser, TreeError
//!   ↓
//! syntax       → Node/Sentence types, span index, pretty printing
//!   ↓
//! base         → Primitives (Span, TextRange, constants)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → parser → filters → performance → corpus)
// ============================================================================

/// Foundation types: Span, TextRange, domain constants
pub mod base;

/// Syntax: tree nodes, span-indexed sentences, formatter
pub mod syntax;

/// Parser: Logos lexer, bracket-tree parser, error codes
pub mod parser;

/// Filters: rewrite rules over bracket strings and sentence trees
pub mod filters;

/// Performance: confusion matrices and scoring
pub mod performance;

/// Corpus: line formats and file loading
pub mod corpus;

// Re-export foundation types
pub use base::{Span, TextRange, TextSize};

// Re-export the types most callers start from
pub use parser::{ErrorCode, TreeError, parse_tree};
pub use performance::{
    CategoryConfusionMatrix, ConfusionMatrix, PartOfSpeechConfusionMatrix, ScoreError,
};
pub use syntax::{Category, Node, PartOfSpeech, Sentence, TagRange};
