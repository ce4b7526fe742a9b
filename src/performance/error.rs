//! Error types for scoring.

use thiserror::Error;

use crate::base::Span;

/// Errors raised while scoring a gold sentence against a parsed one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The parsed sentence does not line up with the gold terminals.
    #[error(
        "alignment error: gold span {span} has no parsed node (gold has {gold_terminals} terminals, parsed has {parsed_terminals})"
    )]
    Alignment {
        span: Span,
        gold_terminals: usize,
        parsed_terminals: usize,
    },

    /// A matrix query named a key that was never stored.
    #[error("unknown key: {0}")]
    UnknownKey(String),
}

impl ScoreError {
    /// Create an alignment error.
    pub fn alignment(span: Span, gold_terminals: usize, parsed_terminals: usize) -> Self {
        Self::Alignment {
            span,
            gold_terminals,
            parsed_terminals,
        }
    }

    /// Create an unknown key error.
    pub fn unknown_key(key: impl ToString) -> Self {
        Self::UnknownKey(key.to_string())
    }
}
