//! Parser evaluation
//!
//! ```text
//! gold Sentence ─┐
//!                ├─► SentenceScorer::account ─► ConfusionMatrix ─► MatrixReport
//! parsed Sentence┘
//! ```
//!
//! - [`ConfusionMatrix`] - generic (expected, got) counts and rates
//! - [`CategoryConfusionMatrix`] - constituent tags aligned by span
//! - [`PartOfSpeechConfusionMatrix`] - leaf tags aligned by position
//! - [`BatchScorer`] - many pairs, per-sentence failures recorded
//! - [`MatrixReport`] - text table and (with `serde`) JSON

mod batch;
mod category;
mod confusion_matrix;
mod error;
mod options;
mod part_of_speech;
mod report;

pub use batch::{BatchScorer, FailureReason, SentenceFailure};
pub use category::CategoryConfusionMatrix;
pub use confusion_matrix::{ConfusionMatrix, MatrixCell};
pub use error::ScoreError;
pub use options::{ReportOptions, ScoringOptions};
pub use part_of_speech::PartOfSpeechConfusionMatrix;
pub use report::{MatrixReport, Summary};

use crate::syntax::Sentence;

/// Accumulates gold/parsed comparisons into a confusion matrix
pub trait SentenceScorer {
    /// Compare one sentence pair and store the result
    fn account(&mut self, gold: &Sentence, parsed: &Sentence) -> Result<(), ScoreError>;

    fn matrix(&self) -> &ConfusionMatrix;
}
