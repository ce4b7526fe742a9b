//! Scoring many sentence pairs
//!
//! Lines are parsed in parallel; accounting into the matrix is sequential and
//! in line order. A sentence that fails to parse or align is recorded with
//! its index and skipped.

use rayon::prelude::*;
use std::fmt;
use thiserror::Error;

use super::SentenceScorer;
use super::error::ScoreError;
use super::options::ScoringOptions;
use crate::parser::TreeError;
use crate::syntax::Sentence;

/// Why a sentence pair was not scored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    #[error("malformed gold tree: {0}")]
    Gold(TreeError),
    #[error("malformed parsed tree: {0}")]
    Parsed(TreeError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// A sentence pair that was skipped, by zero-based index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceFailure {
    pub index: usize,
    pub reason: FailureReason,
}

impl fmt::Display for SentenceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sentence {}: {}", self.index, self.reason)
    }
}

/// Drives a [`SentenceScorer`] over a corpus, collecting per-sentence failures
#[derive(Debug)]
pub struct BatchScorer<S> {
    scorer: S,
    options: ScoringOptions,
    failures: Vec<SentenceFailure>,
    next_index: usize,
    scored: usize,
    stopped: bool,
}

impl<S: SentenceScorer> BatchScorer<S> {
    pub fn new(scorer: S) -> Self {
        Self::with_options(scorer, ScoringOptions::default())
    }

    pub fn with_options(scorer: S, options: ScoringOptions) -> Self {
        Self {
            scorer,
            options,
            failures: Vec::new(),
            next_index: 0,
            scored: 0,
            stopped: false,
        }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    pub fn into_scorer(self) -> S {
        self.scorer
    }

    pub fn failures(&self) -> &[SentenceFailure] {
        &self.failures
    }

    /// Number of pairs accounted successfully
    pub fn scored(&self) -> usize {
        self.scored
    }

    /// Check whether a failure stopped the batch
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Parse and score aligned gold/parsed lines
    ///
    /// Lines pair up by position; pairs beyond the shorter list are ignored.
    /// Indices continue from previous calls.
    pub fn score_lines<G, P>(&mut self, gold: &[G], parsed: &[P])
    where
        G: AsRef<str> + Sync,
        P: AsRef<str> + Sync,
    {
        let pairs: Vec<_> = gold
            .par_iter()
            .zip(parsed.par_iter())
            .map(|(gold, parsed)| {
                (
                    Sentence::parse(gold.as_ref()),
                    Sentence::parse(parsed.as_ref()),
                )
            })
            .collect();

        let failures_before = self.failures.len();
        for (gold, parsed) in pairs {
            if self.stopped {
                break;
            }
            let index = self.next_index;
            self.next_index += 1;

            match (gold, parsed) {
                (Ok(gold), Ok(parsed)) => self.score_at(index, &gold, &parsed),
                (Err(err), _) => self.fail(index, FailureReason::Gold(err)),
                (_, Err(err)) => self.fail(index, FailureReason::Parsed(err)),
            }
        }

        tracing::info!(
            scored = self.scored,
            failed = self.failures.len() - failures_before,
            stopped = self.stopped,
            "batch scored"
        );
    }

    /// Score one already-parsed pair as the next sentence of the batch
    pub fn score_pair(&mut self, gold: &Sentence, parsed: &Sentence) {
        if self.stopped {
            return;
        }
        let index = self.next_index;
        self.next_index += 1;
        self.score_at(index, gold, parsed);
    }

    fn score_at(&mut self, index: usize, gold: &Sentence, parsed: &Sentence) {
        match self.scorer.account(gold, parsed) {
            Ok(()) => self.scored += 1,
            Err(err) => self.fail(index, err.into()),
        }
    }

    fn fail(&mut self, index: usize, reason: FailureReason) {
        tracing::warn!(index, %reason, "skipping sentence");
        self.failures.push(SentenceFailure { index, reason });
        if self.options.stop_on_failure {
            self.stopped = true;
        }
    }
}
