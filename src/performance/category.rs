//! Constituent scoring
//!
//! Gold and parsed constituents are compared by the word span they cover.
//! Both sides' [`TagRange`]s are sorted by span then tag and merged with two
//! cursors:
//!
//! - a gold span sorting first has no parsed counterpart: `(tag, #NF#)`
//! - a parsed span sorting first is spurious: `(#NF#, tag)`
//! - equal spans with equal tags agree
//! - equal spans with different tags: the side whose tag sorts lower is
//!   searched forward, within the same span, for the other side's tag. A hit
//!   is stored and both matched entries are removed; a miss is stored as a
//!   substitution and both cursors advance.
//!
//! The forward search keeps stacked unary chains aligned: gold `A B C` over
//! one span against parsed `B C D` yields `B=B`, `C=C` and `A->D` rather than
//! three substitutions.

use std::cmp::Ordering;

use super::SentenceScorer;
use super::confusion_matrix::ConfusionMatrix;
use super::error::ScoreError;
use super::options::ScoringOptions;
use crate::syntax::{Sentence, TagRange};

/// Confusion matrix over constituent tags
#[derive(Debug, Clone, Default)]
pub struct CategoryConfusionMatrix {
    matrix: ConfusionMatrix,
    options: ScoringOptions,
}

impl CategoryConfusionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ScoringOptions) -> Self {
        Self {
            matrix: ConfusionMatrix::new(),
            options,
        }
    }

    /// Score a single pair
    pub fn compare(gold: &Sentence, parsed: &Sentence) -> Self {
        let mut scorer = Self::new();
        scorer.account(gold, parsed);
        scorer
    }

    pub fn matrix(&self) -> &ConfusionMatrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> ConfusionMatrix {
        self.matrix
    }

    /// Align the constituents of one sentence pair and store every decision
    pub fn account(&mut self, gold: &Sentence, parsed: &Sentence) {
        let mut gold_ranges = gold.tag_ranges();
        let mut parsed_ranges = parsed.tag_ranges();
        let mut gold_idx = 0;
        let mut parsed_idx = 0;

        loop {
            let current = (
                gold_ranges.get(gold_idx).cloned(),
                parsed_ranges.get(parsed_idx).cloned(),
            );
            match current {
                (None, None) => break,
                (Some(gold), None) => {
                    self.store_missing(&gold);
                    gold_idx += 1;
                }
                (None, Some(parsed)) => {
                    self.store_spurious(&parsed);
                    parsed_idx += 1;
                }
                (Some(gold), Some(parsed)) => match gold.span.cmp(&parsed.span) {
                    Ordering::Less => {
                        self.store_missing(&gold);
                        gold_idx += 1;
                    }
                    Ordering::Greater => {
                        self.store_spurious(&parsed);
                        parsed_idx += 1;
                    }
                    Ordering::Equal if gold.tag == parsed.tag => {
                        tracing::trace!(span = %gold.span, tag = %gold.tag, "constituent agrees");
                        self.matrix.store(&gold.tag, &parsed.tag);
                        gold_idx += 1;
                        parsed_idx += 1;
                    }
                    Ordering::Equal => {
                        let matched = if gold.tag < parsed.tag {
                            find_in_span(&gold_ranges, gold_idx, &parsed).map(|idx| (idx, parsed_idx))
                        } else {
                            find_in_span(&parsed_ranges, parsed_idx, &gold).map(|idx| (gold_idx, idx))
                        };

                        match matched {
                            Some((gold_match, parsed_match)) => {
                                let tag = gold_ranges.remove(gold_match).tag;
                                parsed_ranges.remove(parsed_match);
                                tracing::trace!(span = %gold.span, %tag, "stacked constituent agrees");
                                self.matrix.store(&tag, &tag);
                            }
                            None => {
                                tracing::trace!(
                                    span = %gold.span,
                                    gold = %gold.tag,
                                    parsed = %parsed.tag,
                                    "constituent substituted"
                                );
                                self.matrix.store(&gold.tag, &parsed.tag);
                                gold_idx += 1;
                                parsed_idx += 1;
                            }
                        }
                    }
                },
            }
        }
    }

    fn store_missing(&mut self, gold: &TagRange) {
        tracing::trace!(span = %gold.span, tag = %gold.tag, "constituent not found");
        self.matrix.store(&gold.tag, &self.options.not_found_tag);
    }

    fn store_spurious(&mut self, parsed: &TagRange) {
        tracing::trace!(span = %parsed.span, tag = %parsed.tag, "spurious constituent");
        self.matrix.store(&self.options.not_found_tag, &parsed.tag);
    }
}

/// Search `ranges` from `from` for `target`'s tag, staying within its span
/// and stopping once tags sort past it
fn find_in_span(ranges: &[TagRange], from: usize, target: &TagRange) -> Option<usize> {
    ranges[from..]
        .iter()
        .take_while(|range| range.span == target.span && range.tag <= target.tag)
        .position(|range| range.tag == target.tag)
        .map(|offset| from + offset)
}

impl SentenceScorer for CategoryConfusionMatrix {
    fn account(&mut self, gold: &Sentence, parsed: &Sentence) -> Result<(), ScoreError> {
        CategoryConfusionMatrix::account(self, gold, parsed);
        Ok(())
    }

    fn matrix(&self) -> &ConfusionMatrix {
        &self.matrix
    }
}
