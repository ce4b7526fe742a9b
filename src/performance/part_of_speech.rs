//! Part-of-speech scoring
//!
//! Both sentences must cover the same words. Each gold leaf is paired with
//! the first parsed node at the same span, which in post-order is the
//! deepest one, normally the parsed leaf itself.

use rustc_hash::FxHashMap;

use super::SentenceScorer;
use super::confusion_matrix::ConfusionMatrix;
use super::error::ScoreError;
use crate::base::Span;
use crate::syntax::{Node, Sentence};

/// Confusion matrix over leaf tags
#[derive(Debug, Clone, Default)]
pub struct PartOfSpeechConfusionMatrix {
    matrix: ConfusionMatrix,
}

impl PartOfSpeechConfusionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score a single pair
    pub fn compare(gold: &Sentence, parsed: &Sentence) -> Result<Self, ScoreError> {
        let mut scorer = Self::new();
        scorer.account(gold, parsed)?;
        Ok(scorer)
    }

    pub fn matrix(&self) -> &ConfusionMatrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> ConfusionMatrix {
        self.matrix
    }

    /// Pair every gold leaf with its parsed counterpart and store the tags
    ///
    /// Nothing is stored when the sentences do not align.
    pub fn account(&mut self, gold: &Sentence, parsed: &Sentence) -> Result<(), ScoreError> {
        let gold_terminals = gold.terminal_count();
        let parsed_terminals = parsed.terminal_count();
        if gold_terminals != parsed_terminals {
            return Err(ScoreError::alignment(
                gold.span_of_root(),
                gold_terminals,
                parsed_terminals,
            ));
        }

        // Post-order visits the deepest node of a span first
        let mut first_at: FxHashMap<Span, &Node> = FxHashMap::default();
        for (span, node) in parsed.entries() {
            if span.len() == 1 {
                first_at.entry(span).or_insert(node);
            }
        }

        let pairs = gold
            .part_of_speech_sequence()
            .into_iter()
            .map(|(span, pos)| match first_at.get(&span) {
                Some(node) => Ok((pos.tag.as_str(), node.tag())),
                None => Err(ScoreError::alignment(span, gold_terminals, parsed_terminals)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (expected, got) in pairs {
            self.matrix.store(expected, got);
        }
        Ok(())
    }
}

impl SentenceScorer for PartOfSpeechConfusionMatrix {
    fn account(&mut self, gold: &Sentence, parsed: &Sentence) -> Result<(), ScoreError> {
        PartOfSpeechConfusionMatrix::account(self, gold, parsed)
    }

    fn matrix(&self) -> &ConfusionMatrix {
        &self.matrix
    }
}
