//! Performance Tests - Batch Scoring

use porser::performance::{BatchScorer, FailureReason, ScoringOptions};
use porser::{CategoryConfusionMatrix, PartOfSpeechConfusionMatrix};

use crate::helpers::source_fixtures::*;

#[test]
fn test_batch_over_corpus() {
    let gold: Vec<&str> = ANNOTATED_CORPUS.lines().collect();
    let mut batch = BatchScorer::new(PartOfSpeechConfusionMatrix::new());
    batch.score_lines(&gold, &gold);

    assert_eq!(batch.scored(), 3);
    assert!(batch.failures().is_empty());
    assert_eq!(batch.scorer().matrix().correctness(), 1.0);
}

#[test]
fn test_batch_continues_past_failures() {
    let gold = [REVIVALISMO, REVIVALISMO, SINGLE_LEAF];
    let parsed = ["(S (NP (ART Um)", REVIVALISMO_WRONG_TAGS, SINGLE_LEAF];
    let mut batch = BatchScorer::new(PartOfSpeechConfusionMatrix::new());
    batch.score_lines(&gold, &parsed);

    assert_eq!(batch.scored(), 2);
    assert_eq!(batch.failures().len(), 1);
    assert!(matches!(batch.failures()[0].reason, FailureReason::Parsed(_)));
    // 3 wrong tags, 1 right
    assert_eq!(batch.scorer().matrix().correctness(), 0.25);
}

#[test]
fn test_batch_stops_when_configured() {
    let gold = ["(S", REVIVALISMO];
    let options = ScoringOptions {
        stop_on_failure: true,
        ..ScoringOptions::default()
    };
    let mut batch = BatchScorer::with_options(CategoryConfusionMatrix::new(), options);
    batch.score_lines(&gold, &gold);
    batch.score_lines(&[REVIVALISMO], &[REVIVALISMO]);

    assert!(batch.is_stopped());
    assert_eq!(batch.scored(), 0);
    assert!(!batch.scorer().matrix().has_data());
}

#[test]
fn test_batch_of_parsed_sentences() {
    let gold = porser::Sentence::parse(REVIVALISMO).unwrap();
    let mut batch = BatchScorer::new(CategoryConfusionMatrix::new());
    batch.score_pair(&gold, &gold);

    let scorer = batch.into_scorer();
    assert_eq!(scorer.matrix().total(), 3);
}
