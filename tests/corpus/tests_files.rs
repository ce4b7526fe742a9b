//! Corpus Tests - Files and Line Formats
//!
//! The gold/parseable round trip through the filesystem.

use std::fs::{self, File};
use std::io::BufWriter;

use porser::corpus::{CorpusError, load_corpus, score_files, write_corpus};
use porser::performance::BatchScorer;
use porser::CategoryConfusionMatrix;
use tempfile::TempDir;

use crate::helpers::source_fixtures::*;

#[test]
fn test_write_then_load_corpus() {
    let dir = TempDir::new().unwrap();
    let gold_path = dir.path().join("test.gold.txt");
    let parseable_path = dir.path().join("test.parseable.txt");

    {
        let mut gold = BufWriter::new(File::create(&gold_path).unwrap());
        let mut parseable = BufWriter::new(File::create(&parseable_path).unwrap());
        let skipped = write_corpus(ANNOTATED_CORPUS.lines(), &mut gold, &mut parseable).unwrap();
        assert!(skipped.is_empty());
    }

    let parseable = fs::read_to_string(&parseable_path).unwrap();
    assert_eq!(
        parseable.lines().next(),
        Some("(Um revivalismo refrescante)")
    );

    let loaded = load_corpus(&gold_path).unwrap();
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded.failures().count(), 0);
}

#[test]
fn test_score_parsed_file_against_gold() {
    let dir = TempDir::new().unwrap();
    let gold_path = dir.path().join("gold.txt");
    let parsed_path = dir.path().join("parsed.txt");
    fs::write(&gold_path, ANNOTATED_CORPUS).unwrap();
    fs::write(&parsed_path, ANNOTATED_CORPUS).unwrap();

    let mut batch = BatchScorer::new(CategoryConfusionMatrix::new());
    score_files(&gold_path, &parsed_path, &mut batch).unwrap();

    assert_eq!(batch.scored(), 3);
    assert_eq!(batch.scorer().matrix().correctness(), 1.0);
}

#[test]
fn test_mismatched_files() {
    let dir = TempDir::new().unwrap();
    let gold_path = dir.path().join("gold.txt");
    let parsed_path = dir.path().join("parsed.txt");
    fs::write(&gold_path, ANNOTATED_CORPUS).unwrap();
    fs::write(&parsed_path, REVIVALISMO).unwrap();

    let mut batch = BatchScorer::new(CategoryConfusionMatrix::new());
    let err = score_files(&gold_path, &parsed_path, &mut batch).unwrap_err();

    assert!(matches!(
        err,
        CorpusError::LineCountMismatch { gold: 3, parsed: 1 }
    ));
}
