//! Performance Tests - Confusion Matrices
//!
//! Category and part-of-speech scoring over the evaluation samples.

use porser::performance::{MatrixReport, ReportOptions};
use porser::{CategoryConfusionMatrix, ConfusionMatrix, PartOfSpeechConfusionMatrix, ScoreError};
use rstest::rstest;

use crate::helpers::sentence_helpers::{nonzero_cells, sentence};
use crate::helpers::source_fixtures::*;

// ============================================================================
// Generic matrix
// ============================================================================

#[rstest]
#[case(1)]
#[case(7)]
#[case(100)]
fn test_diagonal(#[case] times: usize) {
    let mut matrix = ConfusionMatrix::new();
    for _ in 0..times {
        matrix.store("NP", "NP");
    }

    assert_eq!(matrix.correctness(), 1.0);
    assert_eq!(matrix.errorness(), 0.0);
    assert_eq!(matrix.total(), times);
}

#[test]
fn test_empty_matrix_policy() {
    let matrix = ConfusionMatrix::new();
    let summary = matrix.summary();

    assert_eq!(summary.correctness, 0.0);
    assert_eq!(summary.errorness, 0.0);
    assert!(!summary.has_data);
    assert!(matches!(matrix.get("S", "S"), Err(ScoreError::UnknownKey(_))));
}

// ============================================================================
// Category scoring
// ============================================================================

#[test]
fn test_perfect_category_parse() {
    let gold = sentence(REVIVALISMO);
    let matrix = CategoryConfusionMatrix::compare(&gold, &gold).into_matrix();

    assert_eq!(matrix.correctness(), 1.0);
    assert_eq!(matrix.rate("S", "S"), Ok(1.0));
    assert_eq!(
        nonzero_cells(&matrix),
        vec![
            ("ADJP".to_string(), "ADJP".to_string(), 1.0),
            ("NP".to_string(), "NP".to_string(), 1.0),
            ("S".to_string(), "S".to_string(), 1.0),
        ]
    );
}

#[test]
fn test_flattened_parse_loses_inner_constituents() {
    let gold = sentence(REVIVALISMO);
    let parsed = sentence("(S (ART Um) (N revivalismo) (ADJ refrescante))");
    let matrix = CategoryConfusionMatrix::compare(&gold, &parsed).into_matrix();

    assert_eq!(matrix.total(), 3);
    assert_eq!(matrix.get("S", "S"), Ok(1));
    assert_eq!(matrix.get("NP", "#NF#"), Ok(1));
    assert_eq!(matrix.get("ADJP", "#NF#"), Ok(1));
    assert!((matrix.correctness() - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_every_constituent_stored_once() {
    let gold = sentence("(S (A (B (C (N x)))) (D (N y)))");
    let parsed = sentence("(S (B (E (N x))) (D (F (N y))))");
    let matrix = CategoryConfusionMatrix::compare(&gold, &parsed).into_matrix();

    // B=B, A->E, C->#NF#, S=S, D=D, #NF#->F
    let gold_side: usize = ["S", "A", "B", "C", "D"]
        .iter()
        .map(|tag| matrix.expected_total(tag))
        .sum();
    assert_eq!(gold_side, 5);
    assert_eq!(matrix.get("#NF#", "F"), Ok(1));
    assert_eq!(matrix.get("A", "E"), Ok(1));
    assert_eq!(matrix.get("C", "#NF#"), Ok(1));
    assert_eq!(matrix.get("B", "B"), Ok(1));
    assert_eq!(matrix.get("D", "D"), Ok(1));
}

// ============================================================================
// Part-of-speech scoring
// ============================================================================

#[test]
fn test_totally_wrong_part_of_speech() {
    let gold = sentence(REVIVALISMO);
    let parsed = sentence(REVIVALISMO_WRONG_TAGS);
    let matrix = PartOfSpeechConfusionMatrix::compare(&gold, &parsed)
        .unwrap()
        .into_matrix();

    assert_eq!(matrix.correctness(), 0.0);
    assert_eq!(matrix.errorness(), 1.0);
    assert_eq!(matrix.rate("ADJ", "CONJ"), Ok(1.0));
    assert_eq!(matrix.rate("CONJ", "ADJ"), Ok(0.0));
}

#[test]
fn test_part_of_speech_alignment_error() {
    let gold = sentence(REVIVALISMO);
    let parsed = sentence("(S (N Um) (N revivalismo))");
    let err = PartOfSpeechConfusionMatrix::compare(&gold, &parsed).unwrap_err();

    assert!(matches!(err, ScoreError::Alignment { .. }));
    assert!(err.to_string().contains("3 terminals"));
}

// ============================================================================
// Report
// ============================================================================

#[test]
fn test_report_of_wrong_tags() {
    let matrix = PartOfSpeechConfusionMatrix::compare(
        &sentence(REVIVALISMO),
        &sentence(REVIVALISMO_WRONG_TAGS),
    )
    .unwrap()
    .into_matrix();
    let report = MatrixReport::from_matrix(&matrix);

    assert_eq!(report.keys.len(), 4);
    let rendered = report.render(&ReportOptions::default());
    assert!(rendered.ends_with("correctness: 0.00\nerrorness: 100.00"), "{rendered}");
}
