//! Syntax Tests - Span Index
//!
//! Every node covers a contiguous run of terminals; parents cover exactly
//! their children.

use porser::{Sentence, Span, TagRange};
use rstest::rstest;

use crate::helpers::sentence_helpers::{assert_span_coverage, sentence};
use crate::helpers::source_fixtures::*;

#[test]
fn test_span_coverage_on_fixtures() {
    for source in WELL_FORMED {
        assert_span_coverage(&sentence(source));
    }
}

#[rstest]
#[case(REVIVALISMO, 3)]
#[case(SINGLE_LEAF, 1)]
#[case(EMPTY_CATEGORY, 2)]
#[case(BARE_WORDS, 3)]
#[case(UNARY_CHAIN, 1)]
fn test_terminal_count(#[case] source: &str, #[case] expected: usize) {
    let sentence = sentence(source);
    assert_eq!(sentence.terminal_count(), expected);
    assert_eq!(sentence.span_of_root(), Span::new(0, expected));
}

#[test]
fn test_span_ordering() {
    let a = Span::new(0, 1);
    let b = Span::new(0, 3);
    let c = Span::new(1, 2);

    assert!(a < b && b < c);
    let mut spans = vec![c, a, b];
    spans.sort();
    assert_eq!(spans, vec![a, b, c]);
}

#[test]
fn test_unary_chain_stacks_on_one_span() {
    let sentence = sentence(UNARY_CHAIN);
    let stacked: Vec<_> = sentence
        .lookup(Span::new(0, 1))
        .into_iter()
        .map(|node| node.tag().to_string())
        .collect();

    assert_eq!(stacked, vec!["PROP", "N", "NP", "S"]);
    assert_eq!(sentence.each_range().len(), 1);
}

#[test]
fn test_tag_ranges_of_sample() {
    let ranges = sentence(REVIVALISMO).tag_ranges();
    assert_eq!(
        ranges,
        vec![
            TagRange::new(Span::new(0, 3), "NP"),
            TagRange::new(Span::new(0, 3), "S"),
            TagRange::new(Span::new(2, 3), "ADJP"),
        ]
    );
}

#[test]
fn test_empty_category_takes_a_position() {
    let sentence = sentence(EMPTY_CATEGORY);

    assert_eq!(sentence.lookup(Span::new(1, 2))[0].tag(), "VP");
    assert!(sentence.tag_ranges().contains(&TagRange::new(Span::new(1, 2), "VP")));
    assert_eq!(sentence.words(), vec!["casa"]);
}

#[test]
fn test_sentence_from_str_and_display() {
    let sentence: Sentence = "(S  (N casa))".parse().unwrap();
    assert_eq!(sentence.to_string(), "(S (N casa))");
    assert!("(S".parse::<Sentence>().is_err());
}
