//! Parser Tests - Round-trip and Tree Shapes
//!
//! Rendering a parsed tree and parsing it again yields the same tree, with
//! whitespace normalized.

use porser::{Node, PartOfSpeech, Sentence, parse_tree};
use rstest::rstest;

use crate::helpers::source_fixtures::*;

// ============================================================================
// Round-trip
// ============================================================================

#[rstest]
#[case(REVIVALISMO)]
#[case(REVIVALISMO_WRONG_TAGS)]
#[case(SINGLE_LEAF)]
#[case(EMPTY_CATEGORY)]
#[case(HYPHENATED_TAGS)]
#[case(BARE_WORDS)]
#[case(UNARY_CHAIN)]
#[case("(S\n  (NP   (N casa))\t(VP (V cai)))")]
#[case("(PU ,)")]
fn test_roundtrip(#[case] input: &str) {
    let first = parse_tree(input).unwrap();
    let rendered = first.to_string();
    let second = parse_tree(&rendered).unwrap();

    assert_eq!(first, second, "round-trip of {input:?} via {rendered:?}");
    assert_eq!(second.to_string(), rendered);
}

#[test]
fn test_whitespace_is_normalized() {
    let node = parse_tree("(S\n  (NP   (N casa))\t(VP (V cai)))").unwrap();
    assert_eq!(node.to_string(), "(S (NP (N casa)) (VP (V cai)))");
}

// ============================================================================
// Tree shapes
// ============================================================================

#[test]
fn test_hyphenated_symbols_stay_whole() {
    let sentence = Sentence::parse(HYPHENATED_TAGS).unwrap();
    let tags: Vec<_> = sentence
        .part_of_speech_sequence()
        .into_iter()
        .map(|(_, pos)| pos.tag.to_string())
        .collect();

    assert_eq!(tags, vec!["PRON-PERS", "V-FIN", "N"]);
    assert_eq!(sentence.words(), vec!["ele", "disse", "guarda-chuva"]);
}

#[test]
fn test_lone_hyphen_is_a_word() {
    let node = parse_tree("(PU -)").unwrap();
    assert_eq!(node, Node::from(PartOfSpeech::new("PU", "-")));
}

#[test]
fn test_bare_words_become_untagged_leaves() {
    let sentence = Sentence::parse(BARE_WORDS).unwrap();
    let leaves = sentence.part_of_speech_sequence();

    assert_eq!(leaves.len(), 3);
    assert!(leaves[0].1.is_untagged());
    assert_eq!(leaves[1].1.tag, "V");
    assert!(leaves[2].1.is_untagged());
    assert_eq!(sentence.words(), vec!["eu", "sei", "que"]);
}

#[test]
fn test_deep_nesting_in_sentence() {
    let depth = 2_000;
    let input = format!("{}(N x){}", "(X ".repeat(depth), ")".repeat(depth));
    let sentence = Sentence::parse(&input).unwrap();

    assert_eq!(sentence.terminal_count(), 1);
    assert_eq!(sentence.node_count(), depth + 1);
}
