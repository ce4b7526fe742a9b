//! Filter Tests - Tree Filters
//!
//! Structural rewrites agree with the text pipeline and can use lemmas.

use porser::base::constants::LEMMA_KEY;
use porser::filters::{
    FilterPipeline, Lemmatize, RegexRule, RewriteTree, TagSelector, TreeFilter, apply_all,
};
use porser::{Category, PartOfSpeech, Sentence};

use crate::helpers::sentence_helpers::sentence;
use crate::helpers::source_fixtures::*;

fn collapse_rules() -> FilterPipeline {
    FilterPipeline::new()
        .with_rule(RegexRule::collapse_prefix("V").unwrap())
        .with_rule(RegexRule::collapse_prefix("PRON").unwrap())
        .with_rule(RegexRule::collapse_prefix("N").unwrap())
}

#[test]
fn test_tree_rewrite_matches_text_rewrite() {
    let text_pipeline = collapse_rules();
    let tree_filter = RewriteTree::new(collapse_rules());

    for line in ANNOTATED_CORPUS.lines() {
        let via_text = sentence(&text_pipeline.run(line));
        let via_tree = tree_filter.apply(&sentence(line));
        assert_eq!(via_tree, via_text, "{line}");
    }
}

#[test]
fn test_lemmatize_verbs_then_collapse() {
    let annotated = Sentence::new(
        Category::new(
            "S",
            vec![
                PartOfSpeech::new("PRON_PERS", "ele").into(),
                PartOfSpeech::new("V_FIN", "disse")
                    .with_extra(LEMMA_KEY, "dizer")
                    .into(),
            ],
        )
        .into(),
    );
    let lemmatize = Lemmatize::all()
        .only(TagSelector::matching("^V").unwrap())
        .with_append_tag(TagSelector::All);
    let collapse = RewriteTree::new(collapse_rules());

    let filtered = apply_all(&[&lemmatize, &collapse], &annotated);
    assert_eq!(filtered.to_string(), "(S (PRON ele) (V dizer_V_FIN))");
    assert_eq!(lemmatize.name(), "lemmatize");
}
