//! Tree-level filters
//!
//! A [`TreeFilter`] maps a sentence to a new sentence. Unlike the text
//! pipeline it sees node structure and leaf attributes, so it can act on
//! things like lemmas that never appear in the bracket string.

use regex::Regex;

use super::error::FilterError;
use super::pipeline::FilterPipeline;
use super::rule::{RewriteRule, TokenRole};
use crate::base::constants::TAG_SUFFIX_SEPARATOR;
use crate::syntax::{PartOfSpeech, Sentence};

/// A rewrite from one sentence tree to another
pub trait TreeFilter: Send + Sync {
    fn name(&self) -> &str;

    fn apply(&self, sentence: &Sentence) -> Sentence;
}

/// Run filters in order, each on the previous one's output
pub fn apply_all(filters: &[&dyn TreeFilter], sentence: &Sentence) -> Sentence {
    filters
        .iter()
        .fold(sentence.clone(), |current, filter| filter.apply(&current))
}

/// Applies token rewrite rules to a tree's tags and words
#[derive(Debug, Default)]
pub struct RewriteTree {
    pipeline: FilterPipeline,
}

impl RewriteTree {
    pub fn new(pipeline: FilterPipeline) -> Self {
        Self { pipeline }
    }

    pub fn with_rule(mut self, rule: impl RewriteRule + 'static) -> Self {
        self.pipeline.push(rule);
        self
    }
}

impl TreeFilter for RewriteTree {
    fn name(&self) -> &str {
        "rewrite-tree"
    }

    fn apply(&self, sentence: &Sentence) -> Sentence {
        let pipeline = &self.pipeline;
        let root = sentence.root().rebuild(
            |category| {
                pipeline
                    .rewrite_token(TokenRole::Tag, &category.tag)
                    .as_ref()
                    .into()
            },
            |pos| {
                let tag = if pos.is_untagged() {
                    pos.tag.clone()
                } else {
                    pipeline.rewrite_token(TokenRole::Tag, &pos.tag).as_ref().into()
                };
                PartOfSpeech {
                    tag,
                    word: pipeline.rewrite_token(TokenRole::Word, &pos.word).into_owned(),
                    extra: pos.extra.clone(),
                }
            },
        );
        Sentence::new(root)
    }
}

/// Which leaf tags a lemma policy applies to
#[derive(Debug, Clone, Default)]
pub enum TagSelector {
    #[default]
    All,
    None,
    Matching(Regex),
}

impl TagSelector {
    pub fn matching(pattern: &str) -> Result<Self, FilterError> {
        Regex::new(pattern)
            .map(Self::Matching)
            .map_err(|source| FilterError::InvalidPattern {
                rule: "tag-selector".to_string(),
                source,
            })
    }

    pub fn selects(&self, tag: &str) -> bool {
        match self {
            Self::All => true,
            Self::None => false,
            Self::Matching(pattern) => pattern.is_match(tag),
        }
    }
}

/// Replaces leaf words with their lemma
///
/// Only leaves whose tag is selected by `lemmatize` and that carry a lemma
/// change. Of those, leaves selected by `append_tag` get `_TAG` appended to
/// the lemma.
#[derive(Debug, Clone, Default)]
pub struct Lemmatize {
    pub lemmatize: TagSelector,
    pub append_tag: TagSelector,
}

impl Lemmatize {
    /// Lemmatize every leaf, never append tags
    pub fn all() -> Self {
        Self {
            lemmatize: TagSelector::All,
            append_tag: TagSelector::None,
        }
    }

    pub fn with_append_tag(mut self, selector: TagSelector) -> Self {
        self.append_tag = selector;
        self
    }

    pub fn only(mut self, selector: TagSelector) -> Self {
        self.lemmatize = selector;
        self
    }

    fn word_for(&self, pos: &PartOfSpeech) -> String {
        match pos.lemma() {
            Some(lemma) if self.lemmatize.selects(&pos.tag) => {
                if self.append_tag.selects(&pos.tag) {
                    format!("{lemma}{TAG_SUFFIX_SEPARATOR}{}", pos.tag)
                } else {
                    lemma.to_string()
                }
            }
            _ => pos.word.clone(),
        }
    }
}

impl TreeFilter for Lemmatize {
    fn name(&self) -> &str {
        "lemmatize"
    }

    fn apply(&self, sentence: &Sentence) -> Sentence {
        let root = sentence.root().rebuild(
            |category| category.tag.clone(),
            |pos| PartOfSpeech {
                tag: pos.tag.clone(),
                word: self.word_for(pos),
                extra: pos.extra.clone(),
            },
        );
        Sentence::new(root)
    }
}
