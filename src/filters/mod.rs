//! Corpus filters
//!
//! Two layers share one rule abstraction:
//!
//! - [`FilterPipeline`] rewrites the tag and word tokens of a bracket string
//!   in place, preserving its layout byte for byte
//! - [`TreeFilter`]s rewrite a parsed [`Sentence`](crate::syntax::Sentence)
//!   into a new one, and can use leaf attributes such as lemmas
//!
//! Rules implement [`RewriteRule`]. [`RegexRule`] covers the common
//! data-driven cases (tag renaming, subcategory collapsing).

mod error;
mod pipeline;
mod rule;
mod tree;

pub use error::FilterError;
pub use pipeline::{FilterPipeline, LocatedToken, locate_tokens};
pub use rule::{RegexRule, RewriteRule, RuleTarget, TokenRole};
pub use tree::{Lemmatize, RewriteTree, TagSelector, TreeFilter, apply_all};
