//! Token rewrite rules
//!
//! A rule is a pure function of one token string. It declares which token
//! roles it rewrites; the pipeline never calls it for the others.

use regex::Regex;
use std::borrow::Cow;

use super::error::FilterError;

/// Role of a token inside a bracket string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenRole {
    /// The symbol right after `(`
    Tag,
    /// Any other symbol
    Word,
}

/// A stateless rewrite of single tag or word tokens
pub trait RewriteRule: Send + Sync {
    /// Short name used in logs and diagnostics
    fn name(&self) -> &str;

    fn supports_tag_rewrite(&self) -> bool {
        false
    }

    fn supports_word_rewrite(&self) -> bool {
        false
    }

    fn rewrite_tag<'t>(&self, tag: &'t str) -> Cow<'t, str> {
        Cow::Borrowed(tag)
    }

    fn rewrite_word<'t>(&self, word: &'t str) -> Cow<'t, str> {
        Cow::Borrowed(word)
    }

    fn supports(&self, role: TokenRole) -> bool {
        match role {
            TokenRole::Tag => self.supports_tag_rewrite(),
            TokenRole::Word => self.supports_word_rewrite(),
        }
    }

    fn rewrite<'t>(&self, role: TokenRole, token: &'t str) -> Cow<'t, str> {
        match role {
            TokenRole::Tag => self.rewrite_tag(token),
            TokenRole::Word => self.rewrite_word(token),
        }
    }
}

/// Which token roles a [`RegexRule`] applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTarget {
    Tags,
    Words,
    Both,
}

/// A data-driven rule: replace every match of a pattern
///
/// The replacement follows `regex` syntax, so `$1` refers to a capture group.
#[derive(Debug, Clone)]
pub struct RegexRule {
    name: String,
    target: RuleTarget,
    pattern: Regex,
    replacement: String,
}

impl RegexRule {
    pub fn new(
        name: impl Into<String>,
        target: RuleTarget,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self, FilterError> {
        let name = name.into();
        let pattern = Regex::new(pattern).map_err(|source| FilterError::InvalidPattern {
            rule: name.clone(),
            source,
        })?;
        Ok(Self {
            name,
            target,
            pattern,
            replacement: replacement.into(),
        })
    }

    /// Collapse every `PREFIX_subcategory` tag into plain `PREFIX`
    ///
    /// `collapse_prefix("V")` turns `V_FIN` into `V` and leaves `VP` alone.
    pub fn collapse_prefix(prefix: &str) -> Result<Self, FilterError> {
        Self::new(
            format!("collapse-{prefix}"),
            RuleTarget::Tags,
            &format!("^{}_.*$", regex::escape(prefix)),
            prefix.replace('$', "$$"),
        )
    }

    pub fn target(&self) -> RuleTarget {
        self.target
    }

    fn apply<'t>(&self, token: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(token, self.replacement.as_str())
    }
}

impl RewriteRule for RegexRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn supports_tag_rewrite(&self) -> bool {
        matches!(self.target, RuleTarget::Tags | RuleTarget::Both)
    }

    fn supports_word_rewrite(&self) -> bool {
        matches!(self.target, RuleTarget::Words | RuleTarget::Both)
    }

    fn rewrite_tag<'t>(&self, tag: &'t str) -> Cow<'t, str> {
        self.apply(tag)
    }

    fn rewrite_word<'t>(&self, word: &'t str) -> Cow<'t, str> {
        self.apply(word)
    }
}
