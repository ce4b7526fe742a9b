//! Text-level filter pipeline
//!
//! Rewrites the tag and word tokens of a bracket string while leaving every
//! other byte (parentheses, spacing, line breaks) where it was.

use std::borrow::Cow;
use std::fmt;

use super::rule::{RewriteRule, TokenRole};
use crate::base::TextRange;
use crate::parser::{Symbols, TokenKind};

/// A tag or word token located in the original string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatedToken {
    pub role: TokenRole,
    pub range: TextRange,
}

/// Locate every tag and word token of a bracket string
///
/// A symbol directly after `(` is a tag, any other symbol a word.
pub fn locate_tokens(input: &str) -> Vec<LocatedToken> {
    let mut tokens = Vec::new();
    let mut after_open = false;
    for symbol in Symbols::new(input) {
        match symbol.kind {
            TokenKind::Word | TokenKind::Hyphen => {
                let role = if after_open {
                    TokenRole::Tag
                } else {
                    TokenRole::Word
                };
                tokens.push(LocatedToken {
                    role,
                    range: symbol.range,
                });
                after_open = false;
            }
            TokenKind::LParen => after_open = true,
            TokenKind::RParen | TokenKind::Eof => after_open = false,
        }
    }
    tokens
}

/// An ordered list of rewrite rules
#[derive(Default)]
pub struct FilterPipeline {
    rules: Vec<Box<dyn RewriteRule>>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule; rules run in insertion order
    pub fn with_rule(mut self, rule: impl RewriteRule + 'static) -> Self {
        self.push(rule);
        self
    }

    pub fn push(&mut self, rule: impl RewriteRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Run every rule supporting `role` over one token, in order
    pub fn rewrite_token<'t>(&self, role: TokenRole, token: &'t str) -> Cow<'t, str> {
        let mut current = Cow::Borrowed(token);
        for rule in self.rules.iter().filter(|rule| rule.supports(role)) {
            current = match current {
                Cow::Borrowed(text) => rule.rewrite(role, text),
                Cow::Owned(text) => Cow::Owned(rule.rewrite(role, &text).into_owned()),
            };
        }
        current
    }

    /// Rewrite a bracket string
    ///
    /// Replacements are spliced in left to right; each splice shifts the
    /// positions of later tokens by the accumulated length difference.
    pub fn run(&self, input: &str) -> String {
        if self.rules.is_empty() {
            return input.to_string();
        }

        let mut output = input.to_string();
        let mut offset: isize = 0;
        for token in locate_tokens(input) {
            let original = &input[token.range];
            let replacement = self.rewrite_token(token.role, original);
            if replacement == original {
                continue;
            }

            let start = usize::from(token.range.start()).saturating_add_signed(offset);
            let end = start + original.len();
            output.replace_range(start..end, &replacement);
            offset += replacement.len() as isize - original.len() as isize;
        }

        tracing::trace!(rules = ?self.rule_names(), "filtered {:?} into {:?}", input, output);
        output
    }
}

impl fmt::Debug for FilterPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterPipeline")
            .field("rules", &self.rule_names())
            .finish()
    }
}
