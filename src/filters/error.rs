//! Error types for filter construction.

use thiserror::Error;

/// Errors raised while building filter rules.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A rule's pattern failed to compile.
    #[error("invalid pattern in rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },
}
