//! Error code definitions for tree diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Structural errors (parentheses, truncation)
//! - E02xx: Content errors (tags, stray words, empty input)

use std::fmt;

/// Error codes for malformed bracket trees
///
/// Each error code represents a specific category of parse error,
/// enabling filtering of failed sentences by cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Structural errors (parentheses)
    // =========================================================================
    /// Input ended before every `(` was closed
    E0101,
    /// `)` with no matching `(`
    E0102,
    /// Tokens after the root tree closed
    E0103,

    // =========================================================================
    // E02xx: Content errors
    // =========================================================================
    /// `(` not immediately followed by a tag
    E0201,
    /// No tree in the input at all
    E0202,
    /// Word outside of any tree
    E0203,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0101")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 => "structural error",
            Self::E0201 | Self::E0202 | Self::E0203 => "content error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "unclosed parenthesis",
            Self::E0102 => "unexpected closing parenthesis",
            Self::E0103 => "unexpected input after the root tree",
            Self::E0201 => "missing tag after '('",
            Self::E0202 => "empty input",
            Self::E0203 => "word outside of a tree",
        }
    }

    /// Check if this is a structural error (parenthesis-related)
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::E0101 | Self::E0102 | Self::E0103)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
