//! Tree parsing error handling module
//!
//! This module provides the error type raised for malformed bracket trees:
//! - Categorized error codes for filtering failed sentences
//! - Hints for common mistakes
//! - Related range tracking (e.g., "opened here" for unclosed parentheses)

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{RelatedInfo, TreeError, TreeErrorBuilder};
