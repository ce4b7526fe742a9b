//! Foundation types for the porser toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Span`] - Half-open ranges over terminal (word) positions
//! - [`TextRange`], [`TextSize`] - Byte offsets into bracket strings
//! - Domain constants (sentinel tags, extra-attribute keys)
//!
//! This module has NO dependencies on other porser modules.

pub mod constants;
mod span;

pub use span::Span;

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};
