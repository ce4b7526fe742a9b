//! Bracket-notation parser
//!
//! ## Architecture
//!
//! ```text
//! Bracket string
//!     ↓
//! Lexer (logos) → Tokens: WORD, '-', '(', ')', EOF
//!     ↓
//! Symbols → hyphenated runs glued back into single WORDs
//!     ↓
//! Parser → Node tree (explicit stack, no recursion)
//!     ↓
//! Sentence::parse → span-indexed Sentence
//! ```

#[allow(clippy::module_inception)]
mod parser;

pub mod errors;
mod lexer;

pub use errors::{ErrorCode, TreeError};
pub use lexer::{Lexer, Symbols, Token, TokenKind, tokenize};
pub use parser::parse_tree;
