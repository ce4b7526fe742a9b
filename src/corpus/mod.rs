//! Corpus files
//!
//! The only part of the crate that touches the filesystem. It reads finished
//! files and writes the gold/parseable line formats exchanged with the
//! external parser.

mod error;
pub mod format;
pub mod loader;

pub use error::CorpusError;
pub use format::{gold_line, parseable_line, parseable_string, squeeze_spaces, write_corpus};
pub use loader::{CorpusFile, load_corpus, parse_lines, read_lines, score_files};
