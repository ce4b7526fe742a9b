//! Error types for corpus files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing corpus files.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A corpus file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing generated corpus lines failed.
    #[error("failed to write corpus: {0}")]
    Write(#[from] std::io::Error),

    /// Gold and parsed files do not have one line per sentence in common.
    #[error("line count mismatch: gold has {gold} lines, parsed has {parsed}")]
    LineCountMismatch { gold: usize, parsed: usize },
}

impl CorpusError {
    /// Create a read error for `path`.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
