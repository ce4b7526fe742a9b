//! Reading finished corpus files
//!
//! One bracket tree per line. Lines parse independently, so a file is parsed
//! in parallel and the results are collected back in line order.

use rayon::prelude::*;
use std::path::{Path, PathBuf};

use super::error::CorpusError;
use crate::parser::TreeError;
use crate::performance::{BatchScorer, SentenceScorer};
use crate::syntax::Sentence;

/// A parsed corpus file, one entry per line
#[derive(Debug)]
pub struct CorpusFile {
    pub path: PathBuf,
    pub sentences: Vec<Result<Sentence, TreeError>>,
}

impl CorpusFile {
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Well-formed sentences with their line index
    pub fn parsed(&self) -> impl Iterator<Item = (usize, &Sentence)> + '_ {
        self.sentences
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| entry.as_ref().ok().map(|sentence| (index, sentence)))
    }

    /// Malformed lines with their line index
    pub fn failures(&self) -> impl Iterator<Item = (usize, &TreeError)> + '_ {
        self.sentences
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| entry.as_ref().err().map(|err| (index, err)))
    }
}

/// Read a file into lines
pub fn read_lines(path: &Path) -> Result<Vec<String>, CorpusError> {
    let text = std::fs::read_to_string(path).map_err(|err| CorpusError::read(path, err))?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Parse every line of a corpus text
pub fn parse_lines<L: AsRef<str> + Sync>(lines: &[L]) -> Vec<Result<Sentence, TreeError>> {
    lines
        .par_iter()
        .map(|line| Sentence::parse(line.as_ref()))
        .collect()
}

/// Read and parse a corpus file
pub fn load_corpus(path: &Path) -> Result<CorpusFile, CorpusError> {
    let lines = read_lines(path)?;
    let sentences = parse_lines(&lines);
    let file = CorpusFile {
        path: path.to_path_buf(),
        sentences,
    };
    tracing::debug!(
        path = %path.display(),
        lines = file.len(),
        failures = file.failures().count(),
        "loaded corpus file"
    );
    Ok(file)
}

/// Score a parsed file against its gold file
///
/// The files must have the same number of lines; sentence failures are
/// recorded on `batch`.
pub fn score_files<S: SentenceScorer>(
    gold: &Path,
    parsed: &Path,
    batch: &mut BatchScorer<S>,
) -> Result<(), CorpusError> {
    let gold_lines = read_lines(gold)?;
    let parsed_lines = read_lines(parsed)?;
    if gold_lines.len() != parsed_lines.len() {
        return Err(CorpusError::LineCountMismatch {
            gold: gold_lines.len(),
            parsed: parsed_lines.len(),
        });
    }

    tracing::debug!(
        gold = %gold.display(),
        parsed = %parsed.display(),
        lines = gold_lines.len(),
        "scoring corpus files"
    );
    batch.score_lines(&gold_lines, &parsed_lines);
    Ok(())
}
