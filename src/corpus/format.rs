//! Gold and parseable line formats
//!
//! A gold line is a bracket tree as annotated. A parseable line is the same
//! sentence with every tag and inner parenthesis removed, the words wrapped
//! in a single pair of parentheses, which is what the external parser reads.

use std::io::Write;

use super::error::CorpusError;
use crate::parser::TreeError;
use crate::syntax::Sentence;

/// Collapse every run of spaces into a single space
///
/// Tabs and line breaks are left alone.
pub fn squeeze_spaces(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut previous_space = false;
    for ch in line.chars() {
        if ch == ' ' && previous_space {
            continue;
        }
        previous_space = ch == ' ';
        out.push(ch);
    }
    out
}

/// A gold line: spaces squeezed, newline-terminated
pub fn gold_line(line: &str) -> String {
    let mut out = squeeze_spaces(line);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// A parseable line: `(word1 word2 ...)` plus newline
pub fn parseable_string(sentence: &Sentence) -> String {
    format!("({})\n", sentence.words().join(" "))
}

/// Parse a bracket line and render its parseable form
pub fn parseable_line(line: &str) -> Result<String, TreeError> {
    Sentence::parse(line).map(|sentence| parseable_string(&sentence))
}

/// Write the gold and parseable forms of every well-formed line
///
/// Malformed lines are skipped and returned with their zero-based index, so
/// both outputs stay aligned line for line.
pub fn write_corpus<'a, G, P>(
    lines: impl IntoIterator<Item = &'a str>,
    gold: &mut G,
    parseable: &mut P,
) -> Result<Vec<(usize, TreeError)>, CorpusError>
where
    G: Write,
    P: Write,
{
    let mut skipped = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        match Sentence::parse(line) {
            Ok(sentence) => {
                gold.write_all(gold_line(line).as_bytes())?;
                parseable.write_all(parseable_string(&sentence).as_bytes())?;
            }
            Err(err) => {
                tracing::warn!(index, code = %err.code, "skipping malformed corpus line");
                skipped.push((index, err));
            }
        }
    }
    Ok(skipped)
}
