//! Plain-text and serializable views of a confusion matrix

#[cfg(feature = "serde")]
use serde::Serialize;
use smol_str::SmolStr;
use std::fmt;

use super::confusion_matrix::ConfusionMatrix;
use super::options::ReportOptions;

/// Scalar statistics of a matrix
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Summary {
    pub total: usize,
    pub correct: usize,
    pub errors: usize,
    pub correctness: f64,
    pub errorness: f64,
    /// False when the rates come from an empty matrix
    pub has_data: bool,
}

/// A TAG x TAG table of rates plus the matrix summary
///
/// Row `i`, column `j` holds the rate at which `keys[i]` was answered with
/// `keys[j]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MatrixReport {
    pub keys: Vec<SmolStr>,
    pub rows: Vec<Vec<f64>>,
    pub summary: Summary,
}

impl MatrixReport {
    pub fn from_matrix(matrix: &ConfusionMatrix) -> Self {
        let keys: Vec<SmolStr> = matrix.keys().map(SmolStr::new).collect();
        let rows = matrix
            .cells()
            .chunks(keys.len().max(1))
            .map(|row| row.iter().map(|cell| cell.rate).collect())
            .collect();
        Self {
            keys,
            rows,
            summary: matrix.summary(),
        }
    }

    /// Render the table followed by the summary lines
    ///
    /// ```text
    /// TAG        | N          | V
    /// N          | 100.00     | 0.00
    /// V          | 50.00      | 50.00
    /// correctness: 75.00
    /// errorness: 25.00
    /// ```
    pub fn render(&self, options: &ReportOptions) -> String {
        let width = self
            .keys
            .iter()
            .map(|key| key.chars().count())
            .chain(std::iter::once(options.column_width))
            .max()
            .unwrap_or(options.column_width);

        let mut lines = Vec::with_capacity(self.keys.len() + 3);
        let header = std::iter::once("TAG").chain(self.keys.iter().map(SmolStr::as_str));
        lines.push(table_line(header.map(str::to_string), width));

        for (key, row) in self.keys.iter().zip(&self.rows) {
            let cells = std::iter::once(key.to_string())
                .chain(row.iter().map(|rate| options.format_rate(*rate)));
            lines.push(table_line(cells, width));
        }

        lines.push(format!(
            "correctness: {}",
            options.format_rate(self.summary.correctness)
        ));
        lines.push(format!(
            "errorness: {}",
            options.format_rate(self.summary.errorness)
        ));
        if !self.summary.has_data {
            lines.push("(no data)".to_string());
        }
        lines.join("\n")
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn table_line(cells: impl Iterator<Item = String>, width: usize) -> String {
    let padded: Vec<String> = cells.map(|cell| format!("{cell:<width$}")).collect();
    padded.join(" | ").trim_end().to_string()
}

impl fmt::Display for MatrixReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&ReportOptions::default()))
    }
}
