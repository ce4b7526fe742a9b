//! Scoring and report configuration

use smol_str::SmolStr;

use crate::base::constants::NOT_FOUND_TAG;

/// Scoring configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringOptions {
    /// Tag recorded for a constituent with no counterpart on the other side
    pub not_found_tag: SmolStr,
    /// Whether batch scoring stops at the first failed sentence
    pub stop_on_failure: bool,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            not_found_tag: SmolStr::new_static(NOT_FOUND_TAG),
            stop_on_failure: false,
        }
    }
}

/// Report rendering configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Minimum width of every table column
    pub column_width: usize,
    /// Decimal places for rates
    pub precision: usize,
    /// Render rates as percentages instead of fractions
    pub percentages: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            column_width: 10,
            precision: 2,
            percentages: true,
        }
    }
}

impl ReportOptions {
    pub fn format_rate(&self, rate: f64) -> String {
        if self.percentages {
            format!("{:.*}", self.precision, rate * 100.0)
        } else {
            format!("{:.*}", self.precision, rate)
        }
    }
}
