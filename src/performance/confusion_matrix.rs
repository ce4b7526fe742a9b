//! Generic (expected, got) accounting

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use std::collections::BTreeSet;

use super::error::ScoreError;
use super::report::Summary;

/// One cell of the matrix: how often `expected` was answered with `got`,
/// relative to how often `expected` was expected at all
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixCell {
    pub expected: SmolStr,
    pub got: SmolStr,
    pub count: usize,
    pub rate: f64,
}

/// Counts of (expected, got) pairs
///
/// Keys are registered on first use and never removed. A matrix with no
/// stored pairs reports `0.0` for both rates and `false` from
/// [`has_data`](Self::has_data).
#[derive(Debug, Clone, Default)]
pub struct ConfusionMatrix {
    keys: BTreeSet<SmolStr>,
    counts: FxHashMap<(SmolStr, SmolStr), usize>,
    expected_totals: FxHashMap<SmolStr, usize>,
    total: usize,
    correct: usize,
    errors: usize,
}

impl ConfusionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation
    pub fn store(&mut self, expected: &str, got: &str) {
        let expected = SmolStr::new(expected);
        let got = SmolStr::new(got);

        if expected == got {
            self.correct += 1;
        } else {
            self.errors += 1;
        }
        self.total += 1;
        *self.expected_totals.entry(expected.clone()).or_default() += 1;
        self.keys.insert(expected.clone());
        self.keys.insert(got.clone());
        *self.counts.entry((expected, got)).or_default() += 1;
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn errors(&self) -> usize {
        self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Check whether the rates are backed by at least one observation
    pub fn has_data(&self) -> bool {
        !self.is_empty()
    }

    /// Fraction of observations where expected and got agree
    pub fn correctness(&self) -> f64 {
        self.fraction(self.correct)
    }

    /// Fraction of observations where expected and got differ
    pub fn errorness(&self) -> f64 {
        self.fraction(self.errors)
    }

    fn fraction(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total: self.total,
            correct: self.correct,
            errors: self.errors,
            correctness: self.correctness(),
            errorness: self.errorness(),
            has_data: self.has_data(),
        }
    }

    /// Every key seen as expected or got, sorted
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.keys.iter().map(SmolStr::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// How often `key` was the expected value
    pub fn expected_total(&self, key: &str) -> usize {
        self.expected_totals.get(key).copied().unwrap_or(0)
    }

    /// Raw count of a pair; both keys must have been stored before
    pub fn get(&self, expected: &str, got: &str) -> Result<usize, ScoreError> {
        for key in [expected, got] {
            if !self.contains_key(key) {
                return Err(ScoreError::unknown_key(key));
            }
        }
        Ok(self.count(expected, got))
    }

    /// Rate of a pair relative to its expected total; both keys must be known
    pub fn rate(&self, expected: &str, got: &str) -> Result<f64, ScoreError> {
        let count = self.get(expected, got)?;
        Ok(self.rate_of(expected, count))
    }

    fn count(&self, expected: &str, got: &str) -> usize {
        self.counts
            .get(&(SmolStr::new(expected), SmolStr::new(got)))
            .copied()
            .unwrap_or(0)
    }

    fn rate_of(&self, expected: &str, count: usize) -> f64 {
        match self.expected_total(expected) {
            0 => 0.0,
            total => count as f64 / total as f64,
        }
    }

    /// Every cell of the sorted key product, row by row
    ///
    /// A key that was only ever a got value has a row of `0.0` rates.
    pub fn cells(&self) -> Vec<MatrixCell> {
        let mut cells = Vec::with_capacity(self.keys.len() * self.keys.len());
        for expected in &self.keys {
            for got in &self.keys {
                let count = self.count(expected, got);
                cells.push(MatrixCell {
                    expected: expected.clone(),
                    got: got.clone(),
                    count,
                    rate: self.rate_of(expected, count),
                });
            }
        }
        cells
    }
}
