// src/core/frequency.rs
use crate::error::FrequencyError;
use std::collections::HashMap;

/// Word frequencies on the Zipf scale (log10 occurrences per billion words + 3).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    zipf_by_word: HashMap<String, f64>,
    min_zipf: f64,
    max_zipf: f64,
    rows_loaded: usize,
}

impl FrequencyTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses tab-separated text with a header row naming `word` and `zipf`
    /// columns in any position. Rows without a word or a finite zipf are skipped.
    pub fn parse_tsv(raw: &str) -> Result<Self, FrequencyError> {
        let mut lines = raw.lines().map(str::trim).filter(|line| !line.is_empty());

        let Some(header) = lines.next() else {
            return Ok(Self::empty());
        };
        let columns: Vec<&str> = header.split('\t').collect();
        let word_idx = columns
            .iter()
            .position(|c| *c == "word")
            .ok_or(FrequencyError::MissingColumn { column: "word" })?;
        let zipf_idx = columns
            .iter()
            .position(|c| *c == "zipf")
            .ok_or(FrequencyError::MissingColumn { column: "zipf" })?;

        let mut table = Self {
            min_zipf: f64::INFINITY,
            max_zipf: f64::NEG_INFINITY,
            ..Self::default()
        };

        for line in lines {
            let cols: Vec<&str> = line.split('\t').collect();
            let word = cols.get(word_idx).map(|w| w.trim().to_lowercase()).unwrap_or_default();
            let zipf = cols.get(zipf_idx).and_then(|z| z.trim().parse::<f64>().ok());
            let Some(zipf) = zipf.filter(|z| z.is_finite()) else {
                continue;
            };
            if word.is_empty() {
                continue;
            }
            table.insert(word, zipf);
        }

        if table.rows_loaded == 0 {
            return Ok(Self::empty());
        }
        Ok(table)
    }

    pub fn insert(&mut self, word: String, zipf: f64) {
        if self.rows_loaded == 0 {
            self.min_zipf = zipf;
            self.max_zipf = zipf;
        } else {
            self.min_zipf = self.min_zipf.min(zipf);
            self.max_zipf = self.max_zipf.max(zipf);
        }
        self.zipf_by_word.insert(word, zipf);
        self.rows_loaded += 1;
    }

    pub fn zipf(&self, word: &str) -> Option<f64> {
        self.zipf_by_word.get(word).copied()
    }

    /// Lowest zipf seen, or 0 for an empty table.
    pub fn min_zipf(&self) -> f64 {
        self.min_zipf
    }

    pub fn max_zipf(&self) -> f64 {
        self.max_zipf
    }

    pub fn rows_loaded(&self) -> usize {
        self.rows_loaded
    }

    pub fn is_empty(&self) -> bool {
        self.rows_loaded == 0
    }
}

impl FromIterator<(String, f64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut table = Self::empty();
        for (word, zipf) in iter {
            table.insert(word, zipf);
        }
        table
    }
}
