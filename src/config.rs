//! Run configuration and lenient parsing of invocation parameters.
//!
//! Bad `count` or `start` values never abort a run: they are logged and the
//! default is used.

use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_COUNT: usize = 60;
pub const DEFAULT_DICTIONARY_PATH: &str = "data/dictionary-v1.json";
pub const DEFAULT_FREQUENCY_PATH: &str = "data/raw/sources/wordfreq.tsv";
pub const DEFAULT_OUTPUT_PATH: &str = "data/puzzles-v1.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub dictionary_path: PathBuf,
    pub frequency_path: PathBuf,
    pub output_path: PathBuf,
    pub start_date: NaiveDate,
    pub count: usize,
    pub dry_run: bool,
}

impl PipelineConfig {
    /// Defaults for every field, starting on `today`.
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            frequency_path: PathBuf::from(DEFAULT_FREQUENCY_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            start_date: today,
            count: DEFAULT_COUNT,
            dry_run: false,
        }
    }
}

/// Accepts any finite positive number, floored. Anything else yields [`DEFAULT_COUNT`].
pub fn parse_count(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_COUNT;
    };
    match raw.trim().parse::<f64>() {
        Ok(count) if count.is_finite() && count >= 1.0 && count <= usize::MAX as f64 => count.floor() as usize,
        _ => {
            warn!(value = raw, default = DEFAULT_COUNT, "ignoring invalid puzzle count");
            DEFAULT_COUNT
        }
    }
}

/// Accepts an ISO `YYYY-MM-DD` date; anything else yields `today`.
pub fn parse_start_date(raw: Option<&str>, today: NaiveDate) -> NaiveDate {
    let Some(raw) = raw else {
        return today;
    };
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date,
        Err(err) => {
            warn!(value = raw, error = %err, %today, "ignoring invalid start date");
            today
        }
    }
}
