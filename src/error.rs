//! Error types for the curation pipeline.
//!
//! Each input or output surface has its own enum; [`PipelineError`] wraps
//! them for callers that drive a whole run.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dictionary {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum FrequencyError {
    #[error("failed to read frequency table {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("frequency table header is missing the \"{column}\" column")]
    MissingColumn { column: &'static str },
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to read existing schedule {path}: {source}")]
    ReadExisting {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize schedule: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write schedule {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A published puzzle that breaks a structural rule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("puzzle {date}: outer letters must be six distinct letters other than the center")]
    LetterSet { date: String },

    #[error("puzzle {date}: word \"{word}\" is missing the center letter")]
    MissingCenter { date: String, word: String },

    #[error("puzzle {date}: word \"{word}\" uses letters outside the puzzle")]
    ForeignLetter { date: String, word: String },

    #[error("puzzle {date}: word \"{word}\" is not in dictionary {version}")]
    UnknownWord {
        date: String,
        word: String,
        version: String,
    },

    #[error("puzzle {date}: \"{word}\" is listed as a pangram but is not one")]
    BadPangram { date: String, word: String },

    #[error("puzzle {date}: dictionary version {found} does not match {expected}")]
    VersionMismatch {
        date: String,
        found: String,
        expected: String,
    },

    #[error("puzzle at position {position} is dated {found}, expected {expected}")]
    DateGap {
        position: usize,
        found: String,
        expected: String,
    },
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    Frequency(#[from] FrequencyError),

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error("schedule failed verification: {0}")]
    Schedule(#[from] ScheduleError),
}
