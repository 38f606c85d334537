// File: src/persistence.rs
use crate::core::frequency::FrequencyTable;
use crate::core::types::{Dictionary, PuzzleSchedule};
use crate::error::{DictionaryError, FrequencyError, PublishError};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Keeps unique lowercase a-z words of at least four letters, first occurrence wins.
/// Returns the kept words and how many entries were dropped.
pub fn sanitize_words(words: Vec<String>) -> (Vec<String>, usize) {
    let total = words.len();
    let mut seen = HashSet::new();
    let kept: Vec<String> = words
        .into_iter()
        .filter(|word| word.len() >= 4 && word.bytes().all(|b| b.is_ascii_lowercase()))
        .filter(|word| seen.insert(word.clone()))
        .collect();
    let dropped = total - kept.len();
    (kept, dropped)
}

pub fn load_dictionary(path: &Path) -> Result<Dictionary, DictionaryError> {
    let raw = fs::read_to_string(path).map_err(|source| DictionaryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let dictionary: Dictionary = serde_json::from_str(&raw).map_err(|source| DictionaryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let (words, dropped) = sanitize_words(dictionary.words);
    if dropped > 0 {
        warn!(dropped, "dictionary entries skipped (duplicate, too short or not lowercase a-z)");
    }
    info!(version = %dictionary.version, words = words.len(), "dictionary loaded");
    Ok(Dictionary {
        version: dictionary.version,
        words,
    })
}

/// Loads the zipf table. A missing file is not an error: difficulty scoring
/// falls back to default lexical scores.
pub fn load_frequency_table(path: &Path) -> Result<FrequencyTable, FrequencyError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "frequency table not found, using default scores");
            return Ok(FrequencyTable::empty());
        }
        Err(source) => {
            return Err(FrequencyError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let table = FrequencyTable::parse_tsv(&raw)?;
    info!(rows = table.rows_loaded(), "frequency table loaded");
    Ok(table)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    Written,
    /// Existing file already held the same content apart from `generatedAt`.
    Unchanged,
}

/// Fields that decide whether a published schedule changed.
fn comparable(payload: &Value) -> [Option<&Value>; 3] {
    ["version", "sourceDictionaryVersion", "puzzles"].map(|key| payload.get(key))
}

fn existing_matches(path: &Path, fresh: &Value) -> Result<bool, PublishError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(false),
        Err(source) => {
            return Err(PublishError::ReadExisting {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    match serde_json::from_str::<Value>(&raw) {
        Ok(existing) => Ok(comparable(&existing) == comparable(fresh)),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "existing schedule is not valid JSON, replacing it");
            Ok(false)
        }
    }
}

/// Writes `schedule` as pretty JSON through a temp file in the target directory.
/// Leaves the file alone when only the generation timestamp would change.
pub fn publish_schedule(path: &Path, schedule: &PuzzleSchedule) -> Result<PublishOutcome, PublishError> {
    let fresh = serde_json::to_value(schedule)?;
    if existing_matches(path, &fresh)? {
        info!(path = %path.display(), "schedule unchanged, skipping write");
        return Ok(PublishOutcome::Unchanged);
    }

    let write_err = |source: std::io::Error| PublishError::Write {
        path: path.to_path_buf(),
        source,
    };
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(write_err)?;

    let mut body = serde_json::to_string_pretty(schedule)?;
    body.push('\n');

    let mut temp_file = NamedTempFile::new_in(parent_dir).map_err(write_err)?;
    temp_file.write_all(body.as_bytes()).map_err(write_err)?;
    temp_file.persist(path).map_err(|err| write_err(err.error))?;

    info!(path = %path.display(), puzzles = schedule.puzzles.len(), "schedule published");
    Ok(PublishOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_duplicates_and_malformed_words() {
        let raw = ["coat", "Coat", "cat", "coat", "co-op", "capitol"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let (kept, dropped) = sanitize_words(raw);
        assert_eq!(kept, vec!["coat".to_string(), "capitol".to_string()]);
        assert_eq!(dropped, 4);
    }

    #[test]
    fn missing_frequency_file_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let table = load_frequency_table(&dir.path().join("absent.tsv")).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn frequency_file_without_zipf_column_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freq.tsv");
        fs::write(&path, "word\tcount\ncoat\t3\n").unwrap();
        assert!(matches!(
            load_frequency_table(&path),
            Err(FrequencyError::MissingColumn { column: "zipf" })
        ));
    }

    #[test]
    fn dictionary_json_is_parsed_and_sanitized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.json");
        fs::write(&path, r#"{"version":"d1","words":["coat","coat","ox"]}"#).unwrap();
        let dictionary = load_dictionary(&path).unwrap();
        assert_eq!(dictionary.version, "d1");
        assert_eq!(dictionary.words, vec!["coat".to_string()]);
    }

    #[test]
    fn unreadable_dictionary_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dictionary(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
