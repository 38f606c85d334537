//! End-to-end curation over a synthetic dictionary.
//!
//! Three disjoint seven-letter groups each contribute two pangrams plus every
//! sorted four- and five-letter combination of their letters. Every center
//! letter then sees 37 words worth 123 points, giving 21 candidates that all
//! sit inside the hard guardrail.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use hive_core::config::PipelineConfig;
use hive_core::core::engine::run;
use hive_core::core::frequency::FrequencyTable;
use hive_core::core::types::{Dictionary, Difficulty};
use hive_core::error::PipelineError;
use hive_core::persistence::{publish_schedule, PublishOutcome};
use hive_core::CurationEngine;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;

const GROUPS: [&str; 3] = ["abcdefg", "hijklmn", "opqrstu"];

fn combinations(letters: &[char], k: usize) -> Vec<String> {
    if k == 0 {
        return vec![String::new()];
    }
    if letters.len() < k {
        return Vec::new();
    }
    let mut out: Vec<String> = combinations(&letters[1..], k - 1)
        .into_iter()
        .map(|rest| format!("{}{rest}", letters[0]))
        .collect();
    out.extend(combinations(&letters[1..], k));
    out
}

fn synthetic_dictionary() -> Dictionary {
    let mut words = Vec::new();
    for group in GROUPS {
        let letters: Vec<char> = group.chars().collect();
        words.push(group.to_string());
        words.push(group.chars().rev().collect());
        words.extend(combinations(&letters, 4));
        words.extend(combinations(&letters, 5));
    }
    Dictionary {
        version: "synthetic-v1".to_string(),
        words,
    }
}

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

fn stamp(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, hour, 0, 0).unwrap()
}

#[test]
fn schedule_has_requested_length_and_consecutive_dates() {
    let engine = CurationEngine::new(synthetic_dictionary(), FrequencyTable::empty());
    let curation = engine.curate(start(), 10, stamp(0)).unwrap();

    assert_eq!(curation.report.base_candidates, 21);
    assert_eq!(curation.report.eligible, 21);
    assert_eq!(curation.schedule.puzzles.len(), 10);
    assert_eq!(curation.schedule.source_dictionary_version, "synthetic-v1");
    for (puzzle, date) in curation.schedule.puzzles.iter().zip(start().iter_days()) {
        assert_eq!(puzzle.date, date);
        assert_eq!(puzzle.id, date.to_string());
        assert_eq!(puzzle.valid_words.len(), 37);
        assert_eq!(puzzle.max_score, 123);
        assert_eq!(puzzle.rank_thresholds.queen_bee, 123);
    }
}

#[test]
fn every_word_belongs_to_its_puzzle_and_dictionary() {
    let dictionary = synthetic_dictionary();
    let known: HashSet<&str> = dictionary.words.iter().map(String::as_str).collect();
    let engine = CurationEngine::new(dictionary.clone(), FrequencyTable::empty());
    let curation = engine.curate(start(), 21, stamp(0)).unwrap();

    let mut seen_keys = HashSet::new();
    for puzzle in &curation.schedule.puzzles {
        let letters: HashSet<char> = std::iter::once(puzzle.center_letter)
            .chain(puzzle.outer_letters.iter().copied())
            .collect();
        assert_eq!(letters.len(), 7);
        assert_eq!(puzzle.dictionary_version, dictionary.version);
        for word in &puzzle.valid_words {
            assert!(word.contains(puzzle.center_letter), "{word}");
            assert!(word.chars().all(|c| letters.contains(&c)), "{word}");
            assert!(known.contains(word.as_str()), "{word}");
        }
        assert_eq!(puzzle.pangrams.len(), 2);

        let mut signature: Vec<char> = letters.into_iter().collect();
        signature.sort();
        assert!(seen_keys.insert((signature, puzzle.center_letter)));
    }
}

#[test]
fn engine_ignores_duplicate_and_uppercase_entries() {
    let mut dictionary = synthetic_dictionary();
    let clean_len = dictionary.words.len();
    let duplicates: Vec<String> = dictionary.words[..20].to_vec();
    dictionary.words.extend(duplicates);
    dictionary.words.push("ABCDEFG".to_string());
    dictionary.words.push("Bead".to_string());
    assert_eq!(dictionary.words.len(), clean_len + 22);

    let engine = CurationEngine::new(dictionary, FrequencyTable::empty());
    let curation = engine.curate(start(), 21, stamp(0)).unwrap();

    assert_eq!(curation.schedule.puzzles.len(), 21);
    for puzzle in &curation.schedule.puzzles {
        let unique: HashSet<&String> = puzzle.valid_words.iter().collect();
        assert_eq!(unique.len(), puzzle.valid_words.len());
        assert_eq!(puzzle.valid_words.len(), 37);
        assert_eq!(puzzle.max_score, 123);
    }
}

#[test]
fn identical_inputs_reproduce_identical_puzzles() {
    let engine = CurationEngine::new(synthetic_dictionary(), FrequencyTable::empty());
    let first = engine.curate(start(), 12, stamp(1)).unwrap();
    let second = engine.curate(start(), 12, stamp(2)).unwrap();
    assert_eq!(first.schedule.puzzles, second.schedule.puzzles);
    assert_ne!(first.schedule.generated_at, second.schedule.generated_at);
}

#[test]
fn oversized_request_publishes_every_eligible_candidate() {
    let engine = CurationEngine::new(synthetic_dictionary(), FrequencyTable::empty());
    let curation = engine.curate(start(), 60, stamp(0)).unwrap();
    assert_eq!(curation.report.published, 21);
    assert_eq!(curation.schedule.puzzles.len(), 21);
    assert!(curation
        .schedule
        .puzzles
        .iter()
        .all(|p| p.difficulty == Difficulty::Hard));
}

#[test]
fn frequency_scores_open_the_medium_tier() {
    let dictionary = synthetic_dictionary();
    let table: FrequencyTable = dictionary.words.iter().map(|w| (w.clone(), 4.0)).collect();
    let engine = CurationEngine::new(dictionary, table);
    let curation = engine.curate(start(), 10, stamp(0)).unwrap();
    let report = &curation.report;

    assert_eq!(report.published, 10);
    assert_eq!(report.difficulty_mix.total(), 10);
    assert_eq!(report.difficulty_mix.simple, 0);
    assert!(report.difficulty_mix.medium >= 5);
    assert_eq!(report.difficulty_mix.hard, 10 - report.difficulty_mix.medium);
    assert_eq!(report.shortages.simple, 3);
    assert_eq!(report.fallback, 3);
    assert_eq!(report.frequency_rows, 174);
}

#[test]
fn republishing_unchanged_content_leaves_the_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("puzzles.json");
    let engine = CurationEngine::new(synthetic_dictionary(), FrequencyTable::empty());

    let first = engine.curate(start(), 8, stamp(1)).unwrap();
    assert_eq!(publish_schedule(&path, &first.schedule).unwrap(), PublishOutcome::Written);
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.ends_with("}\n"));

    let again = engine.curate(start(), 8, stamp(5)).unwrap();
    assert_eq!(publish_schedule(&path, &again.schedule).unwrap(), PublishOutcome::Unchanged);
    assert_eq!(fs::read_to_string(&path).unwrap(), written);

    let shifted = engine.curate(start().succ_opt().unwrap(), 8, stamp(5)).unwrap();
    assert_eq!(publish_schedule(&path, &shifted.schedule).unwrap(), PublishOutcome::Written);
    assert_ne!(fs::read_to_string(&path).unwrap(), written);
}

#[test]
fn published_json_uses_camel_case_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("puzzles.json");
    let engine = CurationEngine::new(synthetic_dictionary(), FrequencyTable::empty());
    let curation = engine.curate(start(), 2, stamp(0)).unwrap();
    publish_schedule(&path, &curation.schedule).unwrap();

    let payload: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(payload["version"], "v1");
    assert_eq!(payload["sourceDictionaryVersion"], "synthetic-v1");
    assert!(payload["generatedAt"].as_str().unwrap().starts_with("2026-01-01T00:00:00"));
    let puzzle = &payload["puzzles"][0];
    assert_eq!(puzzle["id"], "2026-01-01");
    assert_eq!(puzzle["date"], "2026-01-01");
    assert_eq!(puzzle["difficulty"], "hard");
    assert_eq!(puzzle["centerLetter"].as_str().unwrap().len(), 1);
    assert_eq!(puzzle["outerLetters"].as_array().unwrap().len(), 6);
    assert_eq!(puzzle["dictionaryVersion"], "synthetic-v1");
    assert_eq!(puzzle["rankThresholds"]["queenBee"], 123);
    assert_eq!(puzzle["rankThresholds"]["goodStart"], 2);
}

fn config_in(dir: &std::path::Path) -> PipelineConfig {
    let dictionary_path = dir.join("dictionary.json");
    fs::write(&dictionary_path, serde_json::to_string(&synthetic_dictionary()).unwrap()).unwrap();
    PipelineConfig {
        dictionary_path,
        frequency_path: dir.join("wordfreq.tsv"),
        output_path: dir.join("puzzles.json"),
        start_date: start(),
        count: 6,
        dry_run: false,
    }
}

#[test]
fn run_publishes_once_then_skips() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let (curation, outcome) = run(&config, stamp(0)).unwrap();
    assert_eq!(outcome, Some(PublishOutcome::Written));
    assert_eq!(curation.report.frequency_rows, 0);

    let (_, outcome) = run(&config, stamp(3)).unwrap();
    assert_eq!(outcome, Some(PublishOutcome::Unchanged));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        dry_run: true,
        ..config_in(dir.path())
    };
    let (curation, outcome) = run(&config, stamp(0)).unwrap();
    assert_eq!(outcome, None);
    assert_eq!(curation.schedule.puzzles.len(), 6);
    assert!(!config.output_path.exists());
}

#[test]
fn malformed_frequency_header_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.frequency_path, "term\tzipf\ncoat\t4.1\n").unwrap();

    let err = run(&config, stamp(0)).unwrap_err();
    assert!(matches!(err, PipelineError::Frequency(_)));
    assert!(!config.output_path.exists());
}
