// src/core/schedule.rs
use crate::core::types::{AssignedCandidate, Difficulty, Puzzle};
use chrono::NaiveDate;
use std::collections::VecDeque;

/// Repeating difficulty pattern of the daily schedule.
pub const CADENCE: [Difficulty; 4] = [
    Difficulty::Medium,
    Difficulty::Simple,
    Difficulty::Medium,
    Difficulty::Hard,
];

/// Orders candidates along [`CADENCE`]. When the preferred tier is exhausted
/// the first non-empty tier in simple, medium, hard order is used instead.
/// Relative order within a tier is preserved.
pub fn interleave_for_schedule(candidates: Vec<AssignedCandidate>) -> Vec<AssignedCandidate> {
    let mut ordered = Vec::with_capacity(candidates.len());
    let mut groups: [VecDeque<AssignedCandidate>; 3] = Default::default();
    for candidate in candidates {
        groups[candidate.difficulty.index()].push_back(candidate);
    }

    for preferred in CADENCE.iter().cycle() {
        let next = groups[preferred.index()]
            .pop_front()
            .or_else(|| Difficulty::ALL.iter().find_map(|d| groups[d.index()].pop_front()));
        match next {
            Some(candidate) => ordered.push(candidate),
            None => break,
        }
    }
    ordered
}

/// Turns ordered candidates into puzzles dated `start`, `start + 1`, ...
pub fn schedule_puzzles(
    ordered: Vec<AssignedCandidate>,
    start: NaiveDate,
    dictionary_version: &str,
) -> Vec<Puzzle> {
    ordered
        .into_iter()
        .zip(start.iter_days())
        .map(|(assigned, date)| {
            let candidate = assigned.annotated.candidate;
            Puzzle {
                id: date.to_string(),
                date,
                center_letter: candidate.center_letter,
                outer_letters: candidate.outer_letters,
                dictionary_version: dictionary_version.to_string(),
                valid_words: candidate.valid_words,
                pangrams: candidate.pangrams,
                difficulty: assigned.difficulty,
                max_score: candidate.max_score,
                rank_thresholds: candidate.rank_thresholds,
            }
        })
        .collect()
}
