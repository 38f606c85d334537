// src/core/validator.rs
use crate::core::candidates::letter_mask;
use crate::core::types::{Dictionary, Puzzle};
use crate::error::ScheduleError;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Checks one puzzle against the dictionary it claims to be built from.
pub fn verify_puzzle(puzzle: &Puzzle, dictionary: &Dictionary, words: &HashSet<&str>) -> Result<(), ScheduleError> {
    let date = puzzle.id.clone();

    if puzzle.dictionary_version != dictionary.version {
        return Err(ScheduleError::VersionMismatch {
            date,
            found: puzzle.dictionary_version.clone(),
            expected: dictionary.version.clone(),
        });
    }

    let outer: String = puzzle.outer_letters.iter().collect();
    let outer_mask = letter_mask(&outer);
    let center_mask = letter_mask(&puzzle.center_letter.to_string());
    if !puzzle.center_letter.is_ascii_lowercase()
        || puzzle.outer_letters.len() != 6
        || outer_mask.count_ones() != 6
        || outer_mask & center_mask != 0
    {
        return Err(ScheduleError::LetterSet { date });
    }
    let puzzle_mask = outer_mask | center_mask;

    for word in &puzzle.valid_words {
        if !word.contains(puzzle.center_letter) {
            return Err(ScheduleError::MissingCenter {
                date,
                word: word.clone(),
            });
        }
        if !word.bytes().all(|b| b.is_ascii_lowercase()) || letter_mask(word) & !puzzle_mask != 0 {
            return Err(ScheduleError::ForeignLetter {
                date,
                word: word.clone(),
            });
        }
        if !words.contains(word.as_str()) {
            return Err(ScheduleError::UnknownWord {
                date,
                word: word.clone(),
                version: dictionary.version.clone(),
            });
        }
    }

    for pangram in &puzzle.pangrams {
        if letter_mask(pangram) != puzzle_mask || !puzzle.valid_words.contains(pangram) {
            return Err(ScheduleError::BadPangram {
                date,
                word: pangram.clone(),
            });
        }
    }

    Ok(())
}

/// Verifies every puzzle and that dates run consecutively from `start`.
pub fn verify_schedule(puzzles: &[Puzzle], start: NaiveDate, dictionary: &Dictionary) -> Result<(), ScheduleError> {
    let words: HashSet<&str> = dictionary.words.iter().map(String::as_str).collect();
    for (position, (puzzle, expected)) in puzzles.iter().zip(start.iter_days()).enumerate() {
        if puzzle.date != expected || puzzle.id != expected.to_string() {
            return Err(ScheduleError::DateGap {
                position,
                found: puzzle.id.clone(),
                expected: expected.to_string(),
            });
        }
        verify_puzzle(puzzle, dictionary, &words)?;
    }
    Ok(())
}
