// src/core/scoring.rs
use crate::core::types::RankThresholds;
use std::collections::HashSet;

pub const MIN_WORD_LENGTH: usize = 4;
pub const PANGRAM_BONUS: u32 = 7;

/// Points a player earns for finding `word`.
/// Four-letter words score 1, longer words score their length, pangrams add a bonus.
pub fn word_score(word: &str, is_pangram: bool) -> u32 {
    let len = word.len();
    if len < MIN_WORD_LENGTH {
        return 0;
    }
    let base = if len == MIN_WORD_LENGTH { 1 } else { len as u32 };
    if is_pangram {
        base + PANGRAM_BONUS
    } else {
        base
    }
}

pub fn max_score(valid_words: &[String], pangrams: &HashSet<&str>) -> u32 {
    valid_words
        .iter()
        .map(|word| word_score(word, pangrams.contains(word.as_str())))
        .sum()
}

/// Rank breakpoints as floored fractions of the maximum score.
pub fn rank_thresholds(max_score: u32) -> RankThresholds {
    let at = |fraction: f64| (f64::from(max_score) * fraction).floor() as u32;
    RankThresholds {
        beginner: 0,
        good_start: at(0.02),
        moving_up: at(0.05),
        good: at(0.08),
        solid: at(0.15),
        nice: at(0.25),
        great: at(0.4),
        amazing: at(0.5),
        genius: at(0.7),
        queen_bee: max_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_score_follows_length_and_pangram_rules() {
        assert_eq!(word_score("able", false), 1);
        assert_eq!(word_score("alert", false), 5);
        assert_eq!(word_score("central", true), 14);
        assert_eq!(word_score("ale", false), 0);
    }

    #[test]
    fn max_score_sums_every_word() {
        let words: Vec<String> = ["able", "alert", "central"].iter().map(|w| w.to_string()).collect();
        let pangrams: HashSet<&str> = ["central"].into_iter().collect();
        assert_eq!(max_score(&words, &pangrams), 20);
    }

    #[test]
    fn thresholds_floor_each_fraction() {
        let thresholds = rank_thresholds(100);
        assert_eq!(thresholds.beginner, 0);
        assert_eq!(thresholds.good_start, 2);
        assert_eq!(thresholds.moving_up, 5);
        assert_eq!(thresholds.solid, 15);
        assert_eq!(thresholds.genius, 70);
        assert_eq!(thresholds.queen_bee, 100);

        let odd = rank_thresholds(37);
        assert_eq!(odd.good_start, 0);
        assert_eq!(odd.nice, 9);
        assert_eq!(odd.amazing, 18);
    }
}
