// src/core/types.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier of a puzzle.
///
/// Declaration order (simple, medium, hard) is significant: it is the
/// tie-break order for nearest-center assignment and the fallback order of the
/// schedule interleaver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Simple,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Simple, Difficulty::Medium, Difficulty::Hard];

    /// Share of a schedule this tier should occupy.
    pub fn target_ratio(self) -> f64 {
        match self {
            Difficulty::Simple => 0.3,
            Difficulty::Medium => 0.5,
            Difficulty::Hard => 0.2,
        }
    }

    /// Reference point on the difficulty-score axis.
    pub fn center(self) -> f64 {
        match self {
            Difficulty::Simple => 0.2,
            Difficulty::Medium => 0.55,
            Difficulty::Hard => 0.85,
        }
    }

    /// Buckets a shortage in this tier may borrow from, in priority order.
    pub fn borrow_sources(self) -> [Difficulty; 2] {
        match self {
            Difficulty::Simple => [Difficulty::Medium, Difficulty::Hard],
            Difficulty::Medium => [Difficulty::Simple, Difficulty::Hard],
            Difficulty::Hard => [Difficulty::Medium, Difficulty::Simple],
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Simple => "simple",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-difficulty values, indexed by [`Difficulty::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DifficultyCounts {
    pub simple: usize,
    pub medium: usize,
    pub hard: usize,
}

impl DifficultyCounts {
    pub fn get(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Simple => self.simple,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn get_mut(&mut self, difficulty: Difficulty) -> &mut usize {
        match difficulty {
            Difficulty::Simple => &mut self.simple,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    pub fn total(&self) -> usize {
        self.simple + self.medium + self.hard
    }

    pub fn tally<I: IntoIterator<Item = Difficulty>>(difficulties: I) -> Self {
        let mut counts = Self::default();
        for difficulty in difficulties {
            *counts.get_mut(difficulty) += 1;
        }
        counts
    }
}

/// Score breakpoints for the named progress ranks of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankThresholds {
    pub beginner: u32,
    pub good_start: u32,
    pub moving_up: u32,
    pub good: u32,
    pub solid: u32,
    pub nice: u32,
    pub great: u32,
    pub amazing: u32,
    pub genius: u32,
    pub queen_bee: u32,
}

/// One (signature, center letter) pair that passed the minimum word and
/// pangram counts.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCandidate {
    pub signature: String,
    pub center_letter: char,
    pub outer_letters: Vec<char>,
    pub valid_words: Vec<String>,
    pub pangrams: Vec<String>,
    pub max_score: u32,
    pub rank_thresholds: RankThresholds,
    /// Only consulted when two candidates share a core key.
    pub quality: u32,
}

impl RawCandidate {
    pub fn core_key(&self) -> String {
        format!("{}:{}", self.signature, self.center_letter)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CandidateMetrics {
    pub word_count: usize,
    pub max_score: u32,
    pub average_zipf: f64,
    pub common_word_share: f64,
    pub letter_rarity: f64,
    pub difficulty_score: f64,
    /// Tiers whose guardrails hold, in declaration order. Never empty.
    pub guardrail_matches: Vec<Difficulty>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedCandidate {
    pub core_key: String,
    pub candidate: RawCandidate,
    pub metrics: CandidateMetrics,
}

impl AnnotatedCandidate {
    pub fn matches(&self, difficulty: Difficulty) -> bool {
        self.metrics.guardrail_matches.contains(&difficulty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignedCandidate {
    pub annotated: AnnotatedCandidate,
    pub difficulty: Difficulty,
}

impl AssignedCandidate {
    pub fn core_key(&self) -> &str {
        &self.annotated.core_key
    }

    pub fn matches(&self, difficulty: Difficulty) -> bool {
        self.annotated.matches(difficulty)
    }

    /// Returns a copy carrying a different difficulty label.
    pub fn relabeled(&self, difficulty: Difficulty) -> Self {
        Self {
            annotated: self.annotated.clone(),
            difficulty,
        }
    }
}

/// Source word list. Words are unique, lowercase a-z, length >= 4.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    pub version: String,
    pub words: Vec<String>,
}

/// A scheduled daily puzzle as published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub id: String,
    pub date: NaiveDate,
    pub center_letter: char,
    pub outer_letters: Vec<char>,
    pub dictionary_version: String,
    pub valid_words: Vec<String>,
    pub pangrams: Vec<String>,
    pub difficulty: Difficulty,
    pub max_score: u32,
    pub rank_thresholds: RankThresholds,
}

pub const SCHEDULE_FORMAT_VERSION: &str = "v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleSchedule {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub source_dictionary_version: String,
    pub puzzles: Vec<Puzzle>,
}
