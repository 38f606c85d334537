// src/core/annotate.rs
use crate::core::frequency::FrequencyTable;
use crate::core::types::{AnnotatedCandidate, CandidateMetrics, Difficulty, RawCandidate};
use tracing::debug;

/// Zipf value at or above which a word counts as common.
pub const COMMON_WORD_ZIPF: f64 = 4.5;

const WEIGHT_LETTER_RARITY: f64 = 0.30;
const WEIGHT_ZIPF: f64 = 0.30;
const WEIGHT_SCORE: f64 = 0.20;
const WEIGHT_COUNT: f64 = 0.15;
const WEIGHT_OBVIOUSNESS: f64 = 0.05;

/// Acceptance ranges for one difficulty tier. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guardrail {
    pub min_word_count: usize,
    pub max_word_count: usize,
    pub min_max_score: u32,
    pub max_max_score: u32,
    pub min_average_zipf: Option<f64>,
    pub max_average_zipf: Option<f64>,
}

impl Guardrail {
    pub fn admits(&self, word_count: usize, max_score: u32, average_zipf: f64) -> bool {
        (self.min_word_count..=self.max_word_count).contains(&word_count)
            && (self.min_max_score..=self.max_max_score).contains(&max_score)
            && self.min_average_zipf.map_or(true, |min| average_zipf >= min)
            && self.max_average_zipf.map_or(true, |max| average_zipf <= max)
    }
}

// Adjacent tiers overlap on purpose; treat these as tuning knobs.
pub const SIMPLE_GUARDRAIL: Guardrail = Guardrail {
    min_word_count: 35,
    max_word_count: 85,
    min_max_score: 170,
    max_max_score: 250,
    min_average_zipf: Some(4.2),
    max_average_zipf: None,
};

pub const MEDIUM_GUARDRAIL: Guardrail = Guardrail {
    min_word_count: 24,
    max_word_count: 65,
    min_max_score: 120,
    max_max_score: 210,
    min_average_zipf: Some(3.8),
    max_average_zipf: Some(4.4),
};

pub const HARD_GUARDRAIL: Guardrail = Guardrail {
    min_word_count: 16,
    max_word_count: 45,
    min_max_score: 90,
    max_max_score: 170,
    min_average_zipf: None,
    max_average_zipf: Some(4.0),
};

pub fn guardrail(difficulty: Difficulty) -> &'static Guardrail {
    match difficulty {
        Difficulty::Simple => &SIMPLE_GUARDRAIL,
        Difficulty::Medium => &MEDIUM_GUARDRAIL,
        Difficulty::Hard => &HARD_GUARDRAIL,
    }
}

/// Share of dictionary words containing each letter a-z at least once.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterFrequency([f64; 26]);

impl LetterFrequency {
    pub fn from_words(words: &[String]) -> Self {
        let mut counts = [0usize; 26];
        for word in words {
            let mask = crate::core::candidates::letter_mask(word);
            for (bit, count) in counts.iter_mut().enumerate() {
                if mask & (1u32 << bit) != 0 {
                    *count += 1;
                }
            }
        }
        let total = words.len().max(1) as f64;
        Self(counts.map(|count| count as f64 / total))
    }

    pub fn get(&self, letter: char) -> f64 {
        if letter.is_ascii_lowercase() {
            self.0[(letter as u8 - b'a') as usize]
        } else {
            0.0
        }
    }
}

/// Maps `value` into [0, 1] relative to `[min, max]`; a degenerate range gives 0.5.
pub fn normalize01(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() || !min.is_finite() || !max.is_finite() || max <= min {
        return 0.5;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy)]
struct RawMetrics {
    word_count: f64,
    max_score: f64,
    average_zipf: f64,
    common_word_share: f64,
    letter_rarity: f64,
}

#[derive(Debug, Clone, Copy)]
struct Range {
    min: f64,
    max: f64,
}

impl Range {
    fn over(values: impl Iterator<Item = f64>) -> Self {
        values.fold(
            Range {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |range, v| Range {
                min: range.min.min(v),
                max: range.max.max(v),
            },
        )
    }

    fn normalize(&self, value: f64) -> f64 {
        normalize01(value, self.min, self.max)
    }
}

fn raw_metrics(candidate: &RawCandidate, letters: &LetterFrequency, table: &FrequencyTable) -> RawMetrics {
    let signature_letters: Vec<char> = std::iter::once(candidate.center_letter)
        .chain(candidate.outer_letters.iter().copied())
        .collect();
    let letter_rarity = signature_letters
        .iter()
        .map(|&letter| 1.0 - letters.get(letter))
        .sum::<f64>()
        / signature_letters.len().max(1) as f64;

    let mut zipf_total = 0.0;
    let mut zipf_found = 0usize;
    let mut common = 0usize;
    for zipf in candidate.valid_words.iter().filter_map(|word| table.zipf(word)) {
        zipf_total += zipf;
        zipf_found += 1;
        if zipf >= COMMON_WORD_ZIPF {
            common += 1;
        }
    }

    let average_zipf = if zipf_found > 0 {
        zipf_total / zipf_found as f64
    } else {
        table.min_zipf()
    };
    let common_word_share = if candidate.valid_words.is_empty() {
        0.0
    } else {
        common as f64 / candidate.valid_words.len() as f64
    };

    RawMetrics {
        word_count: candidate.valid_words.len() as f64,
        max_score: f64::from(candidate.max_score),
        average_zipf,
        common_word_share,
        letter_rarity,
    }
}

/// Scores every candidate against the whole population and keeps those that
/// satisfy at least one difficulty guardrail.
///
/// Normalization bounds come from all of `candidates`, including ones later
/// dropped for matching no guardrail.
pub fn annotate_candidates(
    candidates: &[RawCandidate],
    words: &[String],
    table: &FrequencyTable,
) -> Vec<AnnotatedCandidate> {
    let letters = LetterFrequency::from_words(words);
    let raw: Vec<RawMetrics> = candidates
        .iter()
        .map(|candidate| raw_metrics(candidate, &letters, table))
        .collect();

    let count_range = Range::over(raw.iter().map(|m| m.word_count));
    let score_range = Range::over(raw.iter().map(|m| m.max_score));
    let zipf_range = Range::over(raw.iter().map(|m| m.average_zipf));
    let common_range = Range::over(raw.iter().map(|m| m.common_word_share));
    let rarity_range = Range::over(raw.iter().map(|m| m.letter_rarity));

    let annotated: Vec<AnnotatedCandidate> = candidates
        .iter()
        .zip(&raw)
        .filter_map(|(candidate, m)| {
            let letter_rarity = rarity_range.normalize(m.letter_rarity);
            let zipf_hardness = 1.0 - zipf_range.normalize(m.average_zipf);
            let score_hardness = 1.0 - score_range.normalize(m.max_score);
            let count_hardness = 1.0 - count_range.normalize(m.word_count);
            let obviousness_hardness = 1.0 - common_range.normalize(m.common_word_share);

            let difficulty_score = letter_rarity * WEIGHT_LETTER_RARITY
                + zipf_hardness * WEIGHT_ZIPF
                + score_hardness * WEIGHT_SCORE
                + count_hardness * WEIGHT_COUNT
                + obviousness_hardness * WEIGHT_OBVIOUSNESS;

            let word_count = candidate.valid_words.len();
            let guardrail_matches: Vec<Difficulty> = Difficulty::ALL
                .into_iter()
                .filter(|&d| guardrail(d).admits(word_count, candidate.max_score, m.average_zipf))
                .collect();
            if guardrail_matches.is_empty() {
                return None;
            }

            Some(AnnotatedCandidate {
                core_key: candidate.core_key(),
                candidate: candidate.clone(),
                metrics: CandidateMetrics {
                    word_count,
                    max_score: candidate.max_score,
                    average_zipf: m.average_zipf,
                    common_word_share: m.common_word_share,
                    letter_rarity,
                    difficulty_score,
                    guardrail_matches,
                },
            })
        })
        .collect();

    debug!(
        scored = candidates.len(),
        within_guardrails = annotated.len(),
        "annotated candidates"
    );
    annotated
}
