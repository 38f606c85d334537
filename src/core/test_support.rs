// Builders for stage tests that only care about keys, scores and guardrails.
use crate::core::scoring::rank_thresholds;
use crate::core::types::{
    AnnotatedCandidate, AssignedCandidate, CandidateMetrics, Difficulty, RawCandidate,
};

pub fn annotated(core_key: &str, score: f64, matches: &[Difficulty]) -> AnnotatedCandidate {
    AnnotatedCandidate {
        core_key: core_key.to_string(),
        candidate: RawCandidate {
            signature: "abcdefg".to_string(),
            center_letter: 'a',
            outer_letters: vec!['b', 'c', 'd', 'e', 'f', 'g'],
            valid_words: vec![],
            pangrams: vec![],
            max_score: 0,
            rank_thresholds: rank_thresholds(0),
            quality: 0,
        },
        metrics: CandidateMetrics {
            word_count: 0,
            max_score: 0,
            average_zipf: 0.0,
            common_word_share: 0.0,
            letter_rarity: 0.0,
            difficulty_score: score,
            guardrail_matches: matches.to_vec(),
        },
    }
}

pub fn assigned(core_key: &str, difficulty: Difficulty, matches: &[Difficulty]) -> AssignedCandidate {
    AssignedCandidate {
        annotated: annotated(core_key, 0.5, matches),
        difficulty,
    }
}
