// src/core/assign.rs
use crate::core::types::{AnnotatedCandidate, AssignedCandidate, Difficulty};

/// Picks the allowed tier whose center is closest to `score`.
/// Earlier tiers win ties.
pub fn nearest_difficulty(score: f64, allowed: &[Difficulty]) -> Option<Difficulty> {
    let mut best: Option<(Difficulty, f64)> = None;
    for &difficulty in allowed {
        let distance = (score - difficulty.center()).abs();
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((difficulty, distance));
        }
    }
    best.map(|(difficulty, _)| difficulty)
}

/// Labels candidates by rank quantile of their difficulty score, deferring to
/// guardrails when the quantile label is not allowed.
///
/// The result is sorted by difficulty score, ties by core key.
pub fn assign_difficulties(candidates: &[AnnotatedCandidate]) -> Vec<AssignedCandidate> {
    let mut sorted: Vec<&AnnotatedCandidate> = candidates.iter().collect();
    sorted.sort_by(|a, b| {
        a.metrics
            .difficulty_score
            .total_cmp(&b.metrics.difficulty_score)
            .then_with(|| a.core_key.cmp(&b.core_key))
    });

    let total = sorted.len() as f64;
    let simple_cutoff = (total * Difficulty::Simple.target_ratio()).floor() as usize;
    let medium_cutoff =
        (total * (Difficulty::Simple.target_ratio() + Difficulty::Medium.target_ratio())).floor() as usize;

    sorted
        .into_iter()
        .enumerate()
        .filter_map(|(rank, candidate)| {
            let quantile = if rank < simple_cutoff {
                Difficulty::Simple
            } else if rank < medium_cutoff {
                Difficulty::Medium
            } else {
                Difficulty::Hard
            };
            let difficulty = if candidate.matches(quantile) {
                quantile
            } else {
                nearest_difficulty(candidate.metrics.difficulty_score, &candidate.metrics.guardrail_matches)?
            };
            Some(AssignedCandidate {
                annotated: candidate.clone(),
                difficulty,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::annotated;

    #[test]
    fn quantiles_respect_guardrails() {
        use Difficulty::*;
        let candidates = vec![
            annotated("a", 0.1, &[Simple]),
            annotated("b", 0.2, &[Simple, Medium]),
            annotated("c", 0.6, &[Medium]),
            annotated("d", 0.9, &[Hard]),
            annotated("e", 0.95, &[Hard]),
        ];

        let labels: Vec<Difficulty> = assign_difficulties(&candidates)
            .into_iter()
            .map(|c| c.difficulty)
            .collect();
        assert_eq!(labels, vec![Simple, Medium, Medium, Hard, Hard]);
    }

    #[test]
    fn ties_break_on_core_key() {
        use Difficulty::*;
        let all = [Simple, Medium, Hard];
        let candidates = vec![annotated("z", 0.5, &all), annotated("m", 0.5, &all), annotated("a", 0.5, &all)];

        let keys: Vec<String> = assign_difficulties(&candidates)
            .iter()
            .map(|c| c.core_key().to_string())
            .collect();
        assert_eq!(keys, vec!["a", "m", "z"]);
    }

    #[test]
    fn nearest_center_prefers_declaration_order_on_ties() {
        use Difficulty::*;
        assert_eq!(nearest_difficulty(0.9, &[Simple, Medium]), Some(Medium));
        assert_eq!(nearest_difficulty(0.375, &[Simple, Medium]), Some(Simple));
        assert_eq!(nearest_difficulty(0.1, &[Hard, Medium]), Some(Medium));
        assert_eq!(nearest_difficulty(0.5, &[]), None);
    }
}
