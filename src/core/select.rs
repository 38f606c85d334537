// src/core/select.rs
use crate::core::seed::seeded_key;
use crate::core::types::{AssignedCandidate, Difficulty, DifficultyCounts};
use std::collections::VecDeque;
use tracing::{debug, warn};

const FALLBACK_SALT: &str = "fallback";

/// Per-tier quotas for `total` puzzles. Hard absorbs rounding so the three
/// always sum to `total`.
pub fn difficulty_targets(total: usize) -> DifficultyCounts {
    let share = |d: Difficulty| (total as f64 * d.target_ratio()).round() as usize;
    let simple = share(Difficulty::Simple);
    let medium = share(Difficulty::Medium);
    DifficultyCounts {
        simple,
        medium,
        hard: total.saturating_sub(simple + medium),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Selected simple, medium and hard candidates, then fallback fills.
    pub candidates: Vec<AssignedCandidate>,
    pub targets: DifficultyCounts,
    /// Quota left unmet after borrowing.
    pub shortages: DifficultyCounts,
    pub borrowed: usize,
    pub fallback: usize,
}

impl Selection {
    pub fn difficulty_mix(&self) -> DifficultyCounts {
        DifficultyCounts::tally(self.candidates.iter().map(|c| c.difficulty))
    }
}

type Buckets<T> = [T; 3];

/// Removes the first leftover, in borrowing priority, whose guardrails admit
/// `needed`. Leftovers that don't match stay in their pool for the fallback.
fn borrow(leftovers: &mut Buckets<VecDeque<AssignedCandidate>>, needed: Difficulty) -> Option<AssignedCandidate> {
    for source in needed.borrow_sources() {
        let pool = &mut leftovers[source.index()];
        if let Some(pos) = pool.iter().position(|c| c.matches(needed)) {
            return pool.remove(pos).map(|c| c.relabeled(needed));
        }
    }
    None
}

/// Chooses up to `count` candidates honoring the 30/50/20 quota.
///
/// Ordering within each tier comes from hashing `seed`, so the same
/// candidates, count and seed always give the same selection.
pub fn select_by_quota(candidates: &[AssignedCandidate], count: usize, seed: &str) -> Selection {
    let targets = difficulty_targets(count);

    let mut buckets: Buckets<Vec<AssignedCandidate>> = Default::default();
    for candidate in candidates {
        buckets[candidate.difficulty.index()].push(candidate.clone());
    }

    let mut selected: Buckets<Vec<AssignedCandidate>> = Default::default();
    let mut leftovers: Buckets<VecDeque<AssignedCandidate>> = Default::default();
    for difficulty in Difficulty::ALL {
        let mut bucket = std::mem::take(&mut buckets[difficulty.index()]);
        bucket.sort_by_cached_key(|c| seeded_key(seed, difficulty.as_str(), c.core_key()));
        let take = targets.get(difficulty).min(bucket.len());
        leftovers[difficulty.index()] = bucket.split_off(take).into();
        selected[difficulty.index()] = bucket;
    }

    let mut shortages = DifficultyCounts::default();
    let mut borrowed = 0;
    for difficulty in Difficulty::ALL {
        let shortage = shortages.get_mut(difficulty);
        *shortage = targets.get(difficulty) - selected[difficulty.index()].len();
        while *shortage > 0 {
            let Some(candidate) = borrow(&mut leftovers, difficulty) else {
                break;
            };
            selected[difficulty.index()].push(candidate);
            *shortage -= 1;
            borrowed += 1;
        }
    }

    for difficulty in Difficulty::ALL {
        let missing = shortages.get(difficulty);
        if missing > 0 {
            warn!(%difficulty, missing, "unable to fully satisfy difficulty quota");
        }
    }

    let mut chosen: Vec<AssignedCandidate> = selected.into_iter().flatten().collect();
    let mut fallback = 0;
    if chosen.len() < count {
        let mut pool: Vec<AssignedCandidate> = leftovers.into_iter().flatten().collect();
        pool.sort_by_cached_key(|c| seeded_key(seed, FALLBACK_SALT, c.core_key()));
        fallback = pool.len().min(count - chosen.len());
        chosen.extend(pool.into_iter().take(fallback));
    }
    chosen.truncate(count);

    if chosen.len() < count {
        warn!(
            requested = count,
            available = chosen.len(),
            "not enough eligible candidates for the requested schedule"
        );
    }
    debug!(selected = chosen.len(), borrowed, fallback, "quota selection complete");

    Selection {
        candidates: chosen,
        targets,
        shortages,
        borrowed,
        fallback,
    }
}
