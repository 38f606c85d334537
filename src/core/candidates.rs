// src/core/candidates.rs
use crate::core::scoring::{max_score, rank_thresholds};
use crate::core::types::RawCandidate;
use std::collections::{HashMap, HashSet};
use tracing::debug;

pub const MIN_WORDS: usize = 12;
pub const MIN_PANGRAMS: usize = 1;
pub const PUZZLE_LETTERS: u32 = 7;

/// Bit set of the distinct letters a-z in a word.
pub type LetterMask = u32;

pub fn letter_mask(word: &str) -> LetterMask {
    word.bytes()
        .filter(u8::is_ascii_lowercase)
        .fold(0, |mask, byte| mask | 1u32 << (byte - b'a'))
}

fn mask_letters(mask: LetterMask) -> Vec<char> {
    (0..26u8)
        .filter(|&bit| mask & (1u32 << bit) != 0)
        .map(|bit| char::from(b'a' + bit))
        .collect()
}

fn letter_bit(letter: char) -> LetterMask {
    1u32 << (letter as u8 - b'a')
}

/// Dictionary grouped by letter set.
///
/// Every word whose letters fall inside a seven-letter signature has a mask
/// that is one of the signature's 127 non-empty subsets, so looking those
/// subsets up replaces a scan of the whole word list per candidate.
pub struct WordIndex<'a> {
    by_mask: HashMap<LetterMask, Vec<&'a str>>,
    signatures: Vec<LetterMask>,
}

impl<'a> WordIndex<'a> {
    pub fn new(words: &'a [String]) -> Self {
        let mut by_mask: HashMap<LetterMask, Vec<&'a str>> = HashMap::new();
        let mut signatures = Vec::new();
        let mut seen = HashSet::new();

        for word in words {
            let mask = letter_mask(word);
            by_mask.entry(mask).or_default().push(word.as_str());

            if word.len() >= PUZZLE_LETTERS as usize
                && mask.count_ones() == PUZZLE_LETTERS
                && seen.insert(mask)
            {
                signatures.push(mask);
            }
        }

        Self { by_mask, signatures }
    }

    /// Distinct seven-letter sets, in order of first appearance.
    pub fn signatures(&self) -> &[LetterMask] {
        &self.signatures
    }

    /// All words using only letters of `signature`, sorted.
    pub fn words_within(&self, signature: LetterMask) -> Vec<(&'a str, LetterMask)> {
        let mut words = Vec::new();
        // Walk every non-empty subset of the signature.
        let mut subset = signature;
        while subset != 0 {
            if let Some(bucket) = self.by_mask.get(&subset) {
                words.extend(bucket.iter().map(|word| (*word, subset)));
            }
            subset = (subset - 1) & signature;
        }
        words.sort_unstable_by(|a, b| a.0.cmp(b.0));
        words
    }
}

/// Enumerates every eligible (signature, center letter) candidate.
///
/// Output is ordered by quality descending, ties by core key.
pub fn build_candidates(words: &[String]) -> Vec<RawCandidate> {
    let index = WordIndex::new(words);
    let mut candidates = Vec::new();

    for &signature in index.signatures() {
        let letters = mask_letters(signature);
        let signature_key: String = letters.iter().collect();
        let within = index.words_within(signature);

        for &center in &letters {
            let center_bit = letter_bit(center);
            let valid: Vec<(&str, LetterMask)> = within
                .iter()
                .copied()
                .filter(|(_, mask)| mask & center_bit != 0)
                .collect();
            let pangram_count = valid.iter().filter(|(_, mask)| *mask == signature).count();

            if valid.len() < MIN_WORDS || pangram_count < MIN_PANGRAMS {
                continue;
            }

            let valid_words: Vec<String> = valid.iter().map(|(word, _)| word.to_string()).collect();
            let pangrams: Vec<String> = valid
                .iter()
                .filter(|(_, mask)| *mask == signature)
                .map(|(word, _)| word.to_string())
                .collect();
            let pangram_set: HashSet<&str> = pangrams.iter().map(String::as_str).collect();
            let score = max_score(&valid_words, &pangram_set);
            let quality = score + 3 * valid_words.len() as u32 + 10 * pangrams.len() as u32;

            candidates.push(RawCandidate {
                signature: signature_key.clone(),
                center_letter: center,
                outer_letters: letters.iter().copied().filter(|&l| l != center).collect(),
                valid_words,
                pangrams,
                max_score: score,
                rank_thresholds: rank_thresholds(score),
                quality,
            });
        }
    }

    candidates.sort_by_cached_key(|c| (std::cmp::Reverse(c.quality), c.core_key()));

    let mut seen = HashSet::new();
    candidates.retain(|c| seen.insert(c.core_key()));

    debug!(
        signatures = index.signatures().len(),
        candidates = candidates.len(),
        "enumerated puzzle candidates"
    );
    candidates
}
