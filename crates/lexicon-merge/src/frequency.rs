//! Log-scaled frequency scores anchored to the corpus maximum.

use std::collections::HashMap;

use crate::MergeError;

pub const MIN_SCORE: u32 = 1;
pub const MAX_SCORE: u32 = 1000;

/// Map a raw count onto `[MIN_SCORE, MAX_SCORE]` relative to `max_raw`.
///
/// Counts of 0 or 1 score the minimum. Otherwise the score is
/// `round(1000 * log10(count) / log10(max_raw))`, clamped.
pub fn normalize_count(count: u64, max_raw: u64) -> u32 {
    if count <= 1 || max_raw <= 1 {
        return MIN_SCORE;
    }
    let value = (count as f64).log10() / (max_raw as f64).log10() * f64::from(MAX_SCORE);
    value.round().clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)) as u32
}

/// Raw corpus counts plus their normalized scores. Read-only once built.
#[derive(Clone, Debug)]
pub struct FrequencyTable {
    raw: HashMap<String, u64>,
    scores: HashMap<String, u32>,
    max_raw: u64,
}

impl FrequencyTable {
    /// Build from `(word, count)` pairs. Zero counts are ignored and a word
    /// seen twice keeps its higher count.
    ///
    /// Fails with [`MergeError::EmptyCorpus`] when no positive count remains.
    pub fn from_counts<I>(counts: I) -> Result<Self, MergeError>
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let mut raw: HashMap<String, u64> = HashMap::new();
        for (word, count) in counts {
            if count == 0 || word.is_empty() {
                continue;
            }
            let slot = raw.entry(word).or_insert(0);
            if count > *slot {
                *slot = count;
            }
        }

        let max_raw = raw.values().copied().max().unwrap_or(0);
        if max_raw == 0 {
            return Err(MergeError::EmptyCorpus);
        }

        let scores = raw
            .iter()
            .map(|(word, count)| (word.clone(), normalize_count(*count, max_raw)))
            .collect();

        Ok(Self {
            raw,
            scores,
            max_raw,
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.raw.contains_key(word)
    }

    /// Raw count, if the word is in the corpus.
    pub fn raw(&self, word: &str) -> Option<u64> {
        self.raw.get(word).copied()
    }

    /// Raw count, reading absent words as 0.
    pub fn raw_or_zero(&self, word: &str) -> u64 {
        self.raw(word).unwrap_or(0)
    }

    pub fn score(&self, word: &str) -> Option<u32> {
        self.scores.get(word).copied()
    }

    pub fn max_raw(&self) -> u64 {
        self.max_raw
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
