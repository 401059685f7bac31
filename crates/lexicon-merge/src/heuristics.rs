//! Noise filters for analyzer-only words.
//!
//! Both predicates are pure: they see one candidate plus the context needed to
//! judge it, and the merge decides what to do with the answer.

use lexicon_types::Category;

use crate::frequency::FrequencyTable;

/// Floor for the accented verb's raw count.
pub const ACCENT_TYPO_MIN_COUNT: u64 = 2000;
/// How many times more frequent the accented verb must be than the bare word.
pub const ACCENT_TYPO_RATIO: u64 = 5;

const ACCENTED_VOWELS: [char; 5] = ['á', 'é', 'í', 'ó', 'ú'];

/// When an accented verb is frequent enough to explain a bare form as a typo.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AccentTypoThreshold {
    pub min_count: u64,
    pub ratio: u64,
}

impl Default for AccentTypoThreshold {
    fn default() -> Self {
        Self {
            min_count: ACCENT_TYPO_MIN_COUNT,
            ratio: ACCENT_TYPO_RATIO,
        }
    }
}

impl AccentTypoThreshold {
    pub fn is_met(&self, variant_raw: u64, word_raw: u64) -> bool {
        variant_raw >= self.min_count.max(word_raw.saturating_mul(self.ratio))
    }
}

/// An inferred infinitive the corpus has never seen.
pub fn is_unsupported_infinitive(word: &str, category: Category, corpus: &FrequencyTable) -> bool {
    category == Category::Verb && !corpus.contains(word)
}

fn acute(c: char) -> Option<char> {
    match c {
        'a' => Some('á'),
        'e' => Some('é'),
        'i' => Some('í'),
        'o' => Some('ó'),
        'u' => Some('ú'),
        _ => None,
    }
}

/// Find the curated verb that `word` most likely is with its accent dropped.
///
/// Only open-class words (noun, adjective, adverb, other) without any accented
/// vowel are considered. Each bare vowel is accented in turn; the first
/// variant for which `is_curated_verb` holds and whose raw count meets
/// `threshold` is returned. The callback keeps this function ignorant of how
/// the baseline is stored.
pub fn accented_verb_variant<F>(
    word: &str,
    category: Category,
    is_curated_verb: F,
    corpus: &FrequencyTable,
    threshold: AccentTypoThreshold,
) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    if !matches!(
        category,
        Category::Noun | Category::Adjective | Category::Adverb | Category::Other
    ) {
        return None;
    }
    if word.chars().any(|c| ACCENTED_VOWELS.contains(&c)) {
        return None;
    }

    let word_raw = corpus.raw_or_zero(word);
    let chars: Vec<char> = word.chars().collect();
    for (idx, ch) in chars.iter().enumerate() {
        let Some(accented) = acute(*ch) else {
            continue;
        };
        let variant: String = chars
            .iter()
            .enumerate()
            .map(|(i, c)| if i == idx { accented } else { *c })
            .collect();
        if !is_curated_verb(&variant) {
            continue;
        }
        if threshold.is_met(corpus.raw_or_zero(&variant), word_raw) {
            return Some(variant);
        }
    }
    None
}
