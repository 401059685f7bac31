//! The curated wordlist, deduplicated.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use lexicon_types::{LexicalEntry, Origin};
use tracing::warn;

use crate::report::BaselineReport;

/// Trusted entries keyed by word. Authoritative on every conflict.
#[derive(Clone, Debug, Default)]
pub struct Baseline {
    entries: BTreeMap<String, LexicalEntry>,
}

impl Baseline {
    /// Collect curated entries. A repeated word keeps the record with the
    /// higher frequency (the first one on a tie). Repeats that disagree on
    /// category, gender or number are logged and counted separately.
    pub fn from_entries<I>(entries: I) -> (Self, BaselineReport)
    where
        I: IntoIterator<Item = LexicalEntry>,
    {
        let mut report = BaselineReport::default();
        let mut map: BTreeMap<String, LexicalEntry> = BTreeMap::new();

        for mut entry in entries {
            entry.origin = Origin::Curated;
            entry.frequency = entry.frequency.max(1);
            match map.entry(entry.word.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
                Entry::Occupied(mut slot) => {
                    report.duplicates += 1;
                    let kept = slot.get_mut();
                    if !kept.same_grammar(&entry) {
                        report.conflicting_duplicates += 1;
                        warn!(
                            word = %entry.word,
                            "curated duplicate disagrees: {}|{}|{} vs {}|{}|{}",
                            kept.category,
                            kept.gender,
                            kept.number,
                            entry.category,
                            entry.gender,
                            entry.number
                        );
                    }
                    if entry.frequency > kept.frequency {
                        *kept = entry;
                    }
                }
            }
        }

        report.entries = map.len();
        (Self { entries: map }, report)
    }

    pub fn get(&self, word: &str) -> Option<&LexicalEntry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> BTreeMap<String, LexicalEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexicon_types::{Category, Gender, Number};

    fn entry(word: &str, category: Category, frequency: u32) -> LexicalEntry {
        LexicalEntry {
            word: word.into(),
            category,
            gender: Gender::Unspecified,
            number: Number::Unspecified,
            lemma: String::new(),
            frequency,
            origin: Origin::Inferred,
        }
    }

    #[test]
    fn marks_entries_curated() {
        let (baseline, report) = Baseline::from_entries(vec![entry("casa", Category::Noun, 0)]);
        let casa = baseline.get("casa").unwrap();
        assert_eq!(casa.origin, Origin::Curated);
        assert_eq!(casa.frequency, 1);
        assert_eq!(report.entries, 1);
    }

    #[test]
    fn empty_input_gives_empty_baseline() {
        let (baseline, report) = Baseline::from_entries(Vec::new());
        assert!(baseline.is_empty());
        assert_eq!(report.entries, 0);
        let (baseline, _) = Baseline::from_entries(vec![entry("el", Category::Article, 3)]);
        assert!(!baseline.is_empty());
    }

    #[test]
    fn duplicate_keeps_higher_frequency() {
        let (baseline, report) = Baseline::from_entries(vec![
            entry("casa", Category::Noun, 10),
            entry("casa", Category::Noun, 500),
            entry("casa", Category::Noun, 500),
        ]);
        assert_eq!(baseline.len(), 1);
        assert_eq!(baseline.get("casa").unwrap().frequency, 500);
        assert_eq!(report.duplicates, 2);
        assert_eq!(report.conflicting_duplicates, 0);
    }

    #[test]
    fn conflicting_duplicate_is_flagged() {
        let (baseline, report) = Baseline::from_entries(vec![
            entry("vino", Category::Noun, 900),
            entry("vino", Category::Verb, 100),
        ]);
        assert_eq!(baseline.get("vino").unwrap().category, Category::Noun);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.conflicting_duplicates, 1);
    }
}
