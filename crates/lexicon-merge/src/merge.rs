//! Three-way merge of curated entries, analyzer candidates and corpus counts.

use std::collections::BTreeMap;

use lexicon_types::{Candidate, Category, LexicalEntry, Origin};
use tracing::{debug, info};

use crate::baseline::Baseline;
use crate::frequency::FrequencyTable;
use crate::heuristics::{AccentTypoThreshold, accented_verb_variant, is_unsupported_infinitive};
use crate::report::MergeReport;
use crate::select::{CandidatesByWord, select_best};

/// Final dictionary keyed (and therefore sorted) by word.
pub type Lexicon = BTreeMap<String, LexicalEntry>;

#[derive(Clone, Copy, Debug, Default)]
pub struct MergeOptions {
    pub accent_typo: AccentTypoThreshold,
}

/// Why an analyzer-only word stayed out of the dictionary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Rejection {
    UnsupportedInfinitive,
    AccentTypo { verb: String },
}

/// Copy the candidate's lemma into a curated entry that has none.
///
/// Category, gender, number and frequency are never touched.
pub fn fill_lemma(entry: &mut LexicalEntry, candidate: &Candidate) -> bool {
    if entry.lemma.is_empty() && !candidate.lemma.is_empty() {
        entry.lemma = candidate.lemma.clone();
        true
    } else {
        false
    }
}

/// Run both noise filters on a candidate whose word is not curated.
pub fn screen_inferred(
    candidate: &Candidate,
    lexicon: &Lexicon,
    corpus: &FrequencyTable,
    options: &MergeOptions,
) -> Result<(), Rejection> {
    if is_unsupported_infinitive(&candidate.word, candidate.category, corpus) {
        return Err(Rejection::UnsupportedInfinitive);
    }
    let is_curated_verb = |w: &str| {
        lexicon
            .get(w)
            .is_some_and(|e| e.origin == Origin::Curated && e.category == Category::Verb)
    };
    match accented_verb_variant(
        &candidate.word,
        candidate.category,
        is_curated_verb,
        corpus,
        options.accent_typo,
    ) {
        Some(verb) => Err(Rejection::AccentTypo { verb }),
        None => Ok(()),
    }
}

/// Merge analyzer candidates into the curated baseline and assign final
/// frequencies.
///
/// Curated words keep their grammar and may only gain a lemma. New words pass
/// through [`screen_inferred`] and enter with a placeholder frequency of 1
/// before [`assign_frequencies`] runs.
pub fn merge(
    baseline: Baseline,
    candidates: &CandidatesByWord,
    corpus: &FrequencyTable,
    options: &MergeOptions,
) -> (Lexicon, MergeReport) {
    let mut report = MergeReport::default();
    let mut lexicon = baseline.into_entries();

    for (word, group) in candidates {
        let Some(best) = select_best(group) else {
            continue;
        };
        report.unique_forms += 1;

        if let Some(entry) = lexicon.get_mut(word) {
            report.conflicts_with_curated += 1;
            if fill_lemma(entry, best) {
                report.filled_curated_lemmas += 1;
            }
            continue;
        }

        match screen_inferred(best, &lexicon, corpus, options) {
            Ok(()) => {
                lexicon.insert(
                    word.clone(),
                    LexicalEntry {
                        word: word.clone(),
                        category: best.category,
                        gender: best.gender,
                        number: best.number,
                        lemma: best.lemma.clone(),
                        frequency: 1,
                        origin: Origin::Inferred,
                    },
                );
                report.added_from_analyzer += 1;
            }
            Err(Rejection::UnsupportedInfinitive) => {
                debug!(%word, "dropping infinitive absent from corpus");
                report.skipped_unsupported_infinitives += 1;
            }
            Err(Rejection::AccentTypo { verb }) => {
                debug!(%word, %verb, "dropping probable accent-stripped verb");
                report.skipped_accent_typos += 1;
            }
        }
    }

    assign_frequencies(&mut lexicon, corpus, &mut report);
    report.final_entries = lexicon.len();
    info!(
        "merged {} forms: {} added, {} curated conflicts, {} final entries",
        report.unique_forms, report.added_from_analyzer, report.conflicts_with_curated, report.final_entries
    );
    (lexicon, report)
}

/// Corpus words take their normalized score. Everything else keeps what it
/// has, with a floor of 1.
pub fn assign_frequencies(lexicon: &mut Lexicon, corpus: &FrequencyTable, report: &mut MergeReport) {
    report.corpus_max_raw = corpus.max_raw();
    for (word, entry) in lexicon.iter_mut() {
        if let Some(score) = corpus.score(word) {
            entry.frequency = score;
            report.freq_from_corpus += 1;
        } else if entry.origin == Origin::Inferred {
            entry.frequency = 1;
            report.freq_inferred_defaulted += 1;
        } else {
            entry.frequency = entry.frequency.max(1);
            report.freq_curated_kept += 1;
        }
    }
}
