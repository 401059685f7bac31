//! Counters returned by each stage in place of global statistics.

use serde::Serialize;

use crate::tag::{Analysis, RejectReason, VerbForm};

/// Outcome of turning analyzer records into candidates.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DecodeReport {
    pub files: usize,
    pub bad_lines: usize,
    pub kept_candidates: usize,
    pub infinitive_candidates: usize,
    pub participle_candidates: usize,
    pub skipped_malformed: usize,
    pub skipped_proper_nouns: usize,
    pub skipped_conjugated_verbs: usize,
    pub skipped_unknown_tags: usize,
}

impl DecodeReport {
    pub fn record_kept(&mut self, analysis: &Analysis) {
        self.kept_candidates += 1;
        match analysis.verb_form {
            Some(VerbForm::Infinitive) => self.infinitive_candidates += 1,
            Some(VerbForm::Participle) => self.participle_candidates += 1,
            None => {}
        }
    }

    pub fn record_rejected(&mut self, reason: RejectReason) {
        match reason {
            RejectReason::MalformedForm | RejectReason::MalformedTag => {
                self.skipped_malformed += 1
            }
            RejectReason::ProperNoun => self.skipped_proper_nouns += 1,
            RejectReason::ConjugatedVerb => self.skipped_conjugated_verbs += 1,
            RejectReason::UnknownPrefix => self.skipped_unknown_tags += 1,
        }
    }
}

/// Outcome of loading the curated baseline.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BaselineReport {
    pub entries: usize,
    pub duplicates: usize,
    /// Duplicates whose category, gender or number disagreed.
    pub conflicting_duplicates: usize,
}

/// Outcome of the merge and frequency assignment.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct MergeReport {
    pub unique_forms: usize,
    pub conflicts_with_curated: usize,
    pub filled_curated_lemmas: usize,
    pub added_from_analyzer: usize,
    pub skipped_unsupported_infinitives: usize,
    pub skipped_accent_typos: usize,
    pub corpus_max_raw: u64,
    pub freq_from_corpus: usize,
    pub freq_inferred_defaulted: usize,
    pub freq_curated_kept: usize,
    pub final_entries: usize,
}
