//! Grouping analyzer candidates by form and picking one per form.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use lexicon_types::Candidate;

use crate::report::DecodeReport;
use crate::tag::parse_candidate;

/// Candidates keyed by word form, in sorted order.
pub type CandidatesByWord = BTreeMap<String, Vec<Candidate>>;

/// Accumulates decoded analyzer records.
#[derive(Debug, Default)]
pub struct CandidateSet {
    by_word: CandidatesByWord,
    report: DecodeReport,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one `form lemma tag` record. Returns whether a candidate was kept.
    pub fn add_record(&mut self, form: &str, lemma: &str, tag: &str, source_file: &str) -> bool {
        match parse_candidate(form, lemma, tag, source_file) {
            Ok((candidate, analysis)) => {
                self.report.record_kept(&analysis);
                self.by_word
                    .entry(candidate.word.clone())
                    .or_default()
                    .push(candidate);
                true
            }
            Err(reason) => {
                self.report.record_rejected(reason);
                false
            }
        }
    }

    /// Count a line that did not have enough fields to be a record.
    pub fn record_bad_line(&mut self) {
        self.report.bad_lines += 1;
    }

    /// Count one more analyzer source file.
    pub fn record_file(&mut self) {
        self.report.files += 1;
    }

    pub fn forms(&self) -> usize {
        self.by_word.len()
    }

    pub fn report(&self) -> &DecodeReport {
        &self.report
    }

    pub fn into_parts(self) -> (CandidatesByWord, DecodeReport) {
        (self.by_word, self.report)
    }
}

/// Total order used to rank candidates for the same form. `Less` is better.
///
/// Category rank first, then more specified gender/number, then the wire
/// spellings of category, gender and number, then lemma, tag and source file.
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    a.category
        .rank()
        .cmp(&b.category.rank())
        .then_with(|| b.specificity().cmp(&a.specificity()))
        .then_with(|| a.category.as_str().cmp(b.category.as_str()))
        .then_with(|| a.gender.as_str().cmp(b.gender.as_str()))
        .then_with(|| a.number.as_str().cmp(b.number.as_str()))
        .then_with(|| a.lemma.cmp(&b.lemma))
        .then_with(|| a.tag.cmp(&b.tag))
        .then_with(|| a.source_file.cmp(&b.source_file))
}

/// Pick the best candidate. `None` only for an empty slice.
pub fn select_best(candidates: &[Candidate]) -> Option<&Candidate> {
    candidates.iter().min_by(|a, b| compare_candidates(a, b))
}
