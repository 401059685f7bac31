//! Merge a curated wordlist with analyzer output and corpus frequencies.
//!
//! The crate holds the decision logic only; reading and writing files lives in
//! `lexicon-db`. Every stage is a plain function of its inputs and hands back a
//! report value with its counters.
//!
//! # How it works
//! 1. [`tag::decode`] turns analyzer tags into grammar, rejecting proper nouns
//!    and finite verb forms. [`CandidateSet`] groups the survivors by form.
//! 2. [`Baseline::from_entries`] deduplicates the curated list.
//! 3. [`FrequencyTable::from_counts`] builds log-scaled scores in `[1, 1000]`.
//! 4. [`merge::merge`] picks one candidate per form, keeps curated grammar,
//!    filters noisy new words and assigns frequencies.
//! 5. [`validate::validate`] checks anchor words before anything is written.
//!
//! # Example
//! ```rust
//! use lexicon_merge::{Baseline, CandidateSet, FrequencyTable, MergeOptions, merge};
//!
//! # fn main() -> Result<(), lexicon_merge::MergeError> {
//! let mut set = CandidateSet::new();
//! set.add_record("mesa", "mesa", "NCFS000", "MM.nom");
//! let (candidates, _) = set.into_parts();
//! let corpus = FrequencyTable::from_counts([("mesa".to_string(), 120)])?;
//!
//! let (lexicon, report) = merge(Baseline::default(), &candidates, &corpus, &MergeOptions::default());
//! assert_eq!(lexicon["mesa"].frequency, 1000);
//! assert_eq!(report.added_from_analyzer, 1);
//! # Ok(()) }
//! ```

pub mod baseline;
pub mod frequency;
pub mod heuristics;
pub mod merge;
pub mod report;
pub mod select;
pub mod tag;
pub mod validate;

use thiserror::Error;

pub use baseline::Baseline;
pub use frequency::FrequencyTable;
pub use heuristics::AccentTypoThreshold;
pub use merge::{Lexicon, MergeOptions, merge};
pub use report::{BaselineReport, DecodeReport, MergeReport};
pub use select::{CandidateSet, CandidatesByWord, select_best};
pub use validate::{Anchor, DEFAULT_ANCHORS, validate};

/// Conditions that make the whole build unusable.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("frequency corpus had no positive counts")]
    EmptyCorpus,
    #[error("validation failed: missing required word '{0}'")]
    MissingAnchor(String),
    #[error("validation failed: '{word}' {field} '{found}' != '{expected}'")]
    AnchorMismatch {
        word: String,
        field: &'static str,
        found: String,
        expected: String,
    },
}

/// Merge and validate in one step.
pub fn merge_validated(
    baseline: Baseline,
    candidates: &CandidatesByWord,
    corpus: &FrequencyTable,
    options: &MergeOptions,
    anchors: &[Anchor],
) -> Result<(Lexicon, MergeReport), MergeError> {
    let (lexicon, report) = merge(baseline, candidates, corpus, options);
    validate(&lexicon, anchors)?;
    Ok((lexicon, report))
}
