use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use lexicon_db::{CorpusReport, LoadMode, load_analyzer, load_curated, load_frequency, write_dictionary};
use lexicon_merge::{
    BaselineReport, DEFAULT_ANCHORS, DecodeReport, Lexicon, MergeOptions, MergeReport,
    merge_validated,
};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub current: PathBuf,
    pub output: PathBuf,
    pub analyzers: Vec<PathBuf>,
    pub frequency: PathBuf,
    pub load_mode: LoadMode,
    pub dry_run: bool,
    pub backup: bool,
    pub report_path: Option<PathBuf>,
    pub options: MergeOptions,
}

/// Counters from every stage of one build.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    pub curated: BaselineReport,
    pub analyzer: DecodeReport,
    pub corpus: CorpusReport,
    pub merge: MergeReport,
}

#[derive(Debug)]
pub struct BuildOutcome {
    pub lexicon: Lexicon,
    pub report: BuildReport,
    pub written: Option<PathBuf>,
    pub backup: Option<PathBuf>,
}

/// Load all sources, merge, validate and (unless dry-running) write the
/// dictionary. Nothing is written when validation fails.
pub fn build(config: &BuildConfig) -> Result<BuildOutcome> {
    let start = Instant::now();

    let (baseline, curated) = load_curated(&config.current, config.load_mode)?;
    if baseline.is_empty() {
        warn!("curated dictionary {} has no entries", config.current.display());
    }
    let (corpus, corpus_report) = load_frequency(&config.frequency, config.load_mode)?;
    let (candidates, analyzer) = load_analyzer(&config.analyzers, config.load_mode)?.into_parts();
    info!(
        "{} analyzer forms from {} files ({} candidates kept)",
        candidates.len(),
        analyzer.files,
        analyzer.kept_candidates
    );

    let (lexicon, merge) = merge_validated(
        baseline,
        &candidates,
        &corpus,
        &config.options,
        DEFAULT_ANCHORS,
    )?;

    let report = BuildReport {
        curated,
        analyzer,
        corpus: corpus_report,
        merge,
    };

    let (written, backup) = if config.dry_run {
        info!("dry run: {} not written", config.output.display());
        (None, None)
    } else {
        let backup = write_dictionary(&config.output, &lexicon, config.backup)?;
        (Some(config.output.clone()), backup)
    };

    if let Some(path) = &config.report_path {
        let json = serde_json::to_string_pretty(&report).context("serialize build report")?;
        fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    }

    log_report(&report);
    info!("build finished in {} ms", start.elapsed().as_millis());

    Ok(BuildOutcome {
        lexicon,
        report,
        written,
        backup,
    })
}

fn log_report(report: &BuildReport) {
    let BuildReport {
        curated,
        analyzer,
        corpus,
        merge,
    } = report;
    info!(
        "curated: {} entries, {} duplicates ({} conflicting)",
        curated.entries, curated.duplicates, curated.conflicting_duplicates
    );
    info!(
        "analyzer: {} infinitives, {} participles, skipped {} conjugated, {} proper nouns, {} unknown tags, {} malformed, {} bad lines",
        analyzer.infinitive_candidates,
        analyzer.participle_candidates,
        analyzer.skipped_conjugated_verbs,
        analyzer.skipped_proper_nouns,
        analyzer.skipped_unknown_tags,
        analyzer.skipped_malformed,
        analyzer.bad_lines
    );
    info!(
        "corpus: {} lines, {} bad, {} non-positive, max raw {}",
        corpus.lines, corpus.bad_lines, corpus.non_positive, merge.corpus_max_raw
    );
    info!(
        "merge: {} lemmas filled, skipped {} unsupported infinitives and {} accent typos",
        merge.filled_curated_lemmas, merge.skipped_unsupported_infinitives, merge.skipped_accent_typos
    );
    info!(
        "frequencies: {} from corpus, {} inferred set to 1, {} curated kept; {} final entries",
        merge.freq_from_corpus, merge.freq_inferred_defaulted, merge.freq_curated_kept, merge.final_entries
    );
}
