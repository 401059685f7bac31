use std::path::PathBuf;

use lexicon_db::{LoadMode, load_analyzer, load_curated, load_frequency, render};
use lexicon_merge::frequency::normalize_count;
use lexicon_merge::{DEFAULT_ANCHORS, MergeOptions, merge_validated};
use lexicon_types::{Category, Gender, Number, Origin};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn loads_curated_with_duplicates() {
    let (baseline, report) = load_curated(fixture("words.txt"), LoadMode::Mmap).expect("load curated");
    assert_eq!(report.entries, 6);
    assert_eq!(report.duplicates, 1);
    assert_eq!(report.conflicting_duplicates, 0);
    assert_eq!(baseline.get("casa").unwrap().frequency, 500);
    assert_eq!(baseline.get("raro").unwrap().category, Category::Other);
}

#[test]
fn loads_analyzer_directory_in_name_order() {
    let set = load_analyzer(&[fixture("analyzer")], LoadMode::Owned).expect("load analyzer");
    let report = set.report().clone();
    assert_eq!(report.files, 2);
    assert_eq!(report.kept_candidates, 7);
    assert_eq!(report.infinitive_candidates, 2);
    assert_eq!(report.participle_candidates, 1);
    assert_eq!(report.skipped_proper_nouns, 1);
    assert_eq!(report.skipped_conjugated_verbs, 1);
    assert_eq!(report.bad_lines, 1);

    let (by_word, _) = set.into_parts();
    let cantada = &by_word["cantada"][0];
    assert_eq!(cantada.category, Category::Adjective);
    assert_eq!(cantada.gender, Gender::Feminine);
    assert_eq!(cantada.source_file, "MM.verb");
    assert!(!by_word.contains_key("cantó"));
}

#[test]
fn loads_frequency_keeping_highest_duplicate() {
    let (table, report) = load_frequency(fixture("freq.txt"), LoadMode::Mmap).expect("load freq");
    assert_eq!(table.len(), 6);
    assert_eq!(table.raw("mesa"), Some(90));
    assert_eq!(table.max_raw(), 1_000_000);
    assert_eq!(table.score("de"), Some(1000));
    assert_eq!(report.bad_lines, 1);
    assert_eq!(report.non_positive, 1);
}

#[test]
fn empty_corpus_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "# nothing here\nnada 0\n").unwrap();
    let err = load_frequency(&path, LoadMode::Owned).unwrap_err();
    assert!(format!("{err:#}").contains("no positive counts"));
}

#[test]
fn fixtures_merge_end_to_end() {
    let (baseline, _) = load_curated(fixture("words.txt"), LoadMode::Owned).unwrap();
    let (candidates, _) = load_analyzer(&[fixture("analyzer")], LoadMode::Owned)
        .unwrap()
        .into_parts();
    let (corpus, _) = load_frequency(fixture("freq.txt"), LoadMode::Owned).unwrap();

    let (lexicon, report) = merge_validated(
        baseline,
        &candidates,
        &corpus,
        &MergeOptions::default(),
        DEFAULT_ANCHORS,
    )
    .expect("anchors hold");

    assert_eq!(lexicon.len(), 9);
    assert_eq!(report.skipped_accent_typos, 1);
    assert_eq!(report.skipped_unsupported_infinitives, 1);
    assert_eq!(report.filled_curated_lemmas, 1);

    assert_eq!(lexicon["casa"].frequency, normalize_count(10_000, 1_000_000));
    assert_eq!(lexicon["agua"].frequency, 800);
    assert_eq!(lexicon["gatos"].lemma, "gato");
    assert_eq!(lexicon["gatos"].frequency, 40);
    assert_eq!(lexicon["cantar"].origin, Origin::Inferred);
    assert_eq!(lexicon["cantada"].number, Number::Singular);
    assert_eq!(lexicon["cantada"].frequency, 1);
    assert!(!lexicon.contains_key("camino"));
    assert!(!lexicon.contains_key("caminar"));

    let mut first = Vec::new();
    render(&mut first, &lexicon).unwrap();
    let mut second = Vec::new();
    render(&mut second, &lexicon).unwrap();
    assert_eq!(first, second);
    let text = String::from_utf8(first).unwrap();
    assert!(text.contains("\ncasa|sustantivo|f|s|casa|667\n"));
}
