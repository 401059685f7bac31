use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use lexicon_db::{LoadMode, load_analyzer, load_curated, load_frequency};
use lexicon_merge::select_best;

fn main() -> Result<()> {
    let mut args = env::args().skip(1).map(PathBuf::from);
    let usage = "usage: cargo run -p lexicon-db --example stats -- <curated> <analyzer-dir> <frequency>";
    let curated = args.next().context(usage)?;
    let analyzer = args.next().context(usage)?;
    let frequency = args.next().context(usage)?;

    let (baseline, curated_report) = load_curated(&curated, LoadMode::Mmap)
        .with_context(|| format!("loading curated list from {}", curated.display()))?;
    let (candidates, decode) = load_analyzer(&[analyzer], LoadMode::Mmap)?.into_parts();
    let (corpus, corpus_report) = load_frequency(&frequency, LoadMode::Mmap)?;

    println!("Curated entries : {}", baseline.len());
    println!("  duplicates    : {}", curated_report.duplicates);
    println!("Analyzer files  : {}", decode.files);
    println!("  forms         : {}", candidates.len());
    println!("  candidates    : {}", decode.kept_candidates);
    println!("  conjugated    : {}", decode.skipped_conjugated_verbs);
    println!("Corpus words    : {}", corpus.len());
    println!("  max raw count : {}", corpus.max_raw());
    println!("  bad lines     : {}", corpus_report.bad_lines);

    // Spot-check a couple of forms.
    for word in ["casa", "el", "bajo"] {
        let best = candidates.get(word).and_then(|group| select_best(group));
        match best {
            Some(c) => println!(
                "'{}' -> {}|{}|{} (tag {}, score {:?})",
                word,
                c.category,
                c.gender,
                c.number,
                c.tag,
                corpus.score(word)
            ),
            None => println!("'{}' has no analyzer candidate", word),
        }
    }

    Ok(())
}
