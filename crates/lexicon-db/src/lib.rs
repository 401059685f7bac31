//! Load dictionary build inputs and write the merged result.
//!
//! Three sources feed a merge: the curated wordlist
//! (`word|category|gender|number|lemma|frequency`), the analyzer lexicon
//! (`form lemma tag`, possibly split over several `MM.*` files) and a
//! frequency corpus (`word count`). Each file is read either through a memory
//! map or into an owned buffer, chosen at runtime via [`LoadMode`], and decoded
//! as UTF-8 with a Latin-1 fallback.
//!
//! # Example
//! ```no_run
//! use lexicon_db::{LoadMode, load_analyzer, load_curated, load_frequency};
//!
//! # fn main() -> anyhow::Result<()> {
//! let (baseline, _) = load_curated("data/es/words.txt", LoadMode::Mmap)?;
//! let candidates = load_analyzer(&["freeling/entries".into()], LoadMode::Mmap)?;
//! let (corpus, _) = load_frequency("es_merged_50k.txt", LoadMode::Owned)?;
//! println!("{} curated, {} forms, {} corpus words", baseline.len(), candidates.forms(), corpus.len());
//! # Ok(()) }
//! ```

pub mod output;
pub mod parse;

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lexicon_merge::{Baseline, BaselineReport, CandidateSet, FrequencyTable};
use memmap2::Mmap;
use tracing::info;

pub use output::{HEADER, backup_path, render, write_dictionary};
pub use parse::CorpusReport;

/// Strategy for loading source files.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadMode {
    /// Memory-map each file (fast, zero-copy).
    Mmap,
    /// Read each file into an owned buffer (portable fallback).
    Owned,
}

impl LoadMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "mmap" => Some(LoadMode::Mmap),
            "owned" => Some(LoadMode::Owned),
            _ => None,
        }
    }
}

enum Buffer {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Buffer {
    fn as_slice(&self) -> &[u8] {
        match self {
            Buffer::Mmap(m) => m.as_ref(),
            Buffer::Owned(v) => v.as_slice(),
        }
    }
}

/// Raw bytes of one input file plus the name it is reported under.
pub struct SourceFile {
    name: String,
    buffer: Buffer,
}

impl SourceFile {
    pub fn load(path: impl AsRef<Path>, mode: LoadMode) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            name,
            buffer: load_file(path, mode)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    pub fn text(&self) -> Cow<'_, str> {
        decode_text(self.bytes())
    }
}

fn load_file(path: &Path, mode: LoadMode) -> Result<Buffer> {
    match mode {
        LoadMode::Mmap => {
            let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
            unsafe { Mmap::map(&file) }
                .map(Buffer::Mmap)
                .with_context(|| format!("mmap {}", path.display()))
        }
        LoadMode::Owned => {
            let mut file = File::open(path).with_context(|| format!("open {}", path.display()))?;
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)
                .with_context(|| format!("read {}", path.display()))?;
            Ok(Buffer::Owned(buf))
        }
    }
}

/// Decode as UTF-8, or as Latin-1 when the bytes are not valid UTF-8.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

/// Expand analyzer arguments: files are kept as given, directories contribute
/// their regular files sorted by name.
pub fn analyzer_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut files: Vec<PathBuf> = fs::read_dir(path)
                .with_context(|| format!("list {}", path.display()))?
                .map(|entry| entry.map(|e| e.path()))
                .collect::<std::io::Result<_>>()
                .with_context(|| format!("list {}", path.display()))?;
            files.retain(|p| p.is_file());
            files.sort();
            out.extend(files);
        } else {
            out.push(path.clone());
        }
    }
    if out.is_empty() {
        anyhow::bail!("no analyzer files found");
    }
    Ok(out)
}

/// Read and deduplicate the curated wordlist.
pub fn load_curated(path: impl AsRef<Path>, mode: LoadMode) -> Result<(Baseline, BaselineReport)> {
    let source = SourceFile::load(path, mode)?;
    let entries = parse::parse_curated(&source.text());
    let (baseline, report) = Baseline::from_entries(entries);
    info!(
        "loaded {} curated entries from {} ({} duplicates)",
        report.entries,
        source.name(),
        report.duplicates
    );
    Ok((baseline, report))
}

/// Decode every analyzer file into one candidate set.
pub fn load_analyzer(paths: &[PathBuf], mode: LoadMode) -> Result<CandidateSet> {
    let mut set = CandidateSet::new();
    for path in analyzer_files(paths)? {
        let source = SourceFile::load(&path, mode)?;
        let before = set.report().kept_candidates;
        parse::parse_analyzer(&source.text(), source.name(), &mut set);
        set.record_file();
        info!(
            "analyzer {}: kept {} candidates",
            source.name(),
            set.report().kept_candidates - before
        );
    }
    Ok(set)
}

/// Read the frequency corpus and build its normalized table.
///
/// Fails when the corpus has no positive counts.
pub fn load_frequency(path: impl AsRef<Path>, mode: LoadMode) -> Result<(FrequencyTable, CorpusReport)> {
    let path = path.as_ref();
    let source = SourceFile::load(path, mode)?;
    let parsed = parse::parse_frequency(&source.text());
    let table = FrequencyTable::from_counts(parsed.counts)
        .with_context(|| format!("frequency corpus {}", path.display()))?;
    info!(
        "loaded {} corpus words from {} (max raw {})",
        table.len(),
        source.name(),
        table.max_raw()
    );
    Ok((table, parsed.report))
}
