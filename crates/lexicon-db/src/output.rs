//! Rendering the merged dictionary and replacing the file on disk.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use lexicon_merge::Lexicon;
use lexicon_types::LexicalEntry;
use tracing::info;

/// Fixed comment block at the top of every generated dictionary.
pub const HEADER: [&str; 2] = [
    "# Merged spell-checker dictionary (generated)",
    "# Format: word|category|gender|number|lemma|frequency",
];

pub fn format_entry(entry: &LexicalEntry) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}",
        entry.word,
        entry.category,
        entry.gender,
        entry.number,
        entry.lemma,
        entry.frequency.max(1)
    )
}

/// Write header, a blank line, then one record per word in sorted order.
pub fn render<W: Write>(mut out: W, lexicon: &Lexicon) -> io::Result<()> {
    for line in HEADER {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    for entry in lexicon.values() {
        writeln!(out, "{}", format_entry(entry))?;
    }
    out.flush()
}

/// Where an existing dictionary would be copied before being overwritten:
/// `<path>.bak`, or `<path>.<UTC timestamp>.bak` if that is taken.
pub fn backup_path(path: &Path) -> PathBuf {
    let plain = PathBuf::from(format!("{}.bak", path.display()));
    if !plain.exists() {
        return plain;
    }
    let stamp = Utc::now().format("%Y%m%d%H%M%S");
    PathBuf::from(format!("{}.{stamp}.bak", path.display()))
}

/// Replace `path` with the rendered dictionary, keeping a backup of any
/// existing file unless `backup` is false. Returns the backup location.
pub fn write_dictionary(path: &Path, lexicon: &Lexicon, backup: bool) -> Result<Option<PathBuf>> {
    let mut backup_target = None;
    if backup && path.exists() {
        let target = backup_path(path);
        fs::copy(path, &target)
            .with_context(|| format!("back up {} to {}", path.display(), target.display()))?;
        info!("backed up {} to {}", path.display(), target.display());
        backup_target = Some(target);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    render(BufWriter::new(file), lexicon).with_context(|| format!("write {}", path.display()))?;
    info!("wrote {} entries to {}", lexicon.len(), path.display());
    Ok(backup_target)
}
