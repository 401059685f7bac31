use std::path::PathBuf;

use clap::Parser;
use tracing::{Subscriber, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use lexicon_db::LoadMode;
use lexicon_merge::heuristics::{ACCENT_TYPO_MIN_COUNT, ACCENT_TYPO_RATIO};
use lexicon_merge::{AccentTypoThreshold, MergeOptions};
use lexmerge::{BuildConfig, build};

const DEFAULT_DICTIONARY: &str = "data/es/words.txt";

#[derive(Parser, Debug)]
#[command(name = "lexmerge")]
#[command(about = "Merge a curated wordlist with analyzer entries and corpus frequencies")]
struct Cli {
    /// Curated dictionary to start from.
    #[arg(long, env = "LEXMERGE_CURRENT", default_value = DEFAULT_DICTIONARY)]
    current: PathBuf,
    /// Where the merged dictionary is written.
    #[arg(long, env = "LEXMERGE_OUTPUT", default_value = DEFAULT_DICTIONARY)]
    output: PathBuf,
    /// Analyzer lexicon file or directory of `MM.*` files; repeatable or `:`-separated.
    #[arg(long, env = "LEXMERGE_ANALYZER", required = true, value_delimiter = ':')]
    analyzer: Vec<PathBuf>,
    /// Word frequency corpus.
    #[arg(long, env = "LEXMERGE_FREQUENCY")]
    frequency: PathBuf,
    /// `mmap` or `owned`.
    #[arg(long, env = "LEXMERGE_LOAD_MODE", default_value = "mmap", value_parser = parse_load_mode)]
    load_mode: LoadMode,
    /// Run the full build and validation without writing the dictionary.
    #[arg(long, default_value_t = false)]
    dry_run: bool,
    /// Overwrite the output without keeping a `.bak` copy.
    #[arg(long, default_value_t = false)]
    no_backup: bool,
    /// Write build statistics as JSON.
    #[arg(long)]
    report: Option<PathBuf>,
    #[arg(long, default_value_t = ACCENT_TYPO_MIN_COUNT)]
    accent_min_count: u64,
    #[arg(long, default_value_t = ACCENT_TYPO_RATIO)]
    accent_ratio: u64,
}

fn parse_load_mode(raw: &str) -> Result<LoadMode, String> {
    LoadMode::parse(raw).ok_or_else(|| format!("unknown load mode '{raw}' (expected mmap or owned)"))
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = BuildConfig {
        current: cli.current,
        output: cli.output,
        analyzers: cli.analyzer,
        frequency: cli.frequency,
        load_mode: cli.load_mode,
        dry_run: cli.dry_run,
        backup: !cli.no_backup,
        report_path: cli.report,
        options: MergeOptions {
            accent_typo: AccentTypoThreshold {
                min_count: cli.accent_min_count,
                ratio: cli.accent_ratio,
            },
        },
    };
    info!("using curated dictionary at {}", config.current.display());
    info!("using frequency corpus at {} (mode: {:?})", config.frequency.display(), config.load_mode);

    let outcome = build(&config)?;
    if let Some(path) = &outcome.written {
        info!("wrote dictionary: {}", path.display());
    }
    if let Some(path) = &outcome.backup {
        info!("backup path: {}", path.display());
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    log_subscriber(env_filter).init();
}

fn log_subscriber(env_filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .finish()
}
