//! Line formats of the three input sources.

use lexicon_merge::CandidateSet;
use lexicon_types::{Category, Gender, LexicalEntry, Number, Origin};
use serde::Serialize;

fn is_skippable(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}

/// Parse one `word|category|gender|number|lemma|frequency` record.
///
/// Trailing fields are optional. Blank lines, comments and records with an
/// empty word yield `None`. A missing or unparsable frequency reads as 1.
pub fn parse_curated_line(line: &str) -> Option<LexicalEntry> {
    let line = line.trim();
    if is_skippable(line) {
        return None;
    }
    let mut parts = line.splitn(6, '|').map(str::trim);
    let word = parts.next()?.to_lowercase();
    if word.is_empty() {
        return None;
    }
    let category = Category::parse(parts.next().unwrap_or(""));
    let gender = Gender::parse(parts.next().unwrap_or(""));
    let number = Number::parse(parts.next().unwrap_or(""));
    let lemma = parts.next().unwrap_or("").to_string();
    let frequency = parts
        .next()
        .and_then(|f| f.parse::<i64>().ok())
        .map(|f| f.clamp(1, i64::from(u32::MAX)) as u32)
        .unwrap_or(1);

    Some(LexicalEntry {
        word,
        category,
        gender,
        number,
        lemma,
        frequency,
        origin: Origin::Curated,
    })
}

pub fn parse_curated(text: &str) -> Vec<LexicalEntry> {
    text.lines().filter_map(parse_curated_line).collect()
}

/// Feed `form lemma tag ...` records into `set`, tagging them with `source_name`.
///
/// Lines with fewer than three fields are counted as bad lines.
pub fn parse_analyzer(text: &str, source_name: &str, set: &mut CandidateSet) {
    for raw in text.lines() {
        let line = raw.trim();
        if is_skippable(line) {
            continue;
        }
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next(), fields.next()) {
            (Some(form), Some(lemma), Some(tag)) => {
                set.add_record(form, lemma, tag, source_name);
            }
            _ => set.record_bad_line(),
        }
    }
}

/// Result of reading one frequency corpus line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FrequencyLine {
    Skip,
    Bad,
    Count(String, i64),
}

/// Parse `word<TAB>count` or `word count`.
pub fn parse_frequency_line(line: &str) -> FrequencyLine {
    let line = line.trim();
    if is_skippable(line) {
        return FrequencyLine::Skip;
    }
    let (word, count) = match line.split_once('\t') {
        Some(pair) => pair,
        None => {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some(w), Some(c)) => (w, c),
                _ => return FrequencyLine::Bad,
            }
        }
    };
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return FrequencyLine::Skip;
    }
    match count.trim().parse::<i64>() {
        Ok(n) => FrequencyLine::Count(word, n),
        Err(_) => FrequencyLine::Bad,
    }
}

/// Counts read from a frequency corpus, before normalization.
#[derive(Clone, Debug, Default)]
pub struct CorpusCounts {
    pub counts: Vec<(String, u64)>,
    pub report: CorpusReport,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CorpusReport {
    pub lines: usize,
    pub bad_lines: usize,
    pub non_positive: usize,
}

pub fn parse_frequency(text: &str) -> CorpusCounts {
    let mut out = CorpusCounts::default();
    for raw in text.lines() {
        match parse_frequency_line(raw) {
            FrequencyLine::Skip => {}
            FrequencyLine::Bad => out.report.bad_lines += 1,
            FrequencyLine::Count(_, n) if n <= 0 => out.report.non_positive += 1,
            FrequencyLine::Count(word, n) => {
                out.report.lines += 1;
                out.counts.push((word, n as u64));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_line_with_all_fields() {
        let e = parse_curated_line("Casa|sustantivo|f|s|casa|500").unwrap();
        assert_eq!(e.word, "casa");
        assert_eq!(e.category, Category::Noun);
        assert_eq!(e.gender, Gender::Feminine);
        assert_eq!(e.number, Number::Singular);
        assert_eq!(e.lemma, "casa");
        assert_eq!(e.frequency, 500);
        assert_eq!(e.origin, Origin::Curated);
    }

    #[test]
    fn curated_line_defaults_trailing_fields() {
        let e = parse_curated_line("hola").unwrap();
        assert_eq!(e.category, Category::Other);
        assert_eq!(e.gender, Gender::Unspecified);
        assert_eq!(e.lemma, "");
        assert_eq!(e.frequency, 1);

        let e = parse_curated_line("amo|verbo|_|_|amar|mucho").unwrap();
        assert_eq!(e.category, Category::Verb);
        assert_eq!(e.frequency, 1);

        assert_eq!(parse_curated_line("x|otro|_|_||-3").unwrap().frequency, 1);
    }

    #[test]
    fn curated_skips_comments_and_blank_words() {
        assert!(parse_curated_line("# comment").is_none());
        assert!(parse_curated_line("   ").is_none());
        assert!(parse_curated_line("|sustantivo|f|s").is_none());
        assert_eq!(parse_curated("# h\n\ncasa|sustantivo\nmesa\n").len(), 2);
    }

    #[test]
    fn analyzer_counts_short_lines() {
        let mut set = CandidateSet::new();
        parse_analyzer(
            "casa casa NCFS000\n# note\ncasas\ncasó casar VMIS3S0\nrojo rojo AQ0MS00 0.9\n",
            "MM.test",
            &mut set,
        );
        let (by_word, report) = set.into_parts();
        assert_eq!(report.bad_lines, 1);
        assert_eq!(report.kept_candidates, 2);
        assert_eq!(report.skipped_conjugated_verbs, 1);
        assert_eq!(by_word["rojo"][0].source_file, "MM.test");
    }

    #[test]
    fn frequency_lines_accept_tabs_and_spaces() {
        assert_eq!(
            parse_frequency_line("Casa\t10000"),
            FrequencyLine::Count("casa".into(), 10000)
        );
        assert_eq!(
            parse_frequency_line("de 500 extra"),
            FrequencyLine::Count("de".into(), 500)
        );
        assert_eq!(parse_frequency_line("solo"), FrequencyLine::Bad);
        assert_eq!(parse_frequency_line("casa\tmuchas"), FrequencyLine::Bad);
        assert_eq!(parse_frequency_line("# header"), FrequencyLine::Skip);
    }

    #[test]
    fn frequency_drops_non_positive_counts() {
        let parsed = parse_frequency("a 3\nb 0\nc -1\nd x\n");
        assert_eq!(parsed.counts, vec![("a".to_string(), 3)]);
        assert_eq!(parsed.report.non_positive, 2);
        assert_eq!(parsed.report.bad_lines, 1);
    }
}
