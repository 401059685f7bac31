//! Morphological tag decoding.
//!
//! Analyzer tags are short fixed-width codes (`NCFS000`, `AQ0MS00`,
//! `VMP00SF`, ...). The first one or two characters select a rule from
//! [`TAG_RULES`]; the rule then says which category the tag maps to and at
//! which offsets gender and number live. Verb tags dispatch once more on the
//! mood character: infinitives stay verbs, participles become adjectives and
//! every finite form is rejected.

use lexicon_types::{Candidate, Category, Gender, Number};

/// Why a record did not produce a candidate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RejectReason {
    MalformedForm,
    MalformedTag,
    ProperNoun,
    ConjugatedVerb,
    UnknownPrefix,
}

/// Which non-finite verb form a tag encoded, if any.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VerbForm {
    Infinitive,
    Participle,
}

/// Decoded grammar of a single tag.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Analysis {
    pub category: Category,
    pub gender: Gender,
    pub number: Number,
    pub verb_form: Option<VerbForm>,
}

/// Category plus the tag offsets holding gender and number.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub category: Category,
    pub gender_at: Option<usize>,
    pub number_at: Option<usize>,
    pub verb_form: Option<VerbForm>,
}

impl Layout {
    const fn plain(category: Category) -> Self {
        Self {
            category,
            gender_at: None,
            number_at: None,
            verb_form: None,
        }
    }

    const fn inflected(category: Category, gender_at: usize, number_at: usize) -> Self {
        Self {
            category,
            gender_at: Some(gender_at),
            number_at: Some(number_at),
            verb_form: None,
        }
    }

    fn apply(&self, tag: &str) -> Analysis {
        Analysis {
            category: self.category,
            gender: self
                .gender_at
                .and_then(|idx| tag.chars().nth(idx))
                .map(Gender::from_tag_char)
                .unwrap_or_default(),
            number: self
                .number_at
                .and_then(|idx| tag.chars().nth(idx))
                .map(Number::from_tag_char)
                .unwrap_or_default(),
            verb_form: self.verb_form,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TagAction {
    Emit(Layout),
    /// Dispatch on the character at `mood_at`; moods not listed are finite
    /// forms and get rejected.
    ByMood {
        mood_at: usize,
        moods: &'static [(char, Layout)],
    },
    Reject(RejectReason),
}

#[derive(Clone, Copy, Debug)]
pub struct TagRule {
    pub prefix: &'static str,
    pub action: TagAction,
}

const fn rule(prefix: &'static str, action: TagAction) -> TagRule {
    TagRule { prefix, action }
}

const NOUN: TagAction = TagAction::Emit(Layout::inflected(Category::Noun, 2, 3));
const ADJECTIVE: TagAction = TagAction::Emit(Layout::inflected(Category::Adjective, 3, 4));
const ARTICLE: TagAction = TagAction::Emit(Layout::inflected(Category::Article, 3, 4));
const DETERMINER: TagAction = TagAction::Emit(Layout::inflected(Category::Determiner, 3, 4));
const PRONOUN: TagAction = TagAction::Emit(Layout::inflected(Category::Pronoun, 3, 4));

const VERB_MOODS: &[(char, Layout)] = &[
    (
        'N',
        Layout {
            category: Category::Verb,
            gender_at: None,
            number_at: None,
            verb_form: Some(VerbForm::Infinitive),
        },
    ),
    // VMP00SF: number at 5, gender at 6.
    (
        'P',
        Layout {
            category: Category::Adjective,
            gender_at: Some(6),
            number_at: Some(5),
            verb_form: Some(VerbForm::Participle),
        },
    ),
];

/// Prefix table consulted by [`decode`]. The longest matching prefix wins.
pub static TAG_RULES: &[TagRule] = &[
    rule("NP", TagAction::Reject(RejectReason::ProperNoun)),
    rule("NC", NOUN),
    rule("AQ", ADJECTIVE),
    rule("AO", ADJECTIVE),
    rule("DA", ARTICLE),
    rule("DD", DETERMINER),
    rule("DI", DETERMINER),
    rule("DP", DETERMINER),
    rule("DT", DETERMINER),
    rule("DE", DETERMINER),
    rule("PP", PRONOUN),
    rule("PD", PRONOUN),
    rule("PR", PRONOUN),
    rule("PT", PRONOUN),
    rule("PI", PRONOUN),
    rule("PE", PRONOUN),
    rule("SP", TagAction::Emit(Layout::plain(Category::Preposition))),
    rule("CC", TagAction::Emit(Layout::plain(Category::Conjunction))),
    rule("CS", TagAction::Emit(Layout::plain(Category::Conjunction))),
    rule("RG", TagAction::Emit(Layout::plain(Category::Adverb))),
    rule("RN", TagAction::Emit(Layout::plain(Category::Adverb))),
    rule("I", TagAction::Emit(Layout::plain(Category::Other))),
    rule(
        "V",
        TagAction::ByMood {
            mood_at: 2,
            moods: VERB_MOODS,
        },
    ),
];

/// Decode a tag into category, gender and number.
pub fn decode(tag: &str) -> Result<Analysis, RejectReason> {
    decode_with(TAG_RULES, tag)
}

/// Decode against a caller-supplied rule table.
pub fn decode_with(rules: &[TagRule], tag: &str) -> Result<Analysis, RejectReason> {
    let tag = tag.trim();
    if tag.is_empty() || tag.chars().any(char::is_whitespace) {
        return Err(RejectReason::MalformedTag);
    }

    let matched = rules
        .iter()
        .filter(|r| tag.starts_with(r.prefix))
        .max_by_key(|r| r.prefix.len())
        .ok_or(RejectReason::UnknownPrefix)?;

    match matched.action {
        TagAction::Emit(layout) => Ok(layout.apply(tag)),
        TagAction::ByMood { mood_at, moods } => {
            let mood = tag.chars().nth(mood_at);
            moods
                .iter()
                .find(|(m, _)| Some(*m) == mood)
                .map(|(_, layout)| layout.apply(tag))
                .ok_or(RejectReason::ConjugatedVerb)
        }
        TagAction::Reject(reason) => Err(reason),
    }
}

/// Build a candidate from one analyzer record.
///
/// Form and lemma are trimmed and lowercased. A form that is empty or
/// contains whitespace is rejected before the tag is looked at.
pub fn parse_candidate(
    form: &str,
    lemma: &str,
    tag: &str,
    source_file: &str,
) -> Result<(Candidate, Analysis), RejectReason> {
    let word = form.trim().to_lowercase();
    if word.is_empty() || word.chars().any(char::is_whitespace) {
        return Err(RejectReason::MalformedForm);
    }
    let analysis = decode(tag)?;
    let candidate = Candidate {
        word,
        lemma: lemma.trim().to_lowercase(),
        category: analysis.category,
        gender: analysis.gender,
        number: analysis.number,
        tag: tag.trim().to_string(),
        source_file: source_file.to_string(),
    };
    Ok((candidate, analysis))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar(tag: &str) -> (Category, Gender, Number) {
        let a = decode(tag).expect("tag decodes");
        (a.category, a.gender, a.number)
    }

    #[test]
    fn decodes_nouns_and_adjectives() {
        assert_eq!(
            grammar("NCFS000"),
            (Category::Noun, Gender::Feminine, Number::Singular)
        );
        assert_eq!(
            grammar("NCMP000"),
            (Category::Noun, Gender::Masculine, Number::Plural)
        );
        assert_eq!(
            grammar("AQ0FP00"),
            (Category::Adjective, Gender::Feminine, Number::Plural)
        );
        assert_eq!(
            grammar("AO0MS00"),
            (Category::Adjective, Gender::Masculine, Number::Singular)
        );
        // Common gender has no M/F marker.
        assert_eq!(
            grammar("NCCS000"),
            (Category::Noun, Gender::Unspecified, Number::Singular)
        );
    }

    #[test]
    fn decodes_closed_classes() {
        assert_eq!(
            grammar("DA0MS0"),
            (Category::Article, Gender::Masculine, Number::Singular)
        );
        assert_eq!(grammar("DD0FP0").0, Category::Determiner);
        assert_eq!(grammar("PP3MS000").0, Category::Pronoun);
        assert_eq!(
            grammar("SP"),
            (Category::Preposition, Gender::Unspecified, Number::Unspecified)
        );
        assert_eq!(grammar("CC").0, Category::Conjunction);
        assert_eq!(grammar("CS").0, Category::Conjunction);
        assert_eq!(grammar("RG").0, Category::Adverb);
        assert_eq!(grammar("I").0, Category::Other);
    }

    #[test]
    fn short_tags_leave_attributes_unspecified() {
        assert_eq!(
            grammar("NC"),
            (Category::Noun, Gender::Unspecified, Number::Unspecified)
        );
    }

    #[test]
    fn verbs_keep_infinitives_and_participles_only() {
        let inf = decode("VMN0000").unwrap();
        assert_eq!(inf.category, Category::Verb);
        assert_eq!(inf.verb_form, Some(VerbForm::Infinitive));

        let part = decode("VMP00SF").unwrap();
        assert_eq!(part.category, Category::Adjective);
        assert_eq!(part.gender, Gender::Feminine);
        assert_eq!(part.number, Number::Singular);
        assert_eq!(part.verb_form, Some(VerbForm::Participle));

        assert_eq!(decode("VMIP1S0"), Err(RejectReason::ConjugatedVerb));
        assert_eq!(decode("VAG0000"), Err(RejectReason::ConjugatedVerb));
        assert_eq!(decode("V"), Err(RejectReason::ConjugatedVerb));
    }

    #[test]
    fn rejects_proper_nouns_and_garbage() {
        assert_eq!(decode("NP00000"), Err(RejectReason::ProperNoun));
        assert_eq!(decode("Fc"), Err(RejectReason::UnknownPrefix));
        assert_eq!(decode("Z"), Err(RejectReason::UnknownPrefix));
        assert_eq!(decode(""), Err(RejectReason::MalformedTag));
        assert_eq!(decode("NC FS"), Err(RejectReason::MalformedTag));
    }

    #[test]
    fn longest_prefix_wins() {
        let rules = [
            rule("N", TagAction::Emit(Layout::plain(Category::Other))),
            rule("NC", NOUN),
        ];
        assert_eq!(
            decode_with(&rules, "NCFS000").unwrap().category,
            Category::Noun
        );
        assert_eq!(decode_with(&rules, "NX").unwrap().category, Category::Other);
    }

    #[test]
    fn candidate_normalizes_form_and_lemma() {
        let (cand, _) = parse_candidate(" Casa ", "CASA", "NCFS000", "MM.nom").unwrap();
        assert_eq!(cand.word, "casa");
        assert_eq!(cand.lemma, "casa");
        assert_eq!(cand.source_file, "MM.nom");
        assert_eq!(
            parse_candidate("", "x", "NCFS000", "MM.nom"),
            Err(RejectReason::MalformedForm)
        );
        assert_eq!(
            parse_candidate("sin embargo", "x", "CC", "MM.conj"),
            Err(RejectReason::MalformedForm)
        );
    }
}
