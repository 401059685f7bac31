//! Shared types for merged spell-checker dictionaries.
//!
//! The dictionary format is line oriented:
//! `word|category|gender|number|lemma|frequency`. This crate owns the closed
//! grammar sets used in those records ([`Category`], [`Gender`], [`Number`]),
//! their wire spellings, and the two record shapes that flow through a merge:
//! [`LexicalEntry`] (a final dictionary row) and [`Candidate`] (one analyzer
//! interpretation of a word form, before disambiguation).
//!
//! ```rust
//! use lexicon_types::{Category, Gender, Number};
//!
//! assert_eq!(Category::parse("sustantivo"), Category::Noun);
//! assert_eq!(Category::parse("whatever"), Category::Other);
//! assert_eq!(Gender::from_tag_char('F'), Gender::Feminine);
//! assert_eq!(Number::parse("p").as_str(), "p");
//! ```

use std::fmt;

/// Grammatical category as stored in the dictionary.
///
/// Variants are declared in selection priority order; see [`Category::rank`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Category {
    Noun,
    Adjective,
    Adverb,
    Article,
    Determiner,
    Pronoun,
    Preposition,
    Conjunction,
    Verb,
    Other,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Noun,
        Category::Adjective,
        Category::Adverb,
        Category::Article,
        Category::Determiner,
        Category::Pronoun,
        Category::Preposition,
        Category::Conjunction,
        Category::Verb,
        Category::Other,
    ];

    /// Parse a dictionary category field. Unknown or empty values map to
    /// [`Category::Other`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "sustantivo" | "noun" | "n" => Category::Noun,
            "adjetivo" | "adjective" | "adj" => Category::Adjective,
            "adverbio" | "adverb" | "adv" => Category::Adverb,
            "articulo" | "article" | "art" => Category::Article,
            "determinante" | "determiner" | "det" => Category::Determiner,
            "pronombre" | "pronoun" | "pron" => Category::Pronoun,
            "preposicion" | "preposition" | "prep" => Category::Preposition,
            "conjuncion" | "conjunction" | "conj" => Category::Conjunction,
            "verbo" | "verb" | "v" => Category::Verb,
            _ => Category::Other,
        }
    }

    /// Spelling used in dictionary files.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Noun => "sustantivo",
            Category::Adjective => "adjetivo",
            Category::Adverb => "adverbio",
            Category::Article => "articulo",
            Category::Determiner => "determinante",
            Category::Pronoun => "pronombre",
            Category::Preposition => "preposicion",
            Category::Conjunction => "conjuncion",
            Category::Verb => "verbo",
            Category::Other => "otro",
        }
    }

    /// Priority when several analyses compete for one form. Lower wins.
    pub fn rank(self) -> u8 {
        match self {
            Category::Noun => 1,
            Category::Adjective => 2,
            Category::Adverb => 3,
            Category::Article => 4,
            Category::Determiner => 5,
            Category::Pronoun => 6,
            Category::Preposition => 7,
            Category::Conjunction => 8,
            Category::Verb => 9,
            Category::Other => 10,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Gender {
    Masculine,
    Feminine,
    #[default]
    Unspecified,
}

impl Gender {
    /// Parse the dictionary gender field (`m`, `f`, anything else unspecified).
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "m" | "masc" | "masculine" | "masculino" => Gender::Masculine,
            "f" | "fem" | "feminine" | "femenino" => Gender::Feminine,
            _ => Gender::Unspecified,
        }
    }

    /// Interpret a single position of a morphological tag.
    pub fn from_tag_char(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'M' => Gender::Masculine,
            'F' => Gender::Feminine,
            _ => Gender::Unspecified,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Masculine => "m",
            Gender::Feminine => "f",
            Gender::Unspecified => "_",
        }
    }

    pub fn is_specified(self) -> bool {
        self != Gender::Unspecified
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Number {
    Singular,
    Plural,
    #[default]
    Unspecified,
}

impl Number {
    /// Parse the dictionary number field (`s`, `p`, anything else unspecified).
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "s" | "sing" | "singular" => Number::Singular,
            "p" | "pl" | "plural" => Number::Plural,
            _ => Number::Unspecified,
        }
    }

    /// Interpret a single position of a morphological tag.
    pub fn from_tag_char(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'S' => Number::Singular,
            'P' => Number::Plural,
            _ => Number::Unspecified,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Number::Singular => "s",
            Number::Plural => "p",
            Number::Unspecified => "_",
        }
    }

    pub fn is_specified(self) -> bool {
        self != Number::Unspecified
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a dictionary entry came from. Not written to disk.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Origin {
    Curated,
    Inferred,
}

/// One row of the merged dictionary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexicalEntry {
    pub word: String,
    pub category: Category,
    pub gender: Gender,
    pub number: Number,
    pub lemma: String,
    pub frequency: u32,
    pub origin: Origin,
}

impl LexicalEntry {
    /// True when category, gender and number all agree with `other`.
    pub fn same_grammar(&self, other: &LexicalEntry) -> bool {
        self.category == other.category && self.gender == other.gender && self.number == other.number
    }
}

/// An analyzer interpretation of a word form, prior to disambiguation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    pub word: String,
    pub lemma: String,
    pub category: Category,
    pub gender: Gender,
    pub number: Number,
    pub tag: String,
    pub source_file: String,
}

impl Candidate {
    /// Number of specified attributes among gender and number (0..=2).
    pub fn specificity(&self) -> u8 {
        u8::from(self.gender.is_specified()) + u8::from(self.number.is_specified())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_names_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::parse(cat.as_str()), cat);
        }
        assert_eq!(Category::parse(""), Category::Other);
        assert_eq!(Category::parse(" Noun "), Category::Noun);
    }

    #[test]
    fn ranks_follow_declaration_order() {
        let ranks: Vec<u8> = Category::ALL.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn tag_chars_are_case_insensitive() {
        assert_eq!(Gender::from_tag_char('m'), Gender::Masculine);
        assert_eq!(Gender::from_tag_char('C'), Gender::Unspecified);
        assert_eq!(Number::from_tag_char('p'), Number::Plural);
        assert_eq!(Number::from_tag_char('N'), Number::Unspecified);
    }

    #[test]
    fn specificity_counts_known_attributes() {
        let mut cand = Candidate {
            word: "gata".into(),
            lemma: "gato".into(),
            category: Category::Noun,
            gender: Gender::Feminine,
            number: Number::Singular,
            tag: "NCFS000".into(),
            source_file: "MM.nom".into(),
        };
        assert_eq!(cand.specificity(), 2);
        cand.number = Number::Unspecified;
        assert_eq!(cand.specificity(), 1);
        cand.gender = Gender::Unspecified;
        assert_eq!(cand.specificity(), 0);
    }
}
