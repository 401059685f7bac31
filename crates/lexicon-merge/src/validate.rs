//! Anchor words that must survive a merge with known grammar.

use lexicon_types::{Category, Gender, Number};

use crate::MergeError;
use crate::merge::Lexicon;

/// Expected grammar for one word; `None` fields are not checked.
#[derive(Clone, Copy, Debug)]
pub struct Anchor {
    pub word: &'static str,
    pub category: Option<Category>,
    pub gender: Option<Gender>,
    pub number: Option<Number>,
}

pub const DEFAULT_ANCHORS: &[Anchor] = &[
    Anchor {
        word: "agua",
        category: Some(Category::Noun),
        gender: Some(Gender::Feminine),
        number: None,
    },
    Anchor {
        word: "casa",
        category: Some(Category::Noun),
        gender: None,
        number: None,
    },
    Anchor {
        word: "el",
        category: Some(Category::Article),
        gender: Some(Gender::Masculine),
        number: Some(Number::Singular),
    },
];

fn check<T: PartialEq + ToString>(
    word: &str,
    field: &'static str,
    found: T,
    expected: Option<T>,
) -> Result<(), MergeError> {
    match expected {
        Some(want) if want != found => Err(MergeError::AnchorMismatch {
            word: word.to_string(),
            field,
            found: found.to_string(),
            expected: want.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Fail on the first anchor that is missing or has the wrong grammar.
pub fn validate(lexicon: &Lexicon, anchors: &[Anchor]) -> Result<(), MergeError> {
    for anchor in anchors {
        let entry = lexicon
            .get(anchor.word)
            .ok_or_else(|| MergeError::MissingAnchor(anchor.word.to_string()))?;
        check(anchor.word, "category", entry.category, anchor.category)?;
        check(anchor.word, "gender", entry.gender, anchor.gender)?;
        check(anchor.word, "number", entry.number, anchor.number)?;
    }
    Ok(())
}
