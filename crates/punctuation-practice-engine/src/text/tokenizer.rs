use regex::Regex;
use std::sync::OnceLock;

use crate::exercise::WordSlot;
use crate::text::PunctuationMark;

fn punctuation_regex() -> &'static Regex {
    static PUNCTUATION_REGEX: OnceLock<Regex> = OnceLock::new();
    PUNCTUATION_REGEX.get_or_init(|| {
        Regex::new(r"[.,/#!$%^&*;:{}=\-_`~()?]").expect("Invalid punctuation regex")
    })
}

/// Every recognized mark in the reference, in order of appearance (not deduplicated)
pub fn extract_marks(reference: &str) -> Vec<PunctuationMark> {
    punctuation_regex()
        .find_iter(reference)
        .filter_map(|m| m.as_str().chars().next().and_then(PunctuationMark::from_char))
        .collect()
}

/// Remove every recognized mark from the reference
pub fn strip_punctuation(reference: &str) -> String {
    punctuation_regex().replace_all(reference, "").into_owned()
}

/// The reference without punctuation, first character uppercased and the rest lowercased
pub fn plain_text(reference: &str) -> String {
    let stripped = strip_punctuation(reference);
    let mut chars = stripped.chars();

    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut plain: String = first.to_uppercase().collect();
    plain.push_str(&chars.as_str().to_lowercase());
    plain
}

/// Turn a reference sentence into the editable word slots of a fresh exercise.
///
/// Words are split on single spaces, so consecutive spaces (including the gap
/// left by a free-standing mark such as `" - "`) produce empty-word slots. An
/// empty reference yields a single empty-word slot.
pub fn tokenize(reference: &str) -> Vec<WordSlot> {
    plain_text(reference).split(' ').map(WordSlot::new).collect()
}
