// Text normalization and keyword lookup shared by the classifier and the
// extractors.

use crate::models::{Concept, Keyword};

/// Stabilizes token boundaries in OCR output: `<` and `>` become spaces,
/// `$` is dropped, whitespace runs collapse to one space, ends are trimmed.
///
/// Idempotent, and never makes the text longer.
pub fn normalize(text: &str) -> String {
    let replaced: String = text
        .chars()
        .filter(|c| *c != '$')
        .map(|c| if c == '<' || c == '>' { ' ' } else { c })
        .collect();

    replaced.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// `normalize` followed by uppercasing, the form the classifier works on.
pub fn normalize_upper(text: &str) -> String {
    normalize(text).to_uppercase()
}

/// Collapses every whitespace run (newlines included) to a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Keyword containment against text that is already uppercased.
pub fn contains_keyword(upper_text: &str, keyword: &Keyword) -> bool {
    match keyword {
        Keyword::Phrase(phrase) => upper_text.contains(phrase),
        Keyword::Word(word) => contains_word(upper_text, word),
    }
}

pub fn contains_concept(upper_text: &str, concept: Concept) -> bool {
    concept
        .keywords()
        .iter()
        .any(|keyword| contains_keyword(upper_text, keyword))
}

fn contains_word(text: &str, word: &str) -> bool {
    text.match_indices(word).any(|(start, matched)| {
        let before = text[..start].chars().next_back();
        let after = text[start + matched.len()..].chars().next();
        !before.map_or(false, char::is_alphanumeric) && !after.map_or(false, char::is_alphanumeric)
    })
}

/// Dominant writing system of the text (e.g. "Latin", "Devanagari").
pub fn detect_script(text: &str) -> Option<String> {
    whatlang::detect_script(text).map(|script| script.name().to_string())
}
