// Shape checks for the identifier printed on each document type.

use lazy_static::lazy_static;
use regex::Regex;

use crate::validation::MatchContext;

/// Non-Latin letters that OCR emits in place of a Latin capital.
const LATIN_LOOKALIKES: &[(char, char)] = &[('\u{0391}', 'A')];

lazy_static! {
    static ref PAN_SHAPE: Regex = Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap();
    static ref PASSPORT_LABEL: Regex = Regex::new(r"(?i)passport\s*").unwrap();
    static ref LEADING_LETTER: Regex = Regex::new(r"^[A-Z]\s+").unwrap();
    static ref PASSPORT_DIGITS: Regex = Regex::new(r"[0-9]{7,9}").unwrap();
    static ref DRIVING_LICENSE_SHAPE: Regex = Regex::new(r"^[A-Z]{2}[0-9]{2}[0-9]{4}[0-9]{7}$").unwrap();
    static ref VOTER_ID_SHAPE: Regex = Regex::new(r"^[A-Z]{3}[0-9]{7}$").unwrap();
}

/// Replaces lookalike letters with their Latin equivalent.
pub fn fold_lookalikes(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            LATIN_LOOKALIKES
                .iter()
                .find(|(lookalike, _)| *lookalike == c)
                .map_or(c, |(_, latin)| *latin)
        })
        .collect()
}

fn strip_separators(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// 12 digits once spaces and hyphens are removed. Hyphens are rewritten as
/// spaces so every accepted number uses the printed 4-4-4 grouping.
pub fn aadhaar_number(value: &str, _ctx: &MatchContext<'_>) -> Option<String> {
    let value = value.trim();
    let digits = strip_separators(value);
    if digits.len() == 12 && digits.chars().all(|c| c.is_ascii_digit()) {
        Some(value.replace('-', " "))
    } else {
        None
    }
}

pub fn pan_number(value: &str, _ctx: &MatchContext<'_>) -> Option<String> {
    let pan: String = fold_lookalikes(value)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    PAN_SHAPE.is_match(&pan).then_some(pan)
}

/// Indian passport numbers are read as a 7-9 digit core. OCR tends to put a
/// stray letter, `$` or `=` in front of it, so those are peeled off first.
pub fn passport_number(value: &str, _ctx: &MatchContext<'_>) -> Option<String> {
    let without_label = PASSPORT_LABEL.replace_all(value, "");
    let without_currency = without_label.replace('$', "");
    let trimmed = without_currency.trim();
    let stripped = LEADING_LETTER.replace(trimmed, "");
    let stripped = stripped.trim();

    let number = PASSPORT_DIGITS
        .find(stripped)
        .map_or(stripped, |digits| digits.as_str());

    let valid = (7..=9).contains(&number.len()) && number.chars().all(|c| c.is_ascii_digit());
    valid.then(|| number.to_string())
}

/// State code (2 letters) + RTO code (2 digits) + year (4) + serial (7).
pub fn driving_license_number(value: &str, _ctx: &MatchContext<'_>) -> Option<String> {
    let number = strip_separators(value).to_uppercase();
    DRIVING_LICENSE_SHAPE.is_match(&number).then_some(number)
}

/// EPIC number: 3 letters + 7 digits.
pub fn voter_id_number(value: &str, _ctx: &MatchContext<'_>) -> Option<String> {
    let number = value.trim().to_uppercase();
    VOTER_ID_SHAPE.is_match(&number).then_some(number)
}
