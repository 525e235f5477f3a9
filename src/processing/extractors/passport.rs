// Passports carry the most OCR noise: stray letters and `$` around the
// number, surname/given-name layouts and a machine-readable zone.

use lazy_static::lazy_static;
use regex::Regex;

use super::DATE;
use crate::models::{DocumentType, ExtractedFields, Field, INDIAN_CITIES, INDIAN_SURNAMES};
use crate::processing::patterns::{apply_rules, FieldRule, TextSource};
use crate::processing::text::collapse_whitespace;
use crate::validation::dates::{date_of_birth, expiry_date, issue_date};
use crate::validation::gender::gender;
use crate::validation::ids::passport_number;
use crate::validation::location::{nationality, place_of_issue};
use crate::validation::names::person_name;
use crate::validation::MatchContext;

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<String>>()
        .join("|")
}

lazy_static! {
    static ref SURNAMES: String = alternation(INDIAN_SURNAMES);
    static ref CITIES: String = alternation(INDIAN_CITIES);

    static ref RULES: Vec<FieldRule> = vec![
        FieldRule::new(
            Field::PassportNumber,
            TextSource::Normalized,
            &[
                r"(?i:Passport)\s*(?i:No|Number|#)?[.:\s]*([A-Z0-9-]+)",
                // "J = 3879331", "T 3879331", "= 3879331"
                r"[=:]\s*[A-Z]?\s*([0-9]{7,9})\b",
                r"\b([A-Z][0-9]{7,9})\b",
                r"\b([A-Z]\s?[0-9]{7,9})\b",
                r"(?i:Passport)\s+[A-Za-z]+\s+([A-Z0-9-]+)",
            ],
            passport_number,
        ),
        FieldRule::new(
            Field::Name,
            TextSource::Normalized,
            &[
                r"(?i:Given\s+Names?(?:\(s\))?)[:\s]+([A-Z]{2,}(?:\s[A-Z]{2,})*)\b",
                r"(?i:नाम|Name)[:\s]+([A-Z]{2,}(?:\s[A-Z]{2,})*)\b",
            ],
            passport_name,
        ),
        FieldRule::new(
            Field::Name,
            TextSource::Raw,
            &[r"P<[A-Z]{3}([A-Z]+<<[A-Z<]+)"],
            mrz_name,
        ),
        FieldRule::new(
            Field::Name,
            TextSource::Normalized,
            &[
                format!(r"\b((?:{})\s+[A-Z]{{3,}})\b", *SURNAMES),
                format!(r"\b([A-Z]{{4,}}\s+(?:{}))\b", *SURNAMES),
                r"\b([A-Z]{4,}\s+[A-Z]{4,}(?:\s+[A-Z]{4,})?)\b(?:\s|$|[0-9]|REPUBLIC|INDIA|OF|PASSPORT)"
                    .to_string(),
            ],
            passport_name,
        ),
        FieldRule::new(
            Field::Name,
            TextSource::Normalized,
            &[format!(r"\b([A-Z]{{5,}}\s+(?:{}))\b", *SURNAMES)],
            person_name,
        ),
        FieldRule::new(
            Field::DateOfBirth,
            TextSource::Normalized,
            &[
                format!(r"(?i:Date\s+of\s+Birth|DOB|जन्म\s+तिथि|Birth)[:\s]*({})", DATE),
                format!(r"({})\b.*?(?i:Date\s+of\s+Birth|Birth|जन्म|DOB)", DATE),
                format!(r"\b({})\b", DATE),
            ],
            date_of_birth,
        ),
        FieldRule::new(
            Field::IssueDate,
            TextSource::Normalized,
            &[
                format!(r"(?i:Date\s+of\s+Issue|Issue\s+Date|जारी\s+तिथि|Issued)[:\s]*({})", DATE),
                format!(r"({})\b.*?(?i:Date\s+of\s+Issue|Issue|जारी)", DATE),
                format!(r"(?i:Issue|जारी)[:\s]*({})\b", DATE),
                format!(r"\b({})\b", DATE),
            ],
            issue_date,
        ),
        FieldRule::new(
            Field::ExpiryDate,
            TextSource::Normalized,
            &[
                format!(
                    r"(?i:Date\s+of\s+Expiry|Expiry\s+Date|Expires|Valid\s+until|Valid\s+upto)[:\s]*({})",
                    DATE
                ),
                format!(r"({})\b.*?(?i:Expiry|Expires|Valid)", DATE),
                format!(r"\b({})\b", DATE),
            ],
            expiry_date,
        ),
        FieldRule::new(
            Field::PlaceOfIssue,
            TextSource::Normalized,
            &[
                r"(?i:Place\s+of\s+Issue|जारी\s+करने\s+का\s+स्थान)[:\s]+([A-Z]{3,}(?:[ -][A-Z]{3,})*)\b"
                    .to_string(),
                format!(r"(?i)\b({})\b", *CITIES),
                r"(?i:Place\s+of\s+Birth)[:\s]+([A-Z]{3,}(?:[ -][A-Z]{3,})*)\b".to_string(),
            ],
            place_of_issue,
        ),
        FieldRule::new(
            Field::Nationality,
            TextSource::Normalized,
            &[
                r"(?i)Nationality[:\s]+(?:भारतीय|Indian|INDIA)",
                r"(?i)(?:भारतीय|Indian)\s*[/|]\s*(?:Nationality|राष्ट्रीयता)?",
            ],
            nationality,
        ),
        FieldRule::new(
            Field::Gender,
            TextSource::Normalized,
            &[
                r"(?i:Sex|Gender)[:\s/]+(?i:(FEMALE|MALE|M|F))\b",
                r"(?i:Sex|Gender)[:\s/]+(पुरुष|महिला)",
            ],
            gender,
        ),
    ];
}

pub fn extract(text: &str) -> ExtractedFields {
    apply_rules(DocumentType::Passport, text, &RULES)
}

fn is_surname(token: &str) -> bool {
    INDIAN_SURNAMES.contains(&token)
}

/// Name validator that recovers names split across a surname/given-name
/// layout. A lone given name is paired with an adjacent known surname; a
/// two-word name with a known surname is replaced by a longer permutation
/// found elsewhere in the text.
fn passport_name(value: &str, ctx: &MatchContext<'_>) -> Option<String> {
    let candidate = collapse_whitespace(value).to_uppercase();
    let tokens: Vec<String> = candidate.split(' ').map(str::to_string).collect();

    let name = match tokens.as_slice() {
        [given] => pair_with_surname(given, ctx)?,
        [first, second] => longer_permutation(first, second, ctx).unwrap_or(candidate),
        _ => candidate,
    };
    person_name(&name, ctx)
}

fn pair_with_surname(given: &str, ctx: &MatchContext<'_>) -> Option<String> {
    if is_surname(given) {
        return None;
    }
    let given = regex::escape(given);
    let pattern = format!(
        r"\b((?:{surnames})\s+{given}|{given}\s+(?:{surnames}))\b",
        surnames = *SURNAMES,
        given = given
    );
    let re = Regex::new(&pattern).ok()?;
    let pair = re.captures(ctx.text)?.get(1)?.as_str();
    Some(pair.to_string())
}

fn longer_permutation(first: &str, second: &str, ctx: &MatchContext<'_>) -> Option<String> {
    let current_len = first.len() + 1 + second.len();
    let pattern = if is_surname(second) {
        // "ROHIT SINGH": look for "SINGH ROHIT <middle>"
        format!(
            r"\b({}\s+{}(?:\s+[A-Z]{{3,}})?)\b",
            regex::escape(second),
            regex::escape(first)
        )
    } else if is_surname(first) {
        // "SINGH ROHIT": look for "<first> ROHIT SINGH"
        format!(
            r"\b((?:[A-Z]{{3,}}\s+)?{}\s+{})\b",
            regex::escape(second),
            regex::escape(first)
        )
    } else {
        return None;
    };
    let re = Regex::new(&pattern).ok()?;
    let longer = re
        .captures_iter(ctx.text)
        .filter_map(|captures| captures.get(1))
        .map(|found| collapse_whitespace(found.as_str()))
        .find(|found| found.len() > current_len && person_name(found, ctx).is_some());
    longer
}

/// MRZ names are `SURNAME<<GIVEN<NAMES`; returned in reading order.
fn mrz_name(value: &str, ctx: &MatchContext<'_>) -> Option<String> {
    let (surname, given) = value.split_once("<<")?;
    let given = given.replace('<', " ");
    let name = format!("{} {}", given.trim(), surname);
    person_name(&name, ctx)
}
