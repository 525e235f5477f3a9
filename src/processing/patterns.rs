// Table-driven field extraction: each field has an ordered list of patterns
// and a validator, and the first validated match wins.

use log::debug;
use regex::{Captures, Regex};

use crate::models::{DocumentType, ExtractedFields, Field};
use crate::processing::text::normalize;
use crate::validation::{MatchContext, Validator};

/// Which rendition of the OCR text a rule reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    /// `normalize(text)`: single-line, OCR artifacts removed
    Normalized,
    /// The text as recognized, newlines intact
    Raw,
}

pub struct FieldRule {
    pub field: Field,
    pub source: TextSource,
    pub patterns: Vec<Regex>,
    pub validate: Validator,
}

impl FieldRule {
    /// Compiles the pattern list. Rules live in `lazy_static` tables, so an
    /// invalid pattern panics on first use of the table.
    pub fn new<S: AsRef<str>>(
        field: Field,
        source: TextSource,
        patterns: &[S],
        validate: Validator,
    ) -> Self {
        FieldRule {
            field,
            source,
            patterns: patterns
                .iter()
                .map(|pattern| Regex::new(pattern.as_ref()).unwrap())
                .collect(),
            validate,
        }
    }

    /// Tries every pattern in order over all of its matches and returns the
    /// first candidate the validator accepts.
    pub fn find(&self, ctx: &MatchContext<'_>) -> Option<String> {
        for pattern in &self.patterns {
            for captures in pattern.captures_iter(ctx.text) {
                let candidate = preferred_capture(&captures);
                if let Some(value) = (self.validate)(candidate, ctx) {
                    return Some(value);
                }
            }
        }
        None
    }
}

/// The innermost participating group (highest-numbered non-empty capture),
/// falling back to the whole match.
pub fn preferred_capture<'t>(captures: &Captures<'t>) -> &'t str {
    (1..captures.len())
        .rev()
        .filter_map(|index| captures.get(index))
        .map(|group| group.as_str())
        .find(|value| !value.is_empty())
        .or_else(|| captures.get(0).map(|whole| whole.as_str()))
        .unwrap_or("")
}

/// Runs the rules in declaration order. A rule whose field is already set
/// is skipped, so later rules for the same field only fill gaps.
pub fn apply_rules(doc_type: DocumentType, raw: &str, rules: &[FieldRule]) -> ExtractedFields {
    let normalized = normalize(raw);
    let mut fields = ExtractedFields::new();

    for rule in rules {
        if fields.contains(rule.field) {
            continue;
        }
        let text = match rule.source {
            TextSource::Normalized => normalized.as_str(),
            TextSource::Raw => raw,
        };
        let ctx = MatchContext {
            doc_type,
            text,
            fields: &fields,
        };
        if let Some(value) = rule.find(&ctx) {
            debug!("{} {}: {}", doc_type, rule.field, value);
            fields.insert(rule.field, value);
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::dates::{date_of_birth, expiry_date, issue_date};

    fn keep(value: &str, _ctx: &MatchContext<'_>) -> Option<String> {
        Some(value.to_string())
    }

    fn digits_only(value: &str, _ctx: &MatchContext<'_>) -> Option<String> {
        value
            .chars()
            .all(|c| c.is_ascii_digit())
            .then(|| value.to_string())
    }

    #[test]
    fn test_preferred_capture() {
        let re = Regex::new(r"(A)(B)?(C)?").unwrap();
        let caps = re.captures("AB").unwrap();
        assert_eq!(preferred_capture(&caps), "B");

        let bare = Regex::new(r"[0-9]+").unwrap();
        let caps = bare.captures("x 42").unwrap();
        assert_eq!(preferred_capture(&caps), "42");
    }

    #[test]
    fn test_first_validated_match_wins() {
        let rules = vec![FieldRule::new(
            Field::IdNumber,
            TextSource::Normalized,
            &[r"ID:\s*(\S+)"],
            digits_only,
        )];
        let fields = apply_rules(DocumentType::Other, "ID: ABC ID: 123 ID: 456", &rules);
        assert_eq!(fields.get(Field::IdNumber), Some("123"));
    }

    #[test]
    fn test_patterns_are_tried_in_order() {
        let rules = vec![FieldRule::new(
            Field::IdNumber,
            TextSource::Normalized,
            &[r"NO\s+([0-9]+)", r"([0-9]+)"],
            keep,
        )];
        let fields = apply_rules(DocumentType::Other, "7 NO 99", &rules);
        assert_eq!(fields.get(Field::IdNumber), Some("99"));
    }

    #[test]
    fn test_later_rules_only_fill_gaps() {
        let rules = vec![
            FieldRule::new(Field::Name, TextSource::Normalized, &[r"NAME (\w+)"], keep),
            FieldRule::new(Field::Name, TextSource::Normalized, &[r"(\w+)"], keep),
            FieldRule::new(Field::Gender, TextSource::Normalized, &[r"NOTHING"], keep),
        ];
        let fields = apply_rules(DocumentType::Other, "HELLO NAME RAVI", &rules);
        assert_eq!(fields.get(Field::Name), Some("RAVI"));
        assert!(!fields.contains(Field::Gender));
    }

    #[test]
    fn test_sources() {
        let rules = vec![
            FieldRule::new(Field::OtherInfo1, TextSource::Raw, &[r"A\n(B)"], keep),
            FieldRule::new(Field::OtherInfo2, TextSource::Normalized, &[r"A (B)"], keep),
        ];
        let fields = apply_rules(DocumentType::Other, "A\nB", &rules);
        assert_eq!(fields.get(Field::OtherInfo1), Some("B"));
        assert_eq!(fields.get(Field::OtherInfo2), Some("B"));
    }

    #[test]
    fn test_unanchored_dates_fill_by_year_band() {
        let any_date = r"\b([0-9]{2}/[0-9]{2}/[0-9]{4})\b";
        let rules = vec![
            FieldRule::new(Field::DateOfBirth, TextSource::Normalized, &[any_date], date_of_birth),
            FieldRule::new(Field::IssueDate, TextSource::Normalized, &[any_date], issue_date),
            FieldRule::new(Field::ExpiryDate, TextSource::Normalized, &[any_date], expiry_date),
        ];
        let fields = apply_rules(
            DocumentType::Passport,
            "01/02/2031 05/06/2011 07/08/1990 09/10/2012",
            &rules,
        );
        assert_eq!(fields.get(Field::DateOfBirth), Some("07/08/1990"));
        assert_eq!(fields.get(Field::IssueDate), Some("05/06/2011"));
        assert_eq!(fields.get(Field::ExpiryDate), Some("01/02/2031"));
    }
}
