use lazy_static::lazy_static;
use regex::Regex;

use crate::processing::text::collapse_whitespace;
use crate::validation::MatchContext;

const MIN_ADDRESS_LEN: usize = 10;

lazy_static! {
    static ref BLANK_LINES: Regex = Regex::new(r"\n[ \t\r]*\n\s*").unwrap();
    static ref AADHAAR_SHAPED: Regex = Regex::new(r"[0-9]{4}\s?[0-9]{4}\s?[0-9]{4}").unwrap();
}

/// Folds a multi-line address span into one line. Blank lines separate
/// address blocks and become ", ".
pub fn fold_address(span: &str) -> String {
    let folded = BLANK_LINES.replace_all(span.trim(), ", ");
    collapse_whitespace(&folded)
}

/// Rejects short spans and spans that swallowed a 12-digit Aadhaar number.
pub fn address(value: &str, _ctx: &MatchContext<'_>) -> Option<String> {
    let address = fold_address(value);
    if address.chars().count() <= MIN_ADDRESS_LEN || AADHAAR_SHAPED.is_match(&address) {
        return None;
    }
    Some(address)
}

pub fn pincode(value: &str, _ctx: &MatchContext<'_>) -> Option<String> {
    let value = value.trim();
    (value.len() == 6 && value.chars().all(|c| c.is_ascii_digit())).then(|| value.to_string())
}

pub fn place_of_issue(value: &str, _ctx: &MatchContext<'_>) -> Option<String> {
    let place = collapse_whitespace(value);
    if place.is_empty() || place.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some(place.to_uppercase())
}

/// Assembly constituency printed on voter ID cards.
pub fn constituency(value: &str, _ctx: &MatchContext<'_>) -> Option<String> {
    let name = collapse_whitespace(value);
    (!name.is_empty()).then_some(name)
}

/// Any nationality label confirmed by an Indian marker in the text yields
/// the canonical value `Indian`.
pub fn nationality(_value: &str, ctx: &MatchContext<'_>) -> Option<String> {
    let indian = ctx.text.contains("भारतीय") || ctx.text.to_uppercase().contains("INDIAN");
    indian.then(|| "Indian".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentType, ExtractedFields};
    use crate::validation::test_support::context;

    #[test]
    fn test_fold_address() {
        assert_eq!(
            fold_address("S/O Ram Lal, House 12\n  Gandhi Nagar\n\nDehradun Uttarakhand "),
            "S/O Ram Lal, House 12 Gandhi Nagar, Dehradun Uttarakhand"
        );
    }

    #[test]
    fn test_address_rejections() {
        let fields = ExtractedFields::new();
        let ctx = context(DocumentType::Aadhaar, "", &fields);
        assert_eq!(address("Delhi", &ctx), None);
        assert_eq!(address("House 12 Gandhi Nagar\n3400 9872 2377", &ctx), None);
        assert_eq!(
            address("House 12\nGandhi Nagar", &ctx).as_deref(),
            Some("House 12 Gandhi Nagar")
        );
    }

    #[test]
    fn test_pincode() {
        let fields = ExtractedFields::new();
        let ctx = context(DocumentType::Aadhaar, "", &fields);
        assert_eq!(pincode("248001", &ctx).as_deref(), Some("248001"));
        assert_eq!(pincode("24800", &ctx), None);
    }

    #[test]
    fn test_place_of_issue() {
        let fields = ExtractedFields::new();
        let ctx = context(DocumentType::Passport, "", &fields);
        assert_eq!(place_of_issue("Dehradun", &ctx).as_deref(), Some("DEHRADUN"));
        assert_eq!(place_of_issue("12 DELHI", &ctx), None);
    }

    #[test]
    fn test_nationality_requires_indian_marker() {
        let fields = ExtractedFields::new();
        let indian = context(DocumentType::Passport, "Nationality: Indian", &fields);
        let blank = context(DocumentType::Passport, "Nationality: INDIA", &fields);
        let hindi = context(DocumentType::Passport, "राष्ट्रीयता भारतीय", &fields);
        assert_eq!(nationality("Nationality: Indian", &indian).as_deref(), Some("Indian"));
        assert_eq!(nationality("भारतीय", &hindi).as_deref(), Some("Indian"));
        assert_eq!(nationality("Nationality: INDIA", &blank), None);
    }
}
