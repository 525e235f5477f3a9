use crate::models::name_denylist;
use crate::processing::text::collapse_whitespace;
use crate::validation::MatchContext;

const OCR_ARTIFACTS: [char; 3] = ['<', '>', '$'];

/// Person names: at least 5 characters and 2 uppercase tokens, no leading
/// digit, no OCR artifacts, and nothing from the document's denylist.
pub fn person_name(value: &str, ctx: &MatchContext<'_>) -> Option<String> {
    let name = collapse_whitespace(value).to_uppercase();
    is_valid_name(&name, name_denylist(ctx.doc_type)).then_some(name)
}

/// Like `person_name`, but first drops boilerplate words the capture ran
/// into after the name (`ROHIT SINGH MALE` reads as `ROHIT SINGH`).
pub fn name_before_boilerplate(value: &str, ctx: &MatchContext<'_>) -> Option<String> {
    let denylist = name_denylist(ctx.doc_type);
    let name = collapse_whitespace(value).to_uppercase();
    let mut tokens: Vec<&str> = name.split_whitespace().collect();
    while tokens.last().map_or(false, |token| denylist.contains(token)) {
        tokens.pop();
    }
    person_name(&tokens.join(" "), ctx)
}

pub fn is_valid_name(name: &str, denylist: &[&str]) -> bool {
    if name.chars().count() < 5 {
        return false;
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return false;
    }
    if name.contains(&OCR_ARTIFACTS[..]) {
        return false;
    }

    let tokens: Vec<&str> = name.split_whitespace().collect();
    if tokens.len() < 2 {
        return false;
    }
    !is_denylisted(name, denylist)
}

/// True when the whole candidate, or any single token of it, is boilerplate.
pub fn is_denylisted(name: &str, denylist: &[&str]) -> bool {
    denylist.contains(&name) || name.split_whitespace().any(|token| denylist.contains(&token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentType, ExtractedFields};
    use crate::validation::test_support::context;

    fn aadhaar_name(value: &str) -> Option<String> {
        let fields = ExtractedFields::new();
        person_name(value, &context(DocumentType::Aadhaar, "", &fields))
    }

    #[test]
    fn test_accepts_multi_token_names() {
        assert_eq!(aadhaar_name("VIJAY KUMAR AGGRAWAL").as_deref(), Some("VIJAY KUMAR AGGRAWAL"));
        assert_eq!(aadhaar_name(" Vijay\n  Kumar ").as_deref(), Some("VIJAY KUMAR"));
    }

    #[test]
    fn test_rejects_short_or_single_token() {
        assert_eq!(aadhaar_name("RAVI"), None);
        assert_eq!(aadhaar_name("AGGRAWAL"), None);
        assert_eq!(aadhaar_name("A B"), None);
    }

    #[test]
    fn test_rejects_artifacts_and_digits() {
        assert_eq!(aadhaar_name("1VIJAY KUMAR"), None);
        assert_eq!(aadhaar_name("SINGH<<ROHIT"), None);
        assert_eq!(aadhaar_name("ROHIT $SINGH"), None);
    }

    #[test]
    fn test_denylist_applies_to_tokens() {
        assert_eq!(aadhaar_name("GOVERNMENT OF INDIA"), None);
        assert_eq!(aadhaar_name("INDIA AADHAAR"), None);
        assert_eq!(aadhaar_name("VIJAY KUMAR AGGRAWAL DOB"), None);
    }

    #[test]
    fn test_denylist_is_per_document_type() {
        let fields = ExtractedFields::new();
        let pan = context(DocumentType::Pan, "", &fields);
        let passport = context(DocumentType::Passport, "", &fields);
        assert_eq!(person_name("ROHIT DEHRADUN", &pan).as_deref(), Some("ROHIT DEHRADUN"));
        assert_eq!(person_name("ROHIT DEHRADUN", &passport), None);
    }

    #[test]
    fn test_trailing_boilerplate_is_dropped() {
        let fields = ExtractedFields::new();
        let ctx = context(DocumentType::Aadhaar, "", &fields);
        assert_eq!(
            name_before_boilerplate("ROHIT SINGH MALE", &ctx).as_deref(),
            Some("ROHIT SINGH")
        );
        assert_eq!(
            name_before_boilerplate("VIJAY KUMAR BIRTH YEAR", &ctx).as_deref(),
            Some("VIJAY KUMAR")
        );
        assert_eq!(name_before_boilerplate("INDIA AADHAAR", &ctx), None);
        assert_eq!(name_before_boilerplate("GOVERNMENT ROHIT SINGH", &ctx), None);
        assert_eq!(name_before_boilerplate("ROHIT FEMALE", &ctx), None);
    }
}
