use lazy_static::lazy_static;

use super::{DATE, NAME_TOKENS};
use crate::models::{DocumentType, ExtractedFields, Field};
use crate::processing::patterns::{apply_rules, FieldRule, TextSource};
use crate::validation::dates::date_of_birth;
use crate::validation::ids::pan_number;
use crate::validation::names::person_name;

// `Α` (Greek capital alpha) is accepted wherever a Latin letter is expected;
// the validator folds it back to `A`.
const PAN: &str = r"[A-ZΑ]{5}[0-9]{4}[A-ZΑ]";

lazy_static! {
    static ref RULES: Vec<FieldRule> = vec![
        FieldRule::new(
            Field::PanNumber,
            TextSource::Normalized,
            &[
                format!(r"\b({})\b", PAN),
                format!(r"(?i:PAN|Permanent\s+Account\s+Number|पैन\s+नंबर|पैन)[:\s]*({})", PAN),
                format!(r"({})", PAN),
                // First letter split off by OCR: "Α BCDE1234F"
                r"\b([A-ZΑ]\s?[A-ZΑ]{4}[0-9]{4}[A-ZΑ])\b".to_string(),
            ],
            pan_number,
        ),
        FieldRule::new(
            Field::Name,
            TextSource::Normalized,
            &[
                format!(
                    r"(?i:नाम|Name)[:\s/]+(?:(?i:Name)[:\s/]+)?({}?)(?:\s+(?i:Father|पिता|Date|जन्म)|\s*$)",
                    NAME_TOKENS
                ),
                r"(?i:नाम|Name)[:\s/]+(?:(?i:Name)[:\s/]+)?([A-Z][A-Z\s]{4,})".to_string(),
                r"(?:स्थायी|Permanent|Account|Number|Card|कार्ड).{0,30}?([A-Z]{4,}\s+[A-Z]{4,}(?:\s+[A-Z]{4,})?)".to_string(),
                r"\b([A-Z]{4,}\s+[A-Z]{4,}(?:\s+[A-Z]{4,})?)\b(?:\s|$|Father|पिता|Date|जन्म)".to_string(),
            ],
            person_name,
        ),
        FieldRule::new(
            Field::FatherName,
            TextSource::Normalized,
            &[
                format!(
                    r"(?i:पिता\s+का\s+नाम|Father'?s?\s+Name|Father)[:\s/]+(?:(?i:Father'?s?\s+Name|Name)[:\s/]+)?({}?)(?:\s+(?i:Date|जन्म)|\s*[0-9]|\s*$)",
                    NAME_TOKENS
                ),
                r"(?i:Father)[:\s]+([A-Z]{4,}\s+[A-Z]{4,}(?:\s+[A-Z]{4,})?)".to_string(),
            ],
            person_name,
        ),
        FieldRule::new(
            Field::DateOfBirth,
            TextSource::Normalized,
            &[
                format!(r"(?i:जन्म\s+की\s+तारीख|Date\s+of\s+Birth|DOB|Birth)[:\s/]+({})", DATE),
                format!(r"({})\b.*?(?i:Birth|जन्म|DOB|Date)", DATE),
                format!(r"\b({})\b(?:\s|$|Signature|हस्ताक्षर)", DATE),
            ],
            date_of_birth,
        ),
    ];
}

pub fn extract(text: &str) -> ExtractedFields {
    apply_rules(DocumentType::Pan, text, &RULES)
}
