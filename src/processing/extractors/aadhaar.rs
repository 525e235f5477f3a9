use lazy_static::lazy_static;

use super::{address_span, DATE};
use crate::models::{DocumentType, ExtractedFields, Field};
use crate::processing::patterns::{apply_rules, FieldRule, TextSource};
use crate::validation::contact::{mobile_number, virtual_id};
use crate::validation::dates::date_of_birth;
use crate::validation::gender::gender;
use crate::validation::ids::aadhaar_number;
use crate::validation::location::{address, pincode};
use crate::validation::names::name_before_boilerplate;

lazy_static! {
    static ref RULES: Vec<FieldRule> = vec![
        FieldRule::new(
            Field::AadhaarNumber,
            TextSource::Normalized,
            &[
                // A fourth group means a 16-digit VID; the trailing capture
                // is preferred and fails the 12-digit check.
                r"\b([0-9]{4}\s[0-9]{4}\s[0-9]{4})(\s[0-9]{4})?\b",
                r"\b([0-9]{4}-[0-9]{4}-[0-9]{4})\b",
                r"\b([0-9]{12})\b",
                r"(?i:Aadhaar|Aadhar|आधार)[:\s]*([0-9]{4}\s?[0-9]{4}\s?[0-9]{4})",
            ],
            aadhaar_number,
        ),
        FieldRule::new(
            Field::Name,
            TextSource::Normalized,
            &[
                // Devanagari name followed by its Latin transliteration
                r"[\x{0900}-\x{097F}\s]{5,}\s+([A-Z]{2,}(?:\s[A-Z]{2,}){1,3})\b",
                r"(?i:नाम|Name)[:\s]+([A-Z][A-Z\s]{4,})",
                r"\b([A-Z]{5,}\s+[A-Z]{4,}(?:\s+[A-Z]{4,})?)\b(?:\s|$|[0-9]|DOB|जन्म|Gender|पुरुष|महिला)",
                r"\b([A-Z]{4,}\s+[A-Z]{4,}(?:\s+[A-Z]{4,})?)\b",
            ],
            name_before_boilerplate,
        ),
        FieldRule::new(
            Field::DateOfBirth,
            TextSource::Normalized,
            &[
                format!(r"(?i:जन्म\s+तारीख|DOB|Date\s+of\s+Birth)[:\s/]*({})", DATE),
                format!(r"({})\b.*?(?i:DOB|जन्म|Birth)", DATE),
                format!(r"\b({})\b(?:\s|$|Gender|पुरुष|महिला|MALE|FEMALE)", DATE),
            ],
            date_of_birth,
        ),
        FieldRule::new(
            Field::Gender,
            TextSource::Normalized,
            &[
                r"(?:पुरुष|महिला)\s*/?\s*(?i:(FEMALE|MALE|M|F))\b",
                r"\b(?i:(FEMALE|MALE|M|F))\b(?:\s|$|Gender|Sex|पुरुष|महिला)",
                r"(पुरुष|महिला)",
            ],
            gender,
        ),
        FieldRule::new(
            Field::OtherInfo1,
            TextSource::Normalized,
            &[
                r"(?i:Mobile\s+No|Mobile)[.:\s]*([0-9]{10})\b",
                r"\b([0-9]{10})\b(?:\s|$|VID|Download|Issue)",
            ],
            mobile_number,
        ),
        FieldRule::new(
            Field::OtherInfo2,
            TextSource::Normalized,
            &[
                r"(?i:VID)\s*:\s*([0-9]{4}\s[0-9]{4}\s[0-9]{4}\s[0-9]{4})",
                r"(?i:VID)\s*:\s*([0-9]{16})",
            ],
            virtual_id,
        ),
        FieldRule::new(
            Field::Address,
            TextSource::Raw,
            &[address_span("Address|पता", 5)],
            address,
        ),
        FieldRule::new(
            Field::Pincode,
            TextSource::Normalized,
            &[r"\b([0-9]{6})\b"],
            pincode,
        ),
    ];
}

pub fn extract(text: &str) -> ExtractedFields {
    apply_rules(DocumentType::Aadhaar, text, &RULES)
}
