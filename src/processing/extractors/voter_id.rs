use lazy_static::lazy_static;

use super::{address_span, DATE};
use crate::models::{DocumentType, ExtractedFields, Field};
use crate::processing::patterns::{apply_rules, FieldRule, TextSource};
use crate::validation::dates::date_of_birth;
use crate::validation::gender::gender;
use crate::validation::ids::voter_id_number;
use crate::validation::location::{address, constituency, pincode};
use crate::validation::names::person_name;

lazy_static! {
    static ref RULES: Vec<FieldRule> = vec![
        FieldRule::new(
            Field::IdNumber,
            TextSource::Raw,
            &[
                r"\b([A-Z]{3}[0-9]{7})\b",
                r"(?i:Voter\s+ID|EPIC\s+No|Electors\s+Photo\s+Identity\s+Card)[.:\s]*([A-Z]{3}[0-9]{7})",
                r"(?i:EPIC)[:\s]*([A-Z]{3}[0-9]{7})",
            ],
            voter_id_number,
        ),
        FieldRule::new(
            Field::Name,
            TextSource::Raw,
            &[
                r"(?i:Name|नाम)[:\s]+([A-Z][A-Z ]{2,})",
                r"(?i:Elector'?s?\s+Name)[:\s]+([A-Z][A-Z ]{2,})",
                r"\b([A-Z]{3,} [A-Z]+ [A-Z]+)\b",
                r"\b([A-Z]{3,} [A-Z]+)\b",
            ],
            person_name,
        ),
        FieldRule::new(
            Field::FatherName,
            TextSource::Raw,
            &[
                r"(?i:Father'?s?\s+Name|पिता\s+का\s+नाम)[:\s]+([A-Z][A-Z ]{2,})",
                r"(?i:Husband'?s?\s+Name|पति\s+का\s+नाम)[:\s]+([A-Z][A-Z ]{2,})",
                r"(?i:Father|Husband)[:\s]+([A-Z][A-Z ]{2,})",
            ],
            person_name,
        ),
        FieldRule::new(
            Field::DateOfBirth,
            TextSource::Raw,
            &[
                format!(r"(?i:Date\s+of\s+Birth|DOB|जन्म\s+तिथि|Age)[:\s]+({})", DATE),
                format!(r"(?i:Birth)[:\s]*({})\b", DATE),
                format!(r"({})\b.*?(?i:Birth|DOB|Age)", DATE),
            ],
            date_of_birth,
        ),
        FieldRule::new(
            Field::Address,
            TextSource::Raw,
            &[address_span("Address|पता", 4), address_span(r"Electoral\s+Roll", 3)],
            address,
        ),
        FieldRule::new(
            Field::Gender,
            TextSource::Raw,
            &[
                r"(?i:Sex|Gender)[:\s/]+(?i:(FEMALE|MALE|M|F))\b",
                r"(?i:Sex|Gender)[:\s/]+(पुरुष|महिला)",
            ],
            gender,
        ),
        FieldRule::new(
            Field::OtherInfo1,
            TextSource::Raw,
            &[r"(?i:Assembly\s+Constituency|Constituency|Assembly)[:\s]+([A-Z][A-Z ]{2,})"],
            constituency,
        ),
        FieldRule::new(Field::Pincode, TextSource::Raw, &[r"\b([0-9]{6})\b"], pincode),
    ];
}

pub fn extract(text: &str) -> ExtractedFields {
    apply_rules(DocumentType::VoterId, text, &RULES)
}
