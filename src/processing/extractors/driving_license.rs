use lazy_static::lazy_static;

use super::{address_span, DATE};
use crate::models::{DocumentType, ExtractedFields, Field};
use crate::processing::patterns::{apply_rules, FieldRule, TextSource};
use crate::validation::dates::{date_of_birth, expiry_date, issue_date};
use crate::validation::ids::driving_license_number;
use crate::validation::location::{address, pincode};
use crate::validation::names::person_name;

lazy_static! {
    static ref RULES: Vec<FieldRule> = vec![
        FieldRule::new(
            Field::IdNumber,
            TextSource::Raw,
            &[
                r"\b([A-Z]{2}[0-9]{2}[0-9]{4}[0-9]{7})\b",
                r"\b([A-Z]{2} ?[0-9]{2} ?[0-9]{4} ?[0-9]{7})\b",
                r"(?i:License\s+No|Licence\s+No|DL\s+No|Driving\s+License)[.:\s]*([A-Z]{2}[ -]?[0-9]{2}[ -]?[0-9]{11})",
            ],
            driving_license_number,
        ),
        FieldRule::new(
            Field::Name,
            TextSource::Raw,
            &[
                r"(?i:Name|नाम)[:\s]+([A-Z][A-Z ]{2,})",
                r"(?i:Licensee'?s?\s+Name)[:\s]+([A-Z][A-Z ]{2,})",
                r"\b([A-Z]{3,} [A-Z]+ [A-Z]+)\b",
                r"\b([A-Z]{3,} [A-Z]+)\b",
            ],
            person_name,
        ),
        FieldRule::new(
            Field::DateOfBirth,
            TextSource::Raw,
            &[
                format!(r"(?i:Date\s+of\s+Birth|DOB|जन्म\s+तिथि)[:\s]+({})", DATE),
                format!(r"(?i:Birth)[:\s]*({})\b", DATE),
                format!(r"({})\b.*?(?i:Birth|DOB)", DATE),
            ],
            date_of_birth,
        ),
        FieldRule::new(
            Field::IssueDate,
            TextSource::Raw,
            &[
                format!(r"(?i:Date\s+of\s+Issue|Issued\s+On|Issued|Issue\s+Date)[:\s]+({})", DATE),
                format!(r"(?i:Issue)[:\s]*({})\b", DATE),
            ],
            issue_date,
        ),
        FieldRule::new(
            Field::ExpiryDate,
            TextSource::Raw,
            &[
                format!(r"(?i:Valid\s+Till|Valid\s+Until|Expiry\s+Date)[:\s]+({})", DATE),
                format!(r"(?i:Valid)[:\s]*({})\b", DATE),
            ],
            expiry_date,
        ),
        FieldRule::new(
            Field::Address,
            TextSource::Raw,
            &[address_span("Address|पता", 3), address_span("Residence", 3)],
            address,
        ),
        FieldRule::new(Field::Pincode, TextSource::Raw, &[r"\b([0-9]{6})\b"], pincode),
    ];
}

pub fn extract(text: &str) -> ExtractedFields {
    apply_rules(DocumentType::DrivingLicense, text, &RULES)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LICENSE: &str = "INDIAN UNION DRIVING LICENCE\n\
                           Issued by Transport Department, Uttarakhand\n\
                           DL No: UK07 20110012345\n\
                           Name: RAVI KUMAR NEGI\n\
                           S/D/W of: MOHAN SINGH NEGI\n\
                           DOB: 21/06/1988\n\
                           Issue Date: 15/03/2011\n\
                           Valid Till: 14/03/2031\n\
                           Address: 45 Chakrata Road\n\
                           Dehradun Uttarakhand 248001";

    #[test]
    fn test_card_layout() {
        let fields = extract(LICENSE);
        assert_eq!(fields.get(Field::IdNumber), Some("UK0720110012345"));
        assert_eq!(fields.get(Field::Name), Some("RAVI KUMAR NEGI"));
        assert_eq!(fields.get(Field::DateOfBirth), Some("21/06/1988"));
        assert_eq!(fields.get(Field::IssueDate), Some("15/03/2011"));
        assert_eq!(fields.get(Field::ExpiryDate), Some("14/03/2031"));
        assert_eq!(
            fields.get(Field::Address),
            Some("45 Chakrata Road Dehradun Uttarakhand 248001")
        );
        assert_eq!(fields.get(Field::Pincode), Some("248001"));
    }

    #[test]
    fn test_header_is_not_a_name() {
        let fields = extract("DRIVING LICENCE\nMOTOR VEHICLES DEPARTMENT");
        assert!(!fields.contains(Field::Name));
    }

    #[test]
    fn test_compact_number() {
        let fields = extract("DL UK0720110012345");
        assert_eq!(fields.get(Field::IdNumber), Some("UK0720110012345"));
    }
}
