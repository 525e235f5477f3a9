// Document type detection. Each type has a strong signal (keyword pair) and
// a weak one (ID-number shape). Weak signals are vetoed by other types'
// keywords. Rules are evaluated in a fixed order and the first hit wins.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::models::{Concept, DocumentType};
use crate::processing::text::{contains_concept, normalize_upper};
use crate::validation::ids::fold_lookalikes;

lazy_static! {
    static ref AADHAAR_GROUPS: Regex = Regex::new(r"\b[0-9]{4} [0-9]{4} [0-9]{4}\b").unwrap();
    static ref MRZ_PREFIX: Regex = Regex::new(r"P<[A-Z]{3}").unwrap();
    static ref PASSPORT_DIGITS: Regex = Regex::new(r"[0-9]{7,9}").unwrap();
    static ref PAN_TOKEN: Regex = Regex::new(r"\b[A-Z]{5}[0-9]{4}[A-Z]\b").unwrap();
    static ref DRIVING_LICENSE_TOKEN: Regex = Regex::new(r"\b[A-Z]{2}[0-9]{2}[0-9]{4}[0-9]{7}\b").unwrap();
    static ref VOTER_ID_TOKEN: Regex = Regex::new(r"\b[A-Z]{3}[0-9]{7}\b").unwrap();
}

struct Markers {
    aadhaar: bool,
    pan: bool,
    passport: bool,
}

impl Markers {
    fn scan(upper: &str) -> Self {
        Markers {
            aadhaar: contains_concept(upper, Concept::Aadhaar),
            pan: contains_concept(upper, Concept::IncomeTax)
                || contains_concept(upper, Concept::PermanentAccountNumber),
            passport: contains_concept(upper, Concept::Passport),
        }
    }
}

/// Classifies OCR text into one of the supported document types, or
/// `DocumentType::Other` when nothing matches.
pub fn classify(text: &str) -> DocumentType {
    let doc_type = detect(text);
    debug!("classified document as {}", doc_type);
    doc_type
}

fn detect(raw: &str) -> DocumentType {
    let upper = fold_lookalikes(&normalize_upper(raw));
    if upper.is_empty() {
        return DocumentType::Other;
    }
    let has = |concept| contains_concept(&upper, concept);
    let markers = Markers::scan(&upper);

    // 4-4-4 grouping is checked on the text as recognized.
    if (markers.aadhaar && has(Concept::GovernmentOfIndia))
        || (AADHAAR_GROUPS.is_match(raw) && !markers.pan && !markers.passport)
    {
        return DocumentType::Aadhaar;
    }

    if (has(Concept::IncomeTax) && has(Concept::PermanentAccountNumber))
        || (PAN_TOKEN.is_match(&upper) && !markers.aadhaar && !markers.passport)
    {
        return DocumentType::Pan;
    }

    if markers.passport
        || MRZ_PREFIX.is_match(raw)
        || (has(Concept::RepublicOfIndia) && PASSPORT_DIGITS.is_match(&upper))
    {
        return DocumentType::Passport;
    }

    if (has(Concept::DrivingLicence) && has(Concept::TransportAuthority))
        || (DRIVING_LICENSE_TOKEN.is_match(&upper) && !markers.pan && !markers.aadhaar)
    {
        return DocumentType::DrivingLicense;
    }

    if (has(Concept::Voter) && has(Concept::ElectionAuthority))
        || (VOTER_ID_TOKEN.is_match(&upper) && !markers.pan && !markers.aadhaar)
    {
        return DocumentType::VoterId;
    }

    DocumentType::Other
}
