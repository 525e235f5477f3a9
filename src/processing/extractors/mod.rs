// Per-document field extraction. Every document type is a table of
// `FieldRule`s run by `apply_rules`; the tables live next to each other
// in the submodules.

pub mod aadhaar;
pub mod driving_license;
pub mod pan;
pub mod passport;
pub mod voter_id;

use log::{debug, info};

use crate::models::{DocumentType, ExtractedFields, ScanResult};
use crate::processing::classifier::classify;

/// `DD/MM/YYYY` or `DD-MM-YYYY`, used to assemble date patterns.
pub(crate) const DATE: &str = r"[0-9]{2}[-/][0-9]{2}[-/][0-9]{4}";

/// An uppercase person name of two to four tokens on a single line.
pub(crate) const NAME_TOKENS: &str = r"[A-Z]{2,}(?:[ ][A-Z]{2,}){1,3}";

/// A multi-line span after an address label, at most `extra_lines` lines
/// beyond the first.
pub(crate) fn address_span(labels: &str, extra_lines: usize) -> String {
    format!(r"(?i:{})[:\s]+([^\n]+(?:\n[^\n]+){{0,{}}})", labels, extra_lines)
}

/// Extracts the fields of an already classified document. `Other` yields
/// an empty set.
pub fn extract(text: &str, doc_type: DocumentType) -> ExtractedFields {
    let fields = match doc_type {
        DocumentType::Aadhaar => aadhaar::extract(text),
        DocumentType::Pan => pan::extract(text),
        DocumentType::Passport => passport::extract(text),
        DocumentType::DrivingLicense => driving_license::extract(text),
        DocumentType::VoterId => voter_id::extract(text),
        DocumentType::Other => ExtractedFields::new(),
    };
    debug!("extracted {} field(s) from {} text", fields.len(), doc_type);
    fields
}

/// Classifies raw OCR text and extracts the fields of the detected type.
pub fn classify_and_extract(raw_text: &str) -> ScanResult {
    let document_type = classify(raw_text);
    let extracted_data = extract(raw_text, document_type);
    info!(
        "document classified as {} with {} field(s)",
        document_type.label(),
        extracted_data.len()
    );
    ScanResult {
        document_type,
        extracted_data,
    }
}
