use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The five supported Indian ID documents, plus the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Aadhaar,
    Pan,
    Passport,
    DrivingLicense,
    VoterId,
    #[default]
    Other,
}

impl DocumentType {
    pub const ALL: [DocumentType; 6] = [
        DocumentType::Aadhaar,
        DocumentType::Pan,
        DocumentType::Passport,
        DocumentType::DrivingLicense,
        DocumentType::VoterId,
        DocumentType::Other,
    ];

    /// Tag written to the spreadsheet and used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Aadhaar => "aadhaar",
            DocumentType::Pan => "pan",
            DocumentType::Passport => "passport",
            DocumentType::DrivingLicense => "driving_license",
            DocumentType::VoterId => "voter_id",
            DocumentType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Aadhaar => "Aadhaar Card",
            DocumentType::Pan => "PAN Card",
            DocumentType::Passport => "Passport",
            DocumentType::DrivingLicense => "Driving License",
            DocumentType::VoterId => "Voter ID",
            DocumentType::Other => "Other",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        DocumentType::ALL
            .iter()
            .copied()
            .find(|doc_type| doc_type.as_str() == wanted)
            .ok_or_else(|| format!("Unknown document type: {}", s))
    }
}

/// Names of the fields an extractor can fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    FatherName,
    DateOfBirth,
    Gender,
    Address,
    Pincode,
    AadhaarNumber,
    PanNumber,
    PassportNumber,
    IdNumber,
    IssueDate,
    ExpiryDate,
    PlaceOfIssue,
    Nationality,
    OtherInfo1,
    OtherInfo2,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::FatherName => "fatherName",
            Field::DateOfBirth => "dateOfBirth",
            Field::Gender => "gender",
            Field::Address => "address",
            Field::Pincode => "pincode",
            Field::AadhaarNumber => "aadhaarNumber",
            Field::PanNumber => "panNumber",
            Field::PassportNumber => "passportNumber",
            Field::IdNumber => "idNumber",
            Field::IssueDate => "issueDate",
            Field::ExpiryDate => "expiryDate",
            Field::PlaceOfIssue => "placeOfIssue",
            Field::Nationality => "nationality",
            Field::OtherInfo1 => "otherInfo1",
            Field::OtherInfo2 => "otherInfo2",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to extracted value. Fields that were not found are absent,
/// never present with an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedFields(BTreeMap<Field, String>);

impl ExtractedFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Stores a value; blank values are dropped so absence stays meaningful.
    pub fn insert(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if !value.trim().is_empty() {
            self.0.insert(field, value);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// The document's identifier, whichever ID field the extractor used.
    pub fn id_number(&self) -> Option<&str> {
        [
            Field::IdNumber,
            Field::AadhaarNumber,
            Field::PassportNumber,
            Field::PanNumber,
        ]
        .iter()
        .find_map(|field| self.get(*field))
    }
}

/// Output of `classify_and_extract`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub document_type: DocumentType,
    pub extracted_data: ExtractedFields,
}

/// Raw text and confidence returned by a text recognizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    pub text: String,
    /// 0-100, as reported by the recognizer
    pub confidence: f32,
}

/// Everything the pipeline knows about one scan attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    pub document_type: DocumentType,
    pub raw_text: String,
    pub extracted_data: ExtractedFields,
    pub confidence: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_type_round_trips_through_tag() {
        for doc_type in DocumentType::ALL {
            assert_eq!(doc_type.as_str().parse::<DocumentType>().unwrap(), doc_type);
        }
        assert_eq!("Driving-License".parse::<DocumentType>().unwrap(), DocumentType::DrivingLicense);
        assert!("ration_card".parse::<DocumentType>().is_err());
    }

    #[test]
    fn test_document_type_serializes_as_tag() {
        let json = serde_json::to_string(&DocumentType::VoterId).unwrap();
        assert_eq!(json, "\"voter_id\"");
    }

    #[test]
    fn test_blank_values_are_not_stored() {
        let mut fields = ExtractedFields::new();
        fields.insert(Field::Name, "   ");
        fields.insert(Field::Pincode, "411001");
        assert!(!fields.contains(Field::Name));
        assert_eq!(fields.get(Field::Pincode), Some("411001"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_fields_serialize_with_camel_case_keys() {
        let mut fields = ExtractedFields::new();
        fields.insert(Field::DateOfBirth, "04/04/1985");
        fields.insert(Field::OtherInfo2, "VID: 9138 4815 4763 1445");
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["dateOfBirth"], "04/04/1985");
        assert_eq!(json["otherInfo2"], "VID: 9138 4815 4763 1445");
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_id_number_prefers_generic_id() {
        let mut fields = ExtractedFields::new();
        fields.insert(Field::PanNumber, "ABCDE1234F");
        assert_eq!(fields.id_number(), Some("ABCDE1234F"));
        fields.insert(Field::IdNumber, "MH1220110012345");
        assert_eq!(fields.id_number(), Some("MH1220110012345"));
    }

    #[test]
    fn test_scan_result_json_shape() {
        let mut fields = ExtractedFields::new();
        fields.insert(Field::PanNumber, "ABCDE1234F");
        let result = ScanResult {
            document_type: DocumentType::Pan,
            extracted_data: fields,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["documentType"], "pan");
        assert_eq!(json["extractedData"]["panNumber"], "ABCDE1234F");
    }
}
