use crate::models::DocumentType;

/// A localized keyword. Phrases match as substrings of the uppercased text,
/// words only when they stand alone (so `PAN` does not fire on `PANDEY`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Phrase(&'static str),
    Word(&'static str),
}

/// Concepts the classifier looks for, each with its Latin and Devanagari
/// spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Concept {
    Aadhaar,
    GovernmentOfIndia,
    IncomeTax,
    PermanentAccountNumber,
    Passport,
    RepublicOfIndia,
    DrivingLicence,
    TransportAuthority,
    Voter,
    ElectionAuthority,
}

impl Concept {
    pub fn keywords(&self) -> &'static [Keyword] {
        use Keyword::{Phrase, Word};
        match self {
            Concept::Aadhaar => &[Phrase("AADHAAR"), Phrase("AADHAR"), Phrase("आधार")],
            Concept::GovernmentOfIndia => &[Phrase("GOVERNMENT OF INDIA"), Phrase("भारत सरकार")],
            Concept::IncomeTax => &[Phrase("INCOME TAX"), Phrase("आयकर विभाग")],
            Concept::PermanentAccountNumber => &[
                Phrase("PERMANENT ACCOUNT NUMBER"),
                Phrase("स्थायी लेखा संख्या"),
                Word("PAN"),
            ],
            Concept::Passport => &[Phrase("PASSPORT"), Phrase("पासपोर्ट")],
            Concept::RepublicOfIndia => &[Phrase("REPUBLIC OF INDIA")],
            Concept::DrivingLicence => &[
                Phrase("DRIVING LICENSE"),
                Phrase("DRIVING LICENCE"),
                Phrase("ड्राइविंग लाइसेंस"),
            ],
            Concept::TransportAuthority => &[
                Phrase("MOTOR"),
                Phrase("VEHICLES"),
                Phrase("TRANSPORT"),
            ],
            Concept::Voter => &[Phrase("VOTER"), Phrase("मतदाता"), Word("EPIC")],
            Concept::ElectionAuthority => &[Phrase("ELECTION"), Phrase("COMMISSION")],
        }
    }
}

// Header and footer words that the name patterns would otherwise pick up.
const AADHAAR_NAME_DENYLIST: &[&str] = &[
    "REPUBLIC", "OF", "INDIA", "AADHAAR", "AADHAR", "आधार", "GOVERNMENT", "GOVT",
    "GOVERNMENT OF", "DOWNLOAD", "ISSUE", "DATE", "VID", "MOBILE", "DOB", "YEAR",
    "BIRTH", "MALE", "FEMALE", "GENDER", "ADDRESS", "UNIQUE", "IDENTIFICATION",
    "AUTHORITY", "मेरा", "मेरी", "पहचान",
];

const PAN_NAME_DENYLIST: &[&str] = &[
    "INCOME", "TAX", "DEPARTMENT", "PAN", "GOVERNMENT", "GOVT", "GOVT.", "OF", "INDIA",
    "NAME", "FATHER", "FATHER'S", "DATE", "BIRTH", "SIGNATURE", "स्थायी", "लेखा",
    "संख्या", "कार्ड", "E-PERMANENT", "PERMANENT", "ACCOUNT", "NUMBER", "CARD",
];

const PASSPORT_NAME_DENYLIST: &[&str] = &[
    "REPUBLIC", "OF", "INDIA", "PASSPORT", "REPUBLIC OF", "DATE", "BIRTH", "P<IND",
    "DEHRADUN", "DUBAI", "CODE", "GOWNLRY", "COUNTRY", "COUNTRY CODE", "TYPE",
    "NATIONALITY", "INDIAN", "ISSUE", "EXPIRY", "PLACE", "SURNAME", "GIVEN", "NAME",
    "NAMES", "SEX", "SIGNATURE", "HOLDER", "गा", "सिर", "EE", "GI", "SHAT",
];

const DRIVING_LICENSE_NAME_DENYLIST: &[&str] = &[
    "DRIVING", "LICENSE", "LICENCE", "MOTOR", "VEHICLES", "VEHICLE", "TRANSPORT",
    "INDIAN", "UNION", "INDIA", "GOVERNMENT", "STATE", "DEPARTMENT", "AUTHORITY",
    "ISSUED", "VALID", "TILL", "DATE", "BIRTH", "ADDRESS", "NAME", "CLASS",
];

const VOTER_ID_NAME_DENYLIST: &[&str] = &[
    "ELECTION", "COMMISSION", "VOTER", "EPIC", "GOVERNMENT", "INDIA", "OF", "IDENTITY",
    "CARD", "ELECTOR", "ELECTORS", "PHOTO", "NAME", "FATHER", "HUSBAND", "ADDRESS",
    "DATE", "BIRTH", "SEX", "AGE",
];

/// Words that must never be accepted as (part of) a person's name on the
/// given document type.
pub fn name_denylist(doc_type: DocumentType) -> &'static [&'static str] {
    match doc_type {
        DocumentType::Aadhaar => AADHAAR_NAME_DENYLIST,
        DocumentType::Pan => PAN_NAME_DENYLIST,
        DocumentType::Passport => PASSPORT_NAME_DENYLIST,
        DocumentType::DrivingLicense => DRIVING_LICENSE_NAME_DENYLIST,
        DocumentType::VoterId => VOTER_ID_NAME_DENYLIST,
        DocumentType::Other => &[],
    }
}

/// Common surnames used to recover names printed surname-first.
pub const INDIAN_SURNAMES: &[&str] = &[
    "SINGH", "KUMAR", "SHARMA", "PATEL", "RAO", "REDDY", "MEHTA", "GUPTA", "VERMA",
    "YADAV", "MISHRA", "JHA", "SAXENA", "TIWARI", "JOSHI", "CHAUDHARY", "AGRAWAL", "JAIN",
];

/// Passport issuing offices and large cities recognised as place of issue.
pub const INDIAN_CITIES: &[&str] = &[
    "DEHRADUN", "DELHI", "MUMBAI", "KOLKATA", "CHENNAI", "BANGALORE", "HYDERABAD", "PUNE",
    "AHMEDABAD", "JAIPUR", "LUCKNOW", "KANPUR", "NAGPUR", "INDORE", "THANE", "BHOPAL",
    "VISAKHAPATNAM", "PATNA", "VADODARA", "GHAZIABAD", "LUDHIANA", "AGRA", "NASHIK",
    "FARIDABAD", "MEERUT", "RAJKOT", "VARANASI", "SRINAGAR", "AMRITSAR", "NOIDA", "RANCHI",
    "CHANDIGARH", "JABALPUR", "GWALIOR", "RAIPUR", "KOTA", "BAREILLY", "MORADABAD",
    "MYSORE", "GURGAON", "ALIGARH", "JALANDHAR", "TIRUCHIRAPALLI", "BHUBANESWAR", "SALEM",
    "WARANGAL", "MIRA-BHAYANDAR", "THIRUVANANTHAPURAM", "BIHAR", "SHARIF", "SAHARANPUR",
    "JODHPUR", "DUBAI", "BANGALURU",
];
