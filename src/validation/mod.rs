// Post-match validators. Every extraction pattern hands its capture to one of
// these; `None` rejects the candidate and the next match is tried.

pub mod contact;
pub mod dates;
pub mod gender;
pub mod ids;
pub mod location;
pub mod names;

use crate::models::{DocumentType, ExtractedFields};

/// What a validator can see besides the candidate itself.
#[derive(Debug, Clone, Copy)]
pub struct MatchContext<'a> {
    pub doc_type: DocumentType,
    /// The text the pattern ran over
    pub text: &'a str,
    /// Fields accepted so far for this document
    pub fields: &'a ExtractedFields,
}

/// Accepts (possibly rewriting) or rejects a candidate value.
pub type Validator = fn(&str, &MatchContext<'_>) -> Option<String>;
