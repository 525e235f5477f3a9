// Aadhaar auxiliary numbers, stored in the free-form otherInfo columns.

use crate::validation::MatchContext;

pub fn mobile_number(value: &str, _ctx: &MatchContext<'_>) -> Option<String> {
    let value = value.trim();
    (value.len() == 10 && value.chars().all(|c| c.is_ascii_digit()))
        .then(|| format!("Mobile: {}", value))
}

/// Virtual ID: 16 digits, usually printed in groups of four.
pub fn virtual_id(value: &str, _ctx: &MatchContext<'_>) -> Option<String> {
    let value = value.trim();
    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    (digits.len() == 16 && digits.chars().all(|c| c.is_ascii_digit()))
        .then(|| format!("VID: {}", value))
}
