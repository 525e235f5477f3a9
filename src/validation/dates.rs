use lazy_static::lazy_static;
use regex::Regex;

use crate::models::Field;
use crate::validation::MatchContext;

lazy_static! {
    static ref DATE_SHAPE: Regex = Regex::new(r"^[0-9]{2}[-/][0-9]{2}[-/][0-9]{4}$").unwrap();
}

pub const BIRTH_YEARS: (i32, i32) = (1900, 2010);
pub const ISSUE_YEARS: (i32, i32) = (2000, 2020);
pub const FIRST_EXPIRY_YEAR: i32 = 2020;

/// `DD/MM/YYYY` or `DD-MM-YYYY`.
pub fn is_date(value: &str) -> bool {
    DATE_SHAPE.is_match(value)
}

pub fn date_year(value: &str) -> Option<i32> {
    if !is_date(value) {
        return None;
    }
    value.split(|c| c == '/' || c == '-').nth(2)?.parse().ok()
}

pub fn date_of_birth(value: &str, _ctx: &MatchContext<'_>) -> Option<String> {
    let value = value.trim();
    let year = date_year(value)?;
    (BIRTH_YEARS.0..=BIRTH_YEARS.1)
        .contains(&year)
        .then(|| value.to_string())
}

/// Issue dates fall in their own band and never repeat the birth date.
pub fn issue_date(value: &str, ctx: &MatchContext<'_>) -> Option<String> {
    let value = value.trim();
    let year = date_year(value)?;
    if !(ISSUE_YEARS.0..=ISSUE_YEARS.1).contains(&year) {
        return None;
    }
    if ctx.fields.get(Field::DateOfBirth) == Some(value) {
        return None;
    }
    Some(value.to_string())
}

pub fn expiry_date(value: &str, ctx: &MatchContext<'_>) -> Option<String> {
    let value = value.trim();
    let year = date_year(value)?;
    if year < FIRST_EXPIRY_YEAR {
        return None;
    }
    let claimed = [Field::DateOfBirth, Field::IssueDate]
        .iter()
        .any(|field| ctx.fields.get(*field) == Some(value));
    if claimed {
        return None;
    }
    Some(value.to_string())
}
