use crate::validation::MatchContext;

pub const MALE: &str = "Male";
pub const FEMALE: &str = "Female";

/// Maps `M`/`MALE`/`पुरुष` and `F`/`FEMALE`/`महिला` to `Male`/`Female`.
/// Anything else is discarded; OCR never yields a third value.
pub fn normalize_gender(token: &str) -> Option<&'static str> {
    let token = token.trim().to_uppercase();
    if token == "M" || token == "MALE" || token.contains("पुरुष") {
        Some(MALE)
    } else if token == "F" || token == "FEMALE" || token.contains("महिला") {
        Some(FEMALE)
    } else {
        None
    }
}

pub fn gender(value: &str, _ctx: &MatchContext<'_>) -> Option<String> {
    normalize_gender(value).map(str::to_string)
}
