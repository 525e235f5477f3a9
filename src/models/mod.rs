pub mod data;
pub mod rules;

pub use data::*;
pub use rules::{name_denylist, Concept, Keyword, INDIAN_CITIES, INDIAN_SURNAMES};
