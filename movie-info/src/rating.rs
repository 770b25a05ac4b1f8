use lazy_static::lazy_static;
use regex::Regex;

/// OMDb placeholder for a missing value.
pub const NOT_AVAILABLE: &str = "N/A";

lazy_static! {
    static ref RATING_REGEX: Regex = Regex::new(r"\d+\.\d+").unwrap();
}

/// Turn an OMDb rating such as `"7.9/10"` into a number.
///
/// Absent ratings, `"N/A"` and strings without a decimal number all count as `0.0`.
pub fn normalize_rating(raw: Option<&str>) -> f64 {
    match raw {
        None | Some(NOT_AVAILABLE) => 0.0,
        Some(rating) => RATING_REGEX
            .find(rating)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0.0),
    }
}
