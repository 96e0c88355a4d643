use std::num::ParseIntError;

/// Parses a whole, non-negative number as typed by a user.
///
/// Surrounding whitespace is ignored and a leading `+` is accepted. Signs,
/// decimal points and digit separators are rejected.
pub fn parse_whole_number(text: &str) -> Result<u32, ParseIntError> {
    text.trim().parse::<u32>()
}

/// Parses a signed integer, leaving range checks to the caller.
pub fn parse_signed(text: &str) -> Result<i64, ParseIntError> {
    text.trim().parse::<i64>()
}

pub fn ratio(value: f64, weight: u32) -> f64 {
    if weight == 0 {
        f64::INFINITY
    } else {
        value / weight as f64
    }
}
