use std::fmt::Display;


/// Reasons a hex string can not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// The input does not contain an even number of characters.
    OddLength,
    /// The first character of a failing byte pair that is not a hex digit.
    InvalidCharacter(char),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::OddLength => {
                write!(f, "Hex string contains an odd number of characters.")
            }
            DecodeError::InvalidCharacter(c) => {
                write!(f, "Invalid hex character: {c}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Decode a string of hex literals into a vector of bytes.
///
/// Every two characters form one byte, most significant digit first.
/// Digits are case-insensitive, anything outside of `0-9`, `a-f` and `A-F`
/// is rejected, including signs, whitespace and `0x` prefixes.
/// The length is counted in characters, not in UTF-8 bytes.
///
/// Either the whole input is decoded or the first error is returned.
pub fn decode(s: &str) -> Result<Vec<u8>, DecodeError> {
    let count = s.chars().count();
    if !count.is_multiple_of(2) {
        return Err(DecodeError::OddLength);
    }

    let mut bytes = Vec::with_capacity(count / 2);
    let mut chars = s.chars();
    while let (Some(high), Some(low)) = (chars.next(), chars.next()) {
        bytes.push(decode_pair(high, low)?);
    }
    Ok(bytes)
}

/// Decode a single byte pair. The high digit is checked first, so a pair
/// with two bad characters reports the left one.
fn decode_pair(high: char, low: char) -> Result<u8, DecodeError> {
    match (high.to_digit(16), low.to_digit(16)) {
        (Some(h), Some(l)) => Ok(((h << 4) | l) as u8),
        (None, _) => Err(DecodeError::InvalidCharacter(high)),
        (Some(_), None) => Err(DecodeError::InvalidCharacter(low)),
    }
}
