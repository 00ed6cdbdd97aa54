//! Parsing code points from the command line.

use thiserror::Error;

/// An error produced when a code point argument is not an integer literal.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid code point '{input}': {reason}")]
pub struct ParseCodePointError {
    input: String,
    reason: &'static str,
}

impl ParseCodePointError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_owned(),
            reason,
        }
    }
}

/// Parses an integer literal as a code point.
///
/// Accepts decimal (`65`), hexadecimal with a `0x` or `0X` prefix (`0x41`)
/// and C-style octal with a leading zero (`0101`). The value is not checked
/// against the Unicode scalar range; anything that fits in a `u32` is
/// passed through to the font's character map as is.
pub fn parse_code_point(input: &str) -> Result<u32, ParseCodePointError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ParseCodePointError::new(input, "empty value"));
    }
    if text.starts_with('-') {
        return Err(ParseCodePointError::new(input, "negative value"));
    }
    let text = text.strip_prefix('+').unwrap_or(text);
    let (digits, radix) = if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        (hex, 16)
    } else if text.len() > 1 && text.starts_with('0') {
        (&text[1..], 8)
    } else {
        (text, 10)
    };
    // from_str_radix accepts its own sign prefix, which we've already handled
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ParseCodePointError::new(input, "not an integer literal"));
    }
    u32::from_str_radix(digits, radix)
        .map_err(|_| ParseCodePointError::new(input, "value out of range"))
}
