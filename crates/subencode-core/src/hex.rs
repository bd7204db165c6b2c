//! Hex text cleaning and decoding shared by payload and alphabet parsing.
//!
//! Input usually arrives copy-pasted from hex dumps or string literals, so
//! carriage returns, line feeds, spaces and backslashes are treated as noise
//! and removed before any length or digit validation.

use crate::error::{EncodeError, Result};

/// Characters stripped from hex text before parsing.
pub const NOISE_CHARACTERS: [char; 4] = ['\r', '\n', ' ', '\\'];

/// Removes formatting noise from hex text.
///
/// Does not validate digits; see [`decode_hex`].
#[must_use]
pub fn clean(text: &str) -> String {
    text.chars()
        .filter(|c| !NOISE_CHARACTERS.contains(c))
        .collect()
}

/// Cleans `text` and rejects it if an odd number of hex digits remain.
///
/// # Errors
///
/// Returns [`EncodeError::MissingNibble`] when the cleaned text has odd length.
pub fn clean_checked(text: &str) -> Result<String> {
    let cleaned = clean(text);
    let length = cleaned.chars().count();
    if length % 2 == 0 {
        Ok(cleaned)
    } else {
        Err(EncodeError::MissingNibble {
            text: cleaned,
            length,
        })
    }
}

/// Cleans and decodes hex text into bytes, two digits per byte.
///
/// Digits are case-insensitive.
///
/// # Errors
///
/// Returns [`EncodeError::MissingNibble`] for an odd digit count and
/// [`EncodeError::InvalidHexDigit`] for any non-hex character.
pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
    let cleaned = clean_checked(text)?;

    let mut nibbles = Vec::with_capacity(cleaned.len());
    for (offset, found) in cleaned.chars().enumerate() {
        let nibble = found
            .to_digit(16)
            .and_then(|digit| u8::try_from(digit).ok())
            .ok_or(EncodeError::InvalidHexDigit { found, offset })?;
        nibbles.push(nibble);
    }

    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

/// Formats a byte as two lowercase hex digits.
#[must_use]
pub fn byte_to_hex(byte: u8) -> String {
    format!("{byte:02x}")
}

/// Formats bytes as one contiguous lowercase hex string.
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| byte_to_hex(*b)).collect()
}
