use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::{EncodeError, Result};
use crate::hex::byte_to_hex;

/// Largest literal accepted for a double word.
pub const WORD_MAX_LITERAL: i64 = 0xFFFF_FFFF;
/// Smallest literal accepted for a double word (`-2^31`).
pub const WORD_MIN_LITERAL: i64 = -0x8000_0000;
/// Bytes per double word.
pub const WORD_BYTES: usize = 4;

/// An immutable 32-bit double word.
///
/// Construction accepts signed or unsigned literals in
/// `[-2^31, 2^32 - 1]`; negative values are stored as their two's-complement
/// unsigned interpretation. All accessors observe the unsigned value and
/// the big-endian byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct FixedWord(u32);

impl FixedWord {
    /// Wraps an unsigned 32-bit value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Builds a word from its big-endian bytes.
    #[must_use]
    pub const fn from_be_bytes(bytes: [u8; WORD_BYTES]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Parses a decimal or hexadecimal literal.
    ///
    /// Strings made only of decimal digits, or starting with `-`, are
    /// decimal. Strings starting with `0x`/`0X` are hex, and anything else
    /// is tried as bare hex, so `10` is ten while `A` and `0xA` are both ten.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::TooLarge`] above `0xFFFFFFFF`
    /// - [`EncodeError::TooSmall`] below `-2^31`
    /// - [`EncodeError::InvalidLiteral`] when the text is not a number
    pub fn parse(literal: &str) -> Result<Self> {
        let text = literal.trim();
        let parsed = if text.starts_with('-') || is_decimal(text) {
            text.parse::<i128>()
        } else {
            let digits = text
                .strip_prefix("0x")
                .or_else(|| text.strip_prefix("0X"))
                .unwrap_or(text);
            if digits.starts_with(['+', '-']) {
                return Err(EncodeError::InvalidLiteral {
                    literal: literal.to_string(),
                });
            }
            i128::from_str_radix(digits, 16)
        };

        match parsed {
            Ok(value) => Self::from_literal_value(value, literal),
            Err(e) => Err(match e.kind() {
                IntErrorKind::PosOverflow => EncodeError::TooLarge {
                    literal: literal.to_string(),
                },
                IntErrorKind::NegOverflow => EncodeError::TooSmall {
                    literal: literal.to_string(),
                },
                _ => EncodeError::InvalidLiteral {
                    literal: literal.to_string(),
                },
            }),
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_literal_value(value: i128, literal: &str) -> Result<Self> {
        if value > i128::from(WORD_MAX_LITERAL) {
            return Err(EncodeError::TooLarge {
                literal: literal.to_string(),
            });
        }
        if value < i128::from(WORD_MIN_LITERAL) {
            return Err(EncodeError::TooSmall {
                literal: literal.to_string(),
            });
        }
        // In range, so the low 32 bits are the two's-complement word.
        Ok(Self(value as u32))
    }

    /// Unsigned decimal value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Lowercase hex digits without padding, e.g. `a`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("{:x}", self.0)
    }

    /// Eight zero-padded lowercase hex digits, e.g. `0000000a`.
    #[must_use]
    pub fn to_padded_hex(self) -> String {
        format!("{:08x}", self.0)
    }

    /// Eight zero-padded hex digits behind a `0x` prefix, e.g. `0x0000000a`.
    #[must_use]
    pub fn to_prefixed_hex(self) -> String {
        format!("0x{:08x}", self.0)
    }

    /// Big-endian bytes, most significant first.
    #[must_use]
    pub const fn bytes(self) -> [u8; WORD_BYTES] {
        self.0.to_be_bytes()
    }

    /// Little-endian bytes, least significant first.
    #[must_use]
    pub const fn reversed_bytes(self) -> [u8; WORD_BYTES] {
        self.0.to_le_bytes()
    }

    /// Big-endian bytes as two-digit hex strings, e.g. `["00", "00", "00", "0a"]`.
    #[must_use]
    pub fn byte_strings(self) -> [String; WORD_BYTES] {
        self.bytes().map(byte_to_hex)
    }

    /// Little-endian bytes as two-digit hex strings, e.g. `["0a", "00", "00", "00"]`.
    #[must_use]
    pub fn reversed_byte_strings(self) -> [String; WORD_BYTES] {
        self.reversed_bytes().map(byte_to_hex)
    }
}

fn is_decimal(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

impl From<u32> for FixedWord {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<FixedWord> for u32 {
    fn from(word: FixedWord) -> Self {
        word.0
    }
}

impl TryFrom<i64> for FixedWord {
    type Error = EncodeError;

    fn try_from(value: i64) -> Result<Self> {
        Self::from_literal_value(i128::from(value), &value.to_string())
    }
}

impl FromStr for FixedWord {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FixedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl fmt::LowerHex for FixedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
