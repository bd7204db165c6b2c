//! Payload segmentation into double words.
//!
//! The payload is cleaned, padded with `NOP` filler to a whole number of
//! double words and split into big-endian [`FixedWord`]s in payload order.

use tracing::debug;

use crate::error::Result;
use crate::hex::decode_hex;
use crate::word::{FixedWord, WORD_BYTES};

/// Filler byte appended to unaligned payloads (x86 `NOP`).
pub const FILLER_BYTE: u8 = 0x90;

/// Appends [`FILLER_BYTE`] until `bytes.len()` is a multiple of four.
///
/// Returns the number of filler bytes appended, zero for aligned input.
pub fn pad_with_filler(bytes: &mut Vec<u8>) -> usize {
    let missing = (WORD_BYTES - bytes.len() % WORD_BYTES) % WORD_BYTES;
    bytes.resize(bytes.len() + missing, FILLER_BYTE);
    missing
}

/// Ordered double words of a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadWords {
    words: Vec<FixedWord>,
    padding: usize,
}

impl PayloadWords {
    /// Cleans, pads and segments hex payload text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EncodeError::MissingNibble`] when the cleaned text
    /// has odd length, or [`crate::EncodeError::InvalidHexDigit`] for
    /// non-hex characters.
    pub fn parse(text: &str) -> Result<Self> {
        let mut bytes = decode_hex(text)?;
        let padding = pad_with_filler(&mut bytes);

        let words: Vec<FixedWord> = bytes
            .chunks_exact(WORD_BYTES)
            .map(|chunk| FixedWord::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        debug!(words = words.len(), padding, "segmented payload");
        Ok(Self { words, padding })
    }

    /// Words in payload order.
    #[must_use]
    pub fn forward(&self) -> &[FixedWord] {
        &self.words
    }

    /// Words in reverse payload order, the order they must be pushed.
    #[must_use]
    pub fn reversed(&self) -> Vec<FixedWord> {
        self.words.iter().rev().copied().collect()
    }

    /// Filler bytes appended during segmentation.
    #[must_use]
    pub const fn padding(&self) -> usize {
        self.padding
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True for an empty payload.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
