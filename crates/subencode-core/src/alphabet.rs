//! Byte alphabet resolution.
//!
//! A run is configured with either the bytes it may use or the bytes it must
//! avoid. Both resolve to the same [`ByteAlphabet`]: a non-empty set of
//! permitted byte values, iterated in ascending order so operand search is
//! reproducible.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{EncodeError, Result};
use crate::hex::{byte_to_hex, decode_hex};

/// Where a run's alphabet comes from. Exactly one source is used per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetSource {
    /// Hex string of the bytes that may appear in operands.
    Allowed(String),
    /// Hex string of the bytes that must not appear in operands.
    Forbidden(String),
}

impl AlphabetSource {
    /// Resolves this source into a permitted-byte alphabet.
    ///
    /// # Errors
    ///
    /// Propagates hex parsing errors and [`EncodeError::EmptyAlphabet`].
    pub fn resolve(&self) -> Result<ByteAlphabet> {
        match self {
            Self::Allowed(text) => ByteAlphabet::from_allowed_hex(text),
            Self::Forbidden(text) => ByteAlphabet::from_forbidden_hex(text),
        }
    }
}

/// Non-empty set of permitted byte values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u8>", into = "Vec<u8>"))]
pub struct ByteAlphabet {
    bytes: Vec<u8>,
}

impl ByteAlphabet {
    /// Builds an alphabet from explicit byte values. Duplicates collapse.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::EmptyAlphabet`] if no bytes are given.
    pub fn from_bytes(bytes: impl IntoIterator<Item = u8>) -> Result<Self> {
        let set: BTreeSet<u8> = bytes.into_iter().collect();
        if set.is_empty() {
            return Err(EncodeError::EmptyAlphabet);
        }
        Ok(Self {
            bytes: set.into_iter().collect(),
        })
    }

    /// Every byte value `0x00..=0xFF`.
    #[must_use]
    pub fn full() -> Self {
        Self {
            bytes: (0..=u8::MAX).collect(),
        }
    }

    /// Parses an allowed-byte hex string.
    ///
    /// # Errors
    ///
    /// Returns a malformed-input error for odd-length or non-hex text, and
    /// [`EncodeError::EmptyAlphabet`] for empty text.
    pub fn from_allowed_hex(text: &str) -> Result<Self> {
        let alphabet = Self::from_bytes(decode_hex(text)?)?;
        debug!(size = alphabet.len(), "resolved allowed-byte alphabet");
        Ok(alphabet)
    }

    /// Parses a forbidden-byte hex string and returns its complement over
    /// `0x00..=0xFF`.
    ///
    /// # Errors
    ///
    /// Returns a malformed-input error for odd-length or non-hex text, and
    /// [`EncodeError::EmptyAlphabet`] if all 256 values are forbidden.
    pub fn from_forbidden_hex(text: &str) -> Result<Self> {
        let forbidden: BTreeSet<u8> = decode_hex(text)?.into_iter().collect();
        let alphabet = Self::from_bytes((0..=u8::MAX).filter(|b| !forbidden.contains(b)))?;
        debug!(
            forbidden = forbidden.len(),
            size = alphabet.len(),
            "resolved alphabet from forbidden bytes"
        );
        Ok(alphabet)
    }

    /// Permitted bytes in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Iterates permitted bytes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bytes.iter().copied()
    }

    /// Returns true if `byte` is permitted.
    #[must_use]
    pub fn contains(&self, byte: u8) -> bool {
        self.bytes.binary_search(&byte).is_ok()
    }

    /// Number of permitted bytes, between 1 and 256.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; kept for API symmetry with [`Self::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Permitted bytes as two-digit hex strings.
    #[must_use]
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.bytes.iter().map(|b| byte_to_hex(*b)).collect()
    }
}

impl TryFrom<Vec<u8>> for ByteAlphabet {
    type Error = EncodeError;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl From<ByteAlphabet> for Vec<u8> {
    fn from(alphabet: ByteAlphabet) -> Self {
        alphabet.bytes
    }
}
