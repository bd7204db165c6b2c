//! Subtraction encoding engine.
//!
//! Rewrites 32-bit payload words as three operand words made only of bytes
//! from an allowed alphabet, such that subtracting the operands from a
//! zeroed register and pushing it rebuilds the payload.

/// Error taxonomy for the whole engine.
pub mod error;
pub use error::{EncodeError, ErrorKind, Result};

/// Hex text cleaning and decoding.
pub mod hex;
pub use hex::{clean, clean_checked, decode_hex, encode_hex, NOISE_CHARACTERS};

/// Validated 32-bit double word.
pub mod word;
pub use word::{FixedWord, WORD_BYTES, WORD_MAX_LITERAL, WORD_MIN_LITERAL};

/// Allowed/forbidden byte alphabet resolution.
pub mod alphabet;
pub use alphabet::{AlphabetSource, ByteAlphabet};

/// Payload cleaning, padding and segmentation.
pub mod segment;
pub use segment::{pad_with_filler, PayloadWords, FILLER_BYTE};

/// Payload word to subtraction target transform.
pub mod target;
pub use target::{payload_word, subtraction_target};

/// Column-wise operand search.
pub mod solver;
pub use solver::{solve, OperandTriple, MAX_CARRY};

/// Independent operand-sum check.
pub mod verify;
pub use verify::verify;

/// Segment, transform, solve and verify per word.
pub mod pipeline;
pub use pipeline::{encode_payload, encode_word, encode_words, EncodedWord};

#[cfg(test)]
use proptest as _;
