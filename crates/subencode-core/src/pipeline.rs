//! Per-word encoding pipeline.
//!
//! Segments a payload, then runs target transform, operand search and
//! verification for each word in push order (last payload word first). Any
//! failure aborts the whole run; no partial result is returned.

use tracing::debug;

use crate::alphabet::ByteAlphabet;
use crate::error::Result;
use crate::segment::PayloadWords;
use crate::solver::{solve, OperandTriple};
use crate::target::subtraction_target;
use crate::verify::verify;
use crate::word::FixedWord;

/// One payload word and the verified operands that rebuild it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct EncodedWord {
    /// The payload word as it appears in the input.
    pub source: FixedWord,
    /// Operands summing to the word's subtraction target.
    pub operands: OperandTriple,
}

impl EncodedWord {
    /// Target the operands sum to.
    #[must_use]
    pub const fn target(&self) -> FixedWord {
        self.operands.target
    }
}

/// Encodes a single payload word.
///
/// # Errors
///
/// Returns [`crate::EncodeError::UnsolvableColumn`] or
/// [`crate::EncodeError::VerificationFailed`].
pub fn encode_word(word: FixedWord, alphabet: &ByteAlphabet) -> Result<EncodedWord> {
    let target = subtraction_target(word);
    let operands = solve(target, alphabet)?;
    verify(&operands)?;

    debug!(
        word = %word,
        target = %target,
        one = %operands.one,
        three = %operands.three,
        "encoded word"
    );

    Ok(EncodedWord {
        source: word,
        operands,
    })
}

/// Encodes segmented payload words in push order.
///
/// # Errors
///
/// Propagates the first failure of [`encode_word`].
pub fn encode_words(words: &PayloadWords, alphabet: &ByteAlphabet) -> Result<Vec<EncodedWord>> {
    words
        .reversed()
        .into_iter()
        .map(|word| encode_word(word, alphabet))
        .collect()
}

/// Cleans, segments and encodes hex payload text in push order.
///
/// # Errors
///
/// Returns malformed-input errors from segmentation, then the first
/// failure of [`encode_word`].
pub fn encode_payload(payload: &str, alphabet: &ByteAlphabet) -> Result<Vec<EncodedWord>> {
    let words = PayloadWords::parse(payload)?;
    encode_words(&words, alphabet)
}
