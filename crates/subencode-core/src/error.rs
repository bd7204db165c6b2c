use thiserror::Error;

/// Result alias used throughout the encoding engine.
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Coarse error kinds used by callers that only care about the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ErrorKind {
    /// A double-word literal does not fit the accepted 32-bit range.
    OutOfRange,
    /// Hex text or an alphabet could not be parsed.
    MalformedInput,
    /// No operand bytes from the alphabet can balance a column.
    UnsolvableColumn,
    /// The recomputed operand sum disagrees with the target.
    VerificationFailed,
}

/// Every way an encoding run can fail.
///
/// All variants are fatal for the run that produced them. They carry the
/// data needed to explain the failure and leave formatting to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Literal exceeds `0xFFFFFFFF`.
    #[error("the value {literal} is too large for a double word; it must not exceed 4,294,967,295")]
    TooLarge {
        /// The literal as supplied.
        literal: String,
    },
    /// Literal is below `-2^31`.
    #[error("the value {literal} is too small for a double word; it must not be below -2,147,483,648")]
    TooSmall {
        /// The literal as supplied.
        literal: String,
    },
    /// Literal is neither decimal nor hexadecimal.
    #[error("`{literal}` is not a decimal or hexadecimal double word")]
    InvalidLiteral {
        /// The literal as supplied.
        literal: String,
    },
    /// Hex text has an odd number of digits after cleaning.
    #[error("missing nibble: hex string of length {length} is odd: {text}")]
    MissingNibble {
        /// The cleaned text that failed.
        text: String,
        /// Its length in hex digits.
        length: usize,
    },
    /// Hex text contains a character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit {found:?} at offset {offset}")]
    InvalidHexDigit {
        /// The offending character.
        found: char,
        /// Character offset within the cleaned text.
        offset: usize,
    },
    /// Alphabet resolution produced no permitted bytes.
    #[error("the byte alphabet is empty; every byte value is forbidden")]
    EmptyAlphabet,
    /// No `(x, y)` pair satisfies a column for any carry up to the bound.
    #[error(
        "unable to find operand bytes for target byte 0x{target_byte:02x} in column {column} \
         of 0x{target:08x} using {} allowed bytes",
        .alphabet.len()
    )]
    UnsolvableColumn {
        /// Target word being decomposed.
        target: u32,
        /// Column index, 0 is most significant.
        column: usize,
        /// Target byte at that column.
        target_byte: u8,
        /// The alphabet searched, ascending.
        alphabet: Vec<u8>,
    },
    /// Operand words do not sum to the target modulo 2^32.
    #[error(
        "operand sum 0x{actual:08x} does not match target 0x{expected:08x} \
         (operands 0x{:08x}, 0x{:08x}, 0x{:08x})",
        .operands[0],
        .operands[1],
        .operands[2]
    )]
    VerificationFailed {
        /// The target word.
        expected: u32,
        /// The recomputed sum.
        actual: u32,
        /// Operand words one, two and three.
        operands: [u32; 3],
    },
}

impl EncodeError {
    /// Returns the coarse kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TooLarge { .. } | Self::TooSmall { .. } => ErrorKind::OutOfRange,
            Self::InvalidLiteral { .. }
            | Self::MissingNibble { .. }
            | Self::InvalidHexDigit { .. }
            | Self::EmptyAlphabet => ErrorKind::MalformedInput,
            Self::UnsolvableColumn { .. } => ErrorKind::UnsolvableColumn,
            Self::VerificationFailed { .. } => ErrorKind::VerificationFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{EncodeError, ErrorKind};

    #[rstest]
    #[case(EncodeError::TooLarge { literal: "4294967296".into() }, ErrorKind::OutOfRange)]
    #[case(EncodeError::TooSmall { literal: "-2147483649".into() }, ErrorKind::OutOfRange)]
    #[case(EncodeError::InvalidLiteral { literal: "zz".into() }, ErrorKind::MalformedInput)]
    #[case(
        EncodeError::MissingNibble { text: "123".into(), length: 3 },
        ErrorKind::MalformedInput
    )]
    #[case(EncodeError::InvalidHexDigit { found: 'g', offset: 1 }, ErrorKind::MalformedInput)]
    #[case(EncodeError::EmptyAlphabet, ErrorKind::MalformedInput)]
    #[case(
        EncodeError::UnsolvableColumn { target: 0, column: 3, target_byte: 0, alphabet: vec![1] },
        ErrorKind::UnsolvableColumn
    )]
    #[case(
        EncodeError::VerificationFailed { expected: 1, actual: 2, operands: [0, 0, 2] },
        ErrorKind::VerificationFailed
    )]
    fn kinds_match_error_taxonomy(#[case] error: EncodeError, #[case] kind: ErrorKind) {
        assert_eq!(error.kind(), kind);
    }

    #[test]
    fn unsolvable_message_names_byte_column_and_alphabet_size() {
        let error = EncodeError::UnsolvableColumn {
            target: 0xfbfc_fdff,
            column: 3,
            target_byte: 0xff,
            alphabet: vec![0x01],
        };
        let message = error.to_string();
        assert!(message.contains("0xff"));
        assert!(message.contains("column 3"));
        assert!(message.contains("0xfbfcfdff"));
        assert!(message.contains("1 allowed bytes"));
    }

    #[test]
    fn verification_message_lists_every_operand() {
        let error = EncodeError::VerificationFailed {
            expected: 0x2233_4456,
            actual: 0x2233_4457,
            operands: [0x0101_0101, 0x0101_0101, 0x2031_4254],
        };
        let message = error.to_string();
        assert!(message.contains("0x22334457"));
        assert!(message.contains("0x22334456"));
        assert!(message.contains("0x20314254"));
    }
}
