//! Column-wise operand search.
//!
//! A target word is split into three operand words built only from
//! alphabet bytes, such that `2 * one + three == target (mod 2^32)`. The
//! first two operands are always identical, so each byte column needs a pair
//! `(x, y)` with
//!
//! ```text
//! 2*x + y + carry_in == target_byte + 256*carry_out
//! ```
//!
//! Columns are solved from least significant (3) to most significant (0),
//! each consuming the carry produced by the column to its right. The carry
//! out of column 0 overflows the word and is dropped.

use tracing::trace;

use crate::alphabet::ByteAlphabet;
use crate::error::{EncodeError, Result};
use crate::word::{FixedWord, WORD_BYTES};

/// Largest carry a column can produce.
///
/// `2*x + y + carry_in` is at most `3*255 + 2 = 767 = 2*256 + 255`, so no
/// column ever needs a carry of three.
pub const MAX_CARRY: u16 = 2;

/// Three operand words whose sum modulo 2^32 is `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct OperandTriple {
    /// Word the operands sum to.
    pub target: FixedWord,
    /// First operand; identical to `two`.
    pub one: FixedWord,
    /// Second operand; identical to `one`.
    pub two: FixedWord,
    /// Third operand.
    pub three: FixedWord,
}

impl OperandTriple {
    /// Operands in subtraction order.
    #[must_use]
    pub const fn operands(&self) -> [FixedWord; 3] {
        [self.one, self.two, self.three]
    }
}

/// Bytes chosen for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnSolution {
    doubled: u8,
    single: u8,
    carry_out: u16,
}

/// Finds the first `(x, y)` in ascending alphabet order, for the smallest
/// carry out, that balances one column.
fn solve_column(
    target_byte: u8,
    carry_in: u16,
    alphabet: &ByteAlphabet,
) -> Option<ColumnSolution> {
    (0..=MAX_CARRY).find_map(|carry_out| {
        let wanted = u16::from(target_byte) + 256 * carry_out;
        alphabet.iter().find_map(|x| {
            alphabet
                .iter()
                .find(|y| 2 * u16::from(x) + u16::from(*y) + carry_in == wanted)
                .map(|y| ColumnSolution {
                    doubled: x,
                    single: y,
                    carry_out,
                })
        })
    })
}

/// Decomposes `target` into an [`OperandTriple`] using only alphabet bytes.
///
/// The search is deterministic: for a given alphabet the same target always
/// yields the same operands.
///
/// # Errors
///
/// Returns [`EncodeError::UnsolvableColumn`] naming the first column that no
/// alphabet pair can balance.
pub fn solve(target: FixedWord, alphabet: &ByteAlphabet) -> Result<OperandTriple> {
    let target_bytes = target.bytes();
    let mut doubled = [0u8; WORD_BYTES];
    let mut single = [0u8; WORD_BYTES];
    let mut carry = 0u16;

    for column in (0..WORD_BYTES).rev() {
        let target_byte = target_bytes[column];
        let solution = solve_column(target_byte, carry, alphabet).ok_or_else(|| {
            EncodeError::UnsolvableColumn {
                target: target.value(),
                column,
                target_byte,
                alphabet: alphabet.as_slice().to_vec(),
            }
        })?;

        trace!(
            column,
            target_byte,
            carry_in = carry,
            x = solution.doubled,
            y = solution.single,
            carry_out = solution.carry_out,
            "solved column"
        );

        doubled[column] = solution.doubled;
        single[column] = solution.single;
        carry = solution.carry_out;
    }

    let one = FixedWord::from_be_bytes(doubled);
    Ok(OperandTriple {
        target,
        one,
        two: one,
        three: FixedWord::from_be_bytes(single),
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{solve, solve_column, ColumnSolution, OperandTriple};
    use crate::alphabet::ByteAlphabet;
    use crate::error::EncodeError;
    use crate::word::FixedWord;

    fn alphanumeric() -> ByteAlphabet {
        ByteAlphabet::from_bytes(
            b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"
                .iter()
                .copied(),
        )
        .expect("non-empty")
    }

    #[test]
    fn column_prefers_smallest_carry_then_smallest_bytes() {
        let full = ByteAlphabet::full();
        assert_eq!(
            solve_column(0xff, 0, &full),
            Some(ColumnSolution {
                doubled: 0x00,
                single: 0xff,
                carry_out: 0,
            })
        );
    }

    #[test]
    fn column_uses_carry_when_target_byte_is_below_carry_in() {
        let full = ByteAlphabet::full();
        // 0 + 255 + 2 == 1 + 256
        assert_eq!(
            solve_column(0x01, 2, &full),
            Some(ColumnSolution {
                doubled: 0x00,
                single: 0xff,
                carry_out: 1,
            })
        );
    }

    #[test]
    fn column_needs_double_carry_for_large_sums() {
        let high = ByteAlphabet::from_bytes([0xff]).expect("non-empty");
        // 3 * 255 == 253 + 512
        assert_eq!(
            solve_column(0xfd, 0, &high),
            Some(ColumnSolution {
                doubled: 0xff,
                single: 0xff,
                carry_out: 2,
            })
        );
    }

    #[rstest]
    #[case(0xfbfc_fdff, 0x0000_0000, 0xfbfc_fdff)]
    #[case(0x2233_4456, 0x0000_0000, 0x2233_4456)]
    fn full_alphabet_puts_target_in_third_operand(
        #[case] target: u32,
        #[case] one: u32,
        #[case] three: u32,
    ) {
        let triple = solve(FixedWord::new(target), &ByteAlphabet::full()).expect("solvable");
        assert_eq!(triple.one.value(), one);
        assert_eq!(triple.two.value(), one);
        assert_eq!(triple.three.value(), three);
    }

    #[rstest]
    #[case(0xfbfc_fdff, 0x0101_0101, 0xf9fa_fbfd)]
    #[case(0x2233_4456, 0x0101_0101, 0x2031_4254)]
    #[case(0x87a9_cbee, 0x0101_0101, 0x85a7_c9ec)]
    fn null_free_alphabet(#[case] target: u32, #[case] one: u32, #[case] three: u32) {
        let alphabet = ByteAlphabet::from_forbidden_hex("00").expect("valid");
        let triple = solve(FixedWord::new(target), &alphabet).expect("solvable");
        assert_eq!(
            triple,
            OperandTriple {
                target: FixedWord::new(target),
                one: FixedWord::new(one),
                two: FixedWord::new(one),
                three: FixedWord::new(three),
            }
        );
    }

    #[test]
    fn alphanumeric_alphabet_with_carries() {
        let triple = solve(FixedWord::new(0xfbfc_fdff), &alphanumeric()).expect("solvable");
        assert_eq!(triple.one.value(), 0x4141_4243);
        assert_eq!(triple.three.value(), 0x797a_7979);

        let triple = solve(FixedWord::new(0x2233_4456), &alphanumeric()).expect("solvable");
        assert_eq!(triple.one.value(), 0x5461_656e);
        assert_eq!(triple.three.value(), 0x7970_797a);
    }

    #[test]
    fn operands_only_use_alphabet_bytes() {
        let alphabet = alphanumeric();
        let triple = solve(FixedWord::new(0x2233_4456), &alphabet).expect("solvable");
        for operand in triple.operands() {
            assert!(operand.bytes().iter().all(|b| alphabet.contains(*b)));
        }
    }

    #[test]
    fn single_byte_alphabet_fails_on_least_significant_column() {
        let alphabet = ByteAlphabet::from_bytes([0x01]).expect("non-empty");
        let error = solve(FixedWord::new(0xfbfc_fdff), &alphabet).expect_err("unsolvable");
        assert_eq!(
            error,
            EncodeError::UnsolvableColumn {
                target: 0xfbfc_fdff,
                column: 3,
                target_byte: 0xff,
                alphabet: vec![0x01],
            }
        );
    }

    #[test]
    fn unsolvable_middle_column_is_reported() {
        // 0x6f6f6fee is the target of payload word 0x12909090.
        let error = solve(FixedWord::new(0x6f6f_6fee), &alphanumeric()).expect_err("unsolvable");
        assert!(matches!(
            error,
            EncodeError::UnsolvableColumn {
                column: 2,
                target_byte: 0x6f,
                ..
            }
        ));
    }
}
