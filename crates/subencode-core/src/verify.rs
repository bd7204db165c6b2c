use crate::error::{EncodeError, Result};
use crate::solver::OperandTriple;
use crate::word::FixedWord;

/// Recomputes the operand sum with plain integer arithmetic and checks it
/// against the target.
///
/// This does not reuse any column logic from the solver, so it catches carry
/// mistakes there.
///
/// # Errors
///
/// Returns [`EncodeError::VerificationFailed`] when
/// `(one + two + three) mod 2^32 != target`.
pub fn verify(triple: &OperandTriple) -> Result<()> {
    let sum: u64 = triple
        .operands()
        .iter()
        .map(|operand| u64::from(operand.value()))
        .sum();
    #[allow(clippy::cast_possible_truncation)]
    let actual = (sum % (1u64 << 32)) as u32;

    if actual == triple.target.value() {
        Ok(())
    } else {
        Err(EncodeError::VerificationFailed {
            expected: triple.target.value(),
            actual,
            operands: triple.operands().map(FixedWord::value),
        })
    }
}
