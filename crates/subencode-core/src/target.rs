use crate::word::FixedWord;

/// Computes the word that three operands must sum to so that subtracting
/// them from a zeroed register, then pushing it, stores `word`'s bytes in
/// payload order.
///
/// A push stores the register little-endian, so the register must hold
/// `word` byte-reversed. Subtracting the operands from zero leaves their
/// negated sum, so the target is the two's-complement negation of the
/// byte-reversed word.
#[must_use]
pub const fn subtraction_target(word: FixedWord) -> FixedWord {
    let reversed = u32::from_be_bytes(word.reversed_bytes());
    FixedWord::new(reversed.wrapping_neg())
}

/// Recovers the payload word a target was derived from.
#[must_use]
pub const fn payload_word(target: FixedWord) -> FixedWord {
    let negated = target.value().wrapping_neg();
    FixedWord::new(negated.swap_bytes())
}
