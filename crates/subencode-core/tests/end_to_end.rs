//! End-to-end scenarios: payload text in, verified operand triples out.

use proptest as _;
use rstest::rstest;
#[cfg(feature = "serde")]
use serde as _;
use subencode_core::{
    encode_payload, payload_word, subtraction_target, verify, AlphabetSource, ByteAlphabet,
    EncodeError, ErrorKind, FixedWord, PayloadWords,
};
use thiserror as _;
use tracing as _;

#[test]
fn scenario_one_full_alphabet() {
    let alphabet = AlphabetSource::Forbidden(String::new())
        .resolve()
        .expect("empty forbidden set resolves");
    let encoded = encode_payload("01020304", &alphabet).expect("encodes");

    assert_eq!(encoded.len(), 1);
    assert_eq!(encoded[0].target().to_padded_hex(), "fbfcfdff");
    assert_eq!(encoded[0].target().value(), 4_227_661_311);
    assert_eq!(verify(&encoded[0].operands), Ok(()));
}

#[test]
fn scenario_two_target_bytes() {
    let target = subtraction_target(FixedWord::parse("0xAABBCCDD").expect("valid"));
    assert_eq!(target.byte_strings(), ["22", "33", "44", "56"]);
    assert_eq!(target.value(), 573_785_174);
}

#[test]
fn scenario_three_single_byte_is_padded() {
    let words = PayloadWords::parse("12").expect("valid");
    assert_eq!(words.padding(), 3);
    assert_eq!(words.forward()[0].to_padded_hex(), "12909090");
}

#[rstest]
#[case(4_294_967_296, false)]
#[case(-2_147_483_649, false)]
#[case(4_294_967_295, true)]
#[case(-2_147_483_648, true)]
fn word_range_boundaries(#[case] value: i64, #[case] accepted: bool) {
    let result = FixedWord::try_from(value);
    assert_eq!(result.is_ok(), accepted);
    if let Err(error) = result {
        assert_eq!(error.kind(), ErrorKind::OutOfRange);
    }
}

#[test]
fn single_byte_alphabet_is_unsolvable() {
    let alphabet = AlphabetSource::Allowed("01".into())
        .resolve()
        .expect("one byte resolves");
    let error = encode_payload("01020304", &alphabet).expect_err("cannot reach 0xff");
    assert!(matches!(
        error,
        EncodeError::UnsolvableColumn {
            column: 3,
            target_byte: 0xff,
            ..
        }
    ));
}

#[test]
fn null_and_newline_free_encoding_round_trips() {
    let alphabet = ByteAlphabet::from_forbidden_hex("00 0a 0d").expect("valid");
    // execve("/bin//sh") prologue
    let payload = "31c050682f2f7368682f62696e89e3505389e1b00bcd80";
    let encoded = encode_payload(payload, &alphabet).expect("encodes");
    let words = PayloadWords::parse(payload).expect("valid");

    assert_eq!(encoded.len(), words.len());
    for (encoded, original) in encoded.iter().zip(words.reversed()) {
        assert_eq!(encoded.source, original);
        assert_eq!(payload_word(encoded.target()), original);
        for operand in encoded.operands.operands() {
            assert!(operand.bytes().iter().all(|b| alphabet.contains(*b)));
        }
    }
}

#[test]
fn alphanumeric_payload_runs_emulated_sub_chain() {
    let alphabet = ByteAlphabet::from_bytes(
        b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"
            .iter()
            .copied(),
    )
    .expect("non-empty");
    let encoded = encode_payload("01020304aabbccdd", &alphabet).expect("encodes");

    // Emulate: zero EAX, SUB three times, PUSH onto a downward stack.
    let mut stack: Vec<u8> = Vec::new();
    for word in &encoded {
        let eax = word
            .operands
            .operands()
            .iter()
            .fold(0u32, |eax, operand| eax.wrapping_sub(operand.value()));
        let mut pushed = eax.to_le_bytes().to_vec();
        pushed.extend_from_slice(&stack);
        stack = pushed;
    }

    assert_eq!(stack, vec![0x01, 0x02, 0x03, 0x04, 0xaa, 0xbb, 0xcc, 0xdd]);
}
