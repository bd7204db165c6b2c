//! Fixed x86 instruction template around the computed operands.
//!
//! The emitted program copies the stack pointer into `EAX` once, then for
//! every word zeroes `EAX` with two `AND` masks, subtracts the three
//! operands and pushes the result:
//!
//! ```text
//! PUSH ESP
//! POP EAX
//! AND EAX,0x554E4D4A   ; per word
//! AND EAX,0x2A313235
//! SUB EAX,<one>
//! SUB EAX,<two>
//! SUB EAX,<three>
//! PUSH EAX
//! ```

use std::collections::BTreeSet;
use std::fmt;

use subencode_core::{ByteAlphabet, EncodedWord, FixedWord};

/// x86 opcode bytes used by the template.
mod opcode {
    pub const PUSH_EAX: u8 = 0x50;
    pub const PUSH_ESP: u8 = 0x54;
    pub const POP_EAX: u8 = 0x58;
    pub const AND_EAX_IMM32: u8 = 0x25;
    pub const SUB_EAX_IMM32: u8 = 0x2D;
}

/// First `EAX` zeroing mask.
pub const ZERO_MASK_ONE: u32 = 0x554E_4D4A;
/// Second `EAX` zeroing mask.
pub const ZERO_MASK_TWO: u32 = 0x2A31_3235;

// Any value ANDed with both masks is zero only if the masks share no bits.
const _: () = assert!(ZERO_MASK_ONE & ZERO_MASK_TWO == 0);

/// One instruction of the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `PUSH ESP`
    PushEsp,
    /// `POP EAX`
    PopEax,
    /// `AND EAX, imm32`
    AndEax(u32),
    /// `SUB EAX, imm32`
    SubEax(FixedWord),
    /// `PUSH EAX`
    PushEax,
}

impl Instruction {
    /// Machine-code bytes; immediates are little-endian.
    #[must_use]
    pub fn encode(self) -> Vec<u8> {
        match self {
            Self::PushEsp => vec![opcode::PUSH_ESP],
            Self::PopEax => vec![opcode::POP_EAX],
            Self::PushEax => vec![opcode::PUSH_EAX],
            Self::AndEax(mask) => with_imm32(opcode::AND_EAX_IMM32, mask),
            Self::SubEax(operand) => with_imm32(opcode::SUB_EAX_IMM32, operand.value()),
        }
    }
}

fn with_imm32(op: u8, imm: u32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(5);
    bytes.push(op);
    bytes.extend_from_slice(&imm.to_le_bytes());
    bytes
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PushEsp => write!(f, "PUSH ESP"),
            Self::PopEax => write!(f, "POP EAX"),
            Self::PushEax => write!(f, "PUSH EAX"),
            Self::AndEax(mask) => write!(f, "AND EAX,0x{mask:08X}"),
            Self::SubEax(operand) => write!(f, "SUB EAX,{}", operand.to_prefixed_hex()),
        }
    }
}

/// Instructions emitted once at the start of the program.
#[must_use]
pub const fn prologue() -> [Instruction; 2] {
    [Instruction::PushEsp, Instruction::PopEax]
}

/// Instructions that rebuild and push one encoded word.
#[must_use]
pub const fn word_block(word: &EncodedWord) -> [Instruction; 6] {
    let operands = &word.operands;
    [
        Instruction::AndEax(ZERO_MASK_ONE),
        Instruction::AndEax(ZERO_MASK_TWO),
        Instruction::SubEax(operands.one),
        Instruction::SubEax(operands.two),
        Instruction::SubEax(operands.three),
        Instruction::PushEax,
    ]
}

/// The whole program for words already in push order.
#[must_use]
pub fn program(words: &[EncodedWord]) -> Vec<Instruction> {
    let mut instructions = prologue().to_vec();
    for word in words {
        instructions.extend(word_block(word));
    }
    instructions
}

/// Concatenated machine code of `instructions`.
#[must_use]
pub fn assemble(instructions: &[Instruction]) -> Vec<u8> {
    instructions.iter().flat_map(|i| i.encode()).collect()
}

/// Template bytes (opcodes and masks) that `alphabet` does not permit.
///
/// A non-empty result means the emitted program itself contains bytes the
/// target channel rejects, whatever operands are found.
#[must_use]
pub fn template_bytes_outside(alphabet: &ByteAlphabet) -> Vec<u8> {
    let fixed = [
        Instruction::PushEsp,
        Instruction::PopEax,
        Instruction::AndEax(ZERO_MASK_ONE),
        Instruction::AndEax(ZERO_MASK_TWO),
        Instruction::PushEax,
    ];
    let mut bytes: BTreeSet<u8> = assemble(&fixed).into_iter().collect();
    bytes.insert(opcode::SUB_EAX_IMM32);
    bytes.into_iter().filter(|b| !alphabet.contains(*b)).collect()
}
