//! Instruction decoding

use crate::arch::{PtrVal, Word};
use crate::memory::Memory;

/// A six-bit operand addressing mode, as found in either operand field of an
/// instruction word.
pub type OperandCode = u8;

/// Extract the opcode field (low four bits).
pub fn opcode(word: Word) -> u8 {
    (word & 0xF) as u8
}

/// Extract the A operand field (bits 4-9).
pub fn a_code(word: Word) -> OperandCode {
    ((word >> 4) & 0x3F) as OperandCode
}

/// Extract the B operand field (bits 10-15).
pub fn b_code(word: Word) -> OperandCode {
    ((word >> 10) & 0x3F) as OperandCode
}

/// Determine if resolving an operand code consumes a trailing word.
pub fn consumes_next_word(code: OperandCode) -> bool {
    matches!(code, 0x10..=0x17 | 0x1E | 0x1F)
}

/// The two-operand instructions, selected by a nonzero opcode field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Opcode {
    Set,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Shl,
    Shr,
    And,
    Bor,
    Xor,
    Ife,
    Ifn,
    Ifg,
    Ifb,
}

/// Decoding aid for nonzero opcode fields; index with `opcode - 1`.
static BASIC_OPCODES: [Opcode; 15] = [
    Opcode::Set,
    Opcode::Add,
    Opcode::Sub,
    Opcode::Mul,
    Opcode::Div,
    Opcode::Mod,
    Opcode::Shl,
    Opcode::Shr,
    Opcode::And,
    Opcode::Bor,
    Opcode::Xor,
    Opcode::Ife,
    Opcode::Ifn,
    Opcode::Ifg,
    Opcode::Ifb,
];

impl Opcode {
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Set => "SET",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::Mod => "MOD",
            Opcode::Shl => "SHL",
            Opcode::Shr => "SHR",
            Opcode::And => "AND",
            Opcode::Bor => "BOR",
            Opcode::Xor => "XOR",
            Opcode::Ife => "IFE",
            Opcode::Ifn => "IFN",
            Opcode::Ifg => "IFG",
            Opcode::Ifb => "IFB",
        }
    }
}

/// The single-operand instructions, selected by the A field of a word whose
/// opcode field is zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExtendedOpcode {
    /// Push PC and jump to the operand.
    Jsr,

    /// Any selector without defined behavior. Executes as a no-op.
    Reserved(u8),
}

impl ExtendedOpcode {
    pub fn from_selector(selector: u8) -> Self {
        match selector {
            0x01 => ExtendedOpcode::Jsr,
            other => ExtendedOpcode::Reserved(other),
        }
    }
}

/// A decoded DCPU-16 instruction word.
///
/// Trailing words are not part of the decode; they are fetched while the
/// operands are resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Two-operand instruction, operand A then operand B.
    Basic(Opcode, OperandCode, OperandCode),

    /// Single-operand instruction. The operand lives in the B field.
    Extended(ExtendedOpcode, OperandCode),
}

impl Instruction {
    /// Decode an instruction word. Every word decodes to something.
    pub fn decode(word: Word) -> Self {
        match opcode(word) {
            0 => Instruction::Extended(ExtendedOpcode::from_selector(a_code(word)), b_code(word)),
            op => Instruction::Basic(BASIC_OPCODES[(op - 1) as usize], a_code(word), b_code(word)),
        }
    }

    /// The number of words this instruction occupies, including itself.
    pub fn width(self) -> PtrVal {
        match self {
            Instruction::Basic(_, a, b) => {
                1 + consumes_next_word(a) as PtrVal + consumes_next_word(b) as PtrVal
            }
            Instruction::Extended(_, b) => 1 + consumes_next_word(b) as PtrVal,
        }
    }
}

/// Determine how many words to skip to step over the instruction at `pc`.
///
/// This is the width of that instruction: its own word plus one for every
/// operand that reads a trailing word. Nothing is executed.
pub fn skip_width(mem: &Memory, pc: PtrVal) -> PtrVal {
    Instruction::decode(mem.read(pc)).width()
}
