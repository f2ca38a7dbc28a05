//! DCPU-16 disassembly

use crate::arch::{ExtendedOpcode, Instruction, OperandCode, PtrVal, Register};
use crate::ast::{Instruction as inst, Operand as op};
use crate::memory::Memory;

/// A successful disassembly of a single instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disasm {
    instr: inst,
    length: PtrVal,
}

impl Disasm {
    pub fn new(instr: inst, length: PtrVal) -> Self {
        Disasm { instr, length }
    }

    pub fn as_instr(&self) -> &inst {
        &self.instr
    }

    /// The offset to the next instruction; also the size of this one.
    pub fn next_offset(&self) -> PtrVal {
        self.length
    }
}

/// Render an operand code, taking its trailing word (if any) from `next`.
///
/// `next` is advanced past the trailing word, mirroring what resolution does
/// to PC during execution.
fn operand_text(mem: &Memory, next: &mut PtrVal, code: OperandCode) -> op {
    let mut trailing = || {
        let word = mem.read(*next);
        *next = next.wrapping_add(1);
        word
    };

    match code {
        0x00..=0x07 => op::sym(&Register::general(code).to_string()),
        0x08..=0x0F => op::indir(op::sym(&Register::general(code).to_string())),
        0x10..=0x17 => op::indir(op::add(
            op::lit(trailing()),
            op::sym(&Register::general(code).to_string()),
        )),
        0x18 => op::sym("POP"),
        0x19 => op::sym("PEEK"),
        0x1A => op::sym("PUSH"),
        0x1B => op::sym("SP"),
        0x1C => op::sym("PC"),
        0x1D => op::sym("O"),
        0x1E => op::indir(op::lit(trailing())),
        0x1F => op::lit(trailing()),
        _ => op::lit((code & 0x1F) as u16),
    }
}

/// Disassemble the instruction at `pc` in `mem`.
///
/// Disassembly only reads memory; no operand side effects happen. The
/// resulting length always agrees with `skip_width`.
pub fn disassemble(mem: &Memory, pc: PtrVal) -> Disasm {
    let mut next = pc.wrapping_add(1);

    let instr = match Instruction::decode(mem.read(pc)) {
        Instruction::Basic(opcode, a, b) => {
            let a_op = operand_text(mem, &mut next, a);
            let b_op = operand_text(mem, &mut next, b);

            inst::new(opcode.mnemonic(), vec![a_op, b_op])
        }
        Instruction::Extended(ExtendedOpcode::Jsr, b) => {
            inst::new("JSR", vec![operand_text(mem, &mut next, b)])
        }
        Instruction::Extended(ExtendedOpcode::Reserved(selector), b) => inst::new(
            "EXT",
            vec![op::lit(selector as u16), operand_text(mem, &mut next, b)],
        ),
    };

    Disasm::new(instr, next.wrapping_sub(pc))
}
