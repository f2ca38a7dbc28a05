//! Operand resolution

use crate::arch::{OperandCode, PtrVal, Register, Word};
use crate::reg::State;

/// A resolved operand location.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    /// An architectural register.
    Register(Register),

    /// A memory cell at a fixed address.
    Memory(PtrVal),

    /// A constant. Writes to it go nowhere.
    Literal(Word),
}

impl Operand {
    /// Resolve an operand code against the current state.
    ///
    /// Some addressing modes have side effects on the state: trailing-word
    /// modes fetch a word at PC and advance it, and the stack modes move SP.
    /// Callers with more than one operand must resolve them in encoding
    /// order, A before B.
    pub fn resolve(state: &mut State, code: OperandCode) -> Self {
        match code {
            0x00..=0x07 => Operand::Register(Register::general(code)),
            0x08..=0x0F => Operand::Memory(state.get_register(Register::general(code))),
            0x10..=0x17 => {
                let offset = state.next_word();
                let base = state.get_register(Register::general(code));

                Operand::Memory(base.wrapping_add(offset))
            }
            0x18 => {
                let sp = state.get_register(Register::SP);
                state.set_register(Register::SP, sp.wrapping_add(1));

                Operand::Memory(sp)
            }
            0x19 => Operand::Memory(state.get_register(Register::SP)),
            0x1A => {
                let sp = state.get_register(Register::SP).wrapping_sub(1);
                state.set_register(Register::SP, sp);

                Operand::Memory(sp)
            }
            0x1B => Operand::Register(Register::SP),
            0x1C => Operand::Register(Register::PC),
            0x1D => Operand::Register(Register::O),
            0x1E => Operand::Memory(state.next_word()),
            0x1F => Operand::Literal(state.next_word()),
            _ => Operand::Literal((code & 0x1F) as Word),
        }
    }

    pub fn read(self, state: &State) -> Word {
        match self {
            Operand::Register(reg) => state.get_register(reg),
            Operand::Memory(ptr) => state.get_memory(ptr),
            Operand::Literal(value) => value,
        }
    }

    /// Store a value through this operand.
    ///
    /// Literal destinations are legal encodings; the value is discarded and
    /// execution carries on.
    pub fn write(self, state: &mut State, value: Word) {
        match self {
            Operand::Register(reg) => state.set_register(reg, value),
            Operand::Memory(ptr) => state.set_memory(ptr, value),
            Operand::Literal(lit) => log::warn!(
                "Discarded write of ${:04X} to literal ${:04X} near PC ${:04X}",
                value,
                lit,
                state.get_register(Register::PC)
            ),
        }
    }
}
