//! A model of machine state.

use crate::arch::{PtrVal, Register, Word, REGISTER_COUNT};
use crate::memory::Memory;

/// Represents the complete state of one DCPU-16.
///
/// Machine state is separated into two categories: architectural and memory.
/// Architectural state is the register file, indexed by `Register`. Memory
/// state is the full 64K-word address space.
///
/// A fresh state has every register and memory cell zeroed, except for `SP`,
/// which starts at the top of memory so that the stack grows downward from
/// there.
#[derive(Clone)]
pub struct State {
    /// Architectural program state, such as CPU registers.
    cpu_state: [Word; REGISTER_COUNT],

    /// Non-architectural, or memory-related program state.
    mem_state: Memory,
}

impl State {
    pub fn get_register(&self, k: Register) -> Word {
        self.cpu_state[k.index()]
    }

    pub fn set_register(&mut self, k: Register, v: Word) {
        self.cpu_state[k.index()] = v;
    }

    pub fn get_memory(&self, k: PtrVal) -> Word {
        self.mem_state.read(k)
    }

    pub fn set_memory(&mut self, k: PtrVal, v: Word) {
        self.mem_state.write(k, v);
    }

    pub fn memory(&self) -> &Memory {
        &self.mem_state
    }

    /// Mutable access to memory, for program loaders.
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.mem_state
    }

    /// Read the word at PC and advance PC past it.
    pub fn next_word(&mut self) -> Word {
        let pc = self.get_register(Register::PC);

        self.set_register(Register::PC, pc.wrapping_add(1));
        self.get_memory(pc)
    }
}

impl Default for State {
    fn default() -> Self {
        let mut cpu_state = [0; REGISTER_COUNT];
        cpu_state[Register::SP.index()] = 0xFFFF;

        State {
            cpu_state,
            mem_state: Memory::new(),
        }
    }
}
