//! Breakpoint-driven monitor for a single DCPU-16.
//!
//! The monitor owns a machine and a set of breakpoint addresses. It drives the
//! machine with the engine's `step`, and otherwise only reads machine state to
//! display it.

mod command;

pub use command::{MonitorCommand, HELP};

use crate::arch::{disassemble, step, PtrVal, Register};
use crate::reg::State;
use std::collections::BTreeSet;
use std::fmt::Write;

/// Why a `run` stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stop {
    /// PC reached the given breakpoint.
    Breakpoint(PtrVal),

    /// The given number of steps ran without hitting a breakpoint.
    StepLimit(u64),
}

pub struct Monitor {
    state: State,
    breakpoints: BTreeSet<PtrVal>,
}

impl Monitor {
    pub fn new(state: State) -> Self {
        Monitor {
            state,
            breakpoints: BTreeSet::new(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn set_break(&mut self, ptr: PtrVal) {
        self.breakpoints.insert(ptr);
    }

    /// Remove a breakpoint, returning `false` if it wasn't set.
    pub fn remove_break(&mut self, ptr: PtrVal) -> bool {
        self.breakpoints.remove(&ptr)
    }

    pub fn clear_breaks(&mut self) {
        self.breakpoints.clear();
    }

    pub fn iter_breaks(&self) -> impl Iterator<Item = PtrVal> + '_ {
        self.breakpoints.iter().copied()
    }

    pub fn step(&mut self) -> PtrVal {
        step(&mut self.state)
    }

    /// Run until PC lands on a breakpoint.
    ///
    /// At least one instruction always executes, so running from a breakpoint
    /// moves past it. If `limit` is given, the run also stops after that many
    /// instructions; otherwise a program that never reaches a breakpoint runs
    /// forever.
    pub fn run(&mut self, limit: Option<u64>) -> Stop {
        let mut count = 0;

        loop {
            let pc = self.step();
            count += 1;

            if self.breakpoints.contains(&pc) {
                return Stop::Breakpoint(pc);
            }

            if let Some(limit) = limit {
                if count >= limit {
                    return Stop::StepLimit(count);
                }
            }
        }
    }

    /// Format the register file.
    pub fn status(&self) -> String {
        let regs = Register::enumerate();
        let rows = [&regs[8..], &regs[0..4], &regs[4..8]];
        let mut out = String::new();

        for row in rows.iter() {
            let cells: Vec<String> = row
                .iter()
                .map(|reg| format!("{}:0x{:04x}", reg, self.state.get_register(*reg)))
                .collect();

            writeln!(out, "{}", cells.join(" ")).ok();
        }

        out
    }

    /// Format memory from `start` to `stop` inclusive, eight words per line.
    pub fn dump_mem(&self, start: PtrVal, stop: PtrVal) -> String {
        let mut out = String::new();

        for (i, word) in self.state.memory().slice(start..=stop).iter().enumerate() {
            if i % 8 == 0 {
                if i != 0 {
                    out.push('\n');
                }

                write!(out, "0x{:04x}: ", start as usize + i).ok();
            }

            write!(out, "{:04x} ", word).ok();
        }

        out.push('\n');
        out
    }

    /// Format `count` instructions starting at `start`, one per line.
    pub fn disassemble(&self, start: PtrVal, count: usize) -> String {
        let mut out = String::new();
        let mut pc = start;

        for _ in 0..count {
            let disasm = disassemble(self.state.memory(), pc);
            let marker = match self.breakpoints.contains(&pc) {
                true => '*',
                false => ' ',
            };

            writeln!(out, "{}{:04x}: {}", marker, pc, disasm.as_instr()).ok();
            pc = pc.wrapping_add(disasm.next_offset());
        }

        out
    }
}

#[cfg(test)]
mod tests;
