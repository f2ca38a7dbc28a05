//! Facilities for executing DCPU-16 code

use crate::arch::{skip_width, ExtendedOpcode, Instruction, Opcode, Operand, PtrVal, Register, Word};
use crate::reg::State;

/// Execute exactly one instruction, yielding the new PC.
///
/// The instruction word at PC is fetched, its operands are resolved (which
/// may fetch trailing words and move SP), and then it is executed. Every
/// possible word has defined behavior, so stepping never fails.
pub fn step(state: &mut State) -> PtrVal {
    let word = state.next_word();

    match Instruction::decode(word) {
        Instruction::Basic(op, a_code, b_code) => {
            let a = Operand::resolve(state, a_code);
            let b = Operand::resolve(state, b_code);

            execute_basic(state, op, a, b);
        }
        Instruction::Extended(eop, b_code) => {
            let b = Operand::resolve(state, b_code);

            execute_extended(state, eop, b);
        }
    }

    state.get_register(Register::PC)
}

fn execute_basic(state: &mut State, op: Opcode, a: Operand, b: Operand) {
    let a_val = a.read(state) as u32;
    let b_val = b.read(state) as u32;

    match op {
        Opcode::Set => a.write(state, b_val as Word),
        Opcode::Add => {
            let sum = a_val + b_val;

            a.write(state, sum as Word);
            if sum > 0xFFFF {
                state.set_register(Register::O, 0x0001);
            }
        }
        Opcode::Sub => {
            if a_val < b_val {
                state.set_register(Register::O, 0xFFFF);
            }

            a.write(state, a_val.wrapping_sub(b_val) as Word);
        }
        Opcode::Mul => {
            let product = a_val * b_val;
            if product > 0xFFFF {
                state.set_register(Register::O, (product >> 16) as Word);
            }

            a.write(state, product as Word);
        }
        Opcode::Div => {
            if b_val == 0 {
                state.set_register(Register::O, 0);
                a.write(state, 0);
            } else {
                state.set_register(Register::O, ((a_val << 16) / b_val) as Word);
                a.write(state, (a_val / b_val) as Word);
            }
        }
        Opcode::Mod => match b_val {
            0 => a.write(state, 0),
            _ => a.write(state, (a_val % b_val) as Word),
        },
        Opcode::Shl => {
            let shifted = shift_left(a_val, b_val);

            state.set_register(Register::O, (shifted >> 16) as Word);
            a.write(state, shifted as Word);
        }
        Opcode::Shr => {
            state.set_register(Register::O, shift_right(a_val << 16, b_val) as Word);
            a.write(state, shift_right(a_val, b_val) as Word);
        }
        Opcode::And => a.write(state, (a_val & b_val) as Word),
        Opcode::Bor => a.write(state, (a_val | b_val) as Word),
        Opcode::Xor => a.write(state, (a_val ^ b_val) as Word),
        Opcode::Ife => skip_unless(state, a_val == b_val),
        Opcode::Ifn => skip_unless(state, a_val != b_val),
        Opcode::Ifg => skip_unless(state, a_val > b_val),
        Opcode::Ifb => skip_unless(state, (a_val & b_val) != 0),
    }
}

fn execute_extended(state: &mut State, eop: ExtendedOpcode, b: Operand) {
    match eop {
        ExtendedOpcode::Jsr => {
            let sp = state.get_register(Register::SP).wrapping_sub(1);
            let pc = state.get_register(Register::PC);

            state.set_register(Register::SP, sp);
            state.set_memory(sp, pc);

            let target = b.read(state);
            state.set_register(Register::PC, target);
        }
        ExtendedOpcode::Reserved(selector) => log::debug!(
            "Ignored reserved extended opcode ${:02X} before PC ${:04X}",
            selector,
            state.get_register(Register::PC)
        ),
    }
}

/// Step PC over the next instruction if a condition failed.
fn skip_unless(state: &mut State, condition: bool) {
    if !condition {
        let pc = state.get_register(Register::PC);
        let width = skip_width(state.memory(), pc);

        state.set_register(Register::PC, pc.wrapping_add(width));
    }
}

/// Shift left with every bit shifted past the top of a `u32` lost.
///
/// Shift counts are full 16-bit values, so counts of 32 and up are normal.
fn shift_left(value: u32, count: u32) -> u32 {
    value.checked_shl(count).unwrap_or(0)
}

fn shift_right(value: u32, count: u32) -> u32 {
    value.checked_shr(count).unwrap_or(0)
}
