//! An abstract syntax tree representation of disassembled code

mod instr;
mod operand;

pub use instr::Instruction;
pub use operand::Operand;
