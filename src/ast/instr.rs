//! Instruction AST type

use crate::ast::Operand;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// The instruction being executed
    opcode: String,
    /// Operands for the instruction, if any
    operands: Vec<Operand>,
}

impl Instruction {
    pub fn new(opcode: &str, operands: Vec<Operand>) -> Self {
        Instruction {
            opcode: opcode.to_string(),
            operands,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode)?;

        for (i, operand) in self.operands.iter().enumerate() {
            match i {
                0 => write!(f, " {}", operand)?,
                _ => write!(f, ", {}", operand)?,
            }
        }

        Ok(())
    }
}
