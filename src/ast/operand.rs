//! Operand AST type

use crate::arch::Word;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    /// The name of an architecturally defined register, or another
    /// non-register operand defined by the architecture, such as `PUSH`.
    Symbol(String),

    /// A literal constant value.
    Literal(Word),

    /// The indirection of the given operand. (e.g. A to [A])
    Indirect(Box<Operand>),

    /// Some infix operand, e.g. +, * etc
    Infix(Box<Operand>, String, Box<Operand>),
}

impl Operand {
    pub fn sym(sym: &str) -> Self {
        Operand::Symbol(sym.to_string())
    }

    pub fn lit(int: Word) -> Self {
        Operand::Literal(int)
    }

    pub fn indir(op: Self) -> Self {
        Operand::Indirect(Box::new(op))
    }

    pub fn add(op1: Self, op2: Self) -> Self {
        Operand::Infix(Box::new(op1), "+".to_string(), Box::new(op2))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Symbol(s) => write!(f, "{}", s),
            Operand::Literal(int) => write!(f, "0x{:x}", int),
            Operand::Indirect(op) => write!(f, "[{}]", op),
            Operand::Infix(op1, sym, op2) => write!(f, "{}{}{}", op1, sym, op2),
        }
    }
}
