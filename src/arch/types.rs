//! Types used in modeling the DCPU-16

use std::fmt;

/// The type which represents a value contained in a DCPU-16 register.
pub type Word = u16;

/// The type which represents a DCPU-16 memory address.
///
/// Memory is word-addressed, so pointers and data share a width.
pub type PtrVal = u16;

/// The number of architectural registers.
pub const REGISTER_COUNT: usize = 11;

/// Enumeration of all architectural DCPU-16 registers.
///
/// The first eight are the general-purpose and index registers, in the order
/// that operand codes 0x00-0x07 name them. The remaining three are only
/// reachable through their dedicated operand codes.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Register {
    A,
    B,
    C,
    X,
    Y,
    Z,
    I,
    J,
    PC,
    SP,
    O,
}

/// Decoding aid for register-based operand codes.
pub static GENERAL_REGISTERS: [Register; 8] = [
    Register::A,
    Register::B,
    Register::C,
    Register::X,
    Register::Y,
    Register::Z,
    Register::I,
    Register::J,
];

impl Register {
    /// All registers, in register file order.
    pub fn enumerate() -> [Register; REGISTER_COUNT] {
        use Register::*;

        [A, B, C, X, Y, Z, I, J, PC, SP, O]
    }

    /// Select a general-purpose register by the low three bits of an operand
    /// code.
    pub fn general(index: u8) -> Self {
        GENERAL_REGISTERS[(index & 0x07) as usize]
    }

    /// The slot this register occupies in the register file.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Register::*;

        match self {
            A => write!(f, "A"),
            B => write!(f, "B"),
            C => write!(f, "C"),
            X => write!(f, "X"),
            Y => write!(f, "Y"),
            Z => write!(f, "Z"),
            I => write!(f, "I"),
            J => write!(f, "J"),
            PC => write!(f, "PC"),
            SP => write!(f, "SP"),
            O => write!(f, "O"),
        }
    }
}
