//! Types to represent endianness.

use crate::arch::Word;

/// Indicates the byte order of 16-bit words in a binary program image.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endianness {
    /// Words are stored least significant byte first.
    ///
    /// This is "backwards" compared to how English writes numbers.
    LittleEndian,

    /// Words are stored most significant byte first.
    ///
    /// This is the same order as how English writes numbers, and what most
    /// DCPU-16 assemblers emit.
    BigEndian,
}

impl Endianness {
    /// Assemble one word from a pair of bytes in file order.
    pub fn word_from_bytes(self, bytes: [u8; 2]) -> Word {
        match self {
            Endianness::LittleEndian => Word::from_le_bytes(bytes),
            Endianness::BigEndian => Word::from_be_bytes(bytes),
        }
    }
}
