//! The DCPU-16 address space.

use crate::arch::{PtrVal, Word};
use crate::memory::{Error, Result};
use std::ops::RangeInclusive;

/// Number of addressable words.
pub const MEMORY_SIZE: usize = 0x10000;

/// Models the flat, word-addressed memory visible to a DCPU-16 program.
///
/// Every `PtrVal` names a valid cell, so reads and writes never fail. Address
/// arithmetic done by callers is expected to wrap in 16 bits before it gets
/// here.
#[derive(Clone)]
pub struct Memory {
    cells: Vec<Word>,
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            cells: vec![0; MEMORY_SIZE],
        }
    }

    pub fn read(&self, ptr: PtrVal) -> Word {
        self.cells[ptr as usize]
    }

    pub fn write(&mut self, ptr: PtrVal, value: Word) {
        self.cells[ptr as usize] = value;
    }

    /// Copy a program image into memory starting at `base`.
    ///
    /// Images that would run off the end of the address space are rejected
    /// rather than wrapped around to address zero. Yields the number of words
    /// copied.
    pub fn load(&mut self, base: PtrVal, words: &[Word]) -> Result<usize> {
        let start = base as usize;
        let end = start + words.len();

        if end > MEMORY_SIZE {
            return Err(Error::ImageTooLarge {
                base,
                length: words.len(),
            });
        }

        self.cells[start..end].copy_from_slice(words);

        Ok(words.len())
    }

    /// Borrow an inclusive range of memory.
    ///
    /// A range whose start comes after its end is empty.
    pub fn slice(&self, range: RangeInclusive<PtrVal>) -> &[Word] {
        let (start, end) = (*range.start() as usize, *range.end() as usize);

        if start > end {
            return &[];
        }

        &self.cells[start..=end]
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
