//! Error type for program image loading

use crate::arch::PtrVal;
use std::{io, result};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Underlying cause of error is I/O related
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// A hex image contained a token that is not a 16-bit hexadecimal word
    #[error("invalid hex word {token:?} on line {line}")]
    InvalidHexWord { token: String, line: usize },

    /// A binary image ended halfway through a word
    #[error("binary image is {0} bytes long, which is not a whole number of words")]
    TruncatedWord(usize),

    /// The image does not fit between its base address and the end of memory
    #[error("image of {length} words does not fit in memory at ${base:04X}")]
    ImageTooLarge { base: PtrVal, length: usize },
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        match err {
            Error::IoError(e) => e,
            _ => io::Error::new(io::ErrorKind::InvalidData, format!("{}", err)),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
