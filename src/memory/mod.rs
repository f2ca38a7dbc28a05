//! A set of types which model DCPU-16 memory and the program images loaded
//! into it.

mod endianness;
mod error;
mod image;
mod region;

pub use endianness::Endianness;
pub use error::{Error, Result};
pub use image::{Image, ImageFormat};
pub use region::Memory;
