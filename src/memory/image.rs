//! Types that feed data from program images into the memory model.

use crate::arch::Word;
use crate::memory::{Endianness, Error, Result};
use serde::Serialize;
use std::io;
use std::str;

/// Enumeration of all program image formats we know how to load.
#[derive(Copy, Clone, Serialize, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    /// Raw binary, two bytes per word, most significant byte first.
    BinaryBE,

    /// Raw binary, two bytes per word, least significant byte first.
    BinaryLE,

    /// Text file of whitespace-separated hexadecimal words.
    ///
    /// Words may carry a `0x` prefix. A `#` or `;` starts a comment that runs
    /// to the end of the line.
    Hex,
}

impl Default for ImageFormat {
    fn default() -> Self {
        ImageFormat::BinaryBE
    }
}

impl str::FromStr for ImageFormat {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "bin" => Ok(ImageFormat::BinaryBE),
            "binbe" => Ok(ImageFormat::BinaryBE),
            "binle" => Ok(ImageFormat::BinaryLE),
            "hex" => Ok(ImageFormat::Hex),
            "txt" => Ok(ImageFormat::Hex),
            _ => Err(()),
        }
    }
}

derive_deserialize_from_str!(ImageFormat, "valid image format");

/// The contents of a program image, decoded into memory words.
pub struct Image {
    words: Vec<Word>,
}

impl Image {
    /// Read and decode an entire image.
    pub fn read<F>(file: &mut F, format: ImageFormat) -> Result<Self>
    where
        F: io::Read,
    {
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        let words = match format {
            ImageFormat::BinaryBE => decode_binary(&data, Endianness::BigEndian)?,
            ImageFormat::BinaryLE => decode_binary(&data, Endianness::LittleEndian)?,
            ImageFormat::Hex => decode_hex(&String::from_utf8_lossy(&data))?,
        };

        Ok(Image { words })
    }

    pub fn as_words(&self) -> &[Word] {
        &self.words
    }
}

fn decode_binary(data: &[u8], endianness: Endianness) -> Result<Vec<Word>> {
    if data.len() % 2 != 0 {
        return Err(Error::TruncatedWord(data.len()));
    }

    Ok(data
        .chunks_exact(2)
        .map(|pair| endianness.word_from_bytes([pair[0], pair[1]]))
        .collect())
}

fn decode_hex(text: &str) -> Result<Vec<Word>> {
    let mut words = Vec::new();

    for (lineno, line) in text.lines().enumerate() {
        let code = line.split(|c| c == '#' || c == ';').next().unwrap_or("");

        for token in code.split_whitespace() {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);

            let word = Word::from_str_radix(digits, 16).map_err(|_| Error::InvalidHexWord {
                token: token.to_string(),
                line: lineno + 1,
            })?;

            words.push(word);
        }
    }

    Ok(words)
}
