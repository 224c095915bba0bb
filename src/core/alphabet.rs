//! Base32 alphabets and their lookup tables.
//!
//! Each format owns two tables:
//! - an encode table mapping a 5-bit value to its output symbol
//! - a 256-entry decode table indexed directly by input byte
//!
//! Both are built at compile time and never change afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::encoders::errors::CodecError;

/// RFC 4648 section 6 alphabet.
pub const RFC4648_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Crockford's alphabet. Excludes I, L, O and U.
pub const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// RFC 4648 padding symbol.
pub const PADDING: u8 = b'=';

/// Crockford readability separator, ignored on decode.
pub const SEPARATOR: u8 = b'-';

/// Byte -> 5-bit value. `None` marks a byte outside the alphabet.
pub type DecodeTable = [Option<u8>; 256];

/// Symbols Crockford accepts as stand-ins for digits.
const CROCKFORD_ALIASES: &[(u8, u8)] = &[(b'I', 1), (b'L', 1), (b'O', 0)];

static RFC4648_DECODE_TABLE: DecodeTable = build_decode_table(RFC4648_ALPHABET, &[]);
static CROCKFORD_DECODE_TABLE: DecodeTable =
    build_decode_table(CROCKFORD_ALPHABET, CROCKFORD_ALIASES);

/// Builds a case-insensitive decode table for `alphabet`, then layers the
/// `aliases` on top of it.
const fn build_decode_table(alphabet: &[u8; 32], aliases: &[(u8, u8)]) -> DecodeTable {
    let mut table: DecodeTable = [None; 256];

    let mut i = 0;
    while i < alphabet.len() {
        let symbol = alphabet[i];
        table[symbol as usize] = Some(i as u8);
        table[symbol.to_ascii_lowercase() as usize] = Some(i as u8);
        i += 1;
    }

    let mut j = 0;
    while j < aliases.len() {
        let (symbol, value) = aliases[j];
        table[symbol as usize] = Some(value);
        table[symbol.to_ascii_lowercase() as usize] = Some(value);
        j += 1;
    }

    table
}

/// Base32 flavour used for an encode or decode call.
///
/// The two formats share the bit layout but differ in alphabet, padding
/// and which extra characters the decoder tolerates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    /// RFC 4648 Base32, padded with `=` to a multiple of 8 symbols.
    #[default]
    #[serde(rename = "rfc")]
    Rfc4648,
    /// Crockford's Base32: unpadded, `-` separators, I/L/O aliases.
    #[serde(rename = "crockford")]
    Crockford,
}

impl Format {
    /// Every supported format, default first.
    pub const ALL: [Format; 2] = [Format::Rfc4648, Format::Crockford];

    /// Selector name accepted by [`Format::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Format::Rfc4648 => "rfc",
            Format::Crockford => "crockford",
        }
    }

    /// The 32 output symbols, indexed by 5-bit value.
    pub fn alphabet(self) -> &'static [u8; 32] {
        match self {
            Format::Rfc4648 => RFC4648_ALPHABET,
            Format::Crockford => CROCKFORD_ALPHABET,
        }
    }

    pub(crate) fn decode_table(self) -> &'static DecodeTable {
        match self {
            Format::Rfc4648 => &RFC4648_DECODE_TABLE,
            Format::Crockford => &CROCKFORD_DECODE_TABLE,
        }
    }

    /// Padding symbol appended by the encoder, if the format pads.
    pub fn padding(self) -> Option<u8> {
        match self {
            Format::Rfc4648 => Some(PADDING),
            Format::Crockford => None,
        }
    }

    /// Character the decoder skips, if the format has one.
    pub fn separator(self) -> Option<u8> {
        match self {
            Format::Rfc4648 => None,
            Format::Crockford => Some(SEPARATOR),
        }
    }

    /// Maps the low 5 bits of `value` to a symbol.
    #[inline]
    pub fn encode_symbol(self, value: u8) -> u8 {
        self.alphabet()[(value & 0x1F) as usize]
    }

    /// Looks up the 5-bit value of an input byte.
    #[inline]
    pub fn decode_symbol(self, byte: u8) -> Option<u8> {
        self.decode_table()[byte as usize]
    }
}

impl FromStr for Format {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| CodecError::invalid_option(s))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
