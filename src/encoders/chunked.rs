use crate::core::alphabet::{Format, PADDING};

use super::errors::CodecError;

/// Input bytes per full block (40 bits).
const BLOCK_BYTES: usize = 5;
/// Symbols per full block.
const BLOCK_SYMBOLS: usize = 8;
const BITS_PER_SYMBOL: u32 = 5;
const SYMBOL_MASK: u64 = 0x1F;

/// Trailing `=` counts RFC 4648 can produce, one per `len % 5`.
const RFC_PADDING_BY_REMAINDER: [usize; BLOCK_BYTES] = [0, 6, 4, 3, 1];

/// Exact length of the encoded text for `len` input bytes.
pub fn encoded_len(len: usize, format: Format) -> usize {
    let symbols = (len * 8).div_ceil(BITS_PER_SYMBOL as usize);
    match format.padding() {
        Some(_) => symbols + RFC_PADDING_BY_REMAINDER[len % BLOCK_BYTES],
        None => symbols,
    }
}

/// Upper bound on decoded bytes for `len` input symbols.
pub fn decoded_len_upper_bound(len: usize) -> usize {
    len * BITS_PER_SYMBOL as usize / 8
}

pub fn encode_chunked(data: &[u8], format: Format) -> String {
    let mut result = String::with_capacity(encoded_len(data.len(), format));

    let blocks = data.chunks_exact(BLOCK_BYTES);
    let remainder = blocks.remainder();

    // Full blocks: 5 bytes -> 8 symbols, most significant first
    for block in blocks {
        let acc = block
            .iter()
            .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte));

        for i in (0..BLOCK_SYMBOLS as u32).rev() {
            let index = ((acc >> (i * BITS_PER_SYMBOL)) & SYMBOL_MASK) as u8;
            result.push(char::from(format.encode_symbol(index)));
        }
    }

    // Partial block of 1-4 bytes
    if !remainder.is_empty() {
        let acc = remainder
            .iter()
            .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte));
        let mut bits_in_buffer = remainder.len() as u32 * 8;

        while bits_in_buffer >= BITS_PER_SYMBOL {
            bits_in_buffer -= BITS_PER_SYMBOL;
            let index = ((acc >> bits_in_buffer) & SYMBOL_MASK) as u8;
            result.push(char::from(format.encode_symbol(index)));
        }

        // Zero-fill the last 1-4 bits up to a whole symbol
        if bits_in_buffer > 0 {
            let index = ((acc << (BITS_PER_SYMBOL - bits_in_buffer)) & SYMBOL_MASK) as u8;
            result.push(char::from(format.encode_symbol(index)));
        }
    }

    if let Some(pad) = format.padding() {
        let padded_len = result.len().div_ceil(BLOCK_SYMBOLS) * BLOCK_SYMBOLS;
        while result.len() < padded_len {
            result.push(char::from(pad));
        }
    }

    result
}

pub fn decode_chunked(encoded: &[u8], format: Format) -> Result<Vec<u8>, CodecError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let symbols = match format {
        Format::Rfc4648 => strip_rfc_padding(encoded)?,
        Format::Crockford => encoded,
    };
    let separator = format.separator();

    let mut result = Vec::with_capacity(decoded_len_upper_bound(symbols.len()));
    let mut bit_buffer = 0u64;
    let mut bits_in_buffer = 0u32;

    for (offset, &byte) in symbols.iter().enumerate() {
        if separator == Some(byte) {
            continue;
        }

        // Padding was stripped from the tail, so offsets still match the input
        let value = format
            .decode_symbol(byte)
            .ok_or(CodecError::IllegalCharacter {
                byte,
                position: offset + 1,
            })?;

        bit_buffer = (bit_buffer << BITS_PER_SYMBOL) | u64::from(value);
        bits_in_buffer += BITS_PER_SYMBOL;

        if bits_in_buffer == 40 {
            result.extend_from_slice(&bit_buffer.to_be_bytes()[3..]);
            bit_buffer = 0;
            bits_in_buffer = 0;
        }
    }

    // Whole bytes left over; fewer than 8 bits are the encoder's zero fill
    while bits_in_buffer >= 8 {
        bits_in_buffer -= 8;
        result.push((bit_buffer >> bits_in_buffer) as u8);
    }

    Ok(result)
}

/// Validates RFC 4648 length and padding, returning the symbols before the
/// padding.
fn strip_rfc_padding(encoded: &[u8]) -> Result<&[u8], CodecError> {
    if encoded.len() % BLOCK_SYMBOLS != 0 {
        return Err(CodecError::InvalidLength {
            actual: encoded.len(),
        });
    }

    let count = encoded.iter().rev().take_while(|&&b| b == PADDING).count();
    if !RFC_PADDING_BY_REMAINDER.contains(&count) {
        return Err(CodecError::InvalidPadding { count });
    }

    Ok(&encoded[..encoded.len() - count])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4648_vectors() {
        // RFC 4648 section 10
        let vectors: [(&[u8], &str); 7] = [
            (b"", ""),
            (b"f", "MY======"),
            (b"fo", "MZXQ===="),
            (b"foo", "MZXW6==="),
            (b"foob", "MZXW6YQ="),
            (b"fooba", "MZXW6YTB"),
            (b"foobar", "MZXW6YTBOI======"),
        ];

        for (data, expected) in vectors {
            assert_eq!(encode_chunked(data, Format::Rfc4648), expected);
            assert_eq!(decode_chunked(expected.as_bytes(), Format::Rfc4648).unwrap(), data);
        }
    }

    #[test]
    fn test_crockford_vectors() {
        let vectors: [(&[u8], &str); 5] = [
            (b"", ""),
            (b"f", "CR"),
            (b"foo", "CSQPY"),
            (b"fooba", "CSQPYRK1"),
            (b"foobar", "CSQPYRK1E8"),
        ];

        for (data, expected) in vectors {
            assert_eq!(encode_chunked(data, Format::Crockford), expected);
            assert_eq!(decode_chunked(expected.as_bytes(), Format::Crockford).unwrap(), data);
        }
    }

    #[test]
    fn test_encoded_len_matches_output() {
        for len in 0..32 {
            let data = vec![0xA5u8; len];
            for format in Format::ALL {
                assert_eq!(
                    encode_chunked(&data, format).len(),
                    encoded_len(len, format),
                    "{format} len {len}"
                );
            }
        }
    }

    #[test]
    fn test_all_byte_values() {
        let data: Vec<u8> = (0..=255).collect();
        for format in Format::ALL {
            let encoded = encode_chunked(&data, format);
            assert_eq!(decode_chunked(encoded.as_bytes(), format).unwrap(), data);
        }
    }

    #[test]
    fn test_rfc_length_check_runs_before_alphabet_check() {
        assert_eq!(
            decode_chunked(b"!!!", Format::Rfc4648),
            Err(CodecError::InvalidLength { actual: 3 })
        );
    }

    #[test]
    fn test_rfc_padding_counts() {
        let cases: [(&str, Option<usize>); 8] = [
            ("MZXW6YTB", None),
            ("MZXW6YQ=", None),
            ("MZXW6===", None),
            ("MZXQ====", None),
            ("MY======", None),
            ("MZXW6Y==", Some(2)),
            ("MZX=====", Some(5)),
            ("M=======", Some(7)),
        ];

        for (input, bad_count) in cases {
            let result = decode_chunked(input.as_bytes(), Format::Rfc4648);
            match bad_count {
                None => assert!(result.is_ok(), "{input}"),
                Some(count) => assert_eq!(result, Err(CodecError::InvalidPadding { count })),
            }
        }

        assert_eq!(
            decode_chunked(b"========", Format::Rfc4648),
            Err(CodecError::InvalidPadding { count: 8 })
        );
    }

    #[test]
    fn test_rfc_padding_inside_data_is_illegal() {
        assert_eq!(
            decode_chunked(b"MY=A====", Format::Rfc4648),
            Err(CodecError::IllegalCharacter {
                byte: b'=',
                position: 3
            })
        );
    }

    #[test]
    fn test_rfc_rejects_separator() {
        assert_eq!(
            decode_chunked(b"MZXW-YQ=", Format::Rfc4648),
            Err(CodecError::IllegalCharacter {
                byte: b'-',
                position: 5
            })
        );
    }

    #[test]
    fn test_crockford_separator_positions_count() {
        assert_eq!(
            decode_chunked(b"CS-QP-U", Format::Crockford),
            Err(CodecError::IllegalCharacter {
                byte: b'U',
                position: 7
            })
        );
        assert_eq!(
            decode_chunked(b"---", Format::Crockford).unwrap(),
            Vec::<u8>::new()
        );
    }

    #[test]
    fn test_crockford_rejects_padding() {
        assert_eq!(
            decode_chunked(b"CR==", Format::Crockford),
            Err(CodecError::IllegalCharacter {
                byte: b'=',
                position: 3
            })
        );
    }

    #[test]
    fn test_trailing_bits_are_not_validated() {
        // "MZ" carries 10 bits; the 2 spare bits are dropped whatever their value
        assert_eq!(decode_chunked(b"MZ======", Format::Rfc4648).unwrap(), b"f");
        assert_eq!(decode_chunked(b"MY======", Format::Rfc4648).unwrap(), b"f");
    }

    #[test]
    fn test_crockford_odd_lengths() {
        // A single symbol holds fewer than 8 bits
        assert_eq!(decode_chunked(b"C", Format::Crockford).unwrap(), Vec::<u8>::new());
        assert_eq!(decode_chunked(b"CR", Format::Crockford).unwrap(), b"f");
    }
}
