//! RFC 4648 and Crockford Base32.
//!
//! ```
//! use base32_codec::{Format, decode, encode};
//!
//! assert_eq!(encode(b"foobar", Format::Rfc4648), "MZXW6YTBOI======");
//! assert_eq!(encode(b"foobar", Format::Crockford), "CSQPYRK1E8");
//! assert_eq!(decode("cs-qp-yrki-e8", Format::Crockford).unwrap(), b"foobar");
//! ```

mod core;
mod encoders;
pub mod prelude;
pub mod value;

pub use crate::core::alphabet::{CROCKFORD_ALPHABET, Format, PADDING, RFC4648_ALPHABET, SEPARATOR};
pub use crate::core::config::{CodecConfig, DEFAULT_MAX_SIZE, Settings};
pub use crate::encoders::chunked::{decoded_len_upper_bound, encoded_len};
pub use crate::encoders::{CodecError, should_use_color};

/// Encodes `data` as Base32 text. RFC 4648 output is padded with `=` to a
/// multiple of 8 symbols; Crockford output is never padded.
pub fn encode(data: &[u8], format: Format) -> String {
    tracing::trace!(%format, len = data.len(), "encode");
    encoders::chunked::encode_chunked(data, format)
}

/// Decodes Base32 text back to bytes.
///
/// Decoding is case-insensitive. Empty input always decodes to an empty
/// vector. Nothing is returned unless the whole input is valid.
///
/// # Errors
///
/// - [`CodecError::InvalidLength`] if RFC 4648 input is not a multiple of 8 long
/// - [`CodecError::InvalidPadding`] if RFC 4648 input ends in 2, 5, 7 or more than 6 `=`
/// - [`CodecError::IllegalCharacter`] for a byte outside the format's alphabet
pub fn decode(encoded: impl AsRef<[u8]>, format: Format) -> Result<Vec<u8>, CodecError> {
    let encoded = encoded.as_ref();
    tracing::trace!(%format, len = encoded.len(), "decode");
    encoders::chunked::decode_chunked(encoded, format).inspect_err(|err| {
        tracing::debug!(%format, kind = err.kind(), "rejected input: {}", err.message());
    })
}

/// Like [`encode`], with the format given by selector name (`"rfc"` or
/// `"crockford"`). `None` selects RFC 4648.
pub fn encode_with(data: &[u8], format: Option<&str>) -> Result<String, CodecError> {
    let format = parse_selector(format)?;
    Ok(encode(data, format))
}

/// Like [`decode`], with the format given by selector name.
pub fn decode_with(encoded: impl AsRef<[u8]>, format: Option<&str>) -> Result<Vec<u8>, CodecError> {
    let format = parse_selector(format)?;
    decode(encoded, format)
}

fn parse_selector(format: Option<&str>) -> Result<Format, CodecError> {
    format.map_or(Ok(Format::default()), |name| name.parse())
}
