//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use base32_codec::prelude::*;
//!
//! let encoded = encode(b"Hello", Format::Crockford);
//! assert_eq!(decode(&encoded, Format::Crockford).unwrap(), b"Hello");
//! ```

pub use crate::{
    CodecConfig,
    CodecError,
    // Core encoding/decoding
    Format,
    decode,
    decode_with,
    encode,
    encode_with,
    // Dynamic values
    value::{decode_value, encode_value},
};
