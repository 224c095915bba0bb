//! Encode/decode over untyped JSON values.
//!
//! The typed API rules out bad argument types at compile time. Values that
//! arrive from JSON (the `batch` command, scripting hosts) are checked here
//! instead and rejected with [`CodecError::InvalidArgument`] before any
//! decoding happens.

use serde_json::Value;

use crate::core::alphabet::Format;
use crate::encoders::errors::CodecError;

/// JSON type name used in argument errors.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Resolves an optional format argument. Absent or `null` means RFC 4648.
pub fn format_arg(format: Option<&Value>) -> Result<Format, CodecError> {
    match format {
        None | Some(Value::Null) => Ok(Format::default()),
        Some(Value::String(name)) => name.parse(),
        Some(other) => Err(CodecError::invalid_argument("string", type_name(other))),
    }
}

/// Encodes a string (its UTF-8 bytes) or an array of byte values.
pub fn encode_value(data: &Value, format: Option<&Value>) -> Result<String, CodecError> {
    let bytes = match data {
        Value::String(text) => text.as_bytes().to_vec(),
        Value::Array(items) => byte_array(items)?,
        other => return Err(CodecError::invalid_argument("string", type_name(other))),
    };
    let format = format_arg(format)?;

    Ok(crate::encode(&bytes, format))
}

/// Decodes a string argument; any other JSON type is an invalid argument.
pub fn decode_value(text: &Value, format: Option<&Value>) -> Result<Vec<u8>, CodecError> {
    let Value::String(text) = text else {
        return Err(CodecError::invalid_argument("string", type_name(text)));
    };
    let format = format_arg(format)?;

    crate::decode(text, format)
}

fn byte_array(items: &[Value]) -> Result<Vec<u8>, CodecError> {
    items
        .iter()
        .map(|item| {
            item.as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .ok_or_else(|| CodecError::invalid_argument("byte (0-255)", type_name(item)))
        })
        .collect()
}
