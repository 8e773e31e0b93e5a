//! Base64 image decoding entry points.

use serde_json::Value;

use crate::forgiving::forgiving_decode;
use crate::ImageDecodeError;

/// Decodes a base64-encoded string into raw bytes.
///
/// Accepts the standard alphabet with optional `=` padding; ASCII whitespace
/// anywhere in the input is ignored. An empty string decodes to an empty
/// buffer.
///
/// # Errors
///
/// Returns [`ImageDecodeError::Decode`] if the input is not valid base64.
/// The reason reported by the underlying decoder is not exposed.
///
/// # Example
///
/// ```
/// use image_decode::decode_image_base64_to_uint8;
///
/// let bytes = decode_image_base64_to_uint8("SGVsbG8=").unwrap();
/// assert_eq!(bytes, [72, 101, 108, 108, 111]);
/// ```
pub fn decode_image_base64_to_uint8(buffer: &str) -> Result<Vec<u8>, ImageDecodeError> {
    forgiving_decode(buffer).map_err(|err| {
        tracing::debug!(input_len = buffer.len(), error = %err, "base64 decode failed");
        ImageDecodeError::Decode
    })
}

/// Decodes a dynamically typed value, which must be a JSON string holding
/// base64 text.
///
/// # Errors
///
/// - [`ImageDecodeError::Type`] if `buffer` is not a string. No decoding is
///   attempted.
/// - [`ImageDecodeError::Decode`] if it is a string but not valid base64.
///
/// # Example
///
/// ```
/// use image_decode::{decode_image_base64_value, ImageDecodeError};
/// use serde_json::json;
///
/// assert_eq!(decode_image_base64_value(&json!("Zm9v")).unwrap(), b"foo");
/// assert_eq!(
///     decode_image_base64_value(&json!({"buffer": 123})),
///     Err(ImageDecodeError::Type)
/// );
/// ```
pub fn decode_image_base64_value(buffer: &Value) -> Result<Vec<u8>, ImageDecodeError> {
    match buffer {
        Value::String(s) => decode_image_base64_to_uint8(s),
        other => {
            tracing::debug!(input_type = json_type_name(other), "rejected non-string buffer");
            Err(ImageDecodeError::Type)
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
