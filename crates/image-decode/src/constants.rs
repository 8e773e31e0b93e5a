/// Padding character.
pub const PAD: char = '=';

/// Message carried by [`ImageDecodeError::Type`](crate::ImageDecodeError::Type).
pub const TYPE_ERROR_MESSAGE: &str = "The \"buffer\" must be a base64-encoded string.";

/// Message carried by [`ImageDecodeError::Decode`](crate::ImageDecodeError::Decode).
pub const DECODE_ERROR_MESSAGE: &str =
    "Failed to decode base64 string. Ensure the input is a valid base64-encoded string.";
