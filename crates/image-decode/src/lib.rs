//! Base64 image decoding.
//!
//! Turns a base64-encoded image (or any binary payload) into a byte buffer
//! ready for rendering, upload, or further processing.
//!
//! # Overview
//!
//! - [`decode_image_base64_to_uint8`] - decodes a `&str`
//! - [`decode_image_base64_value`] - decodes a dynamically typed
//!   [`serde_json::Value`], rejecting anything that is not a string
//!
//! Both report failures through [`ImageDecodeError`], whose messages are
//! fixed and never include the underlying decoder's diagnostics.
//!
//! # Example
//!
//! ```
//! use image_decode::{decode_image_base64_to_uint8, ImageDecodeError};
//!
//! assert_eq!(decode_image_base64_to_uint8("SGVsbG8=").unwrap(), b"Hello");
//! assert_eq!(
//!     decode_image_base64_to_uint8("this-is-not-base64"),
//!     Err(ImageDecodeError::Decode)
//! );
//! ```

mod constants;
mod decode_image_base64;
mod forgiving;

pub use constants::{DECODE_ERROR_MESSAGE, PAD, TYPE_ERROR_MESSAGE};
pub use decode_image_base64::{decode_image_base64_to_uint8, decode_image_base64_value};

use thiserror::Error;

/// Error type for image decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageDecodeError {
    /// The input was not a string.
    #[error("The \"buffer\" must be a base64-encoded string.")]
    Type,
    /// The input was a string but not valid base64.
    #[error("Failed to decode base64 string. Ensure the input is a valid base64-encoded string.")]
    Decode,
}

/// Coarse classification of an [`ImageDecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageDecodeErrorKind {
    Type,
    Decode,
}

impl ImageDecodeError {
    pub fn kind(&self) -> ImageDecodeErrorKind {
        match self {
            ImageDecodeError::Type => ImageDecodeErrorKind::Type,
            ImageDecodeError::Decode => ImageDecodeErrorKind::Decode,
        }
    }
}
