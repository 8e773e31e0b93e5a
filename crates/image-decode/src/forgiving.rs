//! Whitespace- and padding-tolerant base64 decoding.
//!
//! Mirrors the "forgiving base64 decode" used by `atob`: ASCII whitespace is
//! dropped, trailing padding is optional but must be canonical when present,
//! and leftover bits in the final symbol are discarded.

use std::borrow::Cow;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{DecodeError, Engine};

use crate::constants::PAD;

/// Standard alphabet, no padding accepted, trailing bits ignored.
///
/// Padding is stripped by [`strip_padding`] before the engine sees the input,
/// so any `=` that reaches the engine is misplaced.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Removes ASCII whitespace (space, `\t`, `\n`, `\x0C`, `\r`).
///
/// Borrows when there is nothing to remove.
fn strip_ascii_whitespace(input: &str) -> Cow<'_, str> {
    if !input.bytes().any(|b| b.is_ascii_whitespace()) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect(),
    )
}

/// Drops one or two trailing pad characters, but only from a full quantum.
///
/// `"Zg=="` becomes `"Zg"`; `"Zg="` is left alone and rejected later.
fn strip_padding(input: &str) -> &str {
    if input.len() % 4 != 0 {
        return input;
    }
    let stripped = input.strip_suffix(PAD).unwrap_or(input);
    stripped.strip_suffix(PAD).unwrap_or(stripped)
}

/// Decodes `input` with the forgiving rules, returning the engine's own error
/// on failure.
pub(crate) fn forgiving_decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let compact = strip_ascii_whitespace(input);
    FORGIVING.decode(strip_padding(&compact))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_ascii_whitespace_borrows_clean_input() {
        assert!(matches!(strip_ascii_whitespace("SGVsbG8="), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_ascii_whitespace_removes_all_kinds() {
        let out = strip_ascii_whitespace(" SG\tVs\nbG\x0C8=\r ");
        assert_eq!(out, "SGVsbG8=");
    }

    #[test]
    fn test_strip_padding_full_quantum() {
        assert_eq!(strip_padding("Zg=="), "Zg");
        assert_eq!(strip_padding("Zm8="), "Zm8");
        assert_eq!(strip_padding("Zm9v"), "Zm9v");
    }

    #[test]
    fn test_strip_padding_leaves_partial_quantum() {
        assert_eq!(strip_padding("Zg="), "Zg=");
        assert_eq!(strip_padding("Zm9v=="), "Zm9v==");
    }

    #[test]
    fn test_strip_padding_at_most_two() {
        assert_eq!(strip_padding("Zm9v===="), "Zm9v==");
    }

    #[test]
    fn test_forgiving_decode_unpadded() {
        assert_eq!(forgiving_decode("SGVsbG8").unwrap(), b"Hello");
    }

    #[test]
    fn test_forgiving_decode_trailing_bits() {
        assert_eq!(forgiving_decode("Zh==").unwrap(), b"f");
    }

    #[test]
    fn test_forgiving_decode_misplaced_padding() {
        assert!(forgiving_decode("Zg=").is_err());
        assert!(forgiving_decode("=Zg=").is_err());
        assert!(forgiving_decode("Zm9v====").is_err());
    }

    #[test]
    fn test_forgiving_decode_bad_length() {
        assert!(forgiving_decode("A").is_err());
        assert!(forgiving_decode("Zm9vY").is_err());
    }
}
