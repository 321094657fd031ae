//! Error types for the surface image adapter.

use thiserror::Error;

/// Errors surfaced by the image adapter.
///
/// Only construction and channel selection can fail. Coordinates outside
/// the image and degenerate spans are not errors; those calls silently
/// clamp or return a zero count, so callers can probe bounds freely.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ImageError {
    /// The surface's pixel format is indexed/palette based, or its byte
    /// layout is outside what the codec supports.
    #[error("only direct color surfaces are supported")]
    UnsupportedFormat,

    /// A sample read requested a channel the image does not have.
    #[error("no channel {0} in this image")]
    InvalidChannel(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ImageError::UnsupportedFormat.to_string(),
            "only direct color surfaces are supported"
        );
        assert_eq!(
            ImageError::InvalidChannel(3).to_string(),
            "no channel 3 in this image"
        );
    }
}
