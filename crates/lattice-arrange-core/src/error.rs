//! Error types for lattice-arrange.

/// Result type alias for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors raised by the checked mutators of a content sequence.
///
/// Lookup misses during arrangement or selection are never errors; these
/// only cover malformed positional requests against the content itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// A position was outside the sequence.
    #[error("index {index} is out of bounds for content of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A range was reversed or extended past the end of the sequence.
    #[error("range {start}..{end} is invalid for content of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// Two parallel sequences that must match in length did not.
    #[error("expected {expected} items, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl ContentError {
    /// Create an out-of-bounds error.
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Create an invalid-range error.
    pub fn invalid_range(range: &std::ops::Range<usize>, len: usize) -> Self {
        Self::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContentError::out_of_bounds(5, 3).to_string(),
            "index 5 is out of bounds for content of length 3"
        );
        assert_eq!(
            ContentError::invalid_range(&(2..7), 4).to_string(),
            "range 2..7 is invalid for content of length 4"
        );
        assert_eq!(
            ContentError::LengthMismatch {
                expected: 2,
                actual: 1
            }
            .to_string(),
            "expected 2 items, got 1"
        );
    }
}
