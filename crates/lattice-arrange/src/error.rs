//! Error types for lattice-arrange.

use lattice_arrange_core::ContentError;

/// Result type alias for controller operations.
pub type Result<T> = std::result::Result<T, ArrangeError>;

/// Errors that can occur around an array controller.
///
/// Arrangement and selection themselves never fail: lookup misses are
/// no-ops. These cover configuration, content access, and lifecycle misuse.
#[derive(Debug, thiserror::Error)]
pub enum ArrangeError {
    /// A checked content mutation failed.
    #[error("content error: {0}")]
    Content(#[from] ContentError),

    /// Controller configuration could not be parsed or serialized.
    #[error("invalid controller configuration: {message}")]
    Config { message: String },

    /// The controller was disposed and no longer observes content.
    #[error("array controller has been disposed")]
    Disposed,
}

impl ArrangeError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_arrange_core::ContentList;

    fn take_third(list: &ContentList<u8>) -> Result<u8> {
        Ok(list.try_remove(2)?)
    }

    #[test]
    fn test_content_errors_convert() {
        let list = ContentList::new(vec![1, 2]);
        let err = take_third(&list).unwrap_err();

        assert!(matches!(
            err,
            ArrangeError::Content(ContentError::IndexOutOfBounds { index: 2, len: 2 })
        ));
        assert_eq!(
            err.to_string(),
            "content error: index 2 is out of bounds for content of length 2"
        );
    }

    #[test]
    fn test_config_error_message() {
        let err = ArrangeError::config("bad key");
        assert_eq!(err.to_string(), "invalid controller configuration: bad key");
    }
}
