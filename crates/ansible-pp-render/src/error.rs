//! Error type for rendering operations.
//!
//! Parsing has its own [`ParseError`](crate::ParseError); everything that
//! writes output returns [`RenderError`].

use std::io;

use crate::text::ChopError;

/// Error type for rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Writing to the output failed.
    #[error("failed to write output")]
    Io(#[from] io::Error),

    /// The chop marker doesn't fit the configured line width.
    #[error(transparent)]
    Chop(#[from] ChopError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_error_keeps_source() {
        let err = RenderError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.to_string(), "failed to write output");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_chop_error_is_transparent() {
        let err = RenderError::from(ChopError {
            marker_width: 3,
            max_width: 2,
        });
        assert_eq!(
            err.to_string(),
            "can't fit a chop marker of width 3 into a line width of 2"
        );
    }
}
