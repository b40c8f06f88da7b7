//! Error types for the CZML writer.

use thiserror::Error;

/// Main error type for CZML writing.
#[derive(Error, Debug)]
pub enum Error {
    /// Protocol misuse: writing to a closed writer, writing a second value,
    /// closing twice, opening a sibling while another writer is open.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Malformed value: length mismatch, bad range, out-of-range channel,
    /// unknown enum token, inverted bounds.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error from the underlying sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or settings parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid operation error.
    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// True for protocol misuse errors.
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation(_))
    }

    /// True for malformed value errors.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Result type alias for CZML operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::invalid_operation("property 'show' is not open");
        assert!(e.to_string().contains("show"));
        assert!(e.is_invalid_operation());

        let e = Error::invalid_argument("lower bound 5 exceeds upper bound 3");
        assert!(e.to_string().contains("5"));
        assert!(e.to_string().contains("3"));
        assert!(e.is_invalid_argument());
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
