//! Error types for querydoc.

use thiserror::Error;

/// The main error type for querydoc operations.
///
/// Building a query never fails; only turning it into JSON or writing it
/// out can.
#[derive(Debug, Error)]
pub enum Error {
    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for querydoc operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_error_converts() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = err.into();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.to_string(), "I/O error: gone");
        assert!(err.source().is_some());
    }
}
