// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for map parsing operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while reading an indoor map
///
/// Only whole-document failures are represented here. Attribute values that
/// cannot be decoded fall back to their defaults and never surface as errors.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The map file could not be opened
    #[error("Indoor map file not found: '{}'", path.display())]
    FileNotFound { path: PathBuf },

    /// IO error while reading the source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not well-formed XML
    #[error("XML parser error: {0}")]
    InvalidXml(String),

    /// The document root is not the expected element
    #[error("Unexpected root element: expected <{expected}>, found <{found}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl ParseError {
    /// Create a new XML syntax error
    pub fn xml(msg: impl Into<String>) -> Self {
        ParseError::InvalidXml(msg.into())
    }

    /// Create a new file-not-found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        ParseError::FileNotFound { path: path.into() }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        ParseError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_message() {
        let err = ParseError::file_not_found("maps/missing.xml");
        assert_eq!(
            err.to_string(),
            "Indoor map file not found: 'maps/missing.xml'"
        );
    }

    #[test]
    fn test_unexpected_root_message() {
        let err = ParseError::UnexpectedRoot {
            expected: "map",
            found: "building".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected root element: expected <map>, found <building>"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ParseError = io.into();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
