//! Error types for the docstruct library.

use std::io;
use thiserror::Error;

/// Result type alias for docstruct operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reconstructing document structure.
///
/// Only the open-time variants (`Io`, `UnknownFormat`, `UnsupportedVersion`,
/// `Open`, `Encrypted`) abort a document run. The per-feature extraction
/// variants are recovered at the page-assembly boundary: the affected feature
/// is treated as absent and processing continues.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The document could not be opened or decoded at all.
    #[error("Failed to open document: {0}")]
    Open(String),

    /// The document is encrypted and cannot be decoded.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text from one page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Error extracting table grids from one page.
    #[error("Table extraction error: {0}")]
    TableExtract(String),

    /// Error extracting or saving one image.
    #[error("Image extraction error: {0}")]
    ImageExtract(String),

    /// Error serializing the output record.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::Open(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encrypted;
        assert_eq!(err.to_string(), "Document is encrypted");

        let err = Error::TextExtract("page 3".to_string());
        assert_eq!(err.to_string(), "Text extraction error: page 3");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
