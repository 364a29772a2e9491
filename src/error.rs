//! Error types for pdfdigest.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pdfdigest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while digesting a collection.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// The collection's job description could not be parsed.
    #[error("Invalid job spec {}: {source}", path.display())]
    JobSpec {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Error serializing the collection report.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
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

        let err = Error::TextExtract("Page 3: bad operand".to_string());
        assert_eq!(err.to_string(), "Text extraction error: Page 3: bad operand");
    }

    #[test]
    fn test_job_spec_error_names_file() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::JobSpec {
            path: PathBuf::from("Collection 1/challenge1b_input.json"),
            source,
        };
        assert!(err
            .to_string()
            .starts_with("Invalid job spec Collection 1/challenge1b_input.json"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
