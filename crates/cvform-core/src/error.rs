//! Error types for the cvform-core library.

use thiserror::Error;

/// Main error type for the cvform library.
#[derive(Error, Debug)]
pub enum CvformError {
    /// Document loading error.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// CV extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Validation rule definition error.
    #[error("rule error: {0}")]
    Rule(#[from] RuleError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to reading a document as text.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file extension is not one we know how to read.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The file is not valid UTF-8 text.
    #[error("document is not valid UTF-8 text")]
    NotText,

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Pdf(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// I/O error while reading the document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to CV extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Input exceeds the configured size limit.
    #[error("document is {size} bytes, limit is {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
}

/// Errors related to building validation rules.
#[derive(Error, Debug)]
pub enum RuleError {
    /// The rule pattern does not compile.
    #[error("invalid pattern for {field}: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// The rule has no field name.
    #[error("rule field name cannot be empty")]
    EmptyField,
}

/// Result type for the cvform library.
pub type Result<T> = std::result::Result<T, CvformError>;
