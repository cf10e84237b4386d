//! Error types for the nfe-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the nfe library.
#[derive(Error, Debug)]
pub enum NfeError {
    /// The input is neither a URL, inline XML nor an existing file.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The XML markup could not be parsed.
    #[error("XML error: {0}")]
    Parse(#[from] ParseError),

    /// An external lookup table could not be loaded.
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(#[from] ResourceError),

    /// A remote document could not be retrieved.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning markup into an element tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The tokenizer rejected the markup.
    #[error("malformed XML at byte {position}: {message}")]
    Malformed { position: u64, message: String },

    /// The document contains no element at all.
    #[error("document has no root element")]
    NoRootElement,

    /// Input ended while an element was still open.
    #[error("element <{0}> is not closed")]
    UnclosedElement(String),

    /// Text or a second element found after the root element.
    #[error("content outside the root element at byte {position}")]
    ContentOutsideRoot { position: u64 },
}

/// Errors related to bundled or external lookup tables.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The table file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table file is not a valid code → name JSON object.
    #[error("invalid table format in {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for the nfe library.
pub type Result<T> = std::result::Result<T, NfeError>;
