//! Error types for unhtml library.

use std::io;
use thiserror::Error;

/// Result type alias for unhtml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while locating tags and extracting content.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading a document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input does not look like an HTML document.
    #[error("Unknown file format: not an HTML document")]
    UnknownFormat,

    /// The input is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// No open tag of the requested name exists in the window.
    #[error("Tag <{tag}> not found in selection [{start}, {stop})")]
    TagAbsent {
        /// Requested tag name
        tag: String,
        /// Window start offset
        start: usize,
        /// Window stop offset
        stop: usize,
    },

    /// An open tag was found but its close tag is missing from the window.
    #[error("Tag <{tag}> opened at {open_at} is not closed in selection [{start}, {stop})")]
    UnclosedTag {
        /// Requested tag name
        tag: String,
        /// Offset of the unclosed open tag
        open_at: usize,
        /// Window start offset
        start: usize,
        /// Window stop offset
        stop: usize,
    },

    /// A window or range does not fit the document text.
    #[error("Range [{start}, {stop}) is out of bounds for document of length {len}")]
    OutOfRange {
        /// Requested start offset
        start: usize,
        /// Requested stop offset
        stop: usize,
        /// Document length in bytes
        len: usize,
    },

    /// Same-name nesting exceeded the configured depth limit.
    #[error("Tag <{tag}> nested deeper than the limit of {limit}")]
    NestingTooDeep {
        /// Requested tag name
        tag: String,
        /// Configured depth limit
        limit: usize,
    },

    /// A table row does not have as many cells as the table has headers.
    #[error("Malformed table: row {row} has {found} cells, expected {expected}")]
    MalformedTable {
        /// Zero-based row index
        row: usize,
        /// Number of headers
        expected: usize,
        /// Number of cells found in the row
        found: usize,
    },

    /// The tag name cannot be used to build a boundary pattern.
    #[error("Invalid tag name: {0:?}")]
    InvalidTagName(String),

    /// A boundary pattern failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// A document source failed to produce text.
    #[error("Source error: {0}")]
    Source(String),

    /// Error during rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

impl Error {
    /// The tag name this error refers to, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Error::TagAbsent { tag, .. }
            | Error::UnclosedTag { tag, .. }
            | Error::NestingTooDeep { tag, .. } => Some(tag),
            _ => None,
        }
    }
}
