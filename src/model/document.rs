//! Document-level types.

use super::TagRange;
use crate::error::{Error, Result};
use crate::parser::TagSearcher;
use crate::source::DocumentSource;
use std::io::Read;
use std::path::Path;

/// An immutable HTML document held as raw text.
///
/// Offsets used throughout the crate are byte offsets into [`Document::text`].
/// Every offset produced by a tag search falls on a character boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    /// Create a document from text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Create a document from UTF-8 bytes.
    ///
    /// Fails with [`Error::Encoding`] if the bytes are not valid UTF-8.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(data).map_err(|e| Error::Encoding(e.to_string()))?;
        Ok(Self::new(text))
    }

    /// Create a document from bytes, replacing invalid UTF-8 sequences.
    pub fn from_bytes_lossy(data: &[u8]) -> Self {
        Self::new(String::from_utf8_lossy(data).into_owned())
    }

    /// Read a document from any reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self::new(String::from_utf8(data)?))
    }

    /// Read a document from a file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData => Error::Encoding(format!(
                "{} is not valid UTF-8",
                path.as_ref().display()
            )),
            _ => Error::Io(e),
        })?;
        Ok(Self::new(text))
    }

    /// Retrieve a document through an injected source.
    pub fn fetch<S: DocumentSource + ?Sized>(source: &S) -> Result<Self> {
        log::debug!("Fetching document from {}", source.describe());
        let text = source.fetch()?;
        log::debug!("Fetched {} bytes from {}", text.len(), source.describe());
        Ok(Self::new(text))
    }

    /// The full raw text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the document has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the text in `[start, end)`.
    pub fn slice(&self, start: usize, end: usize) -> Result<&str> {
        self.check_window(start, end)?;
        Ok(&self.text[start..end])
    }

    /// Build a [`TagRange`] over `[start, end)`.
    ///
    /// The range must be non-empty; its content is not checked for tags.
    pub fn range(&self, start: usize, end: usize) -> Result<TagRange<'_>> {
        TagRange::new(self, start, end)
    }

    /// Find the first balanced `tag` pair in `[start, stop)` with default options.
    ///
    /// See [`TagSearcher::tag_search`].
    pub fn tag_search(&self, tag: &str, start: usize, stop: usize) -> Result<Vec<TagRange<'_>>> {
        TagSearcher::new(self).tag_search(tag, start, stop)
    }

    /// Find every `tag` pair in `[start, stop)` with default options.
    ///
    /// See [`TagSearcher::tag_scan`].
    pub fn tag_scan(&self, tag: &str, start: usize, stop: usize) -> Result<Vec<TagRange<'_>>> {
        TagSearcher::new(self).tag_scan(tag, start, stop)
    }

    /// Validate a `[start, stop)` window against the text.
    pub(crate) fn check_window(&self, start: usize, stop: usize) -> Result<()> {
        let len = self.text.len();
        if start > stop
            || stop > len
            || !self.text.is_char_boundary(start)
            || !self.text.is_char_boundary(stop)
        {
            return Err(Error::OutOfRange { start, stop, len });
        }
        Ok(())
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
