//! Injectable document retrieval.
//!
//! The crate never fetches anything on its own. Callers hand it a
//! [`DocumentSource`]: a closure wrapping their HTTP client, a file on disk,
//! or text already in memory.
//!
//! # Example
//!
//! ```
//! use unhtml::{Document, StaticSource};
//!
//! let source = StaticSource::new("<body><table></table></body>");
//! let doc = Document::fetch(&source)?;
//! assert_eq!(doc.tag_scan("table", 0, doc.len())?.len(), 1);
//! # Ok::<(), unhtml::Error>(())
//! ```

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Something that produces the raw text of a document.
pub trait DocumentSource {
    /// Retrieve the document text.
    fn fetch(&self) -> Result<String>;

    /// Short label used in log messages.
    fn describe(&self) -> String {
        "document source".to_string()
    }
}

impl<F> DocumentSource for F
where
    F: Fn() -> Result<String>,
{
    fn fetch(&self) -> Result<String> {
        self()
    }

    fn describe(&self) -> String {
        "closure".to_string()
    }
}

/// Reads a document from a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FileSource {
    fn fetch(&self) -> Result<String> {
        let data = std::fs::read(&self.path)?;
        String::from_utf8(data).map_err(|e| {
            Error::Encoding(format!("{}: {}", self.path.display(), e.utf8_error()))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves text already held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    /// Create a source that always returns `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DocumentSource for StaticSource {
    fn fetch(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        format!("static text ({} bytes)", self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;

    #[test]
    fn test_closure_source() {
        let source = || -> Result<String> { Ok("<head></head>".to_string()) };
        let doc = Document::fetch(&source).unwrap();
        assert_eq!(doc.text(), "<head></head>");
    }

    #[test]
    fn test_closure_source_error() {
        let source = || -> Result<String> { Err(Error::Source("connection refused".into())) };
        let result = Document::fetch(&source);
        assert!(matches!(result, Err(Error::Source(_))));
    }

    #[test]
    fn test_static_source() {
        let source = StaticSource::new("<p>x</p>");
        assert_eq!(source.fetch().unwrap(), "<p>x</p>");
        assert_eq!(source.describe(), "static text (8 bytes)");
    }

    #[test]
    fn test_missing_file_source() {
        let source = FileSource::new("/nonexistent/page.html");
        assert!(matches!(source.fetch(), Err(Error::Io(_))));
    }
}
