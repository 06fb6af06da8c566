//! Tag range types.

use super::Document;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Owned offsets of a resolved tag pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TagSpan {
    /// Offset of the open tag's `<`
    pub start: usize,
    /// Offset just past the close tag's `>`
    pub end: usize,
}

impl TagSpan {
    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span covers no text.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if `other` lies entirely inside this span.
    pub fn contains(&self, other: &TagSpan) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// A balanced tag pair located in a [`Document`].
///
/// Holds `[start, end)` offsets and a shared reference to the document, so it
/// can never outlive the text it points into. Ranges returned together from a
/// search are related by containment of their offsets only.
#[derive(Clone, Copy)]
pub struct TagRange<'doc> {
    doc: &'doc Document,
    start: usize,
    end: usize,
}

impl<'doc> TagRange<'doc> {
    /// Create a range over `[start, end)` of `doc`.
    ///
    /// Fails with [`Error::OutOfRange`] if the range is empty, reversed, past
    /// the end of the text, or splits a character.
    pub fn new(doc: &'doc Document, start: usize, end: usize) -> Result<Self> {
        if start >= end {
            return Err(Error::OutOfRange {
                start,
                stop: end,
                len: doc.len(),
            });
        }
        doc.check_window(start, end)?;
        Ok(Self { doc, start, end })
    }

    /// Offset of the open tag.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset just past the close tag.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length in bytes, delimiters included.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false; a resolved range spans at least its own tags.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The document this range points into.
    pub fn document(&self) -> &'doc Document {
        self.doc
    }

    /// The full text of the pair, open and close tags included.
    pub fn content(&self) -> &'doc str {
        &self.doc.text()[self.start..self.end]
    }

    /// The text between the end of the open tag and the start of the close tag.
    ///
    /// Returns an empty string when the range does not look like a tag pair.
    pub fn inner(&self) -> &'doc str {
        let content = self.content();
        let Some(open_end) = content.find('>') else {
            return "";
        };
        match content.rfind("</") {
            Some(close_start) if close_start > open_end => &content[open_end + 1..close_start],
            _ => "",
        }
    }

    /// Owned copy of the offsets.
    pub fn span(&self) -> TagSpan {
        TagSpan {
            start: self.start,
            end: self.end,
        }
    }

    /// Check if `other` lies entirely inside this range.
    pub fn contains(&self, other: &TagRange<'_>) -> bool {
        self.span().contains(&other.span())
    }
}

impl fmt::Debug for TagRange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl fmt::Display for TagRange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.content())
    }
}

impl PartialEq for TagRange<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.start == other.start && self.end == other.end
    }
}

impl Eq for TagRange<'_> {}

impl From<TagRange<'_>> for TagSpan {
    fn from(range: TagRange<'_>) -> Self {
        range.span()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_and_inner() {
        let doc = Document::new("x<th class=\"a\">Word</th>y");
        let range = doc.range(1, 24).unwrap();
        assert_eq!(range.content(), "<th class=\"a\">Word</th>");
        assert_eq!(range.inner(), "Word");
        assert_eq!(range.len(), 23);
    }

    #[test]
    fn test_inner_with_nested_markup() {
        let doc = Document::new("<td><b>x</b></td>");
        let range = doc.range(0, doc.len()).unwrap();
        assert_eq!(range.inner(), "<b>x</b>");
    }

    #[test]
    fn test_inner_without_tags() {
        let doc = Document::new("plain");
        let range = doc.range(0, 5).unwrap();
        assert_eq!(range.inner(), "");
    }

    #[test]
    fn test_new_rejects_bad_ranges() {
        let doc = Document::new("<p></p>");
        assert!(matches!(doc.range(3, 3), Err(Error::OutOfRange { .. })));
        assert!(matches!(doc.range(4, 2), Err(Error::OutOfRange { .. })));
        assert!(matches!(doc.range(0, 8), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn test_contains() {
        let doc = Document::new("<div><div></div></div>");
        let outer = doc.range(0, 22).unwrap();
        let inner = doc.range(5, 16).unwrap();
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
    }

    #[test]
    fn test_equality_is_per_document() {
        let a = Document::new("<p></p>");
        let b = Document::new("<p></p>");
        assert_eq!(a.range(0, 7).unwrap(), a.range(0, 7).unwrap());
        assert_ne!(a.range(0, 7).unwrap(), b.range(0, 7).unwrap());
        assert_eq!(a.range(0, 7).unwrap().span(), b.range(0, 7).unwrap().span());
    }

    #[test]
    fn test_span_serialization() {
        let span = TagSpan { start: 2, end: 9 };
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, r#"{"start":2,"end":9}"#);
    }
}
