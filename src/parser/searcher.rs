//! Tag search entry point bound to a document.

use super::{resolver, scanner, SearchOptions, TagPattern};
use crate::error::Result;
use crate::model::{Document, TagRange};

/// Locates tag pairs in a [`Document`] under fixed [`SearchOptions`].
///
/// # Example
///
/// ```
/// use unhtml::{Document, SearchOptions, TagSearcher};
///
/// let doc = Document::new("<div>A<div>B</div>C</div>");
/// let searcher = TagSearcher::with_options(&doc, SearchOptions::new().strict_boundary());
/// let ranges = searcher.tag_search("div", 0, doc.len())?;
/// assert_eq!(ranges.len(), 2);
/// assert_eq!(ranges[1].content(), "<div>B</div>");
/// # Ok::<(), unhtml::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct TagSearcher<'doc> {
    doc: &'doc Document,
    options: SearchOptions,
}

impl<'doc> TagSearcher<'doc> {
    /// Create a searcher with default options.
    pub fn new(doc: &'doc Document) -> Self {
        Self::with_options(doc, SearchOptions::default())
    }

    /// Create a searcher with custom options.
    pub fn with_options(doc: &'doc Document, options: SearchOptions) -> Self {
        Self { doc, options }
    }

    /// The searched document.
    pub fn document(&self) -> &'doc Document {
        self.doc
    }

    /// The active options.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Compile the boundary patterns for `tag` under this searcher's options.
    ///
    /// Use with [`search_with`](Self::search_with) and
    /// [`scan_with`](Self::scan_with) to reuse one compilation across windows.
    pub fn pattern(&self, tag: &str) -> Result<TagPattern> {
        TagPattern::new(tag, &self.options)
    }

    /// Find the first balanced `tag` pair in `[start, stop)`.
    ///
    /// Returns the outer range first, followed by any same-name ranges nested
    /// in it in the order they open. An empty Vec means the tag does not occur
    /// in the window.
    ///
    /// # Errors
    ///
    /// * [`Error::OutOfRange`](crate::Error::OutOfRange) if the window does not fit the text
    /// * [`Error::UnclosedTag`](crate::Error::UnclosedTag) if an open tag has no close in the window
    /// * [`Error::NestingTooDeep`](crate::Error::NestingTooDeep) if the depth limit is exceeded
    pub fn tag_search(&self, tag: &str, start: usize, stop: usize) -> Result<Vec<TagRange<'doc>>> {
        let pattern = self.pattern(tag)?;
        self.search_with(&pattern, start, stop)
    }

    /// Find every `tag` pair in `[start, stop)`, nested ones included.
    ///
    /// # Errors
    ///
    /// As [`tag_search`](Self::tag_search), plus
    /// [`Error::TagAbsent`](crate::Error::TagAbsent) if the window holds no such tag.
    pub fn tag_scan(&self, tag: &str, start: usize, stop: usize) -> Result<Vec<TagRange<'doc>>> {
        let pattern = self.pattern(tag)?;
        self.scan_with(&pattern, start, stop)
    }

    /// [`tag_search`](Self::tag_search) with a precompiled pattern.
    pub fn search_with(
        &self,
        pattern: &TagPattern,
        start: usize,
        stop: usize,
    ) -> Result<Vec<TagRange<'doc>>> {
        self.doc.check_window(start, stop)?;
        resolver::resolve(self.doc, pattern, start, stop, self.options.max_depth)
    }

    /// [`tag_scan`](Self::tag_scan) with a precompiled pattern.
    pub fn scan_with(
        &self,
        pattern: &TagPattern,
        start: usize,
        stop: usize,
    ) -> Result<Vec<TagRange<'doc>>> {
        self.doc.check_window(start, stop)?;
        scanner::scan(self.doc, pattern, start, stop, self.options.max_depth)
    }

    /// Find the outer range of the first `tag` pair at or after `start`.
    pub fn first(&self, tag: &str, start: usize) -> Result<Option<TagRange<'doc>>> {
        Ok(self
            .tag_search(tag, start, self.doc.len())?
            .into_iter()
            .next())
    }

    /// Find every top-level `tag` pair in `[start, stop)`, skipping nested ones.
    pub fn top_level(&self, tag: &str, start: usize, stop: usize) -> Result<Vec<TagRange<'doc>>> {
        let all = self.tag_scan(tag, start, stop)?;
        let mut outer: Vec<TagRange<'doc>> = Vec::new();
        for range in all {
            if outer.last().map_or(true, |last| !last.contains(&range)) {
                outer.push(range);
            }
        }
        Ok(outer)
    }
}
