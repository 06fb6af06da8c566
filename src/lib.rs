//! # unhtml
//!
//! Tag-range extraction for HTML documents.
//!
//! This library locates balanced tag pairs (`head`, `body`, `div`, `table`,
//! `tr`, `td`, `th`, ...) in raw document text by offset, without building a
//! DOM, and assembles tables from the ranges it finds.
//!
//! ## Quick Start
//!
//! ```
//! use unhtml::Document;
//!
//! let doc = Document::new("<div>A<div>B</div>C</div>");
//! let ranges = doc.tag_search("div", 0, doc.len())?;
//!
//! assert_eq!(ranges.len(), 2);
//! assert_eq!(ranges[0].content(), "<div>A<div>B</div>C</div>");
//! assert_eq!(ranges[1].content(), "<div>B</div>");
//! # Ok::<(), unhtml::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Balanced pairs**: same-name nesting resolved to any depth
//! - **Scanning**: every occurrence in a window, nested ones included
//! - **Tables**: headers and cell matrix from `th`/`tr`/`td`
//! - **Sections**: `head` and `body` of a page
//! - **Output formats**: Markdown, tab-separated text, JSON
//! - **Injectable sources**: no network access inside the library

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_html, HtmlFormat};
pub use error::{Error, Result};
pub use extract::{extract_sections, ExtractOptions, Sections, TableExtractor, TextMode};
pub use model::{Document, Table, TagRange, TagSpan};
pub use parser::{BoundaryRule, ErrorMode, SearchOptions, TagPattern, TagSearcher};
pub use render::JsonFormat;
pub use source::{DocumentSource, FileSource, StaticSource};

use std::path::Path;

/// Read an HTML file into a [`Document`].
///
/// Same checks as [`Unhtml::parse_file`] with default options: the file
/// must look like HTML (see [`detect`]) and be valid UTF-8.
///
/// # Example
///
/// ```no_run
/// use unhtml::parse_file;
///
/// let doc = parse_file("page.html").unwrap();
/// println!("{} bytes", doc.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    Ok(Unhtml::new().parse_file(path)?.into_document())
}

/// Build a [`Document`] from HTML bytes.
///
/// Same checks as [`Unhtml::parse_bytes`] with default options. Use
/// [`Document::from_bytes`] to load fragments without detection.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    Ok(Unhtml::new().parse_bytes(data)?.into_document())
}

/// Extract every top-level table of an HTML file.
///
/// # Example
///
/// ```no_run
/// use unhtml::extract_tables;
///
/// for table in extract_tables("verbs.html").unwrap() {
///     println!("{:?}", table.headers);
/// }
/// ```
pub fn extract_tables<P: AsRef<Path>>(path: P) -> Result<Vec<Table>> {
    Unhtml::new().parse_file(path)?.tables()
}

/// Convert every top-level table of an HTML file to Markdown.
///
/// Tables are separated by a blank line.
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    Unhtml::new().parse_file(path)?.to_markdown()
}

/// Builder for loading documents and extracting content from them.
///
/// # Example
///
/// ```
/// use unhtml::{TextMode, Unhtml};
///
/// let result = Unhtml::new()
///     .lenient()
///     .case_insensitive()
///     .with_text_mode(TextMode::InnerText)
///     .parse_str("<TABLE><TR><TH>a</TH></TR><TR><TD>1</TD></TR></TABLE>")?;
///
/// let tables = result.tables()?;
/// assert_eq!(tables[0].rows, vec![vec!["1"]]);
/// # Ok::<(), unhtml::Error>(())
/// ```
pub struct Unhtml {
    options: ExtractOptions,
    lossy: bool,
}

impl Unhtml {
    /// Create a new Unhtml builder.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
            lossy: false,
        }
    }

    /// Enable lenient mode.
    ///
    /// Ragged rows are kept, broken tables are skipped and byte input is
    /// accepted without HTML detection.
    pub fn lenient(mut self) -> Self {
        self.options = self.options.lenient();
        self
    }

    /// Use the HTML open-tag boundary rule.
    pub fn strict_boundary(mut self) -> Self {
        self.options.search = self.options.search.strict_boundary();
        self
    }

    /// Match tag names regardless of ASCII case.
    pub fn case_insensitive(mut self) -> Self {
        self.options.search = self.options.search.case_insensitive();
        self
    }

    /// Limit same-name nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.options.search = self.options.search.with_max_depth(depth);
        self
    }

    /// Set how cell text is derived.
    pub fn with_text_mode(mut self, mode: TextMode) -> Self {
        self.options = self.options.with_text_mode(mode);
        self
    }

    /// Replace invalid UTF-8 in byte input instead of failing.
    pub fn lossy(mut self) -> Self {
        self.lossy = true;
        self
    }

    /// Use text already in memory.
    pub fn parse_str(self, text: impl Into<String>) -> Result<UnhtmlResult> {
        Ok(self.finish(Document::new(text)))
    }

    /// Parse bytes.
    ///
    /// In strict mode the bytes must look like HTML (see [`detect`]).
    pub fn parse_bytes(self, data: &[u8]) -> Result<UnhtmlResult> {
        if !self.options.is_lenient() {
            detect_format_from_bytes(data)?;
        }
        let document = if self.lossy {
            Document::from_bytes_lossy(data)
        } else {
            Document::from_bytes(data)?
        };
        Ok(self.finish(document))
    }

    /// Read and parse a file.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<UnhtmlResult> {
        let data = std::fs::read(path)?;
        self.parse_bytes(&data)
    }

    /// Retrieve a document through an injected source.
    pub fn fetch<S: DocumentSource + ?Sized>(self, source: &S) -> Result<UnhtmlResult> {
        Ok(self.finish(Document::fetch(source)?))
    }

    fn finish(self, document: Document) -> UnhtmlResult {
        UnhtmlResult {
            document,
            options: self.options,
        }
    }
}

impl Default for Unhtml {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded document together with the builder's options.
pub struct UnhtmlResult {
    document: Document,
    options: ExtractOptions,
}

impl UnhtmlResult {
    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Take the document, dropping the options.
    pub fn into_document(self) -> Document {
        self.document
    }

    /// A searcher over the document with the configured options.
    pub fn searcher(&self) -> TagSearcher<'_> {
        TagSearcher::with_options(&self.document, self.options.search.clone())
    }

    /// Find the first balanced `tag` pair in `[start, stop)`.
    pub fn tag_search(&self, tag: &str, start: usize, stop: usize) -> Result<Vec<TagRange<'_>>> {
        self.searcher().tag_search(tag, start, stop)
    }

    /// Find every `tag` pair in `[start, stop)`.
    pub fn tag_scan(&self, tag: &str, start: usize, stop: usize) -> Result<Vec<TagRange<'_>>> {
        self.searcher().tag_scan(tag, start, stop)
    }

    /// Locate the `head` and `body` sections.
    pub fn sections(&self) -> Result<Sections<'_>> {
        Sections::locate(&self.searcher())
    }

    /// Extract the table whose headers start at or after `start`.
    pub fn table(&self, start: usize) -> Result<Table> {
        self.extractor().extract_table(start)
    }

    /// Extract every top-level table.
    pub fn tables(&self) -> Result<Vec<Table>> {
        self.extractor().extract_tables()
    }

    /// Render every top-level table as Markdown, separated by blank lines.
    pub fn to_markdown(&self) -> Result<String> {
        let rendered = self
            .tables()?
            .iter()
            .map(render::to_markdown)
            .collect::<Result<Vec<_>>>()?;
        Ok(rendered.join("\n\n"))
    }

    /// Render every top-level table as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(self.tables()?.as_slice(), format)
    }

    fn extractor(&self) -> TableExtractor<'_> {
        TableExtractor::with_options(&self.document, self.options.clone())
    }
}
