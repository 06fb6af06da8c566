//! Table extraction from `th`/`tr`/`td` ranges.
//!
//! Headers come from every `th` after the start offset. Rows are the `tr`
//! elements following the last header, and each row's cells are the `td`
//! elements inside it.

use super::{CellText, ExtractOptions};
use crate::error::{Error, Result};
use crate::model::{Document, Table, TagRange};
use crate::parser::TagSearcher;

/// Builds [`Table`]s from a document.
///
/// # Example
///
/// ```
/// use unhtml::{Document, TableExtractor};
///
/// let doc = Document::new(
///     "<table><tr><th>fr</th><th>en</th></tr>\
///      <tr><td>chat</td><td>cat</td></tr></table>",
/// );
/// let table = TableExtractor::new(&doc).extract_table(0)?;
/// assert_eq!(table.headers, vec!["fr", "en"]);
/// assert_eq!(table.rows, vec![vec!["chat", "cat"]]);
/// # Ok::<(), unhtml::Error>(())
/// ```
pub struct TableExtractor<'doc> {
    searcher: TagSearcher<'doc>,
    options: ExtractOptions,
    text: CellText,
}

impl<'doc> TableExtractor<'doc> {
    /// Create an extractor with default options.
    pub fn new(doc: &'doc Document) -> Self {
        Self::with_options(doc, ExtractOptions::default())
    }

    /// Create an extractor with custom options.
    pub fn with_options(doc: &'doc Document, options: ExtractOptions) -> Self {
        Self {
            searcher: TagSearcher::with_options(doc, options.search.clone()),
            text: CellText::new(options.text_mode),
            options,
        }
    }

    /// The underlying searcher.
    pub fn searcher(&self) -> &TagSearcher<'doc> {
        &self.searcher
    }

    /// Extract the table whose headers start at or after `start`.
    pub fn extract_table(&self, start: usize) -> Result<Table> {
        self.extract_table_within(start, self.searcher.document().len())
    }

    /// Extract a table from the `[start, stop)` window.
    ///
    /// # Errors
    ///
    /// * [`Error::TagAbsent`] if the window has no `th`, or (strict mode) no `tr`
    ///   after the headers
    /// * [`Error::MalformedTable`] (strict mode) if a row's cell count differs
    ///   from the header count
    /// * any search error raised while resolving `th`, `tr` or `td`
    pub fn extract_table_within(&self, start: usize, stop: usize) -> Result<Table> {
        let header_ranges = self.searcher.tag_scan("th", start, stop)?;
        let headers: Vec<String> = header_ranges.iter().map(|r| self.text.header(r)).collect();
        let rows_from = header_ranges
            .iter()
            .map(TagRange::end)
            .max()
            .unwrap_or(start);

        let mut table = Table::with_headers(headers);

        let row_ranges = match self.searcher.tag_scan("tr", rows_from, stop) {
            Ok(rows) => rows,
            Err(Error::TagAbsent { .. }) if self.options.is_lenient() => {
                log::warn!("Table at {} has headers but no rows", start);
                return Ok(table);
            }
            Err(e) => return Err(e),
        };

        let td = self.searcher.pattern("td")?;
        for (index, row) in row_ranges.iter().enumerate() {
            let cells: Vec<String> = match self.searcher.scan_with(&td, row.start(), row.end()) {
                Ok(cells) => cells.iter().map(|c| self.text.cell(c)).collect(),
                Err(Error::TagAbsent { .. }) => Vec::new(),
                Err(e) => return Err(e),
            };

            if cells.len() != table.column_count() {
                if !self.options.is_lenient() {
                    return Err(Error::MalformedTable {
                        row: index,
                        expected: table.column_count(),
                        found: cells.len(),
                    });
                }
                log::warn!(
                    "Row {} at {} has {} cells, expected {}",
                    index,
                    row.start(),
                    cells.len(),
                    table.column_count()
                );
            }
            table.add_row(cells);
        }

        log::debug!(
            "Extracted table from [{}, {}): {} columns, {} rows",
            start,
            stop,
            table.column_count(),
            table.row_count()
        );

        Ok(table)
    }

    /// Extract every top-level `<table>` element of the document.
    ///
    /// In lenient mode a document without tables yields an empty Vec and
    /// tables that fail to extract are skipped.
    pub fn extract_tables(&self) -> Result<Vec<Table>> {
        let doc = self.searcher.document();
        let table_ranges = match self.searcher.top_level("table", 0, doc.len()) {
            Ok(ranges) => ranges,
            Err(Error::TagAbsent { .. }) if self.options.is_lenient() => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut tables = Vec::with_capacity(table_ranges.len());
        for range in &table_ranges {
            match self.extract_table_within(range.start(), range.end()) {
                Ok(table) => tables.push(table),
                Err(e) if self.options.is_lenient() => {
                    log::warn!("Skipping table at {}: {}", range.start(), e);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(tables)
    }
}
