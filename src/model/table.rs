//! Table types.

use serde::{Deserialize, Serialize};

/// A table extracted from `th`/`tr`/`td` markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Header texts, in document order
    pub headers: Vec<String>,

    /// Row-major cell texts, in document order
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with the given headers and no rows.
    pub fn with_headers<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Get the number of rows (headers excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on headers).
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a cell by zero-based row and column.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Get every cell of the column whose header equals `name`.
    ///
    /// Rows too short for the column are skipped.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.headers.iter().position(|h| h == name)?;
        Some(
            self.rows
                .iter()
                .filter_map(|row| row.get(idx).map(String::as_str))
                .collect(),
        )
    }

    /// Pair each row's cells with the headers.
    pub fn records(&self) -> Vec<Vec<(&str, &str)>> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .zip(row)
                    .map(|(h, c)| (h.as_str(), c.as_str()))
                    .collect()
            })
            .collect()
    }

    /// Check if every row has exactly one cell per header.
    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|row| row.len() == self.headers.len())
    }
}
