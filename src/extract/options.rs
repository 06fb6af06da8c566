//! Extraction options and configuration.

use crate::parser::{ErrorMode, SearchOptions};

/// Options for extracting tables and sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Options passed to every tag search
    pub search: SearchOptions,

    /// Error handling mode
    pub error_mode: ErrorMode,

    /// How cell text is derived from markup
    pub text_mode: TextMode,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set search options.
    pub fn with_search_options(mut self, search: SearchOptions) -> Self {
        self.search = search;
        self
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (keep ragged rows, skip broken tables).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set text mode.
    pub fn with_text_mode(mut self, mode: TextMode) -> Self {
        self.text_mode = mode;
        self
    }

    pub(crate) fn is_lenient(&self) -> bool {
        self.error_mode == ErrorMode::Lenient
    }
}

/// How the text of a `td` range is produced.
///
/// Header text is the raw inner text of each `th` in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    /// All text inside the cell, markup removed, whitespace collapsed
    #[default]
    InnerText,
    /// Only the first `>...<` text run after line breaks are removed
    FirstRun,
}
