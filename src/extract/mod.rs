//! Extraction built on tag ranges: tables and page sections.

mod options;
mod sections;
mod table;
mod text;

pub use options::{ExtractOptions, TextMode};
pub use sections::{extract_sections, Sections};
pub use table::TableExtractor;
pub use text::CellText;
