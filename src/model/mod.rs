//! Document model types for tag-range extraction.
//!
//! The model holds the raw document text, the ranges resolved inside it and
//! the tables assembled from those ranges.

mod document;
mod range;
mod table;

pub use document::Document;
pub use range::{TagRange, TagSpan};
pub use table::Table;
