//! Tag-range resolution and scanning.

mod options;
mod pattern;
mod resolver;
mod scanner;
mod searcher;

pub use options::{BoundaryRule, ErrorMode, SearchOptions};
pub use pattern::TagPattern;
pub use searcher::TagSearcher;
