//! Enumeration of every tag pair in a window.

use super::resolver::resolve;
use super::TagPattern;
use crate::error::{Error, Result};
use crate::model::{Document, TagRange};

/// Collect every balanced pair of `pattern` in `doc[start..stop)`.
///
/// Resolves one top-level pair at a time, moving the window start past it,
/// and concatenates each result (outer first, then nested). Fails with
/// [`Error::TagAbsent`] if the first resolution finds nothing.
pub(crate) fn scan<'doc>(
    doc: &'doc Document,
    pattern: &TagPattern,
    start: usize,
    stop: usize,
    max_depth: Option<usize>,
) -> Result<Vec<TagRange<'doc>>> {
    let mut matches = Vec::new();
    let mut window = start;
    let mut top_level = 0usize;

    loop {
        let found = resolve(doc, pattern, window, stop, max_depth)?;
        let Some(outer) = found.first() else {
            break;
        };
        window = outer.end();
        top_level += 1;
        matches.extend(found);
    }

    if matches.is_empty() {
        return Err(Error::TagAbsent {
            tag: pattern.tag().to_string(),
            start,
            stop,
        });
    }

    log::debug!(
        "Scanned <{}> in [{}, {}): {} top-level, {} total",
        pattern.tag(),
        start,
        stop,
        top_level,
        matches.len()
    );

    Ok(matches)
}
