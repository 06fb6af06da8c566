//! Balanced tag-pair resolution.
//!
//! Finds the first open tag of a name inside a window and walks forward to
//! its matching close tag. Same-name tags opened before that close are
//! resolved on the way and reported after the outer range, in the order they
//! were opened.
//!
//! Pending open tags live on an explicit stack, so nesting depth is bounded
//! only by memory (or by `SearchOptions::max_depth`).

use regex::Regex;

use super::TagPattern;
use crate::error::{Error, Result};
use crate::model::{Document, TagRange};

/// Lazily advancing lookup of the next regex match at or after a cursor.
struct Lookahead<'a> {
    regex: &'a Regex,
    haystack: &'a str,
    // None = not searched yet, Some(None) = no further match
    next: Option<Option<(usize, usize)>>,
}

impl<'a> Lookahead<'a> {
    fn new(regex: &'a Regex, haystack: &'a str) -> Self {
        Self {
            regex,
            haystack,
            next: None,
        }
    }

    fn at(&mut self, index: usize) -> Option<(usize, usize)> {
        match self.next {
            Some(None) => return None,
            Some(Some(m)) if m.0 >= index => return Some(m),
            _ => {}
        }
        let found = self
            .regex
            .find_at(self.haystack, index)
            .map(|m| (m.start(), m.end()));
        self.next = Some(found);
        found
    }
}

/// Resolve the first balanced pair of `pattern` in `doc[start..stop)`.
///
/// Returns the outer range followed by every nested same-name range, or an
/// empty Vec if no open tag occurs in the window. The window must already be
/// validated against the document.
pub(crate) fn resolve<'doc>(
    doc: &'doc Document,
    pattern: &TagPattern,
    start: usize,
    stop: usize,
    max_depth: Option<usize>,
) -> Result<Vec<TagRange<'doc>>> {
    let haystack = &doc.text()[..stop];
    let mut opens = Lookahead::new(pattern.open(), haystack);
    let mut closes = Lookahead::new(pattern.close(), haystack);

    // (start, end) in open order; end is filled in when the pair closes
    let mut pairs: Vec<(usize, usize)> = Vec::new();
    // indices into `pairs` still waiting for a close tag
    let mut pending: Vec<usize> = Vec::new();
    let mut index = start;

    loop {
        let open = opens.at(index);
        let close = closes.at(index);

        match (open, close) {
            (Some((open_start, open_end)), close)
                if close.map_or(true, |(close_start, _)| open_start < close_start) =>
            {
                if let Some(limit) = max_depth.map(|d| d.max(1)) {
                    if pending.len() >= limit {
                        return Err(Error::NestingTooDeep {
                            tag: pattern.tag().to_string(),
                            limit,
                        });
                    }
                }
                pending.push(pairs.len());
                pairs.push((open_start, 0));
                index = open_end;
            }
            (_, Some((_, close_end))) => {
                index = close_end;
                // with nothing pending the close belongs to an element opened before the window
                if let Some(slot) = pending.pop() {
                    pairs[slot].1 = close_end;
                    if pending.is_empty() {
                        break;
                    }
                }
            }
            (_, None) => {
                return match pending.last() {
                    None => Ok(Vec::new()),
                    Some(&slot) => Err(Error::UnclosedTag {
                        tag: pattern.tag().to_string(),
                        open_at: pairs[slot].0,
                        start,
                        stop,
                    }),
                };
            }
        }
    }

    log::debug!(
        "Resolved <{}> at [{}, {}) with {} nested",
        pattern.tag(),
        pairs[0].0,
        pairs[0].1,
        pairs.len() - 1
    );

    pairs
        .into_iter()
        .map(|(s, e)| TagRange::new(doc, s, e))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SearchOptions;

    fn search<'d>(doc: &'d Document, tag: &str) -> Result<Vec<TagRange<'d>>> {
        let pattern = TagPattern::new(tag, &SearchOptions::default()).unwrap();
        resolve(doc, &pattern, 0, doc.len(), None)
    }

    fn spans(ranges: &[TagRange<'_>]) -> Vec<(usize, usize)> {
        ranges.iter().map(|r| (r.start(), r.end())).collect()
    }

    #[test]
    fn test_single_pair() {
        let doc = Document::new("ab<div>x</div>cd");
        let ranges = search(&doc, "div").unwrap();
        assert_eq!(spans(&ranges), vec![(2, 14)]);
        assert_eq!(ranges[0].content(), "<div>x</div>");
    }

    #[test]
    fn test_nested_pair() {
        let doc = Document::new("<div>A<div>B</div>C</div>");
        let ranges = search(&doc, "div").unwrap();
        assert_eq!(spans(&ranges), vec![(0, 25), (6, 18)]);
        assert_eq!(ranges[1].content(), "<div>B</div>");
    }

    #[test]
    fn test_siblings_inside_outer() {
        let doc = Document::new("<ul><ul>a</ul><ul>b</ul></ul><ul>c</ul>");
        let ranges = search(&doc, "ul").unwrap();
        assert_eq!(spans(&ranges), vec![(0, 29), (4, 14), (14, 24)]);
    }

    #[test]
    fn test_deep_nesting_is_preorder() {
        let doc = Document::new("<b><b><b>x</b></b><b>y</b></b>");
        let ranges = search(&doc, "b").unwrap();
        assert_eq!(spans(&ranges), vec![(0, 30), (3, 18), (6, 14), (18, 26)]);
    }

    #[test]
    fn test_absent_is_empty() {
        let doc = Document::new("<span>x</span>");
        assert!(search(&doc, "div").unwrap().is_empty());
    }

    #[test]
    fn test_leading_close_is_skipped() {
        let doc = Document::new("x</div><div>y</div>");
        let ranges = search(&doc, "div").unwrap();
        assert_eq!(spans(&ranges), vec![(7, 19)]);
    }

    #[test]
    fn test_unclosed() {
        let doc = Document::new("<div>no close");
        let err = search(&doc, "div").unwrap_err();
        assert!(matches!(
            err,
            Error::UnclosedTag {
                open_at: 0,
                start: 0,
                stop: 13,
                ..
            }
        ));
    }

    #[test]
    fn test_unclosed_reports_innermost() {
        let doc = Document::new("<div>a<div>b</div>");
        let err = search(&doc, "div").unwrap_err();
        // the inner open at 6 is closed; the outer at 0 is not
        assert!(matches!(err, Error::UnclosedTag { open_at: 0, .. }));

        let doc = Document::new("<div>a<div>b");
        let err = search(&doc, "div").unwrap_err();
        assert!(matches!(err, Error::UnclosedTag { open_at: 6, .. }));
    }

    #[test]
    fn test_window_limits_matches() {
        let doc = Document::new("<p>a</p><p>b</p>");
        let pattern = TagPattern::new("p", &SearchOptions::default()).unwrap();

        let ranges = resolve(&doc, &pattern, 1, doc.len(), None).unwrap();
        assert_eq!(spans(&ranges), vec![(8, 16)]);

        // close tag straddles the stop offset
        let err = resolve(&doc, &pattern, 8, 15, None).unwrap_err();
        assert!(matches!(err, Error::UnclosedTag { open_at: 8, .. }));
    }

    #[test]
    fn test_max_depth() {
        let doc = Document::new("<i><i><i></i></i></i>");
        let pattern = TagPattern::new("i", &SearchOptions::default()).unwrap();

        assert_eq!(resolve(&doc, &pattern, 0, doc.len(), Some(3)).unwrap().len(), 3);
        let err = resolve(&doc, &pattern, 0, doc.len(), Some(2)).unwrap_err();
        assert!(matches!(err, Error::NestingTooDeep { limit: 2, .. }));
    }

    #[test]
    fn test_max_depth_zero_allows_flat_pairs() {
        let doc = Document::new("<p>x</p>");
        let pattern = TagPattern::new("p", &SearchOptions::default()).unwrap();
        let ranges = resolve(&doc, &pattern, 0, doc.len(), Some(0)).unwrap();
        assert_eq!(spans(&ranges), vec![(0, 8)]);

        let doc = Document::new("<p><p></p></p>");
        let err = resolve(&doc, &pattern, 0, doc.len(), Some(0)).unwrap_err();
        assert!(matches!(err, Error::NestingTooDeep { limit: 1, .. }));
    }

    #[test]
    fn test_very_deep_nesting() {
        let depth = 10_000;
        let text = format!("{}{}", "<div>".repeat(depth), "</div>".repeat(depth));
        let doc = Document::new(text);
        let ranges = search(&doc, "div").unwrap();
        assert_eq!(ranges.len(), depth);
        assert_eq!(ranges[0].start(), 0);
        assert_eq!(ranges[0].end(), doc.len());
        assert_eq!(ranges[depth - 1].content(), "<div></div>");
    }
}
