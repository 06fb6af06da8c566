//! Head and body sections of a page.

use crate::error::{Error, Result};
use crate::model::{Document, TagRange};
use crate::parser::TagSearcher;

/// The `head` and `body` ranges of a page.
#[derive(Debug, Clone, Copy)]
pub struct Sections<'doc> {
    /// First `head` element of the document
    pub head: TagRange<'doc>,
    /// First `body` element after the head
    pub body: TagRange<'doc>,
}

impl<'doc> Sections<'doc> {
    /// Locate the sections with the searcher's options.
    ///
    /// Fails with [`Error::TagAbsent`] if either element is missing.
    pub fn locate(searcher: &TagSearcher<'doc>) -> Result<Self> {
        let doc = searcher.document();
        let head = required(searcher, "head", 0)?;
        let body = required(searcher, "body", head.end())?;
        log::debug!(
            "Sections: head [{}, {}), body [{}, {}) of {}",
            head.start(),
            head.end(),
            body.start(),
            body.end(),
            doc.len()
        );
        Ok(Self { head, body })
    }

    /// Lines of the head element, markup included.
    pub fn head_lines(&self) -> Vec<&'doc str> {
        self.head.content().lines().collect()
    }

    /// Lines of the body element, markup included.
    pub fn body_lines(&self) -> Vec<&'doc str> {
        self.body.content().lines().collect()
    }
}

/// Locate the head and body of `doc` with default search options.
pub fn extract_sections(doc: &Document) -> Result<Sections<'_>> {
    Sections::locate(&TagSearcher::new(doc))
}

fn required<'doc>(searcher: &TagSearcher<'doc>, tag: &str, start: usize) -> Result<TagRange<'doc>> {
    let stop = searcher.document().len();
    searcher.first(tag, start)?.ok_or_else(|| Error::TagAbsent {
        tag: tag.to_string(),
        start,
        stop,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<!DOCTYPE html>\n<html>\n<head>\n<title>Verbs</title>\n</head>\n\
                        <body class=\"main\">\n<header>top</header>\n<p>x</p>\n</body>\n</html>";

    #[test]
    fn test_extract_sections() {
        let doc = Document::new(PAGE);
        let sections = extract_sections(&doc).unwrap();
        assert!(sections.head.content().starts_with("<head>"));
        assert!(sections.head.content().ends_with("</head>"));
        assert!(sections.body.content().starts_with("<body class=\"main\">"));
        assert!(sections.body.content().ends_with("</body>"));
        assert!(sections.head.end() <= sections.body.start());
    }

    #[test]
    fn test_section_lines() {
        let doc = Document::new(PAGE);
        let sections = extract_sections(&doc).unwrap();
        assert_eq!(
            sections.head_lines(),
            vec!["<head>", "<title>Verbs</title>", "</head>"]
        );
        assert_eq!(sections.body_lines().len(), 4);
    }

    #[test]
    fn test_missing_body() {
        let doc = Document::new("<head></head><div></div>");
        let err = extract_sections(&doc).unwrap_err();
        assert!(matches!(
            err,
            Error::TagAbsent { ref tag, start: 13, stop: 24 } if tag == "body"
        ));
    }

    #[test]
    fn test_body_before_head_is_missed() {
        let doc = Document::new("<body></body><head></head>");
        assert!(matches!(
            extract_sections(&doc),
            Err(Error::TagAbsent { ref tag, .. }) if tag == "body"
        ));
    }
}
