//! Precompiled open/close patterns for one tag name.

use regex::{Regex, RegexBuilder};

use super::SearchOptions;
use crate::error::{Error, Result};

/// The open and close regexes for a tag name.
///
/// Built once per search or scan and shared by every lookup it performs.
#[derive(Debug, Clone)]
pub struct TagPattern {
    tag: String,
    open: Regex,
    close: Regex,
}

impl TagPattern {
    /// Compile the patterns for `tag` under `options`.
    pub fn new(tag: &str, options: &SearchOptions) -> Result<Self> {
        if !is_valid_tag_name(tag) {
            return Err(Error::InvalidTagName(tag.to_string()));
        }

        let name = regex::escape(tag);
        let open = build(&format!("<{}{}", name, options.boundary.class()), options)?;
        let close = build(&format!("</{}>", name), options)?;

        Ok(Self {
            tag: tag.to_string(),
            open,
            close,
        })
    }

    /// The tag name these patterns match.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Regex for the open tag, boundary character included.
    pub fn open(&self) -> &Regex {
        &self.open
    }

    /// Regex for the close tag.
    pub fn close(&self) -> &Regex {
        &self.close
    }
}

// case folding is ASCII only
fn build(pattern: &str, options: &SearchOptions) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern)
        .case_insensitive(options.case_insensitive)
        .unicode(false)
        .build()?)
}

fn is_valid_tag_name(tag: &str) -> bool {
    !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::BoundaryRule;

    #[test]
    fn test_compatible_boundary() {
        let pattern = TagPattern::new("div", &SearchOptions::default()).unwrap();
        assert!(pattern.open().is_match("<div>"));
        assert!(pattern.open().is_match("<div class=\"x\">"));
        assert!(pattern.open().is_match("<div,"));
        assert!(!pattern.open().is_match("<divider>"));
        assert!(!pattern.open().is_match("<div\n>"));
        assert!(pattern.close().is_match("</div>"));
        assert!(!pattern.close().is_match("</div >"));
    }

    #[test]
    fn test_html_boundary() {
        let options = SearchOptions::new().with_boundary(BoundaryRule::Html);
        let pattern = TagPattern::new("div", &options).unwrap();
        assert!(pattern.open().is_match("<div\n class=\"x\">"));
        assert!(pattern.open().is_match("<div>"));
        assert!(pattern.open().is_match("<div/>"));
        assert!(!pattern.open().is_match("<div,"));
        assert!(!pattern.open().is_match("<divider>"));
    }

    #[test]
    fn test_compatible_boundary_rejects_slash() {
        let pattern = TagPattern::new("div", &SearchOptions::default()).unwrap();
        assert!(!pattern.open().is_match("<div/>"));
    }

    #[test]
    fn test_case_insensitive() {
        let options = SearchOptions::new().case_insensitive();
        let pattern = TagPattern::new("td", &options).unwrap();
        assert!(pattern.open().is_match("<TD>"));
        assert!(pattern.close().is_match("</Td>"));

        let strict = TagPattern::new("td", &SearchOptions::default()).unwrap();
        assert!(!strict.open().is_match("<TD>"));
    }

    #[test]
    fn test_case_insensitive_is_ascii_only() {
        let options = SearchOptions::new().case_insensitive();
        let pattern = TagPattern::new("k", &options).unwrap();
        assert!(pattern.open().is_match("<K>"));
        assert!(!pattern.open().is_match("<\u{212A}>"));
        assert!(!pattern.close().is_match("</\u{212A}>"));
    }

    #[test]
    fn test_invalid_tag_names() {
        let options = SearchOptions::default();
        assert!(matches!(
            TagPattern::new("", &options),
            Err(Error::InvalidTagName(_))
        ));
        assert!(matches!(
            TagPattern::new("d.v", &options),
            Err(Error::InvalidTagName(_))
        ));
        assert!(matches!(
            TagPattern::new("a>", &options),
            Err(Error::InvalidTagName(_))
        ));
        assert!(TagPattern::new("my-widget", &options).is_ok());
        assert!(TagPattern::new("svg:rect", &options).is_ok());
    }
}
