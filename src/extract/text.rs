//! Text of header and cell ranges.

use regex::Regex;

use super::TextMode;
use crate::model::TagRange;

/// Turns `th`/`td` ranges into plain strings.
pub struct CellText {
    mode: TextMode,
    first_run: Regex,
    markup: Regex,
    whitespace: Regex,
}

impl CellText {
    /// Create a converter for `mode`.
    pub fn new(mode: TextMode) -> Self {
        Self {
            mode,
            first_run: Regex::new(r">([^<]*)<").expect("static pattern"),
            markup: Regex::new(r"<[^>]*>").expect("static pattern"),
            whitespace: Regex::new(r"\s+").expect("static pattern"),
        }
    }

    /// Header text of a `th` range: its raw inner text in every mode.
    pub fn header(&self, range: &TagRange<'_>) -> String {
        range.inner().to_string()
    }

    /// Cell text of a `td` range.
    pub fn cell(&self, range: &TagRange<'_>) -> String {
        match self.mode {
            TextMode::FirstRun => self.first_run(range.content()),
            TextMode::InnerText => self.inner_text(range.inner()),
        }
    }

    /// First `>...<` run of `content` with line breaks removed.
    pub fn first_run(&self, content: &str) -> String {
        let flat: String = content.chars().filter(|c| !matches!(*c, '\r' | '\n')).collect();
        self.first_run
            .captures(&flat)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// Markup-free text of `fragment` with entities decoded and whitespace collapsed.
    pub fn inner_text(&self, fragment: &str) -> String {
        let stripped = self.markup.replace_all(fragment, "");
        let decoded = decode_entities(&stripped);
        self.whitespace.replace_all(&decoded, " ").trim().to_string()
    }
}

impl Default for CellText {
    fn default() -> Self {
        Self::new(TextMode::default())
    }
}

// &amp; last so "&amp;lt;" stays "&lt;"
fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
