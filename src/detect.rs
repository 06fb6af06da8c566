//! HTML format detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// HTML format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlFormat {
    /// Whether the input starts with a `<!DOCTYPE html` declaration
    pub doctype: bool,
    /// Whether the input starts with a UTF-8 byte order mark
    pub bom: bool,
}

impl std::fmt::Display for HtmlFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.doctype {
            write!(f, "HTML (doctype)")
        } else {
            write!(f, "HTML")
        }
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const DOCTYPE: &[u8] = b"<!doctype html";
const HTML_OPEN: &[u8] = b"<html";
const SNIFF_LEN: usize = 1024;

/// Detect HTML format from a file path.
///
/// Only the first 1 KiB of the file is read.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<HtmlFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(SNIFF_LEN);
    file.take(SNIFF_LEN as u64).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect HTML format from bytes.
///
/// The input is HTML if, after an optional byte order mark and leading
/// whitespace, it starts with `<!DOCTYPE html` or `<html` (any case), or if
/// an `<html` tag appears within the first 1 KiB.
///
/// # Returns
/// * `Ok(HtmlFormat)` if the data looks like HTML
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<HtmlFormat> {
    let bom = data.starts_with(UTF8_BOM);
    let body = if bom { &data[UTF8_BOM.len()..] } else { data };
    let body = &body[..body.len().min(SNIFF_LEN)];

    let leading = body
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(body.len());
    let trimmed = &body[leading..];

    if starts_with_ignore_case(trimmed, DOCTYPE) {
        return Ok(HtmlFormat { doctype: true, bom });
    }

    if starts_with_ignore_case(trimmed, HTML_OPEN) || contains_ignore_case(body, HTML_OPEN) {
        return Ok(HtmlFormat {
            doctype: false,
            bom,
        });
    }

    Err(Error::UnknownFormat)
}

/// Check if a file looks like HTML.
pub fn is_html<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes look like HTML.
pub fn is_html_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

fn starts_with_ignore_case(data: &[u8], prefix: &[u8]) -> bool {
    data.len() >= prefix.len() && data[..prefix.len()].eq_ignore_ascii_case(prefix)
}

fn contains_ignore_case(data: &[u8], needle: &[u8]) -> bool {
    data.windows(needle.len())
        .any(|w| w.eq_ignore_ascii_case(needle))
}
