// crates/transcode_markers/src/lib.rs

use anyhow::{anyhow, Result};
use escape_html::escape_html;
use span_classes::{class_for_code, MARKER_DELIMITER};

/// A marker region located within the text being transcoded.
///
/// `start..end` covers the whole region including both delimiters and the
/// category digit; `payload` borrows the text strictly between the digit
/// and the closing delimiter.
struct MarkerRegion<'a> {
    start: usize,
    end: usize,
    code: u8,
    payload: &'a str,
}

/// Converts marker-tagged snippet text into an HTML fragment.
///
/// The marker syntax is `°<digit><payload>°`: a delimiter character, one
/// ASCII digit selecting a category, a run of characters not containing
/// the delimiter, and a closing delimiter. Each region is rewritten into
/// `<span class="{class}">{payload}</span>` using the fixed category
/// table, in left-to-right document order.
///
/// The whole text is HTML-escaped once, before marker processing, so that
/// HTML-special characters inside payloads render safely while the
/// delimiter and digits (which are not HTML-special) survive for the scan.
///
/// An opening sequence with no closing delimiter is not an error: the
/// scan finds no region and the dangling text is left verbatim. A marker
/// whose digit has no entry in the category table is a fatal error.
pub fn transcode(content: &str) -> Result<String> {
    let escaped = escape_html(content);
    let mut output = String::with_capacity(escaped.len());
    let mut rest = escaped.as_str();

    while let Some(region) = find_marker(rest) {
        let class = class_for_code(region.code)
            .ok_or_else(|| anyhow!("Unknown category code '{}' in marker", region.code))?;
        output.push_str(&rest[..region.start]);
        output.push_str(&format!(
            "<span class=\"{}\">{}</span>",
            class, region.payload
        ));
        rest = &rest[region.end..];
    }

    output.push_str(rest);
    Ok(output)
}

/// Private helper: finds the leftmost marker region in `text`.
///
/// A delimiter not followed by an ASCII digit is plain text and the scan
/// continues past it. The first delimiter after the category digit always
/// closes the region, so markers cannot nest.
fn find_marker(text: &str) -> Option<MarkerRegion<'_>> {
    let mut from = 0;
    while let Some(rel) = text[from..].find(MARKER_DELIMITER) {
        let open = from + rel;
        let digit_start = open + MARKER_DELIMITER.len_utf8();
        let digit = match text[digit_start..].chars().next() {
            Some(c) if c.is_ascii_digit() => c,
            _ => {
                from = digit_start;
                continue;
            }
        };
        let payload_start = digit_start + 1;
        // No closing delimiter anywhere after the opening sequence means
        // no region here and none later either.
        let close = payload_start + text[payload_start..].find(MARKER_DELIMITER)?;
        return Some(MarkerRegion {
            start: open,
            end: close + MARKER_DELIMITER.len_utf8(),
            code: digit as u8 - b'0',
            payload: &text[payload_start..close],
        });
    }
    None
}
