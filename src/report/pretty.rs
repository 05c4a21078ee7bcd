//! XML pretty-printing and line wrapping for the transcript section.

use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use std::io::Cursor;

/// Re-indent an XML document with 2 spaces per nesting level.
///
/// The transcript must never be lost, so input that fails to re-serialize
/// (malformed XML, broken entities) is returned verbatim instead.
pub fn pretty_print_xml(xml: &str) -> String {
    match reformat(xml) {
        Some(pretty) if !pretty.is_empty() => pretty,
        _ => xml.trim().to_string(),
    }
}

fn reformat(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    loop {
        match reader.read_event().ok()? {
            Event::Eof => break,
            event => writer.write_event(event).ok()?,
        }
    }
    String::from_utf8(writer.into_inner().into_inner()).ok()
}

/// Wrap one line at `width` columns, breaking at the nearest preceding
/// space. Tokens longer than `width` are broken mid-token.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 || line.chars().count() <= width {
        return vec![line.to_string()];
    }

    let mut out = Vec::new();
    let mut rest = line;
    while rest.chars().count() > width {
        // Byte index just past the last character that still fits.
        let cut = rest
            .char_indices()
            .nth(width)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let split = if rest[cut..].starts_with(' ') {
            cut
        } else {
            match rest[..cut].rfind(' ') {
                Some(i) if i > 0 => i,
                _ => cut,
            }
        };
        out.push(rest[..split].to_string());
        rest = rest[split..].trim_start();
    }
    if !rest.is_empty() {
        out.push(rest.to_string());
    }
    out
}
