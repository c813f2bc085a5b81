//! Line classification.
//!
//! Checks run in a fixed order and the first match wins:
//! heading, list item, blank, text.

use crate::limits::MAX_HEADING_LEVEL;

use super::event::{Line, ListMarkers};

/// Classify one raw input line.
///
/// Trailing whitespace (including any line terminator) is trimmed first.
pub fn classify_line<'a>(line: &'a str, markers: &ListMarkers) -> Line<'a> {
    let line = line.trim_end_matches(is_trailing_space);

    if let Some((level, content)) = parse_heading(line) {
        return Line::Heading { level, content };
    }

    if let Some((kind, content)) = markers.match_item(line) {
        return Line::ListItem { kind, content };
    }

    if line.is_empty() {
        Line::Blank
    } else {
        Line::Text(line)
    }
}

/// Unicode whitespace plus the ASCII separators `\x1c`..`\x1f`.
fn is_trailing_space(ch: char) -> bool {
    ch.is_whitespace() || ('\x1c'..='\x1f').contains(&ch)
}

/// Parse an ATX-style heading marker: 1-6 `#` then a space.
fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > MAX_HEADING_LEVEL {
        return None;
    }

    // `#` is ASCII, so `hashes` is a char boundary
    let content = line[hashes..].strip_prefix(' ')?;
    Some((hashes as u8, content))
}
