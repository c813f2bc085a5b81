//! Delimiter-pair scanning (`**x**`, `[[x]]`, ...).
//!
//! Matching rules:
//! - the leftmost opener pairs with the nearest closer after it
//! - the enclosed text may be empty but never contains `\n`
//! - an opener without a closer on its line stays literal
//! - scanning resumes after the closer, so matches never overlap

use std::borrow::Cow;

use memchr::{memchr, memmem};

/// An opening and closing delimiter. Both must be ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterPair {
    /// Opening delimiter.
    pub open: &'static str,
    /// Closing delimiter.
    pub close: &'static str,
}

impl DelimiterPair {
    /// Create a pair.
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Self { open, close }
    }
}

/// Replace every delimited span in `text`.
///
/// `replace` receives the enclosed text and appends its replacement to the
/// output buffer. Returns the input unchanged (borrowed) when nothing matched.
pub fn replace_delimited<'a, F>(text: &'a str, pair: DelimiterPair, mut replace: F) -> Cow<'a, str>
where
    F: FnMut(&str, &mut String),
{
    debug_assert!(pair.open.is_ascii() && pair.close.is_ascii());

    let bytes = text.as_bytes();
    let opener = memmem::Finder::new(pair.open);
    let closer = memmem::Finder::new(pair.close);

    let mut out: Option<String> = None;
    // End of the input already copied to `out`.
    let mut copied = 0;
    let mut pos = 0;

    while let Some(rel) = opener.find(&bytes[pos..]) {
        let start = pos + rel;
        let content_start = start + pair.open.len();
        let line_end = memchr(b'\n', &bytes[content_start..])
            .map_or(bytes.len(), |i| content_start + i);

        match closer.find(&bytes[content_start..line_end]) {
            Some(rel_close) => {
                let content_end = content_start + rel_close;
                let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 16));
                buf.push_str(&text[copied..start]);
                replace(&text[content_start..content_end], buf);
                pos = content_end + pair.close.len();
                copied = pos;
            }
            None => {
                // Every later opener on this line searches a subset of the
                // same range, so skip straight to the next line.
                if line_end == bytes.len() {
                    break;
                }
                pos = line_end + 1;
            }
        }
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&text[copied..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(text),
    }
}
