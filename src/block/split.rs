//! Splitting input text into lines.
//!
//! `\n`, `\r\n` and a lone `\r` all end a line. A terminator at the very end
//! of the input does not start an extra empty line.

use memchr::memchr2;

/// Iterator over the lines of `input`, without their terminators.
#[derive(Debug, Clone)]
pub struct SourceLines<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> SourceLines<'a> {
    /// Create an iterator over `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for SourceLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.pos >= self.input.len() {
            return None;
        }

        let rest = &self.input[self.pos..];
        let bytes = rest.as_bytes();
        match memchr2(b'\r', b'\n', bytes) {
            Some(end) => {
                let terminator = if bytes[end] == b'\r' && bytes.get(end + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                self.pos += end + terminator;
                Some(&rest[..end])
            }
            None => {
                self.pos = self.input.len();
                Some(rest)
            }
        }
    }
}

/// Split `input` on `\n`, `\r\n` and `\r`.
pub fn split_lines(input: &str) -> SourceLines<'_> {
    SourceLines::new(input)
}
