//! HTML output writer.
//!
//! Output is a list of complete HTML lines; one event produces one line.

use crate::block::{BlockEvent, ListKind};
use crate::inline::InlinePipeline;

/// Append-only buffer of HTML output lines.
///
/// # Example
/// ```
/// use linemark::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// writer.heading(2, "Title");
/// writer.paragraph("Body");
///
/// assert_eq!(writer.into_string(), "<h2>Title</h2>\n<p>Body</p>\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlWriter {
    lines: Vec<String>,
}

impl HtmlWriter {
    /// Create an empty writer.
    #[inline]
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Create with room for the output of `input_lines` input lines.
    ///
    /// Lists add an opening and a closing line, so reserve a little extra.
    #[inline]
    pub fn with_capacity_for(input_lines: usize) -> Self {
        Self {
            lines: Vec::with_capacity(input_lines + input_lines / 4),
        }
    }

    /// Write `<hN>content</hN>`.
    pub fn heading(&mut self, level: u8, content: &str) {
        self.lines.push(format!("<h{level}>{content}</h{level}>"));
    }

    /// Write the opening tag of a list.
    pub fn list_start(&mut self, kind: ListKind) {
        self.lines.push(kind.open_tag().to_owned());
    }

    /// Write the closing tag of a list.
    pub fn list_end(&mut self, kind: ListKind) {
        self.lines.push(kind.close_tag().to_owned());
    }

    /// Write `<li>content</li>`.
    pub fn list_item(&mut self, content: &str) {
        self.lines.push(format!("<li>{content}</li>"));
    }

    /// Write `<p>content</p>`.
    pub fn paragraph(&mut self, content: &str) {
        self.lines.push(format!("<p>{content}</p>"));
    }

    /// Render a block event. Paragraph text runs through `inline` first.
    pub fn write_event(&mut self, event: &BlockEvent<'_>, inline: &InlinePipeline) {
        match *event {
            BlockEvent::Heading { level, content } => self.heading(level, content),
            BlockEvent::ListStart(kind) => self.list_start(kind),
            BlockEvent::ListItem(content) => self.list_item(content),
            BlockEvent::ListEnd(kind) => self.list_end(kind),
            BlockEvent::Paragraph(text) => self.paragraph(&inline.apply(text)),
        }
    }

    /// Lines written so far.
    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines written.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Consume the writer and return the output lines.
    #[inline]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Consume the writer and join the lines, each followed by `\n`.
    pub fn into_string(self) -> String {
        let len = self.lines.iter().map(|line| line.len() + 1).sum();
        let mut out = String::with_capacity(len);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
