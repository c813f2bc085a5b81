//! linemark: line-oriented Markdown to HTML converter
//!
//! Each input line is classified on its own, with a single piece of state
//! remembering whether a list is open. Supported syntax:
//! - `#` to `######` headings
//! - flat unordered (`- `) and ordered (`* `) lists
//! - paragraphs with `**bold**`, `__emphasis__`, `[[hash]]` and `((obscure))`
//!   inline tokens
//!
//! There is no HTML escaping and no nesting; each call is independent.

pub mod block;
pub mod cli;
pub mod error;
pub mod inline;
pub mod limits;
pub mod render;

// Re-export primary types
pub use block::{split_lines, BlockEvent, BlockState, LineTransformer, ListKind, ListMarkers};
pub use error::Error;
pub use inline::InlinePipeline;
pub use render::HtmlWriter;

use tracing::debug;

/// Conversion options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Which marker opens which list type.
    pub list_markers: ListMarkers,
    /// Run inline substitutions on paragraph lines.
    pub inline: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            list_markers: ListMarkers::DEFAULT,
            inline: true,
        }
    }
}

/// Convert Markdown to HTML.
///
/// Input lines may end in `\n`, `\r\n` or `\r`. Every output line is
/// terminated by `\n`.
///
/// # Example
/// ```
/// let html = linemark::to_html("# Hello\n\n- a\n- b");
/// assert_eq!(html, "<h1>Hello</h1>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(estimate_lines(input));
    render_to_writer(split_lines(input), &mut writer, options);
    writer.into_string()
}

/// Convert Markdown to a list of HTML lines (without terminators).
pub fn to_html_lines(input: &str, options: &Options) -> Vec<String> {
    let mut writer = HtmlWriter::with_capacity_for(estimate_lines(input));
    render_to_writer(split_lines(input), &mut writer, options);
    writer.into_lines()
}

/// Convert already-split lines to HTML lines.
///
/// Lines may still carry their terminators; trailing whitespace is trimmed
/// from each before it is classified.
pub fn convert_lines<S: AsRef<str>>(lines: &[S], options: &Options) -> Vec<String> {
    let mut writer = HtmlWriter::with_capacity_for(lines.len());
    render_to_writer(lines.iter().map(AsRef::as_ref), &mut writer, options);
    writer.into_lines()
}

/// Rough line count, used only to size the output buffer.
fn estimate_lines(input: &str) -> usize {
    memchr::memchr2_iter(b'\r', b'\n', input.as_bytes()).count() + 1
}

/// Render lines into an `HtmlWriter`.
fn render_to_writer<'a, I>(lines: I, writer: &mut HtmlWriter, options: &Options)
where
    I: Iterator<Item = &'a str>,
{
    let inline = if options.inline {
        InlinePipeline::standard()
    } else {
        InlinePipeline::empty()
    };
    let mut transformer = LineTransformer::new(options.list_markers);
    // At most close + open + item per line
    let mut events = Vec::with_capacity(3);
    let mut input_lines = 0usize;

    for line in lines {
        input_lines += 1;
        transformer.push_line(line, &mut events);
        for event in &events {
            writer.write_event(event, &inline);
        }
        events.clear();
    }

    transformer.finish(&mut events);
    for event in &events {
        writer.write_event(event, &inline);
    }

    debug!(input_lines, output_lines = writer.len(), "converted document");
}
