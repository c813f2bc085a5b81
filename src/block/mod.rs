//! Block-level handling for Markdown lines.
//!
//! The block layer is line-oriented and recognises:
//! - ATX headings (`#` to `######`)
//! - Unordered and ordered list items
//! - Paragraph lines
//! - Blank lines
//!
//! Input is split on `\n`, `\r\n` and a lone `\r`.
//!
//! Lists are flat: a run of items with the same marker becomes one list.

mod classify;
mod event;
mod split;
mod transformer;

pub use classify::classify_line;
pub use event::{BlockEvent, BlockState, Line, ListKind, ListMarkers};
pub use split::{split_lines, SourceLines};
pub use transformer::LineTransformer;
