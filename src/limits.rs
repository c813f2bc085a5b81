//! Fixed limits of the line grammar.

/// Deepest heading level a run of `#` can open (`######`).
pub const MAX_HEADING_LEVEL: usize = 6;

/// Width of a list marker (`"- "` / `"* "`), including its trailing space.
pub const LIST_MARKER_LEN: usize = 2;
