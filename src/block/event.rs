//! Block-level types: list kinds, marker mapping, block state and events.

use crate::limits::LIST_MARKER_LEN;

/// List type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Bulleted list (`<ul>`).
    Unordered,
    /// Numbered list (`<ol>`).
    Ordered,
}

impl ListKind {
    /// Opening tag for this list type.
    pub fn open_tag(self) -> &'static str {
        match self {
            Self::Unordered => "<ul>",
            Self::Ordered => "<ol>",
        }
    }

    /// Closing tag for this list type.
    pub fn close_tag(self) -> &'static str {
        match self {
            Self::Unordered => "</ul>",
            Self::Ordered => "</ol>",
        }
    }
}

/// Mapping from line prefixes to list types.
///
/// Two conventions exist for which marker opens which list. Both are
/// available as named constants so callers pick one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarkers {
    /// Prefix that starts an unordered list item.
    pub unordered: &'static str,
    /// Prefix that starts an ordered list item.
    pub ordered: &'static str,
}

impl ListMarkers {
    /// `"- "` opens `<ul>`, `"* "` opens `<ol>`.
    pub const DEFAULT: Self = Self {
        unordered: "- ",
        ordered: "* ",
    };

    /// `"* "` opens `<ul>`, `"- "` opens `<ol>`.
    pub const SWAPPED: Self = Self {
        unordered: "* ",
        ordered: "- ",
    };

    /// Match a list item, returning its kind and the text after the marker.
    ///
    /// The unordered marker is tested first.
    pub fn match_item<'a>(&self, line: &'a str) -> Option<(ListKind, &'a str)> {
        debug_assert_eq!(self.unordered.len(), LIST_MARKER_LEN);
        debug_assert_eq!(self.ordered.len(), LIST_MARKER_LEN);

        if let Some(rest) = line.strip_prefix(self.unordered) {
            Some((ListKind::Unordered, rest))
        } else {
            line.strip_prefix(self.ordered)
                .map(|rest| (ListKind::Ordered, rest))
        }
    }
}

impl Default for ListMarkers {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Which block, if any, is currently open.
///
/// At most one list can be open at a time; opening one closes the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState {
    /// Outside any list.
    #[default]
    None,
    /// Inside a `<ul>`.
    UnorderedList,
    /// Inside an `<ol>`.
    OrderedList,
}

impl BlockState {
    /// State after opening a list of `kind`.
    pub fn in_list(kind: ListKind) -> Self {
        match kind {
            ListKind::Unordered => Self::UnorderedList,
            ListKind::Ordered => Self::OrderedList,
        }
    }

    /// The open list, if any.
    pub fn open_list(self) -> Option<ListKind> {
        match self {
            Self::None => None,
            Self::UnorderedList => Some(ListKind::Unordered),
            Self::OrderedList => Some(ListKind::Ordered),
        }
    }
}

/// A single input line after trimming and classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `#`..`######` followed by a space.
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Text after the marker and its space.
        content: &'a str,
    },
    /// A line starting with one of the list markers.
    ListItem {
        /// List type selected by the marker.
        kind: ListKind,
        /// Text after the marker.
        content: &'a str,
    },
    /// Any other non-empty line.
    Text(&'a str),
    /// Empty after trimming.
    Blank,
}

/// Events emitted by the line transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEvent<'a> {
    /// A heading line.
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Heading text, emitted verbatim.
        content: &'a str,
    },
    /// Start of a list.
    ListStart(ListKind),
    /// One list item, emitted verbatim.
    ListItem(&'a str),
    /// End of a list.
    ListEnd(ListKind),
    /// A paragraph line, before inline substitutions.
    Paragraph(&'a str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_markers() {
        let markers = ListMarkers::default();
        assert_eq!(markers.match_item("- a"), Some((ListKind::Unordered, "a")));
        assert_eq!(markers.match_item("* a"), Some((ListKind::Ordered, "a")));
        assert_eq!(markers.match_item("-a"), None);
        assert_eq!(markers.match_item("+ a"), None);
    }

    #[test]
    fn swapped_markers() {
        let markers = ListMarkers::SWAPPED;
        assert_eq!(markers.match_item("* a"), Some((ListKind::Unordered, "a")));
        assert_eq!(markers.match_item("- a"), Some((ListKind::Ordered, "a")));
    }

    #[test]
    fn marker_keeps_remaining_spaces() {
        assert_eq!(
            ListMarkers::DEFAULT.match_item("-   spaced"),
            Some((ListKind::Unordered, "  spaced"))
        );
        assert_eq!(ListMarkers::DEFAULT.match_item("- "), Some((ListKind::Unordered, "")));
    }

    #[test]
    fn block_state_round_trips_list_kind() {
        for kind in [ListKind::Unordered, ListKind::Ordered] {
            assert_eq!(BlockState::in_list(kind).open_list(), Some(kind));
        }
        assert_eq!(BlockState::default().open_list(), None);
    }

    #[test]
    fn list_tags() {
        assert_eq!(ListKind::Unordered.open_tag(), "<ul>");
        assert_eq!(ListKind::Unordered.close_tag(), "</ul>");
        assert_eq!(ListKind::Ordered.open_tag(), "<ol>");
        assert_eq!(ListKind::Ordered.close_tag(), "</ol>");
    }
}
