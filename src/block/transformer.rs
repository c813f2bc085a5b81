//! Stateful line transformer.

use tracing::trace;

use super::classify::classify_line;
use super::event::{BlockEvent, BlockState, Line, ListKind, ListMarkers};

/// Single-pass line transformer.
///
/// Feed lines in order with [`push_line`](Self::push_line), then call
/// [`finish`](Self::finish) to close any list left open at end of input.
#[derive(Debug, Clone)]
pub struct LineTransformer {
    state: BlockState,
    markers: ListMarkers,
}

impl LineTransformer {
    /// Create a transformer with no open block.
    pub fn new(markers: ListMarkers) -> Self {
        Self {
            state: BlockState::None,
            markers,
        }
    }

    /// Current block state.
    pub fn state(&self) -> BlockState {
        self.state
    }

    /// Classify one line and append the resulting events.
    pub fn push_line<'a>(&mut self, line: &'a str, events: &mut Vec<BlockEvent<'a>>) {
        match classify_line(line, &self.markers) {
            Line::Heading { level, content } => {
                self.close_list(events);
                events.push(BlockEvent::Heading { level, content });
            }
            Line::ListItem { kind, content } => {
                if self.state != BlockState::in_list(kind) {
                    self.close_list(events);
                    self.open_list(kind, events);
                }
                events.push(BlockEvent::ListItem(content));
            }
            Line::Text(text) => {
                self.close_list(events);
                events.push(BlockEvent::Paragraph(text));
            }
            Line::Blank => self.close_list(events),
        }
    }

    /// Close any list still open at end of input.
    pub fn finish(&mut self, events: &mut Vec<BlockEvent<'_>>) {
        self.close_list(events);
    }

    fn open_list(&mut self, kind: ListKind, events: &mut Vec<BlockEvent<'_>>) {
        trace!(?kind, "open list");
        self.state = BlockState::in_list(kind);
        events.push(BlockEvent::ListStart(kind));
    }

    fn close_list(&mut self, events: &mut Vec<BlockEvent<'_>>) {
        if let Some(kind) = self.state.open_list() {
            trace!(?kind, "close list");
            self.state = BlockState::None;
            events.push(BlockEvent::ListEnd(kind));
        }
    }
}

impl Default for LineTransformer {
    fn default() -> Self {
        Self::new(ListMarkers::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events_for<'a>(lines: &[&'a str]) -> Vec<BlockEvent<'a>> {
        let mut transformer = LineTransformer::default();
        let mut events = Vec::new();
        for &line in lines {
            transformer.push_line(line, &mut events);
        }
        transformer.finish(&mut events);
        assert_eq!(transformer.state(), BlockState::None);
        events
    }

    #[test]
    fn list_run_wrapped_once() {
        assert_eq!(
            events_for(&["- a", "- b", "text"]),
            vec![
                BlockEvent::ListStart(ListKind::Unordered),
                BlockEvent::ListItem("a"),
                BlockEvent::ListItem("b"),
                BlockEvent::ListEnd(ListKind::Unordered),
                BlockEvent::Paragraph("text"),
            ]
        );
    }

    #[test]
    fn open_list_closed_at_end() {
        assert_eq!(
            events_for(&["* a"]),
            vec![
                BlockEvent::ListStart(ListKind::Ordered),
                BlockEvent::ListItem("a"),
                BlockEvent::ListEnd(ListKind::Ordered),
            ]
        );
    }

    #[test]
    fn switching_list_kind_closes_previous() {
        assert_eq!(
            events_for(&["- a", "* b", "- c"]),
            vec![
                BlockEvent::ListStart(ListKind::Unordered),
                BlockEvent::ListItem("a"),
                BlockEvent::ListEnd(ListKind::Unordered),
                BlockEvent::ListStart(ListKind::Ordered),
                BlockEvent::ListItem("b"),
                BlockEvent::ListEnd(ListKind::Ordered),
                BlockEvent::ListStart(ListKind::Unordered),
                BlockEvent::ListItem("c"),
                BlockEvent::ListEnd(ListKind::Unordered),
            ]
        );
    }

    #[test]
    fn heading_closes_list() {
        assert_eq!(
            events_for(&["- a", "## Next"]),
            vec![
                BlockEvent::ListStart(ListKind::Unordered),
                BlockEvent::ListItem("a"),
                BlockEvent::ListEnd(ListKind::Unordered),
                BlockEvent::Heading {
                    level: 2,
                    content: "Next"
                },
            ]
        );
    }

    #[test]
    fn blank_line_closes_list_and_emits_nothing() {
        assert_eq!(
            events_for(&["- a", "", "- b"]),
            vec![
                BlockEvent::ListStart(ListKind::Unordered),
                BlockEvent::ListItem("a"),
                BlockEvent::ListEnd(ListKind::Unordered),
                BlockEvent::ListStart(ListKind::Unordered),
                BlockEvent::ListItem("b"),
                BlockEvent::ListEnd(ListKind::Unordered),
            ]
        );
        assert!(events_for(&["", "  ", "\t"]).is_empty());
    }

    #[test]
    fn state_tracks_open_list() {
        let mut transformer = LineTransformer::default();
        let mut events = Vec::new();
        transformer.push_line("* one", &mut events);
        assert_eq!(transformer.state(), BlockState::OrderedList);
        transformer.push_line("- two", &mut events);
        assert_eq!(transformer.state(), BlockState::UnorderedList);
        transformer.push_line("plain", &mut events);
        assert_eq!(transformer.state(), BlockState::None);
    }

    #[test]
    fn finish_without_open_list_is_noop() {
        let mut transformer = LineTransformer::default();
        let mut events = Vec::new();
        transformer.finish(&mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn swapped_markers() {
        let mut transformer = LineTransformer::new(ListMarkers::SWAPPED);
        let mut events = Vec::new();
        transformer.push_line("* a", &mut events);
        transformer.finish(&mut events);
        assert_eq!(
            events,
            vec![
                BlockEvent::ListStart(ListKind::Unordered),
                BlockEvent::ListItem("a"),
                BlockEvent::ListEnd(ListKind::Unordered),
            ]
        );
    }
}
