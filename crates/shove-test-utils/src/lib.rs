//! Test utilities and fixtures for shove development.
//!
//! Provides [`RecordingSink`] — a [`PresentationSink`] that captures
//! the raw event stream for assertions — and a few hand-built fixture
//! boards with known geometry.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use shove_board::Board;
use shove_core::{LevelEvent, Pos, PresentationSink, TileKind};

/// A sink that records every event it is handed, in order.
///
/// Overrides [`handle`](PresentationSink::handle) so the capture sees
/// the raw [`LevelEvent`] stream exactly as the core emitted it.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    /// Every event received, oldest first.
    pub events: Vec<LevelEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `GoalReached` events seen.
    pub fn count_goal_reached(&self) -> usize {
        self.count(|e| matches!(e, LevelEvent::GoalReached))
    }

    /// Number of `InvalidMove` events seen.
    pub fn count_invalid(&self) -> usize {
        self.count(|e| matches!(e, LevelEvent::InvalidMove))
    }

    /// Number of `BoxPlaced` events seen.
    pub fn count_placed(&self) -> usize {
        self.count(|e| matches!(e, LevelEvent::BoxPlaced { .. }))
    }

    /// Number of `GenerationWarning` events seen.
    pub fn count_warnings(&self) -> usize {
        self.count(|e| matches!(e, LevelEvent::GenerationWarning { .. }))
    }

    /// Number of events matching `pred`.
    pub fn count(&self, pred: impl Fn(&LevelEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl PresentationSink for RecordingSink {
    fn handle(&mut self, event: &LevelEvent) {
        self.events.push(event.clone());
    }
}

/// An empty 8x8 board.
pub fn open_board() -> Board {
    Board::new(8, 8).expect("8x8 is always a legal board")
}

/// An 8x8 board where pushing the box at `(1,3)` one cell right
/// completes a red run with `(3,3)` and `(4,3)`.
pub fn push_match_board() -> Board {
    let mut board = open_board();
    for pos in [Pos::new(1, 3), Pos::new(3, 3), Pos::new(4, 3)] {
        board
            .place_box(pos, TileKind::BoxRed)
            .expect("fixture cells are empty");
    }
    board
}

/// An 8x8 board with a single red box at `(4,3)`, solvable from spawn
/// `(-1,3)` to goal `(8,3)` with exactly one push and a detour.
pub fn detour_board() -> Board {
    let mut board = open_board();
    board
        .place_box(Pos::new(4, 3), TileKind::BoxRed)
        .expect("fixture cell is empty");
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_captures_in_order() {
        let mut sink = RecordingSink::new();
        sink.handle(&LevelEvent::InvalidMove);
        sink.handle(&LevelEvent::GoalReached);
        assert_eq!(sink.events.len(), 2);
        assert_eq!(sink.count_invalid(), 1);
        assert_eq!(sink.count_goal_reached(), 1);
    }

    #[test]
    fn fixtures_are_consistent() {
        assert!(open_board().is_consistent());
        assert!(push_match_board().is_consistent());
        assert!(detour_board().is_consistent());
        assert_eq!(push_match_board().box_count(), 3);
    }
}
