//! State-transition events and the presentation-sink contract.
//!
//! The simulation core is synchronous and owns no timing: every board
//! or player mutation is final the instant the mutating call returns,
//! and is then reported outward as a discrete [`LevelEvent`]. All
//! interpolation, tweening, and audio live entirely in the collaborator
//! behind [`PresentationSink`]; the core calls it and never blocks on
//! its return.

use crate::id::BoxId;
use crate::pos::Pos;
use crate::tile::TileKind;

/// A discrete, instantaneous state transition reported by the core.
///
/// Events carry only logical coordinates and identities. A collaborator
/// that wants squash/stretch or shatter-fade schedules that itself; the
/// board no longer knows anything about the cells named here by the
/// time the event is observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelEvent {
    /// A box visual should be spawned at `pos`.
    BoxPlaced {
        /// Cell the box occupies.
        pos: Pos,
        /// Color of the box.
        kind: TileKind,
        /// Identity for keying the visual.
        id: BoxId,
    },
    /// The box visual at `pos` should be despawned.
    BoxRemoved {
        /// Cell the box occupied.
        pos: Pos,
        /// Identity of the removed box.
        id: BoxId,
    },
    /// The box visual at `from` should travel to `to`.
    BoxMoved {
        /// Origin cell.
        from: Pos,
        /// Destination cell.
        to: Pos,
        /// Identity of the moved box.
        id: BoxId,
    },
    /// The player moved from `from` to `to`.
    PlayerMoved {
        /// Origin cell (possibly the spawn outcrop).
        from: Pos,
        /// Destination cell (possibly the goal outcrop).
        to: Pos,
    },
    /// An input was rejected: out of bounds, wall, or unpushable box.
    InvalidMove,
    /// A match-3 batch was cleared.
    ///
    /// Emitted after the individual [`BoxRemoved`](LevelEvent::BoxRemoved)
    /// events of the batch, carrying the full deduplicated cell set.
    MatchCleared {
        /// Every cell cleared in this batch.
        positions: Vec<Pos>,
    },
    /// The player reached the goal outcrop; the session is terminal.
    GoalReached,
    /// The generator accepted a best-effort layout after exhausting its
    /// retry budget.
    GenerationWarning {
        /// Human-readable description of the unmet constraint.
        message: String,
    },
    /// The level was torn down; discard all visuals and in-flight
    /// animation references for the previous board.
    LevelReset,
}

/// Collaborator contract for the presentation layer.
///
/// Every method has a no-op default so a collaborator implements only
/// the signals it cares about. [`handle`](PresentationSink::handle)
/// dispatches a [`LevelEvent`] to the matching method and is what the
/// core calls; override it instead to observe the raw event stream.
pub trait PresentationSink {
    /// A box visual should be spawned.
    fn box_placed(&mut self, _pos: Pos, _kind: TileKind, _id: BoxId) {}

    /// A box visual should be despawned.
    fn box_removed(&mut self, _pos: Pos, _id: BoxId) {}

    /// A box visual should travel between cells.
    fn box_moved(&mut self, _from: Pos, _to: Pos, _id: BoxId) {}

    /// The player visual should travel between cells.
    fn player_moved(&mut self, _from: Pos, _to: Pos) {}

    /// An input was rejected with no state change.
    fn invalid_move(&mut self) {}

    /// A match batch was cleared.
    fn match_cleared(&mut self, _positions: &[Pos]) {}

    /// The player reached the goal.
    fn goal_reached(&mut self) {}

    /// Generation accepted a best-effort layout.
    fn generation_warning(&mut self, _message: &str) {}

    /// Discard all visuals for the previous board.
    fn level_reset(&mut self) {}

    /// Dispatch `event` to the matching named method.
    fn handle(&mut self, event: &LevelEvent) {
        match event {
            LevelEvent::BoxPlaced { pos, kind, id } => self.box_placed(*pos, *kind, *id),
            LevelEvent::BoxRemoved { pos, id } => self.box_removed(*pos, *id),
            LevelEvent::BoxMoved { from, to, id } => self.box_moved(*from, *to, *id),
            LevelEvent::PlayerMoved { from, to } => self.player_moved(*from, *to),
            LevelEvent::InvalidMove => self.invalid_move(),
            LevelEvent::MatchCleared { positions } => self.match_cleared(positions),
            LevelEvent::GoalReached => self.goal_reached(),
            LevelEvent::GenerationWarning { message } => self.generation_warning(message),
            LevelEvent::LevelReset => self.level_reset(),
        }
    }
}

/// A sink that ignores every signal. For headless simulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {}
