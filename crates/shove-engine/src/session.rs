//! The active-level session: board, player, goal, and the turn loop.

use crate::resolver::{resolve, Resolution};
use crate::stats::SessionStats;
use shove_board::{find_matches, Board};
use shove_core::{Direction, LevelEvent, Pos, PresentationSink};
use shove_gen::{GenError, GeneratorConfig, LevelGenerator};

// Compile-time assertion: Session moves freely between threads even
// though all stepping is single-threaded by contract.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Session>();
    }
};

/// Whether the session still accepts moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// The level is live.
    InProgress,
    /// The player reached the goal; only [`Session::restart`] revives
    /// the session.
    Won,
}

/// What one call to [`Session::apply`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The input was dropped: the session is busy animating or already
    /// won. No signal is emitted.
    Ignored,
    /// The move was illegal; an `InvalidMove` signal was emitted.
    Blocked,
    /// The player stepped onto an empty cell.
    Moved,
    /// The player pushed a box and took its cell.
    Pushed,
    /// The player stepped onto the goal outcrop.
    Won,
}

/// One active level: exclusively owns the board, the player position,
/// and the goal, and processes exactly one direction input at a time.
///
/// Created from a [`GeneratorConfig`] via [`new`](Session::new) (fresh
/// procedural level) or from explicit parts via
/// [`from_parts`](Session::from_parts) (hand-authored or fixture
/// level). Every state transition is reported through the
/// [`PresentationSink`] passed to the mutating call; the sink is never
/// awaited, and logical state is final when the call returns.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    initial: Board,
    player: Pos,
    spawn: Pos,
    goal: Pos,
    state: SessionState,
    busy: bool,
    stats: SessionStats,
}

impl Session {
    /// Generate a fresh level and open a session on it.
    ///
    /// Forwards one `BoxPlaced` per generated box to `sink`, followed
    /// by a `GenerationWarning` if the generator accepted a best-effort
    /// layout.
    ///
    /// # Errors
    ///
    /// Propagates [`GenError`] from board construction.
    pub fn new(config: GeneratorConfig, sink: &mut dyn PresentationSink) -> Result<Self, GenError> {
        let mut level = LevelGenerator::new(config).generate()?;
        for event in level.board.take_events() {
            sink.handle(&event);
        }
        if let Some(message) = level.warning.take() {
            sink.handle(&LevelEvent::GenerationWarning { message });
        }
        Ok(Self::assemble(level.board, level.spawn, level.goal))
    }

    /// Open a session on an explicit board, spawn, and goal.
    ///
    /// Any events buffered during board authoring are discarded — the
    /// embedder already knows the layout it built. Call
    /// [`broadcast_board`](Session::broadcast_board) to replay
    /// placement signals into a sink instead.
    pub fn from_parts(mut board: Board, spawn: Pos, goal: Pos) -> Self {
        board.take_events();
        Self::assemble(board, spawn, goal)
    }

    fn assemble(board: Board, spawn: Pos, goal: Pos) -> Self {
        debug_assert!(!board.in_bounds(spawn), "spawn must be an outcrop");
        debug_assert!(!board.in_bounds(goal), "goal must be an outcrop");
        let initial = board.clone();
        Self {
            board,
            initial,
            player: spawn,
            spawn,
            goal,
            state: SessionState::InProgress,
            busy: false,
            stats: SessionStats::default(),
        }
    }

    /// Process one direction input to completion.
    ///
    /// Returns [`MoveOutcome::Ignored`] without touching anything while
    /// the presentation layer holds the busy flag or after a win.
    /// Otherwise resolves the move, applies the mutation, runs match
    /// clearing (unconditionally after a step or push), and emits the
    /// corresponding events into `sink`.
    pub fn apply(&mut self, dir: Direction, sink: &mut dyn PresentationSink) -> MoveOutcome {
        if self.busy || self.state == SessionState::Won {
            return MoveOutcome::Ignored;
        }
        match resolve(&self.board, self.player, self.goal, dir) {
            Resolution::Won => {
                let from = self.player;
                self.player = self.goal;
                self.state = SessionState::Won;
                self.stats.moves += 1;
                sink.handle(&LevelEvent::PlayerMoved {
                    from,
                    to: self.goal,
                });
                sink.handle(&LevelEvent::GoalReached);
                MoveOutcome::Won
            }
            Resolution::Blocked => {
                self.stats.invalid_moves += 1;
                sink.handle(&LevelEvent::InvalidMove);
                MoveOutcome::Blocked
            }
            Resolution::Step => {
                let from = self.player;
                self.player = from.step(dir);
                self.stats.moves += 1;
                sink.handle(&LevelEvent::PlayerMoved {
                    from,
                    to: self.player,
                });
                self.clear_matches(sink);
                MoveOutcome::Moved
            }
            Resolution::Push { from, to } => {
                // Preconditions were just checked by resolve().
                let pushed = self.board.move_box(from, to);
                debug_assert!(pushed, "push preconditions vanished mid-apply");
                for event in self.board.take_events() {
                    sink.handle(&event);
                }
                let player_from = self.player;
                self.player = from;
                self.stats.moves += 1;
                self.stats.pushes += 1;
                sink.handle(&LevelEvent::PlayerMoved {
                    from: player_from,
                    to: self.player,
                });
                self.clear_matches(sink);
                MoveOutcome::Pushed
            }
        }
    }

    /// Tear the level down and bring the initial board back.
    ///
    /// Emits `LevelReset` (the discard-all signal for in-flight
    /// animation references), then one `BoxPlaced` per restored box.
    /// The player returns to the spawn outcrop; state, busy flag, and
    /// stats reset. Restart replays the same level; a fresh level is a
    /// new [`Session::new`] with a new seed.
    pub fn restart(&mut self, sink: &mut dyn PresentationSink) {
        sink.handle(&LevelEvent::LevelReset);
        self.board = self.initial.clone();
        self.player = self.spawn;
        self.state = SessionState::InProgress;
        self.busy = false;
        self.stats = SessionStats::default();
        self.broadcast_board(sink);
    }

    /// Replay a `BoxPlaced` signal for every box currently on the board.
    pub fn broadcast_board(&self, sink: &mut dyn PresentationSink) {
        for (pos, id, kind) in self.board.boxes() {
            sink.handle(&LevelEvent::BoxPlaced { pos, kind, id });
        }
    }

    /// Run the match engine and clear everything it returns.
    ///
    /// Invoked unconditionally after every step or push; an empty
    /// result leaves the board untouched and emits nothing.
    fn clear_matches(&mut self, sink: &mut dyn PresentationSink) {
        let matches = find_matches(&self.board);
        if matches.is_empty() {
            return;
        }
        for &pos in &matches {
            // find_matches only names box cells
            if self.board.remove_box(pos).is_err() {
                debug_assert!(false, "match set named a non-box cell {pos}");
            }
        }
        for event in self.board.take_events() {
            sink.handle(&event);
        }
        let positions: Vec<Pos> = matches.into_iter().collect();
        self.stats.boxes_cleared += positions.len() as u64;
        self.stats.matches_cleared += 1;
        sink.handle(&LevelEvent::MatchCleared { positions });
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current player position (an outcrop until the first step).
    pub fn player(&self) -> Pos {
        self.player
    }

    /// The spawn outcrop.
    pub fn spawn(&self) -> Pos {
        self.spawn
    }

    /// The goal outcrop.
    pub fn goal(&self) -> Pos {
        self.goal
    }

    /// Whether the level is live or won.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the player has reached the goal.
    pub fn is_won(&self) -> bool {
        self.state == SessionState::Won
    }

    /// Whether inputs are currently dropped for an animation window.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Raise or clear the animation-window debounce.
    ///
    /// Purely a UX debounce owned by the presentation layer: the board
    /// is already consistent the instant any mutating call returns.
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// Counters accumulated since the session opened or last restarted.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }
}
