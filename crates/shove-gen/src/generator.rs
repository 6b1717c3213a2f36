//! The level generator: outcrops, path, clusters, filler, validation,
//! border reinforcement, and goal blocking.

use crate::config::GeneratorConfig;
use crate::path::{carve_path, place_outcrops, Orientation};
use crate::picker::pick_kind;
use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;
use shove_board::{Board, BoardError};
use shove_core::{Direction, Pos, TileKind};
use std::fmt;

/// A finished, ready-to-play level.
///
/// The board's buffered events hold one `BoxPlaced` per final box — the
/// placement requests for the presentation layer. The session takes
/// ownership of all three parts on success.
#[derive(Clone, Debug)]
pub struct Level {
    /// The generated board.
    pub board: Board,
    /// Player spawn outcrop, one cell outside an edge.
    pub spawn: Pos,
    /// Goal outcrop, one cell outside the opposite edge.
    pub goal: Pos,
    /// Which edge pair hosts the outcrops.
    pub orientation: Orientation,
    /// Set when the retry budget ran out and the last layout was
    /// accepted best-effort.
    pub warning: Option<String>,
}

/// Errors from level generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenError {
    /// Board construction rejected the configured dimensions.
    Board(BoardError),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(err) => write!(f, "board construction failed: {err}"),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Board(err) => Some(err),
        }
    }
}

impl From<BoardError> for GenError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

/// Builds boards that are legal, non-trivial, and heuristically
/// solvable-by-construction.
///
/// One seeded `ChaCha8Rng` drives every draw, so a configuration fully
/// determines the produced level.
#[derive(Clone, Debug)]
pub struct LevelGenerator {
    config: GeneratorConfig,
}

impl LevelGenerator {
    /// Create a generator from a validated configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The configuration this generator runs with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a fresh level.
    ///
    /// Runs the retry loop over path carving, cluster placement, and
    /// filler scattering until a layout passes the playability checks
    /// or the attempt budget is spent; the last layout is then accepted
    /// best-effort with a warning. Border reinforcement and goal
    /// blocking run on the accepted layout.
    pub fn generate(&self) -> Result<Level, GenError> {
        let cfg = &self.config;
        let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);
        let mut board = Board::new(cfg.width, cfg.height)?;

        let (orientation, spawn, goal) = place_outcrops(&mut rng, cfg.width, cfg.height);
        let spawn_entry = spawn.clamp_to(cfg.width, cfg.height);
        let goal_entry = goal.clamp_to(cfg.width, cfg.height);

        let mut warning = None;
        for attempt in 1..=cfg.attempts {
            let twists = rng.random_range(cfg.min_twists..=cfg.max_twists);
            let path = carve_path(&mut rng, spawn_entry, goal_entry, cfg.width, cfg.height, twists);
            self.place_clusters(&mut board, &path, spawn, &mut rng);
            self.scatter_filler(&mut board, spawn, &mut rng);

            if layout_is_playable(&board) {
                break;
            }
            if attempt == cfg.attempts {
                warning = Some(format!(
                    "no playable layout within {} attempts; accepting best effort",
                    cfg.attempts
                ));
            } else {
                // Discard the failed layout and its unseen events;
                // spawn, goal, and the RNG stream carry over.
                board.clear_boxes();
                board.take_events();
            }
        }

        self.reinforce_border(&mut board, spawn, &mut rng);
        self.block_goal_entry(&mut board, goal_entry, spawn, &mut rng);

        Ok(Level {
            board,
            spawn,
            goal,
            orientation,
            warning,
        })
    }

    /// Place 3–4-cell same-colored blobs centered on random path cells.
    fn place_clusters(&self, board: &mut Board, path: &[Pos], spawn: Pos, rng: &mut ChaCha8Rng) {
        let cfg = &self.config;
        let count = rng.random_range(cfg.min_clusters..=cfg.max_clusters);
        for _ in 0..count {
            let center = path[rng.random_range(0..path.len())];
            if !board.is_empty(center) || !self.outside_safe_radius(spawn, center) {
                continue;
            }
            let kind = pick_kind(board, center, &cfg.palette, rng);
            place(board, center, kind);
            let neighbours = rng.random_range(2..=3);
            for _ in 0..neighbours {
                let dir = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
                let cell = center.step(dir);
                if board.is_empty(cell) && self.outside_safe_radius(spawn, cell) {
                    place(board, cell, kind);
                }
            }
        }
    }

    /// Independently place low-density filler across interior cells.
    fn scatter_filler(&self, board: &mut Board, spawn: Pos, rng: &mut ChaCha8Rng) {
        let cfg = &self.config;
        for pos in interior_cells(board) {
            if board.is_empty(pos)
                && self.outside_safe_radius(spawn, pos)
                && rng.random_bool(cfg.filler_prob)
            {
                let kind = pick_kind(board, pos, &cfg.palette, rng);
                place(board, pos, kind);
            }
        }
    }

    /// Fill empty border cells with boxes at the configured probability.
    fn reinforce_border(&self, board: &mut Board, spawn: Pos, rng: &mut ChaCha8Rng) {
        let cfg = &self.config;
        let ring: Vec<Pos> = board.cells().filter(|&pos| board.is_border(pos)).collect();
        for pos in ring {
            if board.is_empty(pos)
                && self.outside_safe_radius(spawn, pos)
                && rng.random_bool(cfg.border_prob)
            {
                let kind = pick_kind(board, pos, &cfg.palette, rng);
                place(board, pos, kind);
            }
        }
    }

    /// Fill every empty cell of the 3x3 neighbourhood around the goal's
    /// entry cell, so the goal is never walked into without a push.
    fn block_goal_entry(&self, board: &mut Board, entry: Pos, spawn: Pos, rng: &mut ChaCha8Rng) {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let pos = Pos::new(entry.x + dx, entry.y + dy);
                if board.is_empty(pos) && self.outside_safe_radius(spawn, pos) {
                    let kind = pick_kind(board, pos, &self.config.palette, rng);
                    place(board, pos, kind);
                }
            }
        }
    }

    fn outside_safe_radius(&self, spawn: Pos, pos: Pos) -> bool {
        let radius = self.config.safe_radius;
        pos.distance_sq(spawn) as f64 > radius * radius
    }
}

/// Whether the layout passes the cheap degeneracy checks: at least one
/// box can actually be pushed, and not every box sits on the border
/// ring. This is a constructive-solvability heuristic, not a solver.
fn layout_is_playable(board: &Board) -> bool {
    let pushable = board.boxes().any(|(pos, _, _)| {
        Direction::ALL.iter().any(|&dir| {
            // The landing cell and the cell the player pushes from must
            // both be free.
            board.is_empty(pos.step(dir)) && board.is_empty(pos.step(dir.opposite()))
        })
    });
    let all_on_border = board.boxes().all(|(pos, _, _)| board.is_border(pos));
    pushable && !all_on_border
}

/// In-bounds cells excluding the border ring, row-major.
fn interior_cells(board: &Board) -> impl Iterator<Item = Pos> {
    let (w, h) = (board.width(), board.height());
    (1..h - 1).flat_map(move |y| (1..w - 1).map(move |x| Pos::new(x, y)))
}

/// Place with preconditions already checked by the caller.
fn place(board: &mut Board, pos: Pos, kind: TileKind) {
    if board.place_box(pos, kind).is_err() {
        debug_assert!(false, "generator placement failed at {pos}");
    }
}
