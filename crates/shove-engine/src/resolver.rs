//! The move-resolution state machine.

use shove_board::Board;
use shove_core::{Direction, Pos, TileKind};

/// What one attempted move resolves to.
///
/// Decided by [`resolve`]; the session applies the corresponding
/// mutation. `Push` carries the box relocation so the caller can apply
/// it without re-deriving the geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The target is the goal outcrop: the move wins the level.
    Won,
    /// The move is illegal: out of bounds, wall, or unpushable box.
    Blocked,
    /// The target cell is empty: the player steps onto it.
    Step,
    /// The target holds a pushable box: the box slides ahead and the
    /// player takes its cell.
    Push {
        /// The box's current cell (the player's target).
        from: Pos,
        /// The cell the box slides into.
        to: Pos,
    },
}

/// Decide what moving `player` one cell in `dir` does.
///
/// The checks run in fixed order:
///
/// 1. Target equals `goal` → [`Resolution::Won`]. The goal outcrop lies
///    outside the grid, so this is checked before bounds.
/// 2. Target out of bounds → [`Resolution::Blocked`]. This also covers
///    the spawn outcrop: once inside, the player cannot step back out.
/// 3. Target empty, or an in-grid exit marker in a hand-authored
///    level → [`Resolution::Step`]. An exit marker is walkable for the
///    player but reserved against boxes: pushes require the landing
///    cell to be *empty*, so a box can never be shoved onto it.
/// 4. Target is a box → push legality: the cell beyond the box must be
///    in bounds and empty, else [`Resolution::Blocked`]. A push toward
///    the goal is always blocked, because the goal outcrop is out of
///    bounds: the goal can only be *stepped* onto.
/// 5. Anything else (a wall) → [`Resolution::Blocked`].
pub fn resolve(board: &Board, player: Pos, goal: Pos, dir: Direction) -> Resolution {
    let target = player.step(dir);
    if target == goal {
        return Resolution::Won;
    }
    let Some(kind) = board.kind_at(target) else {
        return Resolution::Blocked;
    };
    match kind {
        TileKind::Empty | TileKind::Exit => Resolution::Step,
        kind if kind.is_box() => {
            let beyond = target.step(dir);
            if board.is_empty(beyond) {
                Resolution::Push {
                    from: target,
                    to: beyond,
                }
            } else {
                Resolution::Blocked
            }
        }
        _ => Resolution::Blocked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shove_core::TileKind::{BoxBlue, BoxRed};

    const GOAL: Pos = Pos::new(8, 3);

    fn board() -> Board {
        Board::new(8, 8).unwrap()
    }

    #[test]
    fn step_into_empty_cell() {
        let b = board();
        assert_eq!(
            resolve(&b, Pos::new(3, 3), GOAL, Direction::Right),
            Resolution::Step
        );
    }

    #[test]
    fn step_onto_goal_wins_even_though_out_of_bounds() {
        let b = board();
        assert_eq!(
            resolve(&b, Pos::new(7, 3), GOAL, Direction::Right),
            Resolution::Won
        );
    }

    #[test]
    fn out_of_bounds_blocks() {
        let b = board();
        assert_eq!(
            resolve(&b, Pos::new(0, 0), GOAL, Direction::Left),
            Resolution::Blocked
        );
        assert_eq!(
            resolve(&b, Pos::new(0, 0), GOAL, Direction::Down),
            Resolution::Blocked
        );
        // Leaving the grid at the goal's edge but the wrong row is not
        // a win.
        assert_eq!(
            resolve(&b, Pos::new(7, 5), GOAL, Direction::Right),
            Resolution::Blocked
        );
    }

    #[test]
    fn spawn_outcrop_cannot_be_reentered() {
        // Stepping left from (0,3) lands on the spawn outcrop (-1,3):
        // out of bounds and not the goal.
        let b = board();
        assert_eq!(
            resolve(&b, Pos::new(0, 3), GOAL, Direction::Left),
            Resolution::Blocked
        );
    }

    #[test]
    fn wall_blocks() {
        let mut b = board();
        b.place_wall(Pos::new(4, 3)).unwrap();
        assert_eq!(
            resolve(&b, Pos::new(3, 3), GOAL, Direction::Right),
            Resolution::Blocked
        );
    }

    #[test]
    fn push_into_empty_cell() {
        let mut b = board();
        b.place_box(Pos::new(4, 3), BoxRed).unwrap();
        assert_eq!(
            resolve(&b, Pos::new(3, 3), GOAL, Direction::Right),
            Resolution::Push {
                from: Pos::new(4, 3),
                to: Pos::new(5, 3),
            }
        );
    }

    #[test]
    fn push_against_box_blocks() {
        let mut b = board();
        b.place_box(Pos::new(4, 3), BoxRed).unwrap();
        b.place_box(Pos::new(5, 3), BoxBlue).unwrap();
        assert_eq!(
            resolve(&b, Pos::new(3, 3), GOAL, Direction::Right),
            Resolution::Blocked
        );
    }

    #[test]
    fn push_against_wall_blocks() {
        let mut b = board();
        b.place_box(Pos::new(4, 3), BoxRed).unwrap();
        b.place_wall(Pos::new(5, 3)).unwrap();
        assert_eq!(
            resolve(&b, Pos::new(3, 3), GOAL, Direction::Right),
            Resolution::Blocked
        );
    }

    #[test]
    fn push_off_the_grid_blocks() {
        let mut b = board();
        b.place_box(Pos::new(7, 5), BoxRed).unwrap();
        assert_eq!(
            resolve(&b, Pos::new(6, 5), GOAL, Direction::Right),
            Resolution::Blocked
        );
    }

    #[test]
    fn exit_marker_is_walkable_but_reserved() {
        let mut b = board();
        b.place_exit(Pos::new(4, 3)).unwrap();
        // The player may step onto it.
        assert_eq!(
            resolve(&b, Pos::new(3, 3), GOAL, Direction::Right),
            Resolution::Step
        );
        // A box may not be pushed onto it.
        b.place_box(Pos::new(3, 3), BoxRed).unwrap();
        assert_eq!(
            resolve(&b, Pos::new(2, 3), GOAL, Direction::Right),
            Resolution::Blocked
        );
    }

    #[test]
    fn push_toward_goal_outcrop_blocks() {
        // The box at the goal's entry cell cannot be shoved onto the
        // goal: the outcrop is out of bounds, so the push is illegal
        // and the goal stays step-only.
        let mut b = board();
        b.place_box(Pos::new(7, 3), BoxRed).unwrap();
        assert_eq!(
            resolve(&b, Pos::new(6, 3), GOAL, Direction::Right),
            Resolution::Blocked
        );
    }
}
