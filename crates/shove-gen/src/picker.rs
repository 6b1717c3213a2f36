//! Match-avoiding box color selection.

use rand::RngExt;
use rand_chacha::ChaCha8Rng;
use shove_board::Board;
use shove_core::{Direction, Pos, TileKind};
use smallvec::SmallVec;

/// Lookback depth per axis direction. A newly placed box can only close
/// a run of three with up to two already-placed neighbours on a side.
const LOOKBACK: usize = 2;

/// Choose a color for a box about to be placed at `pos` such that the
/// placement does not immediately complete a run of three.
///
/// Candidates that would close a horizontal or vertical run are
/// excluded; both lookback directions per axis are counted so a
/// placement landing *between* two same-colored cells is caught. The
/// choice is uniform among surviving candidates. If every candidate is
/// excluded, the choice is uniform among all candidates — generation
/// tolerates the rare accidental match and does not re-validate.
pub fn pick_kind(
    board: &Board,
    pos: Pos,
    candidates: &[TileKind],
    rng: &mut ChaCha8Rng,
) -> TileKind {
    debug_assert!(!candidates.is_empty(), "pick_kind needs candidates");
    let valid: SmallVec<[TileKind; 4]> = candidates
        .iter()
        .copied()
        .filter(|&kind| !would_complete_run(board, pos, kind))
        .collect();
    let pool: &[TileKind] = if valid.is_empty() { candidates } else { &valid };
    pool[rng.random_range(0..pool.len())]
}

/// Whether placing `kind` at `pos` would create a run of length >= 3
/// on either axis.
fn would_complete_run(board: &Board, pos: Pos, kind: TileKind) -> bool {
    let horizontal =
        1 + run_toward(board, pos, kind, Direction::Left) + run_toward(board, pos, kind, Direction::Right);
    if horizontal >= shove_board::matches::MIN_RUN {
        return true;
    }
    let vertical =
        1 + run_toward(board, pos, kind, Direction::Down) + run_toward(board, pos, kind, Direction::Up);
    vertical >= shove_board::matches::MIN_RUN
}

/// Count consecutive cells of `kind` walking from `pos` in `dir`, up to
/// [`LOOKBACK`].
fn run_toward(board: &Board, pos: Pos, kind: TileKind, dir: Direction) -> usize {
    let mut count = 0;
    let mut cursor = pos.step(dir);
    while count < LOOKBACK && board.kind_at(cursor) == Some(kind) {
        count += 1;
        cursor = cursor.step(dir);
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use shove_core::TileKind::{BoxBlue, BoxGreen, BoxRed};

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn avoids_completing_horizontal_run() {
        let mut board = Board::new(8, 8).unwrap();
        board.place_box(Pos::new(1, 0), BoxRed).unwrap();
        board.place_box(Pos::new(2, 0), BoxRed).unwrap();

        let mut rng = rng();
        for _ in 0..32 {
            let kind = pick_kind(&board, Pos::new(3, 0), &[BoxRed, BoxBlue], &mut rng);
            assert_eq!(kind, BoxBlue);
        }
    }

    #[test]
    fn avoids_landing_between_two_cells() {
        // Red at (1,0) and (3,0): placing red at (2,0) closes a run of
        // three even though neither side alone has two cells.
        let mut board = Board::new(8, 8).unwrap();
        board.place_box(Pos::new(1, 0), BoxRed).unwrap();
        board.place_box(Pos::new(3, 0), BoxRed).unwrap();

        let mut rng = rng();
        for _ in 0..32 {
            let kind = pick_kind(&board, Pos::new(2, 0), &[BoxRed, BoxGreen], &mut rng);
            assert_eq!(kind, BoxGreen);
        }
    }

    #[test]
    fn avoids_completing_vertical_run() {
        let mut board = Board::new(8, 8).unwrap();
        board.place_box(Pos::new(4, 2), BoxGreen).unwrap();
        board.place_box(Pos::new(4, 3), BoxGreen).unwrap();

        let mut rng = rng();
        for _ in 0..32 {
            let kind = pick_kind(&board, Pos::new(4, 4), &[BoxGreen, BoxRed], &mut rng);
            assert_eq!(kind, BoxRed);
        }
    }

    #[test]
    fn distant_pair_does_not_exclude() {
        // Reds at (3,0) and (4,0); placing at (1,0) leaves a gap, so
        // red is still a valid candidate.
        let mut board = Board::new(8, 8).unwrap();
        board.place_box(Pos::new(3, 0), BoxRed).unwrap();
        board.place_box(Pos::new(4, 0), BoxRed).unwrap();

        let mut rng = rng();
        let mut saw_red = false;
        for _ in 0..64 {
            if pick_kind(&board, Pos::new(1, 0), &[BoxRed, BoxBlue], &mut rng) == BoxRed {
                saw_red = true;
            }
        }
        assert!(saw_red, "red must stay in the candidate pool");
    }

    #[test]
    fn falls_back_when_every_candidate_is_excluded() {
        let mut board = Board::new(8, 8).unwrap();
        board.place_box(Pos::new(1, 0), BoxRed).unwrap();
        board.place_box(Pos::new(2, 0), BoxRed).unwrap();

        let mut rng = rng();
        let kind = pick_kind(&board, Pos::new(3, 0), &[BoxRed], &mut rng);
        assert_eq!(kind, BoxRed);
    }

    #[test]
    fn empty_board_accepts_any_candidate() {
        let board = Board::new(8, 8).unwrap();
        let mut rng = rng();
        let kind = pick_kind(&board, Pos::new(4, 4), &[BoxRed, BoxBlue, BoxGreen], &mut rng);
        assert!(kind.is_box());
    }

    #[test]
    fn same_seed_same_choices() {
        let board = Board::new(8, 8).unwrap();
        let palette = [BoxRed, BoxBlue, BoxGreen];
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for x in 0..8 {
            let pos = Pos::new(x, 4);
            assert_eq!(
                pick_kind(&board, pos, &palette, &mut a),
                pick_kind(&board, pos, &palette, &mut b)
            );
        }
    }
}
