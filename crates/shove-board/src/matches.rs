//! Match-3 run scanning.
//!
//! [`find_matches`] is a pure function over a [`Board`]: it never
//! mutates, and the caller applies the clearing batch. Runs are
//! kind-homogeneous — three adjacent boxes match only if all three are
//! the same color. Non-box solids terminate runs and are never part of
//! the result. There is no gravity and no cascade: clearing the
//! returned set is a single logical batch and cells do not shift.

use crate::board::Board;
use indexmap::IndexSet;
use shove_core::{Pos, TileKind};
use smallvec::SmallVec;

/// Minimum run length that clears.
pub const MIN_RUN: usize = 3;

/// All cells belonging to a horizontal or vertical run of `MIN_RUN` or
/// more same-colored boxes.
///
/// The result is a deduplicated set in first-detection order: a cell at
/// the crossing of a horizontal and a vertical run appears once.
///
/// # Examples
///
/// ```
/// use shove_board::{find_matches, Board};
/// use shove_core::{Pos, TileKind};
///
/// let mut board = Board::new(8, 8).unwrap();
/// for x in 0..3 {
///     board.place_box(Pos::new(x, 0), TileKind::BoxRed).unwrap();
/// }
/// board.place_box(Pos::new(3, 0), TileKind::BoxBlue).unwrap();
///
/// let matches = find_matches(&board);
/// assert_eq!(matches.len(), 3);
/// assert!(!matches.contains(&Pos::new(3, 0)));
/// ```
pub fn find_matches(board: &Board) -> IndexSet<Pos> {
    let mut out = IndexSet::new();
    for y in 0..board.height() {
        scan_line(board, (0..board.width()).map(|x| Pos::new(x, y)), &mut out);
    }
    for x in 0..board.width() {
        scan_line(board, (0..board.height()).map(|y| Pos::new(x, y)), &mut out);
    }
    out
}

/// Scan one row or column, flushing every closed run of length >= 3.
fn scan_line(board: &Board, line: impl Iterator<Item = Pos>, out: &mut IndexSet<Pos>) {
    let mut run: SmallVec<[Pos; 8]> = SmallVec::new();
    let mut run_kind: Option<TileKind> = None;
    for pos in line {
        let matchable = board.kind_at(pos).filter(|k| k.is_box());
        if matchable.is_some() && matchable == run_kind {
            run.push(pos);
        } else {
            flush(&run, out);
            run.clear();
            run_kind = matchable;
            if matchable.is_some() {
                run.push(pos);
            }
        }
    }
    flush(&run, out);
}

fn flush(run: &[Pos], out: &mut IndexSet<Pos>) {
    if run.len() >= MIN_RUN {
        out.extend(run.iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shove_core::TileKind::{BoxBlue, BoxGreen, BoxRed};

    fn board_with_row(kinds: &[TileKind]) -> Board {
        let mut b = Board::new(8, 8).unwrap();
        for (x, &kind) in kinds.iter().enumerate() {
            if kind.is_box() {
                b.place_box(Pos::new(x as i32, 0), kind).unwrap();
            }
        }
        b
    }

    #[test]
    fn empty_board_has_no_matches() {
        let b = Board::new(8, 8).unwrap();
        assert!(find_matches(&b).is_empty());
    }

    #[test]
    fn run_of_three_matches_exactly() {
        // [R, R, R, B] -> first three cells only
        let b = board_with_row(&[BoxRed, BoxRed, BoxRed, BoxBlue]);
        let m = find_matches(&b);
        assert_eq!(m.len(), 3);
        for x in 0..3 {
            assert!(m.contains(&Pos::new(x, 0)));
        }
        assert!(!m.contains(&Pos::new(3, 0)));
    }

    #[test]
    fn run_closing_at_line_end_flushes() {
        // [R, R, B, R, R, R] -> exactly the trailing three
        let b = board_with_row(&[BoxRed, BoxRed, BoxBlue, BoxRed, BoxRed, BoxRed]);
        let m = find_matches(&b);
        assert_eq!(m.len(), 3);
        for x in 3..6 {
            assert!(m.contains(&Pos::new(x, 0)));
        }
        assert!(!m.contains(&Pos::new(0, 0)));
        assert!(!m.contains(&Pos::new(1, 0)));
    }

    #[test]
    fn two_in_a_row_is_not_a_match() {
        let b = board_with_row(&[BoxRed, BoxRed]);
        assert!(find_matches(&b).is_empty());
    }

    #[test]
    fn mixed_colors_do_not_match() {
        let b = board_with_row(&[BoxRed, BoxBlue, BoxGreen, BoxRed, BoxBlue]);
        assert!(find_matches(&b).is_empty());
    }

    #[test]
    fn vertical_run_matches() {
        let mut b = Board::new(8, 8).unwrap();
        for y in 2..5 {
            b.place_box(Pos::new(4, y), BoxGreen).unwrap();
        }
        let m = find_matches(&b);
        assert_eq!(m.len(), 3);
        for y in 2..5 {
            assert!(m.contains(&Pos::new(4, y)));
        }
    }

    #[test]
    fn crossing_runs_deduplicate_the_shared_cell() {
        // Horizontal run through (2,2)..(4,2), vertical through (3,1)..(3,3).
        let mut b = Board::new(8, 8).unwrap();
        for x in 2..5 {
            b.place_box(Pos::new(x, 2), BoxRed).unwrap();
        }
        b.place_box(Pos::new(3, 1), BoxRed).unwrap();
        b.place_box(Pos::new(3, 3), BoxRed).unwrap();
        let m = find_matches(&b);
        assert_eq!(m.len(), 5, "shared cell (3,2) must appear exactly once");
        assert!(m.contains(&Pos::new(3, 2)));
    }

    #[test]
    fn run_longer_than_three_is_fully_included() {
        let b = board_with_row(&[BoxBlue, BoxBlue, BoxBlue, BoxBlue, BoxBlue]);
        let m = find_matches(&b);
        assert_eq!(m.len(), 5);
    }

    #[test]
    fn wall_breaks_a_run() {
        let mut b = Board::new(8, 8).unwrap();
        b.place_box(Pos::new(0, 0), BoxRed).unwrap();
        b.place_box(Pos::new(1, 0), BoxRed).unwrap();
        b.place_wall(Pos::new(2, 0)).unwrap();
        b.place_box(Pos::new(3, 0), BoxRed).unwrap();
        b.place_box(Pos::new(4, 0), BoxRed).unwrap();
        assert!(find_matches(&b).is_empty());
    }

    #[test]
    fn walls_never_match_each_other() {
        let mut b = Board::new(8, 8).unwrap();
        for x in 0..5 {
            b.place_wall(Pos::new(x, 0)).unwrap();
        }
        assert!(find_matches(&b).is_empty());
    }

    #[test]
    fn clearing_empty_set_leaves_board_unchanged() {
        let mut b = board_with_row(&[BoxRed, BoxRed, BoxBlue]);
        b.take_events();
        let before = b.render();
        let m = find_matches(&b);
        assert!(m.is_empty());
        for pos in &m {
            b.remove_box(*pos).unwrap();
        }
        assert_eq!(b.render(), before);
        assert!(b.take_events().is_empty());
    }
}
