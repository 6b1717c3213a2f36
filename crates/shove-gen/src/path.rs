//! Outcrop placement and jagged path carving.

use rand::RngExt;
use rand_chacha::ChaCha8Rng;
use shove_core::{Direction, Pos};

/// Which pair of opposite edges hosts the spawn and goal outcrops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Outcrops on the left and right edges.
    Horizontal,
    /// Outcrops on the bottom and top edges.
    Vertical,
}

/// Pick an orientation and place the spawn and goal outcrops one cell
/// outside opposite edges, at independently randomized offsets.
///
/// Which of the two edges hosts the spawn is itself a coin flip.
pub fn place_outcrops(rng: &mut ChaCha8Rng, width: i32, height: i32) -> (Orientation, Pos, Pos) {
    let orientation = if rng.random_bool(0.5) {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let (mut spawn, mut goal) = match orientation {
        Orientation::Horizontal => (
            Pos::new(-1, rng.random_range(0..height)),
            Pos::new(width, rng.random_range(0..height)),
        ),
        Orientation::Vertical => (
            Pos::new(rng.random_range(0..width), -1),
            Pos::new(rng.random_range(0..width), height),
        ),
    };
    if rng.random_bool(0.5) {
        std::mem::swap(&mut spawn, &mut goal);
    }
    (orientation, spawn, goal)
}

/// Carve a jagged path of in-bounds cells from `start` to `end` (both
/// already clamped onto the grid).
///
/// Up to `twists` segments are walked, each holding a uniformly random
/// axis direction for 2–3 steps with every step clamped to the grid.
/// Carving stops early on reaching `end`; if the budget runs out first,
/// `end` is force-appended so later placement always has the goal entry
/// on the path.
pub fn carve_path(
    rng: &mut ChaCha8Rng,
    start: Pos,
    end: Pos,
    width: i32,
    height: i32,
    twists: u32,
) -> Vec<Pos> {
    let mut path = vec![start];
    let mut cursor = start;
    'segments: for _ in 0..twists {
        if cursor == end {
            break;
        }
        let dir = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        let hold = rng.random_range(2..=3);
        for _ in 0..hold {
            let next = cursor.step(dir).clamp_to(width, height);
            if next != cursor {
                cursor = next;
                path.push(cursor);
            }
            if cursor == end {
                break 'segments;
            }
        }
    }
    if path.last() != Some(&end) {
        path.push(end);
    }
    path
}
