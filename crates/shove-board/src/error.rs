//! Error types for board construction and mutation.

use shove_core::{Pos, TileKind};
use std::fmt;

/// Errors arising from board construction or box mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// A dimension falls outside the supported range.
    DimensionOutOfRange {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The rejected value.
        value: i32,
        /// Smallest accepted value.
        min: i32,
        /// Largest accepted value.
        max: i32,
    },
    /// The position lies outside the addressable grid.
    OutOfBounds {
        /// The offending position.
        pos: Pos,
        /// Grid width.
        width: i32,
        /// Grid height.
        height: i32,
    },
    /// The target cell already holds something.
    CellOccupied {
        /// The occupied position.
        pos: Pos,
        /// What occupies it.
        kind: TileKind,
    },
    /// The kind passed to a box operation is not a box kind.
    NotABox {
        /// The rejected kind.
        kind: TileKind,
    },
    /// No box is registered at the position.
    NoBoxAt {
        /// The queried position.
        pos: Pos,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionOutOfRange {
                name,
                value,
                min,
                max,
            } => {
                write!(f, "{name} must be in [{min}, {max}], got {value}")
            }
            Self::OutOfBounds { pos, width, height } => {
                write!(f, "position {pos} outside {width}x{height} grid")
            }
            Self::CellOccupied { pos, kind } => {
                write!(f, "cell {pos} already holds a {kind}")
            }
            Self::NotABox { kind } => write!(f, "{kind} is not a box kind"),
            Self::NoBoxAt { pos } => write!(f, "no box at {pos}"),
        }
    }
}

impl std::error::Error for BoardError {}
