//! Board state and match scanning for the shove puzzle engine.
//!
//! [`Board`] owns the 2D tile grid and the sparse box registry and
//! exposes the invariant-preserving mutators the move resolver and the
//! level generator build on. [`find_matches`] is the pure match-3
//! scanner over a board.
//!
//! # Invariant
//!
//! For every position, `grid[pos]` holds a box kind if and only if the
//! box registry contains that position. Mutators preserve this; a call
//! that would break it is rejected (and asserts in debug builds).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod error;
pub mod matches;

pub use board::Board;
pub use error::BoardError;
pub use matches::find_matches;
