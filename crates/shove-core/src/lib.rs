//! Core types and collaborator contracts for the shove puzzle engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the shared vocabulary used throughout the shove workspace: tile
//! kinds, grid positions and directions, box identifiers, and the
//! presentation-sink contract through which the simulation reports
//! state transitions outward.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod event;
pub mod id;
pub mod pos;
pub mod tile;

pub use event::{LevelEvent, NullSink, PresentationSink};
pub use id::BoxId;
pub use pos::{Direction, Pos};
pub use tile::TileKind;
