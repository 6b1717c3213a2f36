//! Shove: a push-box match-3 puzzle engine with procedural level
//! generation.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all shove sub-crates. For most users, adding `shove` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use shove::prelude::*;
//!
//! // Generate a seeded 10x10 level and open a session on it.
//! let config = GeneratorConfig::builder()
//!     .width(10)
//!     .height(10)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let mut sink = NullSink;
//! let mut session = Session::new(config, &mut sink).unwrap();
//!
//! // Feed direction inputs one at a time.
//! let outcome = session.apply(Direction::Right, &mut sink);
//! assert!(matches!(
//!     outcome,
//!     MoveOutcome::Moved | MoveOutcome::Pushed | MoveOutcome::Blocked
//! ));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `shove-core` | Tile kinds, positions, events, the sink contract |
//! | [`board`] | `shove-board` | The board, its mutators, and match scanning |
//! | [`gen`] | `shove-gen` | Generator configuration and the level generator |
//! | [`engine`] | `shove-engine` | Sessions, move resolution, stats |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary types and the presentation contract (`shove-core`).
///
/// Contains [`types::TileKind`], [`types::Pos`], [`types::Direction`],
/// [`types::LevelEvent`], and the [`types::PresentationSink`] trait.
pub use shove_core as types;

/// Board state and match scanning (`shove-board`).
///
/// Provides [`board::Board`] and the pure [`board::find_matches`]
/// scanner.
pub use shove_board as board;

/// Procedural level generation (`shove-gen`).
///
/// Build a [`gen::GeneratorConfig`], hand it to a
/// [`gen::LevelGenerator`] (or directly to
/// [`engine::Session::new`]), and receive a solvable-by-construction
/// [`gen::Level`].
pub use shove_gen as gen;

/// Sessions and move resolution (`shove-engine`).
///
/// [`engine::Session`] is the primary user-facing API for driving a
/// level with direction inputs.
pub use shove_engine as engine;

/// Common imports for typical shove usage.
///
/// ```rust
/// use shove::prelude::*;
/// ```
pub mod prelude {
    // Core types and the sink contract
    pub use shove_core::{
        BoxId, Direction, LevelEvent, NullSink, Pos, PresentationSink, TileKind,
    };

    // Board
    pub use shove_board::{find_matches, Board, BoardError};

    // Generation
    pub use shove_gen::{ConfigError, GenError, GeneratorConfig, Level, LevelGenerator};

    // Engine
    pub use shove_engine::{MoveOutcome, Session, SessionState, SessionStats};
}
