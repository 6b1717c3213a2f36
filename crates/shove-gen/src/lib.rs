//! Procedural level generation for the shove puzzle engine.
//!
//! [`LevelGenerator`] builds a fresh [`shove_board::Board`] that is
//! legal, non-trivial, and heuristically solvable-by-construction:
//! spawn and goal outcrops on opposite edges, a jagged connecting path,
//! box clusters and filler along it, a reinforced border, and a blocked
//! goal approach that forces at least one push.
//!
//! # Determinism
//!
//! Every random draw flows through one `ChaCha8Rng` seeded from
//! [`GeneratorConfig::seed`]: the same configuration always produces a
//! byte-identical board.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod generator;
pub mod path;
pub mod picker;

pub use config::{ConfigError, GeneratorConfig, GeneratorConfigBuilder};
pub use generator::{GenError, Level, LevelGenerator};
pub use path::Orientation;
pub use picker::pick_kind;
