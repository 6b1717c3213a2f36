//! Session and move resolution for the shove puzzle engine.
//!
//! [`Session`] is the primary user-facing API: it owns the board, the
//! player, and the goal for one active level, consumes one direction
//! input at a time, and reports every state transition through the
//! [`shove_core::PresentationSink`] contract. Move legality is decided
//! by the pure [`resolve`](resolver::resolve) state machine and applied
//! synchronously — logical state is final when
//! [`apply`](Session::apply) returns.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod resolver;
pub mod session;
pub mod stats;

pub use resolver::{resolve, Resolution};
pub use session::{MoveOutcome, Session, SessionState};
pub use stats::SessionStats;
