//! Benchmark-only crate; see the `benches/` directory.
//!
//! Kept as a separate workspace member so heavy dev-dependencies stay
//! out of the library crates.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
