//! Strongly-typed identifiers.

use std::fmt;

/// Identifies one box for the lifetime of a board.
///
/// Allocated sequentially by the board as boxes are placed. The
/// presentation layer keys spawned visuals by `BoxId`, so a box keeps
/// its identity as it is pushed from cell to cell. IDs are never reused
/// within one board; a regenerated board starts a fresh sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxId(pub u64);

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BoxId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_from() {
        assert_eq!(BoxId::from(7).to_string(), "7");
        assert_eq!(BoxId(7), BoxId::from(7));
    }
}
