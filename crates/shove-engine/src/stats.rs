//! Cumulative per-session gameplay counters.

/// Counters accumulated over one session, reset on restart.
///
/// Purely observational: consumers (score displays, telemetry) read
/// them; the simulation never branches on them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Accepted inputs that displaced the player (steps, pushes, and
    /// the winning step).
    pub moves: u64,
    /// Accepted inputs that pushed a box.
    pub pushes: u64,
    /// Rejected inputs.
    pub invalid_moves: u64,
    /// Total boxes removed by match clearing.
    pub boxes_cleared: u64,
    /// Number of non-empty clearing batches.
    pub matches_cleared: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_zero() {
        let stats = SessionStats::default();
        assert_eq!(stats.moves, 0);
        assert_eq!(stats.pushes, 0);
        assert_eq!(stats.invalid_moves, 0);
        assert_eq!(stats.boxes_cleared, 0);
        assert_eq!(stats.matches_cleared, 0);
    }
}
