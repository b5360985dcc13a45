use serde::{Deserialize, Serialize};

/// Combo context carried from one placement to the next.
///
/// `streak` counts consecutive placements that cleared at least one line; it
/// carries across trays. `secured` is set by the first clearing placement of a
/// turn and stays set until the next turn starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComboState {
    streak: u32,
    secured: bool,
}

impl ComboState {
    /// Starts a turn with the given carried-over streak and nothing secured yet.
    #[must_use]
    pub const fn new(streak: u32) -> Self {
        Self {
            streak,
            secured: false,
        }
    }

    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    /// Whether a line has already been cleared during this turn.
    #[must_use]
    pub const fn secured(&self) -> bool {
        self.secured
    }

    /// Returns the state after a placement that cleared `cleared` lines.
    ///
    /// A clear extends the streak and secures the turn; a placement that clears
    /// nothing resets the streak. `secured` never goes back to `false`.
    ///
    /// ```
    /// use blockblast_engine::ComboState;
    ///
    /// let state = ComboState::new(2).after_clear(1);
    /// assert_eq!((state.streak(), state.secured()), (3, true));
    ///
    /// let state = state.after_clear(0);
    /// assert_eq!((state.streak(), state.secured()), (0, true));
    /// ```
    #[must_use]
    pub const fn after_clear(self, cleared: usize) -> Self {
        if cleared > 0 {
            Self {
                streak: self.streak.saturating_add(1),
                secured: true,
            }
        } else {
            Self {
                streak: 0,
                secured: self.secured,
            }
        }
    }

    /// Returns the state at the start of a new turn: streak kept, latch released.
    #[must_use]
    pub const fn start_turn(self) -> Self {
        Self::new(self.streak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secured_latches_within_turn() {
        let state = ComboState::new(0)
            .after_clear(2)
            .after_clear(0)
            .after_clear(0);
        assert!(state.secured());
        assert_eq!(state.streak(), 0);
    }

    #[test]
    fn test_streak_counts_consecutive_clears() {
        let state = ComboState::new(5).after_clear(1).after_clear(3);
        assert_eq!(state.streak(), 7);
        assert_eq!(ComboState::new(u32::MAX).after_clear(1).streak(), u32::MAX);
    }

    #[test]
    fn test_start_turn_keeps_streak() {
        let state = ComboState::new(1).after_clear(1).start_turn();
        assert_eq!(state, ComboState::new(2));
        assert!(!state.secured());
    }
}
