use serde::{Deserialize, Serialize};

/// Counters accumulated over a session.
///
/// - **Turns**: trays dealt
/// - **Placed shapes / cells**: pieces committed to the board and their total size
/// - **Cleared lines**: rows plus columns removed (a cell on a cleared row and a
///   cleared column counts toward both)
/// - **Clearing moves**: placements that cleared at least one line
/// - **Combo streak**: current and best run of consecutive clearing placements
///
/// # Example
///
/// ```
/// use blockblast_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.start_turn();
/// stats.complete_placement(4, 2, 1);
/// stats.complete_placement(3, 0, 0);
///
/// assert_eq!(stats.placed_cells(), 7);
/// assert_eq!(stats.total_cleared_lines(), 2);
/// assert_eq!(stats.best_combo_streak(), 1);
/// assert_eq!(stats.combo_streak(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    turns: usize,
    placed_shapes: usize,
    placed_cells: usize,
    total_cleared_lines: usize,
    clearing_moves: usize,
    combo_streak: u32,
    best_combo_streak: u32,
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            turns: 0,
            placed_shapes: 0,
            placed_cells: 0,
            total_cleared_lines: 0,
            clearing_moves: 0,
            combo_streak: 0,
            best_combo_streak: 0,
        }
    }

    #[must_use]
    pub const fn turns(&self) -> usize {
        self.turns
    }

    #[must_use]
    pub const fn placed_shapes(&self) -> usize {
        self.placed_shapes
    }

    #[must_use]
    pub const fn placed_cells(&self) -> usize {
        self.placed_cells
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    #[must_use]
    pub const fn clearing_moves(&self) -> usize {
        self.clearing_moves
    }

    #[must_use]
    pub const fn combo_streak(&self) -> u32 {
        self.combo_streak
    }

    #[must_use]
    pub const fn best_combo_streak(&self) -> u32 {
        self.best_combo_streak
    }

    /// Records that a new tray was dealt.
    pub const fn start_turn(&mut self) {
        self.turns += 1;
    }

    /// Records one committed placement.
    ///
    /// # Arguments
    ///
    /// * `cells` - Size of the placed shape
    /// * `cleared_lines` - Rows plus columns cleared by the placement
    /// * `streak` - Combo streak after the placement
    pub const fn complete_placement(&mut self, cells: usize, cleared_lines: usize, streak: u32) {
        self.placed_shapes += 1;
        self.placed_cells += cells;
        self.total_cleared_lines += cleared_lines;
        if cleared_lines > 0 {
            self.clearing_moves += 1;
        }
        self.combo_streak = streak;
        if streak > self.best_combo_streak {
            self.best_combo_streak = streak;
        }
    }
}
