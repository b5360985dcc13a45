use crate::{
    PlacementError,
    core::{BitBoard, Placement, Shape},
};

use super::{ComboState, GameStats, ShapeDealer};

/// The board, the tray of shapes still to place this turn, and session state.
///
/// Tray slots keep their position after a shape is placed (they become `None`),
/// so [`Placement::shape_index`] always refers to the dealt order.
#[derive(Debug, Clone, Default)]
pub struct GameField {
    board: BitBoard,
    tray: Vec<Option<Shape>>,
    combo: ComboState,
    stats: GameStats,
}

impl GameField {
    /// Creates a field with an empty board and no tray.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a field with the given board and combo streak and no tray.
    #[must_use]
    pub fn with_board(board: BitBoard, combo_streak: u32) -> Self {
        Self {
            board,
            combo: ComboState::new(combo_streak),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn board(&self) -> &BitBoard {
        &self.board
    }

    /// The current tray; `None` marks an already placed slot.
    #[must_use]
    pub fn tray(&self) -> &[Option<Shape>] {
        &self.tray
    }

    /// The tray with placed slots replaced by [`Shape::EMPTY`].
    ///
    /// This is the shape list a planner takes: indices match the tray, and empty
    /// entries are skipped.
    #[must_use]
    pub fn tray_shapes(&self) -> Vec<Shape> {
        self.tray
            .iter()
            .map(|slot| slot.unwrap_or(Shape::EMPTY))
            .collect()
    }

    #[must_use]
    pub fn combo(&self) -> ComboState {
        self.combo
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Replaces the tray with a freshly dealt one and starts a new turn.
    pub fn deal(&mut self, dealer: &mut ShapeDealer) {
        self.set_tray(dealer.deal());
    }

    /// Replaces the tray with the given shapes and starts a new turn.
    ///
    /// Empty shapes become already placed slots.
    pub fn set_tray(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        self.tray = shapes
            .into_iter()
            .map(|shape| (!shape.is_empty()).then_some(shape))
            .collect();
        self.combo = self.combo.start_turn();
        self.stats.start_turn();
    }

    #[must_use]
    pub fn is_tray_empty(&self) -> bool {
        self.tray.iter().all(Option::is_none)
    }

    /// Returns `true` if at least one remaining tray shape fits somewhere.
    #[must_use]
    pub fn can_place_any(&self) -> bool {
        self.tray
            .iter()
            .flatten()
            .any(|shape| self.board.first_fit(shape).is_some())
    }

    /// Places one tray shape, clears lines and updates the combo and statistics.
    ///
    /// Returns the number of lines cleared. The field is left unchanged on error.
    pub fn apply_placement(&mut self, placement: Placement) -> Result<usize, PlacementError> {
        let index = placement.shape_index();
        let anchor = placement.anchor();
        let slot = self
            .tray
            .get(index)
            .ok_or(PlacementError::ShapeIndexOutOfRange {
                index,
                len: self.tray.len(),
            })?;
        let shape = slot.ok_or(PlacementError::ShapeAlreadyPlaced { index })?;
        if !self.board.can_place(&shape, anchor) {
            return Err(PlacementError::Infeasible { index, anchor });
        }

        let (board, cleared) = self.board.place(&shape, anchor).clear_lines();
        self.board = board;
        self.tray[index] = None;
        self.combo = self.combo.after_clear(cleared);
        self.stats
            .complete_placement(shape.size(), cleared, self.combo.streak());
        Ok(cleared)
    }

    /// Applies placements in order, stopping at the first failure.
    ///
    /// Returns the total number of lines cleared. Placements before a failing one
    /// stay applied.
    pub fn apply_solution(&mut self, placements: &[Placement]) -> Result<usize, PlacementError> {
        let mut total = 0;
        for &placement in placements {
            total += self.apply_placement(placement)?;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Anchor;

    const SINGLE: Shape = Shape::from_offsets(&[(0, 0)]);
    const DOMINO: Shape = Shape::from_offsets(&[(0, 0), (0, 1)]);

    fn field_with_tray(board: BitBoard, shapes: &[Shape]) -> GameField {
        let mut field = GameField::with_board(board, 0);
        field.set_tray(shapes.iter().copied());
        field
    }

    #[test]
    fn test_apply_placement_clears_and_tracks_combo() {
        let board = BitBoard::from_ascii("#######.");
        let mut field = field_with_tray(board, &[DOMINO, SINGLE]);

        let cleared = field
            .apply_placement(Placement::new(1, Anchor::new(0, 7)))
            .unwrap();
        assert_eq!(cleared, 1);
        assert!(field.board().is_empty());
        assert_eq!(field.tray(), &[Some(DOMINO), None]);
        assert_eq!(field.combo().streak(), 1);
        assert!(field.combo().secured());
        assert_eq!(field.stats().clearing_moves(), 1);
    }

    #[test]
    fn test_apply_placement_errors_leave_field_unchanged() {
        let board = BitBoard::from_ascii("#.......");
        let mut field = field_with_tray(board, &[DOMINO, SINGLE]);
        field
            .apply_placement(Placement::new(1, Anchor::new(4, 4)))
            .unwrap();
        let before = field.clone();

        assert_eq!(
            field.apply_placement(Placement::new(2, Anchor::new(0, 0))),
            Err(PlacementError::ShapeIndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            field.apply_placement(Placement::new(1, Anchor::new(5, 5))),
            Err(PlacementError::ShapeAlreadyPlaced { index: 1 })
        );
        assert_eq!(
            field.apply_placement(Placement::new(0, Anchor::new(0, 0))),
            Err(PlacementError::Infeasible {
                index: 0,
                anchor: Anchor::new(0, 0)
            })
        );
        assert_eq!(field.board(), before.board());
        assert_eq!(field.tray(), before.tray());
        assert_eq!(field.stats(), before.stats());
    }

    #[test]
    fn test_apply_solution_and_tray_state() {
        let mut field = field_with_tray(BitBoard::EMPTY, &[DOMINO, SINGLE, Shape::EMPTY]);
        assert_eq!(field.tray_shapes(), [DOMINO, SINGLE, Shape::EMPTY]);
        assert!(!field.is_tray_empty());

        let cleared = field
            .apply_solution(&[
                Placement::new(1, Anchor::new(0, 0)),
                Placement::new(0, Anchor::new(1, 0)),
            ])
            .unwrap();
        assert_eq!(cleared, 0);
        assert!(field.is_tray_empty());
        assert!(!field.can_place_any());
        assert_eq!(field.stats().placed_cells(), 3);
        assert_eq!(field.board().occupied_count(), 3);
    }

    #[test]
    fn test_can_place_any_on_full_board() {
        let field = field_with_tray(BitBoard::FULL, &[SINGLE]);
        assert!(!field.can_place_any());
    }

    #[test]
    fn test_streak_carries_across_trays() {
        let board = BitBoard::from_ascii("#######.");
        let mut field = field_with_tray(board, &[SINGLE]);
        field
            .apply_placement(Placement::new(0, Anchor::new(0, 7)))
            .unwrap();
        field.set_tray([DOMINO]);
        assert_eq!(field.combo(), ComboState::new(1));
        assert_eq!(field.stats().turns(), 2);
    }
}
