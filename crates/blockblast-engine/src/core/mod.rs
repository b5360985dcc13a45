pub use self::{bit_board::*, catalog::*, placement::*, shape::*};

pub(crate) mod bit_board;
pub(crate) mod catalog;
pub(crate) mod placement;
pub(crate) mod shape;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 8;
