//! Immutable occupancy grid handed to external viewers.

use crate::game_state::checkers_types::{PlayerId, Square, BOARD_SIZE};

const N: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PositionStatus {
    pub occupied: bool,
    pub owner: Option<PlayerId>,
    pub is_king: bool,
}

impl PositionStatus {
    pub const EMPTY: PositionStatus = PositionStatus {
        occupied: false,
        owner: None,
        is_king: false,
    };
}

/// Owned copy of the board occupancy. Cloning copies the whole grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    cells: Box<[[PositionStatus; N]; N]>,
}

impl BoardSnapshot {
    pub(crate) fn from_fn(mut status_of: impl FnMut(Square) -> PositionStatus) -> Self {
        let cells = std::array::from_fn(|row| {
            std::array::from_fn(|col| status_of(Square::new(row as i8, col as i8)))
        });
        Self {
            cells: Box::new(cells),
        }
    }

    /// `None` for off-board squares.
    pub fn get(&self, square: Square) -> Option<&PositionStatus> {
        if !square.is_on_board() {
            return None;
        }
        Some(&self.cells[square.row as usize][square.col as usize])
    }

    /// Rows indexed from 0 (light's back rank) to 7.
    pub fn rows(&self) -> &[[PositionStatus; N]; N] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|status| status.occupied)
            .count()
    }

    pub fn count_owned_by(&self, player: &PlayerId) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|status| status.owner.as_ref() == Some(player))
            .count()
    }
}
