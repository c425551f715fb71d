//! Diagonal step tables.
//!
//! A man's directions are derived from its owner at generation time; nothing
//! about direction is stored on the piece itself.

use crate::game_state::checkers_types::{Piece, Rank, Side};

/// `(d_row, d_col)` unit steps.
pub type Direction = (i8, i8);

pub const ALL_DIAGONALS: [Direction; 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

const LIGHT_FORWARD: [Direction; 2] = [(1, -1), (1, 1)];
const DARK_FORWARD: [Direction; 2] = [(-1, -1), (-1, 1)];

#[inline]
pub fn forward_diagonals(side: Side) -> &'static [Direction] {
    match side {
        Side::Light => &LIGHT_FORWARD,
        Side::Dark => &DARK_FORWARD,
    }
}

/// Directions a piece may step or jump along.
#[inline]
pub fn piece_directions(piece: Piece) -> &'static [Direction] {
    match piece.rank {
        Rank::Man => forward_diagonals(piece.owner),
        Rank::King => &ALL_DIAGONALS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn men_only_move_toward_their_promotion_row() {
        for side in [Side::Light, Side::Dark] {
            for (d_row, _) in piece_directions(Piece::man(side)) {
                assert_eq!(*d_row, side.forward_step());
            }
        }
    }

    #[test]
    fn kings_use_every_diagonal() {
        assert_eq!(piece_directions(Piece::king(Side::Dark)).len(), 4);
    }
}
