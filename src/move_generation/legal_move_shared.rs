use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Side, Square};

#[inline]
pub fn is_empty_square(board: &Board, square: Square) -> bool {
    square.is_on_board() && board.piece_at(square).is_none()
}

#[inline]
pub fn is_enemy_on(board: &Board, square: Square, side: Side) -> bool {
    matches!(board.piece_at(square), Some(piece) if piece.owner != side)
}
