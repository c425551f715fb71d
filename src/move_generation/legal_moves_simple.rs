use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Piece, Square};
use crate::move_generation::legal_move_shared::is_empty_square;
use crate::moves::directions::piece_directions;
use crate::moves::move_descriptions::Move;

/// Non-capturing single steps onto adjacent empty diagonals.
pub fn generate_simple_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    for &(d_row, d_col) in piece_directions(piece) {
        let to = from.offset(d_row, d_col);
        if is_empty_square(board, to) {
            out.push(Move::simple(from, to));
        }
    }
}

pub fn has_simple_move(board: &Board, from: Square, piece: Piece) -> bool {
    piece_directions(piece)
        .iter()
        .any(|&(d_row, d_col)| is_empty_square(board, from.offset(d_row, d_col)))
}
