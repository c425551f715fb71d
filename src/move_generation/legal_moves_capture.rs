//! Capture-chain generation.
//!
//! A chain is grown depth-first: from the current landing square every
//! direction the piece may use is tried, and each successful jump recurses
//! from its landing square. Only chains that cannot be extended any further
//! are emitted, so a partial chain is never a legal move.
//!
//! While a chain is being built the jumped pieces stay on the board. They
//! block landings and the `jumped` list stops them being taken twice. The
//! moving piece's origin square counts as empty, which lets a king finish a
//! ring of captures where it started.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Piece, Square};
use crate::move_generation::legal_move_shared::{is_empty_square, is_enemy_on};
use crate::moves::directions::piece_directions;
use crate::moves::move_descriptions::Move;

pub fn generate_capture_chains(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let mut jumped = Vec::with_capacity(4);
    extend_chain(board, from, from, piece, &mut jumped, out);
}

/// True if `piece` standing on `from` has at least one jump available.
pub fn can_capture_from(board: &Board, from: Square, piece: Piece) -> bool {
    piece_directions(piece)
        .iter()
        .any(|&(d_row, d_col)| single_jump(board, from, from, piece, &[], (d_row, d_col)).is_some())
}

fn extend_chain(
    board: &Board,
    origin: Square,
    at: Square,
    piece: Piece,
    jumped: &mut Vec<Square>,
    out: &mut Vec<Move>,
) {
    let mut extended = false;

    for &direction in piece_directions(piece) {
        let Some((over, landing)) = single_jump(board, origin, at, piece, jumped, direction) else {
            continue;
        };

        extended = true;
        jumped.push(over);
        extend_chain(board, origin, landing, piece, jumped, out);
        jumped.pop();
    }

    if !extended && !jumped.is_empty() {
        out.push(Move::capture(origin, at, jumped.clone()));
    }
}

/// Returns `(jumped_square, landing_square)` when a jump from `at` along
/// `direction` is possible.
fn single_jump(
    board: &Board,
    origin: Square,
    at: Square,
    piece: Piece,
    jumped: &[Square],
    (d_row, d_col): (i8, i8),
) -> Option<(Square, Square)> {
    let over = at.offset(d_row, d_col);
    let landing = at.offset(2 * d_row, 2 * d_col);

    if !is_enemy_on(board, over, piece.owner) || jumped.contains(&over) {
        return None;
    }
    if !landing.is_on_board() || (landing != origin && !is_empty_square(board, landing)) {
        return None;
    }
    Some((over, landing))
}
