use crate::game_state::checkers_types::Side;
use crate::game_state::match_state::{MatchState, Outcome};
use crate::move_generation::legal_move_generator::has_legal_move;

/// Decides whether the game is over. A side without pieces loses; so does
/// the side to move if it has pieces but nothing legal to do. No draw is
/// ever produced here.
pub fn terminal_status(state: &MatchState) -> Option<Outcome> {
    let board = &state.board;

    for side in [Side::Light, Side::Dark] {
        if board.piece_count(side) == 0 {
            return Some(Outcome::Win(state.player(side.opposite()).clone()));
        }
    }

    let to_move = state.side_to_move;
    if !has_legal_move(board, to_move) {
        return Some(Outcome::Win(state.player(to_move.opposite()).clone()));
    }

    None
}
