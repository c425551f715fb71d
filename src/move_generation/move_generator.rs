use crate::checkers_errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;
use crate::moves::move_descriptions::Move;

/// A legal move together with the position it produces.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub mv: Move,
    pub board_after: Board,
    pub promoted: bool,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, board: &Board, side: Side) -> CheckersResult<Vec<GeneratedMove>>;
}
