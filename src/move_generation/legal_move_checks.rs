//! Move validation against a running match.
//!
//! Checks run in a fixed order and the first failure wins: phase, source
//! square, ownership, destination, move shape (including complete capture
//! chains), then the board-wide capture rule. Nothing here writes to the
//! board.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::RulesConfig;
use crate::game_state::checkers_types::Square;
use crate::game_state::match_state::MatchState;
use crate::move_generation::legal_move_generator::{legal_moves, legal_moves_for};
use crate::moves::move_descriptions::Move;

/// Validates a fully specified move, capture path included.
pub fn validate(state: &MatchState, mv: &Move, rules: &RulesConfig) -> CheckersResult<()> {
    select_legal_move(state, mv.from, mv.to, rules, |candidate| candidate == mv).map(|_| ())
}

/// Validates a move given only its endpoints and returns the legal move it
/// stands for. When several capture paths share the endpoints, an allowed
/// one capturing the most pieces is chosen.
pub fn resolve_move(
    state: &MatchState,
    from: Square,
    to: Square,
    rules: &RulesConfig,
) -> CheckersResult<Move> {
    select_legal_move(state, from, to, rules, |_| true)
}

fn select_legal_move(
    state: &MatchState,
    from: Square,
    to: Square,
    rules: &RulesConfig,
    accept: impl Fn(&Move) -> bool,
) -> CheckersResult<Move> {
    if !state.phase.is_running() {
        return Err(CheckersError::InvalidPhaseTransition(
            "moves are only accepted while the game is running",
        ));
    }

    let board = &state.board;
    let piece = board.get(from)?.ok_or(CheckersError::EmptySource(from))?;

    if piece.owner != state.side_to_move {
        return Err(CheckersError::OwnershipMismatch {
            square: from,
            player: state.current_player().clone(),
        });
    }

    // A king may finish a capture ring on its own origin square.
    if board.get(to)?.is_some() && to != from {
        return Err(CheckersError::OccupiedDestination(to));
    }

    let mut candidates: Vec<Move> = legal_moves_for(board, from)?
        .into_iter()
        .filter(|mv| mv.to == to && accept(mv))
        .collect();
    if candidates.is_empty() {
        return Err(CheckersError::IllegalShape { from, to });
    }

    let allowed = legal_moves(board, state.side_to_move, rules);
    candidates.retain(|mv| allowed.contains(mv));

    candidates
        .into_iter()
        .max_by_key(Move::capture_count)
        .ok_or(CheckersError::MandatoryCaptureViolation { from, to })
}
