//! The only code path that writes to a `Board`.
//!
//! Moves reaching this point have already been validated. Everything is
//! re-checked before the first write so a contradiction leaves the board
//! untouched and surfaces as `InternalConsistency`.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::moves::move_descriptions::Move;

/// Relocates the moving piece, removes every captured piece and crowns the
/// piece if it lands on its promotion row. Returns whether it was crowned.
pub fn apply_move(board: &mut Board, mv: &Move) -> CheckersResult<bool> {
    let piece = board
        .get(mv.from)?
        .ok_or_else(|| CheckersError::InternalConsistency(format!("no piece on {}", mv.from)))?;

    if mv.to != mv.from && board.get(mv.to)?.is_some() {
        return Err(CheckersError::InternalConsistency(format!(
            "landing square {} is occupied",
            mv.to
        )));
    }

    for &square in &mv.captured {
        match board.get(square)? {
            Some(captured) if captured.owner != piece.owner => {}
            _ => {
                return Err(CheckersError::InternalConsistency(format!(
                    "{square} holds no enemy piece to capture"
                )))
            }
        }
    }

    let promoted = !piece.is_king() && mv.to.row == piece.owner.promotion_row();
    let landed = if promoted { piece.crowned() } else { piece };

    board.set(mv.from, None);
    for &square in &mv.captured {
        board.set(square, None);
    }
    board.set(mv.to, Some(landed));

    Ok(promoted)
}
