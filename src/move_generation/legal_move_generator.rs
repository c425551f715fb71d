//! Legal move generation, per piece and board-wide.
//!
//! `legal_moves_for` answers "what can this piece do" without looking at the
//! rest of the board; `legal_moves` applies the mandatory-capture rule (and
//! the configured capture precedence) across every piece of one side.

use tracing::trace;

use crate::checkers_errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::{CapturePrecedence, RulesConfig};
use crate::game_state::checkers_types::{Side, Square};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_moves_capture::{can_capture_from, generate_capture_chains};
use crate::move_generation::legal_moves_simple::{generate_simple_moves, has_simple_move};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::moves::move_descriptions::Move;

/// Every move the piece on `square` could make, captures (maximal chains
/// only) first, then simple steps. Empty if the square is empty.
pub fn legal_moves_for(board: &Board, square: Square) -> CheckersResult<Vec<Move>> {
    let Some(piece) = board.get(square)? else {
        return Ok(Vec::new());
    };

    let mut out = Vec::with_capacity(4);
    generate_capture_chains(board, square, piece, &mut out);
    generate_simple_moves(board, square, piece, &mut out);
    Ok(out)
}

/// True if any piece of `side` can make a capture.
pub fn has_any_capture(board: &Board, side: Side) -> bool {
    board
        .pieces(side)
        .any(|(square, piece)| can_capture_from(board, square, piece))
}

/// True if `side` has at least one legal move of any kind.
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board.pieces(side).any(|(square, piece)| {
        has_simple_move(board, square, piece) || can_capture_from(board, square, piece)
    })
}

/// All legal moves for `side`. When a capture exists anywhere only captures
/// are returned; under `LongestChain` only those capturing the most pieces.
pub fn legal_moves(board: &Board, side: Side, rules: &RulesConfig) -> Vec<Move> {
    let mut captures = Vec::new();
    for (square, piece) in board.pieces(side) {
        generate_capture_chains(board, square, piece, &mut captures);
    }

    if !captures.is_empty() {
        if rules.capture_precedence == CapturePrecedence::LongestChain {
            let longest = captures.iter().map(Move::capture_count).max().unwrap_or(0);
            captures.retain(|mv| mv.capture_count() == longest);
        }
        trace!(%side, count = captures.len(), "captures are mandatory");
        return captures;
    }

    let mut simple = Vec::new();
    for (square, piece) in board.pieces(side) {
        generate_simple_moves(board, square, piece, &mut simple);
    }
    simple
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator {
    pub rules: RulesConfig,
}

impl LegalMoveGenerator {
    pub const fn new(rules: RulesConfig) -> Self {
        Self { rules }
    }
}

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, side: Side) -> CheckersResult<Vec<GeneratedMove>> {
        legal_moves(board, side, &self.rules)
            .into_iter()
            .map(|mv| {
                let mut board_after = board.clone();
                let promoted = apply_move(&mut board_after, &mv)?;
                Ok(GeneratedMove {
                    mv,
                    board_after,
                    promoted,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers_errors::CheckersError;
    use crate::game_state::checkers_types::Piece;

    fn board_with(pieces: &[(i8, i8, Piece)]) -> Board {
        let mut board = Board::new_empty();
        for &(row, col, piece) in pieces {
            board.place(Square::new(row, col), piece);
        }
        board
    }

    #[test]
    fn opening_position_has_seven_moves_per_side() {
        let board = Board::new_game();
        let rules = RulesConfig::default();
        assert_eq!(legal_moves(&board, Side::Light, &rules).len(), 7);
        assert_eq!(legal_moves(&board, Side::Dark, &rules).len(), 7);
        assert!(!has_any_capture(&board, Side::Light));
    }

    #[test]
    fn per_piece_moves_include_simple_moves_next_to_a_capture() {
        let board = board_with(&[
            (3, 2, Piece::man(Side::Light)),
            (4, 3, Piece::man(Side::Dark)),
        ]);
        let moves = legal_moves_for(&board, Square::new(3, 2)).unwrap();
        assert_eq!(
            moves,
            vec![
                Move::capture(Square::new(3, 2), Square::new(5, 4), vec![Square::new(4, 3)]),
                Move::simple(Square::new(3, 2), Square::new(4, 1)),
            ]
        );
    }

    #[test]
    fn board_wide_generation_drops_simple_moves_when_a_capture_exists() {
        let board = board_with(&[
            (3, 2, Piece::man(Side::Light)),
            (4, 3, Piece::man(Side::Dark)),
            (0, 7, Piece::man(Side::Light)),
        ]);
        let moves = legal_moves(&board, Side::Light, &RulesConfig::default());
        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_capture());
    }

    #[test]
    fn longest_chain_precedence_keeps_only_the_biggest_captures() {
        let board = board_with(&[
            (1, 0, Piece::man(Side::Light)),
            (2, 1, Piece::man(Side::Dark)),
            (4, 1, Piece::man(Side::Dark)),
            (1, 6, Piece::man(Side::Light)),
            (2, 7, Piece::man(Side::Dark)),
        ]);
        // (2,7) is on the edge, there is nowhere to land behind it.
        let free = legal_moves(&board, Side::Light, &RulesConfig::default());
        assert_eq!(free.len(), 1);

        let board = board_with(&[
            (1, 0, Piece::man(Side::Light)),
            (2, 1, Piece::man(Side::Dark)),
            (4, 1, Piece::man(Side::Dark)),
            (1, 6, Piece::man(Side::Light)),
            (2, 5, Piece::man(Side::Dark)),
        ]);
        let free = legal_moves(&board, Side::Light, &RulesConfig::default());
        assert_eq!(free.len(), 2);

        let strict = legal_moves(&board, Side::Light, &RulesConfig::longest_chain());
        assert_eq!(strict.len(), 1);
        assert_eq!(strict[0].capture_count(), 2);
    }

    #[test]
    fn per_piece_generation_rejects_off_board_squares() {
        let board = Board::new_game();
        assert_eq!(
            legal_moves_for(&board, Square::new(-1, 0)),
            Err(CheckersError::OutOfBounds(Square::new(-1, 0)))
        );
        assert!(legal_moves_for(&board, Square::new(3, 0)).unwrap().is_empty());
    }

    #[test]
    fn a_blocked_side_has_no_legal_move() {
        let board = board_with(&[
            (7, 0, Piece::man(Side::Light)),
            (5, 2, Piece::man(Side::Dark)),
        ]);
        assert!(!has_legal_move(&board, Side::Light));
        assert!(has_legal_move(&board, Side::Dark));
    }

    #[test]
    fn generator_attaches_resulting_positions() {
        let generator = LegalMoveGenerator::new(RulesConfig::default());
        let generated = generator
            .generate_legal_moves(&Board::new_game(), Side::Light)
            .expect("generation should succeed");
        assert_eq!(generated.len(), 7);
        for g in &generated {
            assert_eq!(g.board_after.piece_count(Side::Light), 12);
            assert!(g.board_after.piece_at(g.mv.to).is_some());
            assert!(g.board_after.piece_at(g.mv.from).is_none());
            assert!(!g.promoted);
        }
    }
}
