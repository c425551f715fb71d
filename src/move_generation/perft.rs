//! Move-path enumeration for verifying the move generator.
//!
//! Counts leaf nodes of the legal move tree to a fixed depth along with a
//! few per-leaf statistics. Side to move alternates every ply.

use std::sync::Arc;
use std::thread;

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Side;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub captured_pieces: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.captured_pieces += rhs.captured_pieces;
        self.promotions += rhs.promotions;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    side: Side,
    depth: u8,
) -> CheckersResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(board, side)? {
        perft_recurse(generator, &mv, side.opposite(), depth, 1, &mut total)?;
    }
    Ok(total)
}

/// Same counts as `perft`, with one worker thread per root move.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    board: &Board,
    side: Side,
    depth: u8,
) -> CheckersResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(board, side)?;
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result =
                perft_recurse(generator_ref.as_ref(), &mv, side.opposite(), depth, 1, &mut local);
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle.join().map_err(|_| {
            CheckersError::InternalConsistency("perft worker thread panicked".to_owned())
        })?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    mv: &GeneratedMove,
    side_to_move: Side,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> CheckersResult<()> {
    if current_depth == search_depth {
        counts.nodes += 1;
        if mv.mv.is_capture() {
            counts.captures += 1;
            counts.captured_pieces += mv.mv.capture_count();
        }
        if mv.promoted {
            counts.promotions += 1;
        }
        return Ok(());
    }

    for child in generator.generate_legal_moves(&mv.board_after, side_to_move)? {
        perft_recurse(
            generator,
            &child,
            side_to_move.opposite(),
            search_depth,
            current_depth + 1,
            counts,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&LegalMoveGenerator::default(), &Board::new_game(), Side::Light, 0)
            .expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn opening_node_counts_match_known_values() {
        let generator = LegalMoveGenerator::default();
        let board = Board::new_game();
        let expected = [7, 49, 302];
        for (depth, nodes) in (1u8..).zip(expected) {
            let counts = perft(&generator, &board, Side::Light, depth).expect("perft should run");
            assert_eq!(counts.nodes, nodes, "depth {depth}");
        }
    }

    #[test]
    fn first_captures_appear_at_depth_three() {
        let generator = LegalMoveGenerator::default();
        let board = Board::new_game();
        let shallow = perft(&generator, &board, Side::Light, 2).expect("perft should run");
        assert_eq!(shallow.captures, 0);
        let deeper = perft(&generator, &board, Side::Light, 3).expect("perft should run");
        assert!(deeper.captures > 0);
        assert_eq!(deeper.promotions, 0);
    }

    #[test]
    fn multi_threaded_matches_single_threaded() {
        let generator = LegalMoveGenerator::default();
        let board = Board::new_game();
        let single = perft(&generator, &board, Side::Light, 4).expect("perft should run");
        let multi = perft_multi_threaded(Arc::new(generator), &board, Side::Light, 4)
            .expect("perft should run");
        assert_eq!(single, multi);
    }
}
