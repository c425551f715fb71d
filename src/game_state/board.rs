//! 8x8 piece storage.
//!
//! `Board` knows nothing about the rules: it stores at most one piece per
//! square, rejects out-of-range coordinates and produces detached snapshots.
//! Writes are crate-internal so the only mutation path is the move applier.

use std::fmt;

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::board_snapshot::{BoardSnapshot, PositionStatus};
use crate::game_state::checkers_types::*;
use crate::utils::render_board::render_board;

const ROWS_PER_SIDE: i8 = 3;

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Default for Board {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Standard layout: light men on the dark squares of rows 0..=2, dark
    /// men on rows 5..=7, rows 3 and 4 empty.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        for square in Square::all().filter(|sq| sq.is_dark()) {
            if square.row < ROWS_PER_SIDE {
                board.place(square, Piece::man(Side::Light));
            } else if square.row >= BOARD_SIZE - ROWS_PER_SIDE {
                board.place(square, Piece::man(Side::Dark));
            }
        }
        board
    }

    pub fn get(&self, square: Square) -> CheckersResult<Option<Piece>> {
        if !square.is_on_board() {
            return Err(CheckersError::OutOfBounds(square));
        }
        Ok(self.squares[square.row as usize][square.col as usize])
    }

    /// Lookup that folds off-board squares into `None`; used by move
    /// generation where probing past the edge is routine.
    #[inline]
    pub(crate) fn piece_at(&self, square: Square) -> Option<Piece> {
        self.get(square).ok().flatten()
    }

    /// Unconditional overwrite. Callers must pass an on-board square.
    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        debug_assert!(square.is_on_board(), "set called with {square}");
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    /// Places a piece while building a position. The position parser checks
    /// for light squares before calling this.
    pub(crate) fn place(&mut self, square: Square, piece: Piece) {
        debug_assert!(square.is_dark(), "pieces only live on dark squares");
        self.set(square, Some(piece));
    }

    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| match self.piece_at(square) {
            Some(piece) if piece.owner == side => Some((square, piece)),
            _ => None,
        })
    }

    pub fn piece_count(&self, side: Side) -> usize {
        self.pieces(side).count()
    }

    /// Detached copy of the occupancy, with sides resolved to player ids.
    /// `players.0` plays `Side::Light`.
    pub fn snapshot(&self, players: &(PlayerId, PlayerId)) -> BoardSnapshot {
        BoardSnapshot::from_fn(|square| match self.piece_at(square) {
            Some(piece) => PositionStatus {
                occupied: true,
                owner: Some(match piece.owner {
                    Side::Light => players.0.clone(),
                    Side::Dark => players.1.clone(),
                }),
                is_king: piece.is_king(),
            },
            None => PositionStatus::EMPTY,
        })
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        f.write_str(&render_board(self))
    }
}
