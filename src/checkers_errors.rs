//! Errors used throughout the checkers engine.
//!
//! `CheckersError` is the single error type returned by board access, the
//! rule engine and the match controller. Every variant is a deterministic
//! rejection of the request that produced it; nothing here is transient, so
//! callers should never retry.
//!
//! `InternalConsistency` is the odd one out: it signals that the apply path
//! was handed a move contradicting the board it runs against, which means a
//! bug in the engine rather than bad caller input.

use thiserror::Error;

use crate::game_state::checkers_types::{PlayerId, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckersError {
    /// A coordinate lies outside the 8x8 grid.
    #[error("square {0} is outside the board")]
    OutOfBounds(Square),

    #[error("there is no piece at {0}")]
    EmptySource(Square),

    #[error("there is already a piece at {0}")]
    OccupiedDestination(Square),

    /// The piece being moved belongs to someone other than the player to move.
    #[error("the piece at {square} does not belong to {player}")]
    OwnershipMismatch { square: Square, player: PlayerId },

    /// The move is not one of the piece's legal moves: wrong geometry, a man
    /// moving backwards, or a capture chain that stops early.
    #[error("{from} -> {to} is not a legal move for that piece")]
    IllegalShape { from: Square, to: Square },

    #[error("{from} -> {to} ignores a mandatory capture")]
    MandatoryCaptureViolation { from: Square, to: Square },

    #[error("operation not allowed in the current game phase: {0}")]
    InvalidPhaseTransition(&'static str),

    #[error("{0} is not playing in this match")]
    UnknownPlayer(PlayerId),

    #[error("both players are {0}; a match needs two different players")]
    DuplicatePlayer(PlayerId),

    /// Malformed position string.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// Board and move disagree inside the apply path. Not recoverable.
    #[error("internal consistency fault: {0}")]
    InternalConsistency(String),
}

pub type CheckersResult<T> = Result<T, CheckersError>;
