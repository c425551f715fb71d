//! Per-match state: board, phase, seats and whose turn it is.
//!
//! `MatchState` is owned by `CheckersMatch` and never handed out mutably.
//! The rule engine reads it; only the match controller writes it.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::{PlayerId, Side};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Win(PlayerId),
    Draw,
}

/// Per-player result for an external score ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreKind {
    Victory,
    Draw,
    Defeat,
}

impl Outcome {
    /// Result to record for `player`, given the two participants of the
    /// finished match. `None` if `player` did not take part.
    pub fn score_for(
        &self,
        player: &PlayerId,
        players: &(PlayerId, PlayerId),
    ) -> Option<ScoreKind> {
        if *player != players.0 && *player != players.1 {
            return None;
        }
        Some(match self {
            Outcome::Draw => ScoreKind::Draw,
            Outcome::Win(winner) if winner == player => ScoreKind::Victory,
            Outcome::Win(_) => ScoreKind::Defeat,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    Running,
    Ended(Outcome),
}

impl GamePhase {
    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self, GamePhase::Running)
    }

    #[inline]
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            GamePhase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchState {
    pub board: Board,
    pub phase: GamePhase,
    /// Side to move. Meaningless until the match has started.
    pub side_to_move: Side,
    /// `players.0` plays `Side::Light`, `players.1` plays `Side::Dark`.
    pub players: (PlayerId, PlayerId),
    pub history: Vec<Move>,
}

impl MatchState {
    pub fn new(player_a: PlayerId, player_b: PlayerId) -> CheckersResult<Self> {
        Self::with_board(player_a, player_b, Board::new_game())
    }

    pub fn with_board(player_a: PlayerId, player_b: PlayerId, board: Board) -> CheckersResult<Self> {
        if player_a == player_b {
            return Err(CheckersError::DuplicatePlayer(player_a));
        }
        Ok(Self {
            board,
            phase: GamePhase::NotStarted,
            side_to_move: Side::Light,
            players: (player_a, player_b),
            history: Vec::new(),
        })
    }

    #[inline]
    pub fn player(&self, side: Side) -> &PlayerId {
        match side {
            Side::Light => &self.players.0,
            Side::Dark => &self.players.1,
        }
    }

    pub fn side_of(&self, player: &PlayerId) -> CheckersResult<Side> {
        if *player == self.players.0 {
            Ok(Side::Light)
        } else if *player == self.players.1 {
            Ok(Side::Dark)
        } else {
            Err(CheckersError::UnknownPlayer(player.clone()))
        }
    }

    #[inline]
    pub fn current_player(&self) -> &PlayerId {
        self.player(self.side_to_move)
    }
}
