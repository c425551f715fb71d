//! Match lifecycle: `NotStarted -> Running -> Ended`.
//!
//! `CheckersMatch` owns the `MatchState` behind a single mutex that
//! serialises starts, move submissions and snapshot regeneration. Snapshot
//! reads that hit a clean cache never touch that mutex.
//!
//! Each transition collects its notifications while the state lock is held,
//! takes the observer lock, releases the state lock and only then notifies.
//! Observers therefore see committed state, and notifications from
//! back-to-back transitions are delivered in transition order.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::Rng;
use tracing::{debug, info};

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::board_snapshot::BoardSnapshot;
use crate::game_state::checkers_rules::RulesConfig;
use crate::game_state::checkers_types::{PlayerId, Side, Square};
use crate::game_state::match_state::{GamePhase, MatchState, Outcome};
use crate::match_control::observers::{MatchEvent, MatchObserver, ObserverRegistry};
use crate::match_control::snapshot_cache::SnapshotCache;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{resolve_move, validate};
use crate::move_generation::legal_move_generator::{legal_moves, legal_moves_for};
use crate::move_generation::terminal_status::terminal_status;
use crate::moves::move_descriptions::Move;
use crate::utils::position_generator::generate_position;

/// What a successful submission did, for the caller to render or log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub player: PlayerId,
    pub mv: Move,
    pub promoted: bool,
    /// Player to move next. Still set when the game has just ended.
    pub next_player: PlayerId,
    /// `Some` if this move ended the game.
    pub game_over: Option<Outcome>,
}

impl MoveOutcome {
    #[inline]
    pub fn captured(&self) -> &[Square] {
        &self.mv.captured
    }
}

pub struct CheckersMatch {
    state: Mutex<MatchState>,
    rules: RulesConfig,
    snapshot: SnapshotCache,
    observers: Mutex<ObserverRegistry>,
}

impl CheckersMatch {
    /// New match on the standard layout. `player_a` plays light and moves
    /// toward row 7.
    pub fn new(player_a: PlayerId, player_b: PlayerId) -> CheckersResult<Self> {
        Self::with_config(player_a, player_b, RulesConfig::default())
    }

    pub fn with_config(
        player_a: PlayerId,
        player_b: PlayerId,
        rules: RulesConfig,
    ) -> CheckersResult<Self> {
        Self::from_position(player_a, player_b, Board::new_game(), rules)
    }

    /// New match on an arbitrary board, e.g. one built by `parse_position`.
    pub fn from_position(
        player_a: PlayerId,
        player_b: PlayerId,
        board: Board,
        rules: RulesConfig,
    ) -> CheckersResult<Self> {
        let state = MatchState::with_board(player_a, player_b, board)?;
        let snapshot = SnapshotCache::new(state.board.snapshot(&state.players));
        Ok(Self {
            state: Mutex::new(state),
            rules,
            snapshot,
            observers: Mutex::new(ObserverRegistry::default()),
        })
    }

    pub fn rules(&self) -> RulesConfig {
        self.rules
    }

    pub fn register_observer(&self, observer: Arc<dyn MatchObserver>) {
        self.lock_observers().register(observer);
    }

    /// Starts the match. With `first == None` the first player is drawn
    /// uniformly from `rng`. Returns the player who moves first.
    pub fn start<R: Rng + ?Sized>(
        &self,
        first: Option<&PlayerId>,
        rng: &mut R,
    ) -> CheckersResult<PlayerId> {
        let mut state = self.lock_state();

        if state.phase != GamePhase::NotStarted {
            return Err(CheckersError::InvalidPhaseTransition(
                "a match can only be started once",
            ));
        }

        let first_side = match first {
            Some(player) => state.side_of(player)?,
            None if rng.random_bool(0.5) => Side::Light,
            None => Side::Dark,
        };

        state.side_to_move = first_side;
        state.phase = GamePhase::Running;
        let first_player = state.current_player().clone();
        info!(first = %first_player, "match started");

        let mut events = vec![MatchEvent::GameStarted {
            first: first_player.clone(),
        }];
        // A hand-built position may already be decided.
        if let Some(outcome) = terminal_status(&state) {
            info!(?outcome, "match decided before the first move");
            state.phase = GamePhase::Ended(outcome.clone());
            events.push(MatchEvent::GameEnded { outcome });
        }

        self.notify(state, &events);
        Ok(first_player)
    }

    /// `start` with the thread-local generator.
    pub fn start_with_entropy(&self, first: Option<&PlayerId>) -> CheckersResult<PlayerId> {
        self.start(first, &mut rand::rng())
    }

    /// Plays the current player's piece from `from` to `to`. For captures
    /// `to` is the final landing square of the whole chain.
    pub fn submit_move(&self, from: Square, to: Square) -> CheckersResult<MoveOutcome> {
        let mut state = self.lock_state();
        let mv = resolve_move(&state, from, to, &self.rules).inspect_err(|err| {
            debug!(%from, %to, error = %err, "move rejected");
        })?;
        let (outcome, events) = self.apply_validated(&mut state, mv)?;
        self.notify(state, &events);
        Ok(outcome)
    }

    /// Like `submit_move`, but the capture path must match exactly.
    pub fn submit(&self, mv: &Move) -> CheckersResult<MoveOutcome> {
        let mut state = self.lock_state();
        validate(&state, mv, &self.rules).inspect_err(|err| {
            debug!(%mv, error = %err, "move rejected");
        })?;
        let (outcome, events) = self.apply_validated(&mut state, mv.clone())?;
        self.notify(state, &events);
        Ok(outcome)
    }

    /// Current snapshot of the board. Regenerated only after a move; the
    /// returned grid is an independent copy.
    pub fn get_snapshot(&self) -> BoardSnapshot {
        if self.snapshot.is_dirty() {
            let state = self.lock_state();
            if self.snapshot.is_dirty() {
                self.snapshot.publish(state.board.snapshot(&state.players));
            }
        }
        BoardSnapshot::clone(&self.snapshot.current())
    }

    pub fn phase(&self) -> GamePhase {
        self.lock_state().phase.clone()
    }

    /// `None` until the match has started.
    pub fn current_player(&self) -> Option<PlayerId> {
        let state = self.lock_state();
        match state.phase {
            GamePhase::NotStarted => None,
            _ => Some(state.current_player().clone()),
        }
    }

    pub fn players(&self) -> (PlayerId, PlayerId) {
        self.lock_state().players.clone()
    }

    pub fn legal_moves_for(&self, square: Square) -> CheckersResult<Vec<Move>> {
        legal_moves_for(&self.lock_state().board, square)
    }

    /// Legal moves of the player to move, after the capture rules.
    pub fn legal_moves(&self) -> Vec<Move> {
        let state = self.lock_state();
        legal_moves(&state.board, state.side_to_move, &self.rules)
    }

    pub fn piece_count(&self, player: &PlayerId) -> CheckersResult<usize> {
        let state = self.lock_state();
        let side = state.side_of(player)?;
        Ok(state.board.piece_count(side))
    }

    pub fn terminal_status(&self) -> Option<Outcome> {
        terminal_status(&self.lock_state())
    }

    pub fn history(&self) -> Vec<Move> {
        self.lock_state().history.clone()
    }

    /// Position string of the current board and side to move.
    pub fn position(&self) -> String {
        let state = self.lock_state();
        generate_position(&state.board, state.side_to_move)
    }

    fn apply_validated(
        &self,
        state: &mut MatchState,
        mv: Move,
    ) -> CheckersResult<(MoveOutcome, Vec<MatchEvent>)> {
        let player = state.current_player().clone();
        let promoted = apply_move(&mut state.board, &mv)?;
        self.snapshot.invalidate();

        let mut events = Vec::with_capacity(4 + mv.captured.len());
        events.push(MatchEvent::PieceMoved {
            player: player.clone(),
            from: mv.from,
            to: mv.to,
        });
        events.extend(
            mv.captured
                .iter()
                .map(|&square| MatchEvent::PieceCaptured { square }),
        );
        if promoted {
            events.push(MatchEvent::PiecePromoted { square: mv.to });
        }

        state.side_to_move = state.side_to_move.opposite();
        let next_player = state.current_player().clone();
        events.push(MatchEvent::TurnChanged {
            previous: player.clone(),
            next: next_player.clone(),
        });
        debug!(player = %player, mv = %mv, promoted, "move applied");

        let game_over = terminal_status(state);
        if let Some(outcome) = &game_over {
            info!(?outcome, moves = state.history.len() + 1, "match ended");
            state.phase = GamePhase::Ended(outcome.clone());
            events.push(MatchEvent::GameEnded {
                outcome: outcome.clone(),
            });
        }
        state.history.push(mv.clone());

        Ok((
            MoveOutcome {
                player,
                mv,
                promoted,
                next_player,
                game_over,
            },
            events,
        ))
    }

    /// Hands `events` to the observers after releasing `state`, holding the
    /// observer lock across the hand-over so ordering is preserved.
    fn notify(&self, state: MutexGuard<'_, MatchState>, events: &[MatchEvent]) {
        let observers = self.lock_observers();
        drop(state);
        observers.notify_all(events);
    }

    fn lock_state(&self) -> MutexGuard<'_, MatchState> {
        // Every write to the state happens after validation has passed and
        // cannot panic halfway, so a poisoned lock still guards a coherent
        // state.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_observers(&self) -> MutexGuard<'_, ObserverRegistry> {
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
