//! Structured match notifications.
//!
//! The controller produces a list of `MatchEvent`s per transition and hands
//! them, in order, to every registered observer once the board change is
//! committed. Observers override only the callbacks they care about; an
//! empty registry makes notification a no-op.

use std::sync::Arc;

use crate::game_state::checkers_types::{PlayerId, Square};
use crate::game_state::match_state::Outcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    GameStarted { first: PlayerId },
    PieceMoved { player: PlayerId, from: Square, to: Square },
    PieceCaptured { square: Square },
    PiecePromoted { square: Square },
    TurnChanged { previous: PlayerId, next: PlayerId },
    GameEnded { outcome: Outcome },
}

/// Receives match notifications synchronously on the thread that caused
/// them. Callbacks must not submit moves or register observers on the same
/// match; reading the snapshot is fine.
pub trait MatchObserver: Send + Sync {
    /// Entry point used by the registry. The default fans out to the
    /// per-event callbacks below.
    fn on_event(&self, event: &MatchEvent) {
        match event {
            MatchEvent::GameStarted { first } => self.on_game_started(first),
            MatchEvent::PieceMoved { player, from, to } => self.on_piece_moved(player, *from, *to),
            MatchEvent::PieceCaptured { square } => self.on_piece_captured(*square),
            MatchEvent::PiecePromoted { square } => self.on_piece_promoted(*square),
            MatchEvent::TurnChanged { previous, next } => self.on_turn_changed(previous, next),
            MatchEvent::GameEnded { outcome } => self.on_game_ended(outcome),
        }
    }

    fn on_game_started(&self, _first: &PlayerId) {}
    fn on_piece_moved(&self, _player: &PlayerId, _from: Square, _to: Square) {}
    fn on_piece_captured(&self, _square: Square) {}
    fn on_piece_promoted(&self, _square: Square) {}
    fn on_turn_changed(&self, _previous: &PlayerId, _next: &PlayerId) {}
    fn on_game_ended(&self, _outcome: &Outcome) {}
}

#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Arc<dyn MatchObserver>>,
}

impl ObserverRegistry {
    pub fn register(&mut self, observer: Arc<dyn MatchObserver>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Delivers every event to every observer, event-major so each observer
    /// sees the same order.
    pub fn notify_all(&self, events: &[MatchEvent]) {
        for event in events {
            for observer in &self.observers {
                observer.on_event(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CaptureCounter {
        captured: Mutex<Vec<Square>>,
    }

    impl MatchObserver for CaptureCounter {
        fn on_piece_captured(&self, square: Square) {
            self.captured.lock().unwrap().push(square);
        }
    }

    #[test]
    fn empty_registry_ignores_events() {
        let registry = ObserverRegistry::default();
        registry.notify_all(&[MatchEvent::PieceCaptured {
            square: Square::new(4, 3),
        }]);
        assert!(registry.is_empty());
    }

    #[test]
    fn every_observer_receives_events_in_order() {
        let first = Arc::new(CaptureCounter::default());
        let second = Arc::new(CaptureCounter::default());
        let mut registry = ObserverRegistry::default();
        registry.register(first.clone());
        registry.register(second.clone());

        registry.notify_all(&[
            MatchEvent::PieceCaptured {
                square: Square::new(4, 3),
            },
            MatchEvent::GameEnded {
                outcome: Outcome::Draw,
            },
            MatchEvent::PieceCaptured {
                square: Square::new(6, 5),
            },
        ]);

        let expected = vec![Square::new(4, 3), Square::new(6, 5)];
        assert_eq!(*first.captured.lock().unwrap(), expected);
        assert_eq!(*second.captured.lock().unwrap(), expected);
        assert_eq!(registry.len(), 2);
    }
}
