//! Timestamped record of match events.
//!
//! `EventLog` is an observer that keeps every event it sees together with
//! the UTC time it arrived. It stores structured events only; turning them
//! into text is left to whoever reads the log.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};

use crate::match_control::observers::{MatchEvent, MatchObserver};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub event: MatchEvent,
}

#[derive(Debug, Default)]
pub struct EventLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: MatchEvent) {
        self.record_at(Utc::now(), event);
    }

    pub fn record_at(&self, at: DateTime<Utc>, event: MatchEvent) {
        self.lock().push(LogEntry { at, event });
    }

    /// Copy of every entry in arrival order.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    /// Entries stamped within `[from, to]`.
    pub fn entries_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Vec<LogEntry> {
        self.lock()
            .iter()
            .filter(|entry| entry.at >= from && entry.at <= to)
            .cloned()
            .collect()
    }

    /// Time of the first `GameStarted` event, if any.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.lock()
            .iter()
            .find(|entry| matches!(entry.event, MatchEvent::GameStarted { .. }))
            .map(|entry| entry.at)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LogEntry>> {
        // Entries are pushed whole; a poisoned lock still holds a valid list.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MatchObserver for EventLog {
    fn on_event(&self, event: &MatchEvent) {
        self.record(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    use crate::game_state::checkers_types::{PlayerId, Square};

    #[test]
    fn entries_between_filters_by_timestamp() {
        let log = EventLog::new();
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        log.record_at(
            t0,
            MatchEvent::GameStarted {
                first: PlayerId::new("alice"),
            },
        );
        log.record_at(
            t0 + Duration::seconds(30),
            MatchEvent::PieceCaptured {
                square: Square::new(4, 3),
            },
        );
        log.record_at(
            t0 + Duration::seconds(90),
            MatchEvent::PiecePromoted {
                square: Square::new(7, 2),
            },
        );

        let window = log.entries_between(t0 + Duration::seconds(10), t0 + Duration::seconds(90));
        assert_eq!(window.len(), 2);
        assert_eq!(
            window[0].event,
            MatchEvent::PieceCaptured {
                square: Square::new(4, 3)
            }
        );
        assert_eq!(log.started_at(), Some(t0));
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn observer_callbacks_are_recorded_in_order() {
        let log = EventLog::new();
        let events = [
            MatchEvent::PieceMoved {
                player: PlayerId::new("alice"),
                from: Square::new(2, 1),
                to: Square::new(3, 0),
            },
            MatchEvent::TurnChanged {
                previous: PlayerId::new("alice"),
                next: PlayerId::new("bob"),
            },
        ];
        for event in &events {
            log.on_event(event);
        }
        let recorded: Vec<MatchEvent> = log.entries().into_iter().map(|e| e.event).collect();
        assert_eq!(recorded, events.to_vec());
    }
}
