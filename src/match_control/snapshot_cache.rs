//! Lazily regenerated board snapshot.
//!
//! The published grid is an `Arc` behind an `RwLock`; regeneration builds a
//! complete new grid and swaps the pointer, so a reader holds either the old
//! grid or the new one and never a mix. Regeneration itself is serialised by
//! the match's state mutex, not by this type.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::game_state::board_snapshot::BoardSnapshot;

pub struct SnapshotCache {
    published: RwLock<Arc<BoardSnapshot>>,
    dirty: AtomicBool,
}

impl SnapshotCache {
    pub fn new(initial: BoardSnapshot) -> Self {
        Self {
            published: RwLock::new(Arc::new(initial)),
            dirty: AtomicBool::new(false),
        }
    }

    #[inline]
    pub fn invalidate(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// The last published grid, possibly stale if `is_dirty`.
    pub fn current(&self) -> Arc<BoardSnapshot> {
        // The guarded value is only ever replaced whole, so a poisoned lock
        // still holds a complete grid.
        let guard = self.published.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn publish(&self, snapshot: BoardSnapshot) {
        let fresh = Arc::new(snapshot);
        *self.published.write().unwrap_or_else(PoisonError::into_inner) = fresh;
        self.dirty.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::PlayerId;

    fn players() -> (PlayerId, PlayerId) {
        (PlayerId::new("alice"), PlayerId::new("bob"))
    }

    #[test]
    fn publish_swaps_the_grid_and_clears_the_flag() {
        let cache = SnapshotCache::new(Board::new_game().snapshot(&players()));
        let before = cache.current();
        assert!(!cache.is_dirty());

        cache.invalidate();
        assert!(cache.is_dirty());
        cache.publish(Board::new_empty().snapshot(&players()));

        assert!(!cache.is_dirty());
        assert_eq!(before.occupied_count(), 24);
        assert_eq!(cache.current().occupied_count(), 0);
    }
}
