//! Best score persistence
//!
//! Best-effort: a missing or corrupt value reads as 0 and write failures are
//! logged, never propagated into the game loop.

use super::KeyValueStore;
use crate::sim::GameState;

/// Storage key holding the best score
pub const BEST_SCORE_KEY: &str = "star_dodge_best";

/// Parse a stored best score. Anything that is not a finite, non-negative
/// number reads as 0; fractions are floored.
pub fn parse_best(raw: &str) -> u64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v.floor() as u64,
        _ => 0,
    }
}

/// Read the best score, defaulting to 0
pub fn load_best(store: &dyn KeyValueStore) -> u64 {
    match store.get(BEST_SCORE_KEY) {
        Ok(Some(raw)) => {
            let best = parse_best(&raw);
            log::info!("Loaded best score {}", best);
            best
        }
        Ok(None) => {
            log::info!("No best score found, starting fresh");
            0
        }
        Err(e) => {
            log::warn!("Best score unavailable: {}", e);
            0
        }
    }
}

/// Record the current score as best if it improves on it.
/// Returns true when the in-memory best changed.
pub fn save_best(state: &mut GameState, store: &mut dyn KeyValueStore) -> bool {
    if state.score <= state.best {
        return false;
    }
    state.best = state.score;
    match store.set(BEST_SCORE_KEY, &state.best.to_string()) {
        Ok(()) => log::info!("New best score saved: {}", state.best),
        Err(e) => log::warn!("Failed to save best score {}: {}", state.best, e),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryStore, NullStore};

    #[test]
    fn test_load_missing_is_zero() {
        assert_eq!(load_best(&MemoryStore::new()), 0);
    }

    #[test]
    fn test_load_garbage_is_zero() {
        for raw in ["abc", "", "NaN", "inf", "-infinity", "-3", "1e400"] {
            let store = MemoryStore::with_entry(BEST_SCORE_KEY, raw);
            assert_eq!(load_best(&store), 0, "raw value {raw:?}");
        }
    }

    #[test]
    fn test_load_valid() {
        assert_eq!(load_best(&MemoryStore::with_entry(BEST_SCORE_KEY, "42")), 42);
        assert_eq!(load_best(&MemoryStore::with_entry(BEST_SCORE_KEY, " 7.9 ")), 7);
    }

    #[test]
    fn test_load_unavailable_is_zero() {
        assert_eq!(load_best(&NullStore), 0);
    }

    #[test]
    fn test_save_improves() {
        let mut store = MemoryStore::with_entry(BEST_SCORE_KEY, "3");
        let mut state = GameState::new(load_best(&store));
        state.score = 5;
        assert!(save_best(&mut state, &mut store));
        assert_eq!(state.best, 5);
        assert_eq!(store.get(BEST_SCORE_KEY).unwrap().as_deref(), Some("5"));
    }

    #[test]
    fn test_save_only_when_strictly_better() {
        let mut store = MemoryStore::with_entry(BEST_SCORE_KEY, "5");
        let mut state = GameState::new(5);
        state.score = 5;
        assert!(!save_best(&mut state, &mut store));
        state.score = 2;
        assert!(!save_best(&mut state, &mut store));
        assert_eq!(state.best, 5);
        assert_eq!(store.get(BEST_SCORE_KEY).unwrap().as_deref(), Some("5"));
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let mut state = GameState::new(1);
        state.score = 9;
        assert!(save_best(&mut state, &mut NullStore));
        assert_eq!(state.best, 9);
    }
}
