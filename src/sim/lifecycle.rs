//! Idle / Playing transitions

use glam::Vec2;

use super::state::GameSession;
use crate::consts::{MSG_GAME_OVER, MSG_PROMPT};
use crate::persistence::{KeyValueStore, save_best};

impl GameSession {
    /// Clear the field and recenter the player. Leaves `playing` untouched.
    pub fn reset(&mut self) {
        self.clear_entities();
        self.state.score = 0;
        self.state.time = 0.0;
        self.state.shake = 0.0;
        self.state.message = MSG_PROMPT.to_string();
        self.player.pos = self.viewport.home();
        self.player.vel = Vec2::ZERO;
    }

    /// Idle -> Playing. No-op while already playing.
    pub fn start(&mut self) {
        if self.state.playing {
            return;
        }
        self.clear_entities();
        self.state.score = 0;
        self.state.time = 0.0;
        self.state.shake = 0.0;
        self.state.message.clear();
        self.state.playing = true;
        log::info!("Game started (best {})", self.state.best);
    }

    /// Playing -> Idle, recording the best score if it improved
    pub fn end(&mut self, store: &mut dyn KeyValueStore) {
        if !self.state.playing {
            return;
        }
        self.state.playing = false;
        self.state.message = MSG_GAME_OVER.to_string();
        let improved = save_best(&mut self.state, store);
        log::info!(
            "Game over: score {} (best {}{})",
            self.state.score,
            self.state.best,
            if improved { ", new record" } else { "" }
        );
    }
}
