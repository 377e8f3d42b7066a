//! Game state and core simulation types
//!
//! `GameSession` is the single aggregate the frame driver owns; simulation
//! and rendering borrow it, nothing lives in globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::MSG_PROMPT;
use crate::tuning::Tuning;

/// Scalar game state shown on the HUD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub playing: bool,
    pub score: u64,
    /// Best score ever recorded (only increases)
    pub best: u64,
    /// Seconds elapsed since the last start/reset
    pub time: f32,
    /// Camera shake magnitude (decays toward zero)
    pub shake: f32,
    /// Status / prompt text
    pub message: String,
}

impl GameState {
    pub fn new(best: u64) -> Self {
        Self {
            playing: false,
            score: 0,
            best,
            time: 0.0,
            shake: 0.0,
            message: MSG_PROMPT.to_string(),
        }
    }
}

/// The player's orb
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Current touch/mouse engagement
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    pub active: bool,
    pub pos: Vec2,
}

/// A falling star or bomb
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub r: f32,
    /// Pixels per 60 Hz frame
    pub speed: f32,
}

impl Particle {
    /// True once the particle's top edge is below the viewport
    pub fn below(&self, height: f32) -> bool {
        self.pos.y - self.r > height
    }
}

/// A fading trail blob left behind by the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    pub pos: Vec2,
    pub r: f32,
    /// 1.0 when created, removed once it reaches zero
    pub life: f32,
}

/// Drawing surface size in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Resting point of the player (and center of the autopilot orbit)
    pub fn home(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.65)
    }
}

/// Everything the simulation reads and writes
#[derive(Debug, Clone)]
pub struct GameSession {
    pub state: GameState,
    pub player: Player,
    pub pointer: Pointer,
    pub viewport: Viewport,
    pub stars: Vec<Particle>,
    pub bombs: Vec<Particle>,
    pub trails: Vec<Trail>,
    pub tuning: Tuning,
    pub rng: Pcg32,
}

impl GameSession {
    /// Create an idle session with the given best score and RNG seed
    pub fn new(viewport: Viewport, player_radius: f32, best: u64, seed: u64) -> Self {
        let mut session = Self {
            state: GameState::new(best),
            player: Player {
                pos: viewport.home(),
                vel: Vec2::ZERO,
                radius: player_radius,
            },
            pointer: Pointer::default(),
            viewport,
            stars: Vec::new(),
            bombs: Vec::new(),
            trails: Vec::new(),
            tuning: Tuning::default(),
            rng: Pcg32::seed_from_u64(seed),
        };
        session.reset();
        session
    }

    /// Apply a new surface size and player radius
    pub fn resize(&mut self, viewport: Viewport, player_radius: f32) {
        self.viewport = viewport;
        self.player.radius = player_radius;
    }

    /// Empty all entity stores
    pub fn clear_entities(&mut self) {
        self.stars.clear();
        self.bombs.clear();
        self.trails.clear();
    }
}
