//! Star Dodge - a reflex arcade game
//!
//! Core modules:
//! - `sim`: Simulation (spawning, motion, collisions, game state)
//! - `driver`: Frame driver (delta clamping, input latch, step + render)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser/native platform abstraction
//! - `persistence`: Key-value storage and best score
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use driver::{FrameDriver, clamp_dt};
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Largest simulation step the frame driver will hand to `update` (~30 fps floor)
    pub const MAX_DT: f32 = 0.033;
    /// Nominal step used for the very first frame
    pub const FIRST_FRAME_DT: f32 = 1.0 / 60.0;

    /// Device pixel ratio bounds
    pub const MIN_PIXEL_RATIO: f64 = 1.0;
    pub const MAX_PIXEL_RATIO: f64 = 2.5;

    /// Player radius relative to the shorter viewport side
    pub const PLAYER_RADIUS_FRACTION: f32 = 0.035;
    pub const PLAYER_MIN_RADIUS: f32 = 10.0;

    /// Shake magnitude below which the frame is drawn without jitter
    pub const SHAKE_JITTER_THRESHOLD: f32 = 0.4;

    /// Status messages
    pub const MSG_PROMPT: &str = "Tap to start";
    pub const MSG_GAME_OVER: &str = "Game over. Tap to play again";
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}
