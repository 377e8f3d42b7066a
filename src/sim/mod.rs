//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - One variable step per frame (delta clamped by the driver)
//! - Seeded RNG owned by the session
//! - Removal via `retain`, never while indexing

pub mod collision;
pub mod lifecycle;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::circles_overlap;
pub use spawn::{roll_spawns, spawn_bomb, spawn_star};
pub use state::{GameSession, GameState, Particle, Player, Pointer, Trail, Viewport};
pub use tick::{StepEvents, target_point, update};
