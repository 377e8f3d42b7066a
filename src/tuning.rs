//! Data-driven game balance
//!
//! Every gameplay constant lives here so the simulation reads numbers from
//! one place. Values are per simulation step unless noted.

use serde::{Deserialize, Serialize};

/// Spawn parameters for one kind of falling particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallerTuning {
    /// Radius range `[min, max)`
    pub radius: (f32, f32),
    /// Spawn height above the viewport as a fraction of viewport height (added to r)
    pub spawn_band: f32,
    /// Base speed range `[min, max)` in pixels per 60 Hz frame
    pub speed: (f32, f32),
    /// Extra speed per point of score
    pub speed_per_score: f32,
    /// Spawn chance per step at score 0
    pub spawn_chance: f32,
    /// Extra spawn chance per point of score
    pub spawn_chance_per_score: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    pub star: FallerTuning,
    pub bomb: FallerTuning,

    /// Velocity easing toward the target while the pointer is engaged
    pub pointer_easing: f32,
    /// Velocity easing toward the autopilot orbit
    pub autopilot_easing: f32,
    /// Multiplicative velocity damping
    pub damping: f32,

    /// Autopilot orbit: `x = w/2 + sin(t * freq_x) * amp_x * w`
    pub orbit_freq_x: f32,
    pub orbit_amp_x: f32,
    /// Autopilot orbit: `y = center_y * h + cos(t * freq_y) * amp_y * h`
    pub orbit_center_y: f32,
    pub orbit_freq_y: f32,
    pub orbit_amp_y: f32,

    /// Trail radius relative to the player
    pub trail_radius: f32,
    /// Trail life lost per second
    pub trail_decay: f32,

    /// Shake added per star pickup
    pub shake_bump: f32,
    /// Shake ceiling
    pub shake_max: f32,
    /// Multiplicative shake decay per step
    pub shake_decay: f32,

    /// Particle speeds are expressed per frame at this rate
    pub reference_hz: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            star: FallerTuning {
                radius: (6.0, 12.0),
                spawn_band: 0.2,
                speed: (0.8, 2.6),
                speed_per_score: 0.01,
                spawn_chance: 0.06,
                spawn_chance_per_score: 0.0,
            },
            bomb: FallerTuning {
                radius: (10.0, 20.0),
                spawn_band: 0.3,
                speed: (1.4, 3.9),
                speed_per_score: 0.015,
                spawn_chance: 0.035,
                spawn_chance_per_score: 0.0003,
            },

            pointer_easing: 0.18,
            autopilot_easing: 0.08,
            damping: 0.75,

            orbit_freq_x: 0.7,
            orbit_amp_x: 0.12,
            orbit_center_y: 0.65,
            orbit_freq_y: 0.6,
            orbit_amp_y: 0.1,

            trail_radius: 0.8,
            trail_decay: 2.2,

            shake_bump: 2.0,
            shake_max: 8.0,
            shake_decay: 0.88,

            reference_hz: 60.0,
        }
    }
}

impl FallerTuning {
    /// Spawn chance per step at the given score, clamped to a valid probability
    pub fn chance_at(&self, score: u64) -> f64 {
        let p = self.spawn_chance as f64 + self.spawn_chance_per_score as f64 * score as f64;
        p.clamp(0.0, 1.0)
    }

    /// Speed bonus at the given score
    pub fn speed_bonus(&self, score: u64) -> f32 {
        self.speed_per_score * score as f32
    }
}
