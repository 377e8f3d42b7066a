//! Circle-circle contact test
//!
//! Discrete check once per step. Fast particles can pass through the player
//! within a single frame; the driver's delta clamp keeps that rare.

use glam::Vec2;

use crate::distance;

/// True when two circles overlap: center distance strictly less than the radius sum
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    distance(a, b) < ra + rb
}
