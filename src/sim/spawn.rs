//! Probabilistic star/bomb spawning

use glam::Vec2;
use rand::Rng;

use super::state::{GameSession, Particle, Viewport};
use crate::tuning::FallerTuning;

/// Build a particle just above the viewport
fn spawn_above<R: Rng>(
    rng: &mut R,
    tuning: &FallerTuning,
    width: f32,
    height: f32,
    score: u64,
) -> Particle {
    let r = rng.random_range(tuning.radius.0..tuning.radius.1);
    let x = rng.random_range(0.0..width.max(f32::EPSILON));
    let lift = r + rng.random::<f32>() * tuning.spawn_band * height;
    let speed = rng.random_range(tuning.speed.0..tuning.speed.1) + tuning.speed_bonus(score);
    Particle {
        pos: Vec2::new(x, -lift),
        r,
        speed,
    }
}

/// Append a star above the viewport
pub fn spawn_star(session: &mut GameSession) {
    let Viewport { width, height } = session.viewport;
    let star = spawn_above(
        &mut session.rng,
        &session.tuning.star,
        width,
        height,
        session.state.score,
    );
    session.stars.push(star);
}

/// Append a bomb above the viewport
pub fn spawn_bomb(session: &mut GameSession) {
    let Viewport { width, height } = session.viewport;
    let bomb = spawn_above(
        &mut session.rng,
        &session.tuning.bomb,
        width,
        height,
        session.state.score,
    );
    session.bombs.push(bomb);
}

/// Roll the per-step spawn chances; only called while playing
pub fn roll_spawns(session: &mut GameSession) {
    let score = session.state.score;
    let star_chance = session.tuning.star.chance_at(score);
    let bomb_chance = session.tuning.bomb.chance_at(score);

    if session.rng.random_bool(star_chance) {
        spawn_star(session);
    }
    if session.rng.random_bool(bomb_chance) {
        spawn_bomb(session);
    }
}
