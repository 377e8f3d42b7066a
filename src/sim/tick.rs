//! Per-frame simulation step
//!
//! Advances time, steers the player, ages trails, moves stars and bombs,
//! resolves pickups and hits.

use glam::Vec2;

use super::collision::circles_overlap;
use super::spawn::roll_spawns;
use super::state::{GameSession, Particle, Trail};
use crate::persistence::KeyValueStore;

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    pub stars_collected: u32,
    pub bomb_hit: bool,
}

/// Point the player is steering toward: the pointer if engaged, otherwise the autopilot orbit
pub fn target_point(session: &GameSession) -> Vec2 {
    if session.pointer.active {
        return session.pointer.pos;
    }
    let t = &session.tuning;
    let w = session.viewport.width;
    let h = session.viewport.height;
    let time = session.state.time;
    Vec2::new(
        w * 0.5 + (time * t.orbit_freq_x).sin() * t.orbit_amp_x * w,
        h * t.orbit_center_y + (time * t.orbit_freq_y).cos() * t.orbit_amp_y * h,
    )
}

/// Advance the session by `dt` seconds. `dt` is expected to be clamped by the driver.
pub fn update(session: &mut GameSession, dt: f32, store: &mut dyn KeyValueStore) -> StepEvents {
    let mut events = StepEvents::default();

    session.state.time += dt;

    if session.state.playing {
        roll_spawns(session);
    }

    steer_player(session);

    // Trail blob at the new position, then age every blob
    session.trails.push(Trail {
        pos: session.player.pos,
        r: session.player.radius * session.tuning.trail_radius,
        life: 1.0,
    });
    let decay = dt * session.tuning.trail_decay;
    for trail in &mut session.trails {
        trail.life -= decay;
    }
    session.trails.retain(|t| t.life > 0.0);

    session.state.shake *= session.tuning.shake_decay;

    let fall = dt * session.tuning.reference_hz;
    let height = session.viewport.height;
    let player_pos = session.player.pos;
    let player_r = session.player.radius;
    let playing = session.state.playing;

    advance(&mut session.stars, fall);
    session.stars.retain(|s| !s.below(height));
    if playing {
        let before = session.stars.len();
        session
            .stars
            .retain(|s| !circles_overlap(player_pos, player_r, s.pos, s.r));
        let collected = (before - session.stars.len()) as u32;
        for _ in 0..collected {
            session.state.score += 1;
            session.state.shake =
                (session.state.shake + session.tuning.shake_bump).min(session.tuning.shake_max);
        }
        events.stars_collected = collected;
    }

    advance(&mut session.bombs, fall);
    session.bombs.retain(|b| !b.below(height));
    if playing {
        let hit = session
            .bombs
            .iter()
            .position(|b| circles_overlap(player_pos, player_r, b.pos, b.r));
        if let Some(i) = hit {
            session.bombs.swap_remove(i);
            events.bomb_hit = true;
            session.end(store);
        }
    }

    events
}

/// Ease the player's velocity toward the target, damp it, integrate position
fn steer_player(session: &mut GameSession) {
    let target = target_point(session);
    let easing = if session.pointer.active {
        session.tuning.pointer_easing
    } else {
        session.tuning.autopilot_easing
    };
    let player = &mut session.player;
    player.vel += (target - player.pos) * easing;
    player.vel *= session.tuning.damping;
    player.pos += player.vel;
}

fn advance(particles: &mut [Particle], fall: f32) {
    for p in particles {
        p.pos.y += p.speed * fall;
    }
}
