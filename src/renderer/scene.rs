//! Frame composition
//!
//! Turns a read-only view of the session into surface-space triangles,
//! back to front: background, trails, stars, bombs, player.

use glam::Vec2;
use rand::Rng;

use super::shapes::{circle, gradient_disc, ring};
use super::vertex::{Vertex, colors, with_alpha};
use crate::consts::SHAKE_JITTER_THRESHOLD;
use crate::settings::Settings;
use crate::sim::GameSession;

pub const BACKGROUND_SEGMENTS: u32 = 48;
pub const BODY_SEGMENTS: u32 = 24;
pub const TRAIL_SEGMENTS: u32 = 12;

/// Glow halo radius relative to the body
const GLOW_SCALE: f32 = 2.0;
/// Peak trail opacity (at life 1.0)
const TRAIL_ALPHA: f32 = 0.35;

/// Random camera offset for this frame. Zero when shake is at or below the
/// threshold or the player turned shake off.
pub fn shake_offset<R: Rng>(shake: f32, settings: &Settings, rng: &mut R) -> Vec2 {
    if !settings.effective_screen_shake() || shake <= SHAKE_JITTER_THRESHOLD {
        return Vec2::ZERO;
    }
    Vec2::new(
        (rng.random::<f32>() - 0.5) * shake,
        (rng.random::<f32>() - 0.5) * shake,
    )
}

/// Build every vertex for one frame
pub fn build_scene<R: Rng>(session: &GameSession, settings: &Settings, rng: &mut R) -> Vec<Vertex> {
    let vp = session.viewport;
    let mut out = Vec::with_capacity(
        (BACKGROUND_SEGMENTS * 3
            + TRAIL_SEGMENTS * 3 * session.trails.len() as u32
            + BODY_SEGMENTS * 12 * (session.stars.len() + session.bombs.len() + 1) as u32)
            as usize,
    );

    // Off-center radial gradient, large enough to cover every corner
    let anchor = Vec2::new(vp.width * 0.3, vp.height * 0.2);
    let reach = Vec2::new(vp.width, vp.height).length();
    gradient_disc(
        &mut out,
        anchor,
        reach,
        colors::BACKGROUND_INNER,
        colors::BACKGROUND_OUTER,
        BACKGROUND_SEGMENTS,
    );

    if settings.trails {
        for t in &session.trails {
            circle(
                &mut out,
                t.pos,
                t.r,
                with_alpha(colors::TRAIL, t.life * TRAIL_ALPHA),
                TRAIL_SEGMENTS,
            );
        }
    }

    for s in &session.stars {
        circle(&mut out, s.pos, s.r * GLOW_SCALE, colors::STAR_GLOW, BODY_SEGMENTS);
        circle(&mut out, s.pos, s.r, colors::STAR, BODY_SEGMENTS);
    }

    for b in &session.bombs {
        circle(&mut out, b.pos, b.r * GLOW_SCALE, colors::BOMB_GLOW, BODY_SEGMENTS);
        circle(&mut out, b.pos, b.r, colors::BOMB, BODY_SEGMENTS);
        ring(&mut out, b.pos, b.r * 0.55, b.r * 0.72, colors::BOMB_RING, BODY_SEGMENTS);
    }

    let p = &session.player;
    circle(&mut out, p.pos, p.radius * GLOW_SCALE, colors::PLAYER_GLOW, BODY_SEGMENTS);
    circle(&mut out, p.pos, p.radius, colors::PLAYER, BODY_SEGMENTS);
    ring(&mut out, p.pos, p.radius * 1.3, p.radius * 1.45, colors::PLAYER_RING, BODY_SEGMENTS);

    let offset = shake_offset(session.state.shake, settings, rng);
    if offset != Vec2::ZERO {
        for v in &mut out {
            v.position[0] += offset.x;
            v.position[1] += offset.y;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Particle, Trail, Viewport};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const BG: usize = (BACKGROUND_SEGMENTS * 3) as usize;
    const TRAIL: usize = (TRAIL_SEGMENTS * 3) as usize;
    const STAR: usize = (BODY_SEGMENTS * 6) as usize;
    const BODY_WITH_RING: usize = (BODY_SEGMENTS * 12) as usize;

    fn session() -> GameSession {
        GameSession::new(Viewport::new(320.0, 480.0), 16.0, 0, 2)
    }

    #[test]
    fn test_empty_field_draws_background_and_player() {
        let s = session();
        let mut rng = Pcg32::seed_from_u64(0);
        let v = build_scene(&s, &Settings::default(), &mut rng);
        assert_eq!(v.len(), BG + BODY_WITH_RING);
        assert_eq!(v[0].color, colors::BACKGROUND_INNER);
        // Player core is the second-to-last shape
        let core = &v[BG + (BODY_SEGMENTS * 3) as usize];
        assert_eq!(core.position, s.player.pos.to_array());
        assert_eq!(core.color, colors::PLAYER);
    }

    #[test]
    fn test_layers_back_to_front() {
        let mut s = session();
        s.trails.push(Trail { pos: Vec2::new(5.0, 5.0), r: 4.0, life: 0.5 });
        s.stars.push(Particle { pos: Vec2::new(50.0, 50.0), r: 8.0, speed: 1.0 });
        s.bombs.push(Particle { pos: Vec2::new(90.0, 90.0), r: 12.0, speed: 1.0 });
        let mut rng = Pcg32::seed_from_u64(0);
        let v = build_scene(&s, &Settings::default(), &mut rng);

        assert_eq!(v.len(), BG + TRAIL + STAR + BODY_WITH_RING * 2);
        let trail = &v[BG];
        assert_eq!(trail.position, [5.0, 5.0]);
        // Translucency follows remaining life
        assert!((trail.color[3] - 0.5 * TRAIL_ALPHA).abs() < 1e-6);
        assert_eq!(v[BG + TRAIL].color, colors::STAR_GLOW);
        assert_eq!(v[BG + TRAIL + STAR].color, colors::BOMB_GLOW);
        assert_eq!(v[BG + TRAIL + STAR + BODY_WITH_RING].color, colors::PLAYER_GLOW);
    }

    #[test]
    fn test_trails_hidden_by_setting() {
        let mut s = session();
        s.trails.push(Trail { pos: Vec2::ZERO, r: 4.0, life: 1.0 });
        let settings = Settings {
            trails: false,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(0);
        assert_eq!(build_scene(&s, &settings, &mut rng).len(), BG + BODY_WITH_RING);
    }

    #[test]
    fn test_small_shake_does_not_jitter() {
        let mut s = session();
        s.state.shake = 0.4;
        let mut rng = Pcg32::seed_from_u64(0);
        let still = build_scene(&s, &Settings::default(), &mut rng);
        s.state.shake = 0.0;
        let calm = build_scene(&s, &Settings::default(), &mut rng);
        assert_eq!(still, calm);
    }

    #[test]
    fn test_shake_offsets_whole_frame() {
        let mut s = session();
        s.state.shake = 6.0;
        let settings = Settings::default();

        let calm = {
            let mut calm_session = s.clone();
            calm_session.state.shake = 0.0;
            build_scene(&calm_session, &settings, &mut Pcg32::seed_from_u64(9))
        };
        let offset = shake_offset(6.0, &settings, &mut Pcg32::seed_from_u64(9));
        let shaken = build_scene(&s, &settings, &mut Pcg32::seed_from_u64(9));

        assert!(offset.x.abs() <= 3.0 && offset.y.abs() <= 3.0);
        for (a, b) in calm.iter().zip(&shaken) {
            assert!((b.position[0] - a.position[0] - offset.x).abs() < 1e-3);
            assert!((b.position[1] - a.position[1] - offset.y).abs() < 1e-3);
        }
    }

    #[test]
    fn test_reduced_motion_disables_jitter() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(shake_offset(8.0, &settings, &mut rng), Vec2::ZERO);
    }
}
