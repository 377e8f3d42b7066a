//! Frame driver
//!
//! Owns the session and everything around it (settings, storage, input
//! latch, frame timing). The host calls `frame` once per display refresh and
//! then `render`; how frames are scheduled is up to the host.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{FIRST_FRAME_DT, MAX_DT};
use crate::persistence::{KeyValueStore, load_best};
use crate::platform::{InputLatch, PointerEventKind, ScreenMetrics, input::handle_pointer};
use crate::renderer::{Vertex, build_scene};
use crate::settings::Settings;
use crate::sim::{GameSession, StepEvents, update};

/// Clamp a raw frame delta (seconds) to the simulation's safe range
#[inline]
pub fn clamp_dt(raw: f32) -> f32 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, MAX_DT)
}

/// Number of frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

/// Rolling frame timestamps for the FPS counter
#[derive(Debug, Clone)]
struct FrameStats {
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    fn record(&mut self, time_ms: f64) {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest sample sits at the slot we'll overwrite next
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = time_ms - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }
}

/// Values the page shows next to the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub score: u64,
    pub best: u64,
    pub message: String,
    pub fps: Option<u32>,
}

pub struct FrameDriver {
    pub session: GameSession,
    settings: Settings,
    metrics: ScreenMetrics,
    latch: InputLatch,
    store: Box<dyn KeyValueStore>,
    render_rng: Pcg32,
    last_time: Option<f64>,
    stats: FrameStats,
}

impl FrameDriver {
    /// Load best score and settings from `store` and set up an idle session
    pub fn new(metrics: ScreenMetrics, store: Box<dyn KeyValueStore>, seed: u64) -> Self {
        let best = load_best(store.as_ref());
        let settings = Settings::load(store.as_ref());
        let session = GameSession::new(metrics.viewport(), metrics.player_radius(), best, seed);
        log::info!(
            "Session ready: {}x{} surface, best {}",
            session.viewport.width,
            session.viewport.height,
            best
        );
        Self {
            session,
            settings,
            metrics,
            latch: InputLatch::default(),
            store,
            render_rng: Pcg32::seed_from_u64(seed.wrapping_add(1)),
            last_time: None,
            stats: FrameStats::new(),
        }
    }

    pub fn metrics(&self) -> &ScreenMetrics {
        &self.metrics
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Change settings and persist them (best-effort)
    pub fn update_settings(&mut self, change: impl FnOnce(&mut Settings)) {
        change(&mut self.settings);
        if let Err(e) = self.settings.save(self.store.as_mut()) {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    /// Viewport changed size or density
    pub fn resize(&mut self, metrics: ScreenMetrics) {
        self.metrics = metrics;
        self.session
            .resize(metrics.viewport(), metrics.player_radius());
        log::debug!(
            "Resized to {}x{} (ratio {})",
            self.session.viewport.width,
            self.session.viewport.height,
            metrics.pixel_ratio
        );
    }

    /// Pointer event in CSS pixels relative to the canvas
    pub fn pointer(&mut self, kind: PointerEventKind, css_x: f64, css_y: f64) {
        handle_pointer(
            &mut self.session.pointer,
            &mut self.latch,
            &self.metrics,
            kind,
            css_x,
            css_y,
        );
    }

    /// Host frame callback with a millisecond timestamp
    pub fn frame(&mut self, time_ms: f64) -> StepEvents {
        let raw = match self.last_time {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => FIRST_FRAME_DT,
        };
        self.last_time = Some(time_ms);
        self.stats.record(time_ms);
        self.step(raw)
    }

    /// Apply pending input, then advance the simulation by `min(dt, MAX_DT)`
    pub fn step(&mut self, dt: f32) -> StepEvents {
        if self.latch.take_start() && !self.session.state.playing {
            self.session.start();
        }
        update(&mut self.session, clamp_dt(dt), self.store.as_mut())
    }

    /// Vertices for the current frame
    pub fn render(&mut self) -> Vec<Vertex> {
        build_scene(&self.session, &self.settings, &mut self.render_rng)
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.session.state.score,
            best: self.session.state.best,
            message: self.session.state.message.clone(),
            fps: self.settings.show_fps.then_some(self.stats.fps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{BEST_SCORE_KEY, MemoryStore};
    use crate::sim::Particle;
    use proptest::prelude::*;

    fn driver_with(store: MemoryStore) -> FrameDriver {
        FrameDriver::new(ScreenMetrics::new(360.0, 640.0, 1.0), Box::new(store), 42)
    }

    #[test]
    fn test_loads_best_from_store() {
        let d = driver_with(MemoryStore::with_entry(BEST_SCORE_KEY, "12"));
        assert_eq!(d.hud().best, 12);
        assert!(!d.session.state.playing);
        assert_eq!(d.hud().message, crate::consts::MSG_PROMPT);
    }

    #[test]
    fn test_pointer_down_starts_on_next_step() {
        let mut d = driver_with(MemoryStore::new());
        d.pointer(PointerEventKind::Down, 100.0, 100.0);
        // Handlers never touch the session state directly
        assert!(!d.session.state.playing);
        d.step(0.016);
        assert!(d.session.state.playing);
        assert!(d.hud().message.is_empty());
    }

    #[test]
    fn test_pointer_down_while_playing_does_not_restart() {
        let mut d = driver_with(MemoryStore::new());
        d.pointer(PointerEventKind::Down, 100.0, 100.0);
        d.step(0.016);
        d.session.state.score = 4;
        d.pointer(PointerEventKind::Up, 100.0, 100.0);
        d.pointer(PointerEventKind::Down, 120.0, 100.0);
        d.step(0.016);
        assert_eq!(d.session.state.score, 4);
    }

    #[test]
    fn test_large_frame_gap_is_clamped() {
        let mut d = driver_with(MemoryStore::new());
        d.frame(1000.0);
        let before = d.session.state.time;
        // Tab was in the background for five seconds
        d.frame(6000.0);
        assert!((d.session.state.time - before - MAX_DT).abs() < 1e-6);
    }

    #[test]
    fn test_first_frame_uses_nominal_dt() {
        let mut d = driver_with(MemoryStore::new());
        d.frame(123_456.0);
        assert!((d.session.state.time - FIRST_FRAME_DT).abs() < 1e-6);
    }

    #[test]
    fn test_game_over_persists_best() {
        let mut d = driver_with(MemoryStore::with_entry(BEST_SCORE_KEY, "3"));
        d.pointer(PointerEventKind::Down, 180.0, 400.0);
        d.step(0.016);
        d.session.state.score = 5;
        let pos = d.session.player.pos;
        d.session.bombs.push(Particle { pos, r: 15.0, speed: 0.0 });
        let events = d.step(0.016);
        assert!(events.bomb_hit);
        assert_eq!(d.hud().best, 5);
        assert_eq!(d.hud().message, crate::consts::MSG_GAME_OVER);

        // A fresh driver over the same storage sees the new best
        let best = load_best(d.store.as_ref());
        assert_eq!(best, 5);
    }

    #[test]
    fn test_resize_updates_viewport_and_radius() {
        let mut d = driver_with(MemoryStore::new());
        d.resize(ScreenMetrics::new(1000.0, 800.0, 2.0));
        assert_eq!(d.session.viewport.width, 2000.0);
        assert_eq!(d.session.viewport.height, 1600.0);
        assert!((d.session.player.radius - 56.0).abs() < 1e-3);
    }

    #[test]
    fn test_settings_persist() {
        let mut d = driver_with(MemoryStore::new());
        d.update_settings(|s| s.show_fps = true);
        assert!(d.hud().fps.is_some());
        assert!(Settings::load(d.store.as_ref()).show_fps);
    }

    #[test]
    fn test_fps_estimate() {
        let mut stats = FrameStats::new();
        for i in 1..=120 {
            stats.record(i as f64 * 1000.0 / 60.0);
        }
        assert_eq!(stats.fps, 60);
    }

    #[test]
    fn test_render_produces_frame() {
        let mut d = driver_with(MemoryStore::new());
        d.frame(16.0);
        assert!(!d.render().is_empty());
    }

    proptest! {
        #[test]
        fn clamp_law(raw in -1.0f32..10.0) {
            let dt = clamp_dt(raw);
            if raw >= 0.0 {
                prop_assert_eq!(dt, raw.min(MAX_DT));
            } else {
                prop_assert_eq!(dt, 0.0);
            }
        }
    }
}
