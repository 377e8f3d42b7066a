//! Viewport sizing
//!
//! The simulation works in surface pixels: CSS size times the (clamped)
//! device pixel ratio.

use crate::consts::{MAX_PIXEL_RATIO, MIN_PIXEL_RATIO, PLAYER_MIN_RADIUS, PLAYER_RADIUS_FRACTION};
use crate::sim::Viewport;

/// Clamp the host's device pixel ratio; non-finite values fall back to 1
pub fn clamp_pixel_ratio(dpr: f64) -> f64 {
    if dpr.is_finite() {
        dpr.clamp(MIN_PIXEL_RATIO, MAX_PIXEL_RATIO)
    } else {
        MIN_PIXEL_RATIO
    }
}

/// CSS viewport size plus pixel ratio, and everything derived from them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMetrics {
    pub css_width: f64,
    pub css_height: f64,
    pub pixel_ratio: f64,
}

impl ScreenMetrics {
    pub fn new(css_width: f64, css_height: f64, raw_dpr: f64) -> Self {
        Self {
            css_width: css_width.max(0.0),
            css_height: css_height.max(0.0),
            pixel_ratio: clamp_pixel_ratio(raw_dpr),
        }
    }

    /// Backing surface size in whole pixels (never zero)
    pub fn surface_size(&self) -> (u32, u32) {
        let w = (self.css_width * self.pixel_ratio).round().max(1.0) as u32;
        let h = (self.css_height * self.pixel_ratio).round().max(1.0) as u32;
        (w, h)
    }

    pub fn viewport(&self) -> Viewport {
        let (w, h) = self.surface_size();
        Viewport::new(w as f32, h as f32)
    }

    /// Player radius, proportional to the shorter surface side
    pub fn player_radius(&self) -> f32 {
        let vp = self.viewport();
        (vp.width.min(vp.height) * PLAYER_RADIUS_FRACTION).max(PLAYER_MIN_RADIUS)
    }

    /// Map a CSS-space point (relative to the canvas) into surface space
    pub fn to_surface(&self, x: f64, y: f64) -> (f32, f32) {
        ((x * self.pixel_ratio) as f32, (y * self.pixel_ratio) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_ratio_clamp() {
        assert_eq!(clamp_pixel_ratio(0.5), 1.0);
        assert_eq!(clamp_pixel_ratio(2.0), 2.0);
        assert_eq!(clamp_pixel_ratio(3.0), 2.5);
        assert_eq!(clamp_pixel_ratio(f64::NAN), 1.0);
    }

    #[test]
    fn test_surface_size_and_mapping() {
        let m = ScreenMetrics::new(400.0, 300.0, 2.0);
        assert_eq!(m.surface_size(), (800, 600));
        assert_eq!(m.viewport(), Viewport::new(800.0, 600.0));
        assert_eq!(m.to_surface(10.0, 20.5), (20.0, 41.0));
    }

    #[test]
    fn test_player_radius() {
        let m = ScreenMetrics::new(1000.0, 2000.0, 1.0);
        assert!((m.player_radius() - 35.0).abs() < 1e-4);
        // Tiny screens keep a usable orb
        let m = ScreenMetrics::new(100.0, 100.0, 1.0);
        assert_eq!(m.player_radius(), PLAYER_MIN_RADIUS);
    }

    #[test]
    fn test_degenerate_size() {
        let m = ScreenMetrics::new(0.0, -5.0, 1.0);
        assert_eq!(m.surface_size(), (1, 1));
    }
}
