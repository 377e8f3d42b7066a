//! Shape generation for 2D primitives
//!
//! Shapes append triangle-list vertices to a shared buffer so a whole frame
//! builds into one allocation.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Point on a circle of `radius` around `center` at slice `i` of `segments`
#[inline]
fn rim(center: Vec2, radius: f32, i: u32, segments: u32) -> Vec2 {
    let theta = (i as f32 / segments as f32) * TAU;
    center + Vec2::new(theta.cos(), theta.sin()) * radius
}

/// Filled disc whose color blends from `inner` at the center to `outer` at the rim
pub fn gradient_disc(
    out: &mut Vec<Vertex>,
    center: Vec2,
    radius: f32,
    inner: [f32; 4],
    outer: [f32; 4],
    segments: u32,
) {
    out.reserve((segments * 3) as usize);
    for i in 0..segments {
        let a = rim(center, radius, i, segments);
        let b = rim(center, radius, i + 1, segments);
        out.push(Vertex::new(center.x, center.y, inner));
        out.push(Vertex::new(a.x, a.y, outer));
        out.push(Vertex::new(b.x, b.y, outer));
    }
}

/// Filled circle of a single color
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    gradient_disc(out, center, radius, color, color, segments);
}

/// Ring (hollow circle) between two radii
pub fn ring(
    out: &mut Vec<Vertex>,
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) {
    out.reserve((segments * 6) as usize);
    for i in 0..segments {
        let i1 = rim(center, inner_radius, i, segments);
        let o1 = rim(center, outer_radius, i, segments);
        let i2 = rim(center, inner_radius, i + 1, segments);
        let o2 = rim(center, outer_radius, i + 1, segments);

        out.push(Vertex::new(i1.x, i1.y, color));
        out.push(Vertex::new(o1.x, o1.y, color));
        out.push(Vertex::new(i2.x, i2.y, color));

        out.push(Vertex::new(i2.x, i2.y, color));
        out.push(Vertex::new(o1.x, o1.y, color));
        out.push(Vertex::new(o2.x, o2.y, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertices_on_rim() {
        let mut out = Vec::new();
        circle(&mut out, Vec2::new(10.0, 10.0), 5.0, [1.0; 4], 16);
        assert_eq!(out.len(), 48);
        for tri in out.chunks(3) {
            assert_eq!(tri[0].position, [10.0, 10.0]);
            for v in &tri[1..] {
                let d = Vec2::from(v.position).distance(Vec2::new(10.0, 10.0));
                assert!((d - 5.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_gradient_colors() {
        let mut out = Vec::new();
        gradient_disc(&mut out, Vec2::ZERO, 1.0, [1.0, 0.0, 0.0, 1.0], [0.0, 0.0, 1.0, 1.0], 8);
        assert_eq!(out[0].color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(out[1].color, [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_ring_between_radii() {
        let mut out = Vec::new();
        ring(&mut out, Vec2::ZERO, 3.0, 4.0, [1.0; 4], 12);
        assert_eq!(out.len(), 72);
        for v in &out {
            let d = Vec2::from(v.position).length();
            assert!(d > 2.99 && d < 4.01);
        }
    }
}
