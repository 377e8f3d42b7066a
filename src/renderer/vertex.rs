//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND_INNER: [f32; 4] = [0.10, 0.08, 0.22, 1.0];
    pub const BACKGROUND_OUTER: [f32; 4] = [0.02, 0.02, 0.06, 1.0];
    pub const TRAIL: [f32; 3] = [0.45, 0.85, 1.0];
    pub const STAR: [f32; 4] = [1.0, 0.86, 0.35, 1.0];
    pub const STAR_GLOW: [f32; 4] = [1.0, 0.8, 0.2, 0.22];
    pub const BOMB: [f32; 4] = [0.85, 0.18, 0.28, 1.0];
    pub const BOMB_GLOW: [f32; 4] = [1.0, 0.2, 0.3, 0.2];
    pub const BOMB_RING: [f32; 4] = [1.0, 0.55, 0.6, 1.0];
    pub const PLAYER: [f32; 4] = [0.6, 0.95, 1.0, 1.0];
    pub const PLAYER_GLOW: [f32; 4] = [0.3, 0.8, 1.0, 0.25];
    pub const PLAYER_RING: [f32; 4] = [0.85, 1.0, 1.0, 0.6];
}

/// Same color with its alpha multiplied by `a`
pub fn with_alpha(rgb: [f32; 3], a: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], a.clamp(0.0, 1.0)]
}
