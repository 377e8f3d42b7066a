//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Viewport sizing and device pixel ratio
//! - Pointer input
//! - Storage (LocalStorage on web)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod storage;
pub mod viewport;

pub use input::{InputLatch, PointerEventKind};
pub use viewport::{ScreenMetrics, clamp_pixel_ratio};

/// Fatal startup failures; the game cannot run without a drawing surface
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("no browser window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("canvas element #{0} not found")]
    NoCanvas(String),
    #[error("element #{0} is not a canvas")]
    NotACanvas(String),
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no texture formats")]
    NoSurfaceFormat,
}
