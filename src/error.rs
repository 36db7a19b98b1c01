//! Error types for pixie.
//!
//! Only construction and loading can fail. Stepping and rendering a
//! correctly configured emitter never returns an error.

use thiserror::Error;

/// Errors raised while building or reconfiguring an emitter.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The emitter has no sprite tracks to pick from.
    #[error("emitter needs at least one sprite variant")]
    NoVariants,
    /// A sprite track has no frames.
    #[error("sprite variant {0} has no frames")]
    EmptyVariant(usize),
    /// Configuration JSON could not be parsed.
    #[error("invalid emitter configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while loading or querying a sprite atlas.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// Failed to decode the atlas image.
    #[error("failed to load sprite atlas: {0}")]
    Image(#[from] image::ImageError),
    /// No sprite is registered under this name.
    #[error("unknown sprite '{0}'")]
    UnknownSprite(String),
}

/// Errors that can occur while running the desktop viewer.
#[cfg(feature = "window")]
#[derive(Debug, Error)]
pub enum HostError {
    /// The demo's emitter configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Failed to create event loop.
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// Failed to create window.
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    /// Failed to create a surface for rendering.
    #[error("failed to create GPU surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    #[error("no compatible GPU adapter found")]
    NoAdapter,
    /// The adapter cannot present to the window surface.
    #[error("GPU adapter reports no usable surface format")]
    UnsupportedSurface,
    /// Failed to create GPU device.
    #[error("failed to create GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}
