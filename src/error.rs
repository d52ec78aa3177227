//! Error types for start-up and asset loading

use std::path::PathBuf;

use crate::config::ConfigError;

/// Fatal start-up failures. Any of these ends the process with exit code 1.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("Could not create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Could not create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("Could not create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("No suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("Could not create renderer device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("Surface is not supported by the adapter")]
    UnsupportedSurface,

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Non-fatal asset failures. Logged, then the asset is treated as missing.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not decode image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Could not parse font {path}: {reason}")]
    Font { path: PathBuf, reason: String },
}
